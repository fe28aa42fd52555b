use anyhow::Context;

use beandock_infrastructure::logging;

use beandock_lib::application::config::AppConfig;
use beandock_lib::application::runner::run_daily_check_in;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;

    match logging::init_logger(&config.log_filter, config.log_dir.clone()) {
        Ok(()) => {
            if let Some(dir) = logging::get_log_dir() {
                tracing::info!("📝 File logging initialized at: {}", dir.display());
            }
        }
        Err(e) => {
            eprintln!("⚠️  Failed to initialize file logging: {}", e);
            eprintln!("   Falling back to console logging only");

            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .with_writer(std::io::stderr)
                .with_target(true)
                .try_init();
        }
    }

    tracing::info!("🚀 beandock starting...");
    run_daily_check_in(&config).await?;
    Ok(())
}
