use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use beandock_domain::notification::NotificationMessage;
use beandock_infrastructure::http::JlcHttpClient;

use crate::application::config::{AppConfig, TOKEN_ENV};
use crate::application::services::{
    BatchReport, BatchRunner, CheckInExecutor, NotificationService, TokioPacer, SUMMARY_TITLE,
};

/// Run one daily check-in pass over every configured account.
///
/// Returns `None` when no token is configured; nothing is sent then.
/// Per-account failures end up in the report, only client setup errors
/// are returned as `Err`.
pub async fn run_daily_check_in(config: &AppConfig) -> anyhow::Result<Option<BatchReport>> {
    println!("🏁 嘉立创自动签到任务开始");

    let tokens = config.tokens();
    if tokens.is_empty() {
        println!("❌ 未找到环境变量 {}，请检查配置", TOKEN_ENV);
        warn!("No access token configured, nothing to do");
        return Ok(None);
    }

    println!("🔧 共发现 {} 个账号", tokens.len());
    info!("Found {} account(s)", tokens.len());

    let client = JlcHttpClient::with_base_url(&config.base_url, &config.timeouts)
        .context("Failed to build HTTP client")?;
    let executor = CheckInExecutor::new(Arc::new(client));
    let runner = BatchRunner::new(executor, config.pacing, Arc::new(TokioPacer));

    let Some(report) = runner.run(&tokens).await else {
        return Ok(None);
    };

    println!("{}", report.summary_line());
    println!("📬 正在发送通知...");
    let notifications = NotificationService::from_channels(&config.channels, &config.timeouts);
    let message = NotificationMessage::new(SUMMARY_TITLE, report.body());
    let delivered = notifications.send_to_all(&message).await;
    info!(delivered, "Summary notification dispatched");

    println!("🏁 任务执行完毕");
    Ok(Some(report))
}
