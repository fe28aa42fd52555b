use std::sync::Arc;
use tracing::{info, instrument};

use beandock_domain::AccessToken;

use super::pacing::Pacer;
use super::types::{AccountReport, BatchReport};
use super::CheckInExecutor;
use crate::application::config::PacingPolicy;

/// Runs the executor over every account, strictly one at a time
pub struct BatchRunner {
    executor: CheckInExecutor,
    pacing: PacingPolicy,
    pacer: Arc<dyn Pacer>,
}

impl BatchRunner {
    pub fn new(executor: CheckInExecutor, pacing: PacingPolicy, pacer: Arc<dyn Pacer>) -> Self {
        Self {
            executor,
            pacing,
            pacer,
        }
    }

    /// Execute batch check-in for all accounts.
    ///
    /// Returns `None` when there is nothing to process. A random pause
    /// separates consecutive accounts; none follows the last one.
    #[instrument(skip(self, tokens), fields(batch_size = tokens.len()))]
    pub async fn run(&self, tokens: &[AccessToken]) -> Option<BatchReport> {
        if tokens.is_empty() {
            return None;
        }

        let total = tokens.len();
        let mut reports: Vec<AccountReport> = Vec::with_capacity(total);

        for (i, token) in tokens.iter().enumerate() {
            let report = self.executor.execute_check_in(token, i + 1, total).await;
            for line in &report.lines {
                println!("{}", line);
            }
            reports.push(report);

            if i + 1 < total {
                let delay = {
                    let mut rng = rand::thread_rng();
                    self.pacing.draw_delay(&mut rng)
                };
                println!("⏳ 等待 {} 秒...", delay.as_secs());
                self.pacer.pause(delay).await;
            }
        }

        let batch = BatchReport::from_reports(reports);
        info!(
            total = batch.total,
            succeeded = batch.success_count,
            failed = batch.failed_count,
            unconfirmed = batch.unconfirmed_count,
            "Batch check-in finished"
        );
        Some(batch)
    }
}
