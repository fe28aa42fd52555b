use std::sync::Arc;
use tracing::{info, instrument, warn};

use beandock_domain::check_in::SignInApi;
use beandock_domain::AccessToken;

mod batch;
mod execution;
mod pacing;
mod types;


pub use batch::BatchRunner;
pub use pacing::{Pacer, TokioPacer};
pub use types::{progress_header, AccountReport, BatchReport};

/// Check-in executor service: runs the sign-in workflow for one account
#[derive(Clone)]
pub struct CheckInExecutor {
    api: Arc<dyn SignInApi>,
}

impl CheckInExecutor {
    pub fn new(api: Arc<dyn SignInApi>) -> Self {
        Self { api }
    }

    /// Execute check-in for a single account.
    ///
    /// Never fails: every error is classified into the returned report.
    #[instrument(skip(self, token), fields(account = index, total = total))]
    pub async fn execute_check_in(
        &self,
        token: &AccessToken,
        index: usize,
        total: usize,
    ) -> AccountReport {
        info!("Starting check-in");

        let run = execution::run_isolated(self.api.clone(), token.clone()).await;

        let mut lines = vec![progress_header(index, total)];
        lines.extend(run.notes);
        lines.extend(run.outcome.render_lines(index));

        if run.outcome.is_success() {
            info!(outcome = run.outcome.label(), "Check-in finished");
        } else {
            warn!(outcome = run.outcome.label(), "Check-in did not succeed");
        }

        AccountReport {
            index,
            outcome: run.outcome,
            lines,
        }
    }
}
