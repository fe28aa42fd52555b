use std::any::Any;
use std::sync::Arc;
use tracing::{debug, error, Instrument, Span};

use beandock_domain::check_in::{CheckInDomainService, SignInApi, SignInDecision, SignInOutcome};
use beandock_domain::AccessToken;

/// Outcome plus the intermediate lines logged along the way
pub(super) struct WorkflowRun {
    pub outcome: SignInOutcome,
    pub notes: Vec<String>,
}

/// Run the workflow on its own task so a panic inside an API adapter is
/// reported as `UnexpectedError` instead of tearing down the batch.
pub(super) async fn run_isolated(api: Arc<dyn SignInApi>, token: AccessToken) -> WorkflowRun {
    let workflow = async move { run_workflow(api.as_ref(), &token).await };
    match tokio::spawn(workflow.instrument(Span::current())).await {
        Ok(run) => run,
        Err(join_error) => {
            let detail = if join_error.is_panic() {
                panic_message(join_error.into_panic())
            } else {
                join_error.to_string()
            };
            error!("Check-in task aborted: {}", detail);
            WorkflowRun {
                outcome: SignInOutcome::UnexpectedError { detail },
                notes: Vec::new(),
            }
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Assets → sign-in → (optional) streak voucher
pub(super) async fn run_workflow(api: &dyn SignInApi, token: &AccessToken) -> WorkflowRun {
    let mut notes = Vec::new();

    // 1. Asset info: customer code and current balance
    let assets = match api.fetch_assets(token).await {
        Ok(assets) => assets,
        Err(e) => {
            error!("Asset info request failed: {}", e);
            return finish(CheckInDomainService::outcome_for_error(&e), notes);
        }
    };

    let snapshot = match CheckInDomainService::resolve_assets(&assets) {
        Ok(snapshot) => snapshot,
        Err(outcome) => return finish(outcome, notes),
    };
    debug!(
        account = %snapshot.masked_account,
        balance = snapshot.balance,
        "Asset info loaded"
    );

    // 2. Sign in
    let response = match api.sign_in(token).await {
        Ok(response) => response,
        Err(e) => {
            error!("Sign-in request failed: {}", e);
            return finish(CheckInDomainService::outcome_for_error(&e), notes);
        }
    };

    match CheckInDomainService::classify_sign_in(&snapshot, &response) {
        SignInDecision::Final(outcome) => finish(outcome, notes),
        SignInDecision::ClaimBonus => {
            // 3. No direct reward: the seven-day streak voucher may be claimable
            notes.push(format!(
                "ℹ️ [账号: {}] 尝试领取连签奖励...",
                snapshot.masked_account
            ));

            let outcome = match api.receive_voucher(token).await {
                Ok(voucher) => CheckInDomainService::classify_voucher(&snapshot, &voucher),
                Err(e) => {
                    error!("Voucher request failed: {}", e);
                    CheckInDomainService::outcome_for_error(&e)
                }
            };
            finish(outcome, notes)
        }
    }
}

fn finish(outcome: SignInOutcome, notes: Vec<String>) -> WorkflowRun {
    WorkflowRun { outcome, notes }
}
