mod check_in_executor;
mod notification_service;

pub use check_in_executor::{
    AccountReport, BatchReport, BatchRunner, CheckInExecutor, Pacer, TokioPacer,
};
pub use notification_service::{NotificationService, SUMMARY_TITLE};
