mod api;
mod domain_service;
mod outcome;
mod value_objects;

pub use api::{ApiError, SignInApi};
pub use domain_service::{
    CheckInDomainService, SignInDecision, ALREADY_SIGNED_MARKER, SEVEN_DAY_BONUS_BEANS,
};
pub use outcome::{OutcomeKind, SignInOutcome};
pub use value_objects::{
    AccountSnapshot, AssetsEnvelope, AssetsInfo, SignInData, SignInEnvelope, VoucherEnvelope,
};
