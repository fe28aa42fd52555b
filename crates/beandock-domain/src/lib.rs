// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod account;
pub mod check_in;
pub mod credentials;
pub mod notification;
pub mod shared;

// Re-exports for convenience
pub use credentials::{parse_tokens, AccessToken};
pub use shared::DomainError;
