use beandock_domain::shared::DomainError;

/// Extension trait for Result types to simplify error handling
pub trait ResultExt<T, E> {
    /// Convert error to DomainError::InvalidInput, prefixed with `what`
    fn to_invalid_input(self, what: &str) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_invalid_input(self, what: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::InvalidInput(format!("{}: {}", what, e)))
    }
}
