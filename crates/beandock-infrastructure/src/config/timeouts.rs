use std::time::Duration;

/// Timeouts applied by the infrastructure adapters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Per-request timeout for platform API calls
    pub http_request: Duration,

    /// Per-request timeout for notification webhooks
    pub notification: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(30),
            notification: Duration::from_secs(10),
        }
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_http_request(mut self, timeout: Duration) -> Self {
        self.http_request = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimeoutConfig::new();
        assert_eq!(config.http_request, Duration::from_secs(30));
        assert_eq!(config.notification, Duration::from_secs(10));
    }

    #[test]
    fn test_override_http_request() {
        let config = TimeoutConfig::new().with_http_request(Duration::from_secs(5));
        assert_eq!(config.http_request, Duration::from_secs(5));
        assert_eq!(config.notification, Duration::from_secs(10));
    }
}
