use rand::Rng;
use std::time::Duration;

use beandock_domain::shared::DomainError;

/// Random pause between consecutive accounts.
///
/// A uniformly drawn whole number of seconds in `[min_secs, max_secs]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingPolicy {
    min_secs: u64,
    max_secs: u64,
}

impl PacingPolicy {
    pub const DEFAULT_MIN_SECS: u64 = 5;
    pub const DEFAULT_MAX_SECS: u64 = 15;

    pub fn new(min_secs: u64, max_secs: u64) -> Result<Self, DomainError> {
        if min_secs > max_secs {
            return Err(DomainError::InvalidInput(format!(
                "Pacing minimum ({}s) exceeds maximum ({}s)",
                min_secs, max_secs
            )));
        }
        Ok(Self { min_secs, max_secs })
    }

    pub fn min_secs(&self) -> u64 {
        self.min_secs
    }

    pub fn max_secs(&self) -> u64 {
        self.max_secs
    }

    pub fn draw_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_secs(rng.gen_range(self.min_secs..=self.max_secs))
    }
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self {
            min_secs: Self::DEFAULT_MIN_SECS,
            max_secs: Self::DEFAULT_MAX_SECS,
        }
    }
}
