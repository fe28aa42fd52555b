use std::fmt;

use crate::shared::DomainError;

/// Opaque access token for one platform account.
///
/// Only whitespace is trimmed; the content is never inspected.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCredentials(
                "Access token cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form safe for logs
    pub fn redacted(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return "****".to_string();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&self.redacted()).finish()
    }
}

/// Split the raw credential value into tokens.
///
/// `&` separates tokens; newline is only used when no `&` is present.
/// Blank entries are dropped.
pub fn parse_tokens(raw: &str) -> Vec<AccessToken> {
    let parts: Vec<&str> = if raw.contains('&') {
        raw.split('&').collect()
    } else if raw.contains('\n') {
        raw.split('\n').collect()
    } else {
        vec![raw]
    };

    parts
        .into_iter()
        .filter_map(|part| AccessToken::new(part).ok())
        .collect()
}
