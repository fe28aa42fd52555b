pub const DEFAULT_BASE_URL: &str = "https://m.jlc.com";

/// User agent of the JLC iOS app webview
pub const USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 Html5Plus/1.0 (Immersed/20) JlcMobileApp";

/// Header carrying the account access token
pub const ACCESS_TOKEN_HEADER: &str = "X-JLC-AccessToken";

pub const ASSETS_PATH: &str = "/api/appPlatform/center/assets/selectPersonalAssetsInfo";
pub const SIGN_IN_PATH: &str = "/api/activity/sign/signIn?source=3";
pub const VOUCHER_PATH: &str = "/api/activity/sign/receiveVoucher";

/// How a non-success HTTP status is treated for one endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum StatusPolicy {
    /// 401 means the token is invalid, other errors are status failures
    AuthoritativeUnauthorized,
    /// Any non-success status is a status failure
    ErrorOnFailure,
    /// Decode the body whatever the status
    Ignore,
}

/// Truncate a response body for error messages (char-safe)
pub(super) fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    }
}
