/// Mask shown when the customer code is too short (or unknown) to partially reveal
pub const FULL_MASK: &str = "****";

/// Partially redact a customer code for display.
///
/// Codes of four or more characters keep their first two and last two
/// characters; anything shorter collapses to [`FULL_MASK`].
pub fn mask_customer_code(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() < 4 {
        return FULL_MASK.to_string();
    }

    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{head}{FULL_MASK}{tail}")
}
