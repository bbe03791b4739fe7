//! Token-level predicates shared by the registry and the classifier.

/// Removes every leading `-` from `token`.
///
/// `"--jobs"` and `"-jobs"` both become `"jobs"`; `"--"` becomes `""`.
#[must_use]
pub fn trim_leading_dashes(token: &str) -> &str {
    token.trim_start_matches('-')
}

/// Returns true if `token` looks like a number: an optional `+`/`-`, digits,
/// and at most one decimal point. At least one digit is required.
///
/// # Examples
///
/// ```
/// use argsift_core::token::is_number;
///
/// assert!(is_number("-42"));
/// assert!(is_number("-3.14"));
/// assert!(!is_number("-x"));
/// assert!(!is_number("1.2.3"));
/// ```
#[must_use]
pub fn is_number(token: &str) -> bool {
    let unsigned = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);

    let mut seen_digit = false;
    let mut seen_point = false;

    for c in unsigned.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }

    seen_digit
}

/// Returns true if `token` is option-like: starting with `-` and not a
/// number.
///
/// Dash-only tokens such as `-` and `--` are option-like with an empty name.
#[must_use]
pub fn is_option(token: &str) -> bool {
    token.starts_with('-') && !is_number(token)
}

/// Returns true for `-abc` style tokens: exactly one leading dash.
#[must_use]
pub fn is_single_dash(token: &str) -> bool {
    token.starts_with('-') && !token.starts_with("--")
}
