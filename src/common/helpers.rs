// Helper functions for safe logging and salary parsing

use std::sync::OnceLock;

use regex::Regex;

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// use talentlink_client::common::helpers::safe_email_log;
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if let [local, domain] = parts.as_slice() {
            // First char, not first byte: the local part may start with a
            // multi-byte character.
            if let Some(first) = local.chars().next() {
                return format!("{}***@{}", first, domain);
            }
        }
    }
    "***@***.***".to_string()
}

/// Masks tokens for safe logging
/// Shows only first and last 4 characters
pub fn safe_token_log(token: &str) -> String {
    if token.len() > 8 {
        format!("{}...{}", &token[..4], &token[token.len() - 4..])
    } else {
        "***".to_string()
    }
}

/// Best-effort parse of a free-form salary string into an integer, used for
/// salary sorting. Reads the first number in the string, tolerating currency
/// symbols and thousands separators. Missing or non-numeric salaries parse
/// to 0 so they sink to the bottom of a high-to-low sort.
///
/// "$50,000 - $70,000" parses to 50000; "Competitive" parses to 0.
pub fn parse_salary(raw: Option<&str>) -> i64 {
    let raw = match raw {
        Some(s) => s,
        None => return 0,
    };

    let mut digits = String::new();
    for c in raw.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !digits.is_empty() && c != ',' {
            // First number ends at the first non-digit, non-separator char
            break;
        }
    }

    digits.parse().unwrap_or(0)
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Loose email shape check used by the login and wizard validators.
pub fn is_valid_email(email: &str) -> bool {
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));
    re.is_match(email)
}
