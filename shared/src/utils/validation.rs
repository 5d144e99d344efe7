//! Email validation and masking utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Basic email shape: local part, '@', domain with at least one dot.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Check if an email address has a valid shape
///
/// This is a syntactic check only; deliverability is the mail
/// provider's concern.
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL_RE.is_match(email)
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain so
/// log lines stay correlatable without exposing the address.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
