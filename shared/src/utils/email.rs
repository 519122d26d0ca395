//! Email address utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Pragmatic address check: local part, one @, dotted domain with an alphabetic TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Maximum address length accepted (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Trim surrounding whitespace and lowercase the address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check if an address is syntactically valid after normalization
pub fn is_valid_email(email: &str) -> bool {
    let normalized = normalize_email(email);
    !normalized.is_empty()
        && normalized.len() <= MAX_EMAIL_LENGTH
        && EMAIL_REGEX.is_match(&normalized)
}

/// Mask an address for logs (e.g., j***@example.com)
pub fn mask_email(email: &str) -> String {
    let normalized = normalize_email(email);
    match normalized.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  User@X.com "), "user@x.com");
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@x.com"));
        assert!(is_valid_email("first.last+tag@cusat.ac.in"));
        assert!(is_valid_email(" Upper@Example.ORG "));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("john@example.com"), "j***@example.com");
        assert_eq!(mask_email("J@x.com"), "j***@x.com");
        assert_eq!(mask_email("not-an-email"), "***");
        assert_eq!(mask_email("@x.com"), "***");
    }
}
