//! Credential format predicates
//!
//! Pure functions with no side effects; the flow controller and the
//! submission gate are the only consumers.

use once_cell::sync::Lazy;
use regex::Regex;

/// National mobile number pattern: `0`, `9`, then 9 further digits
static IDENTITY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^09\d{9}$").unwrap());

/// Whether a string is a complete, well-formed mobile number
pub fn is_valid_identity(identity: &str) -> bool {
    IDENTITY_REGEX.is_match(identity)
}

/// Whether a password satisfies the minimum length, counted in characters
pub fn is_valid_password(password: &str, min_length: usize) -> bool {
    password.chars().count() >= min_length
}

/// Whether a string is exactly `length` ASCII digits
pub fn is_valid_otp_code(code: &str, length: usize) -> bool {
    code.len() == length && code.chars().all(|c| c.is_ascii_digit())
}

/// Sanitize raw one-time code input
///
/// Non-digit characters are discarded rather than rejected, and at most
/// `max_digits` digits are kept, in input order.
pub fn sanitize_otp_input(raw: &str, max_digits: usize) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_digits)
        .collect()
}

/// Mask an identity for logging (keep only the last 4 characters)
pub fn mask_identity(identity: &str) -> String {
    if identity.len() <= 4 {
        return "*".repeat(identity.len());
    }
    format!("***{}", &identity[identity.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identity() {
        assert!(is_valid_identity("09123456789"));
        assert!(is_valid_identity("09999999999"));
    }

    #[test]
    fn test_identity_boundary_lengths() {
        assert!(!is_valid_identity("0912345678")); // 10 digits
        assert!(is_valid_identity("09123456789")); // 11 digits
        assert!(!is_valid_identity("091234567890")); // 12 digits
        assert!(!is_valid_identity(""));
    }

    #[test]
    fn test_identity_prefix_and_digit_rules() {
        assert!(!is_valid_identity("08123456789")); // wrong prefix
        assert!(!is_valid_identity("19123456789"));
        assert!(!is_valid_identity("0912345678a")); // non-digit
        assert!(!is_valid_identity("09 12345678"));
        assert!(!is_valid_identity("+9123456789"));
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(!is_valid_password("", 6));
        assert!(!is_valid_password("12345", 6));
        assert!(is_valid_password("123456", 6));
        assert!(is_valid_password("a much longer passphrase", 6));
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Multi-byte characters count once each
        assert!(is_valid_password("αβγδεζ", 6));
        assert!(!is_valid_password("αβγδε", 6));
    }

    #[test]
    fn test_valid_otp_code() {
        assert!(is_valid_otp_code("123456", 6));
        assert!(!is_valid_otp_code("12345", 6));
        assert!(!is_valid_otp_code("1234567", 6));
        assert!(!is_valid_otp_code("12345a", 6));
        assert!(!is_valid_otp_code("", 6));
    }

    #[test]
    fn test_sanitize_strips_non_digits() {
        assert_eq!(sanitize_otp_input("12 34-56", 6), "123456");
        assert_eq!(sanitize_otp_input("abc123", 6), "123");
        assert_eq!(sanitize_otp_input("no digits", 6), "");
    }

    #[test]
    fn test_sanitize_caps_digit_count() {
        assert_eq!(sanitize_otp_input("12345678", 6), "123456");
        assert_eq!(sanitize_otp_input("1a2b3c4d5e6f7g", 6), "123456");
    }

    #[test]
    fn test_mask_identity() {
        assert_eq!(mask_identity("09123456789"), "***6789");
        assert_eq!(mask_identity("0912"), "****");
        assert_eq!(mask_identity(""), "");
    }
}
