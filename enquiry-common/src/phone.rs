//! Phone number normalization
//!
//! Canonical stored form is `"+91 "` followed by exactly ten digits.

use crate::{Error, Result};

/// Normalize a raw phone string to `"+91 " + <10 digits>`.
///
/// Strips every non-digit character. A 12-digit result starting with the
/// country prefix `91` has the prefix dropped; otherwise the rightmost ten
/// digits are taken (tolerates leading copy-paste junk). Fewer than ten
/// digits is a validation error, never a partial value.
pub fn normalize_phone(raw: &str) -> Result<String> {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    // Country prefix only counts when the remainder is a full local number
    if digits.len() == 12 && digits.starts_with("91") {
        digits.drain(..2);
    }

    if digits.len() < 10 {
        return Err(Error::Validation(
            "Phone number must be +91 followed by 10 digits.".to_string(),
        ));
    }

    let start = digits.len() - 10;
    Ok(format!("+91 {}", &digits[start..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ten_digits() {
        assert_eq!(normalize_phone("9876543210").unwrap(), "+91 9876543210");
    }

    #[test]
    fn test_already_canonical() {
        assert_eq!(normalize_phone("+91 9876543210").unwrap(), "+91 9876543210");
    }

    #[test]
    fn test_spaces_and_dashes() {
        assert_eq!(normalize_phone("98765-432 10").unwrap(), "+91 9876543210");
        assert_eq!(normalize_phone("(987) 654-3210").unwrap(), "+91 9876543210");
    }

    #[test]
    fn test_country_prefix_dropped_at_twelve_digits() {
        assert_eq!(normalize_phone("919876543210").unwrap(), "+91 9876543210");
        assert_eq!(normalize_phone("+91-9876543210").unwrap(), "+91 9876543210");
    }

    #[test]
    fn test_ten_digits_starting_91_kept_whole() {
        // Not a country prefix: the number itself starts with 91
        assert_eq!(normalize_phone("9198765432").unwrap(), "+91 9198765432");
    }

    #[test]
    fn test_rightmost_ten_on_leading_junk() {
        assert_eq!(normalize_phone("0009876543210").unwrap(), "+91 9876543210");
    }

    #[test]
    fn test_too_short_fails() {
        assert!(normalize_phone("98765").is_err());
        assert!(normalize_phone("").is_err());
        assert!(normalize_phone("abc").is_err());
    }

    #[test]
    fn test_eleven_digits_takes_rightmost_ten() {
        assert_eq!(normalize_phone("09876543210").unwrap(), "+91 9876543210");
    }

    #[test]
    fn test_failure_is_validation_error() {
        match normalize_phone("12345") {
            Err(Error::Validation(msg)) => assert!(msg.contains("10 digits")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
