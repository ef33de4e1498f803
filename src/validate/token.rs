//! Short token validation and normalization.

use crate::validate::reason::{Field, RejectReason};
use regex::Regex;
use std::sync::LazyLock;

/// Accepted token shape: one or more groups of lower-case letters separated
/// by single hyphens. No digits, no leading or trailing hyphen.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]+(-[a-z]+)*$").unwrap());

/// Validates a raw short token and returns its normalized form.
///
/// The input is trimmed and lower-cased before the format check, so
/// `" My-Link "` normalizes to `"my-link"`. Characters that remain invalid
/// after case folding (digits, underscores, stray hyphens) are rejected.
///
/// # Errors
///
/// - [`RejectReason::MissingField`] if the input is empty after trimming
/// - [`RejectReason::InvalidTokenFormat`] if the lower-cased input does not
///   match the token pattern
pub fn validate_short_token(raw: &str) -> Result<String, RejectReason> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RejectReason::MissingField(Field::ShortToken));
    }

    let token = trimmed.to_ascii_lowercase();
    if !TOKEN_REGEX.is_match(&token) {
        return Err(RejectReason::InvalidTokenFormat);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_group() {
        assert_eq!(validate_short_token("docs").unwrap(), "docs");
    }

    #[test]
    fn test_hyphenated_groups() {
        assert_eq!(validate_short_token("my-link").unwrap(), "my-link");
        assert_eq!(validate_short_token("a-b-c-d").unwrap(), "a-b-c-d");
    }

    #[test]
    fn test_upper_case_is_folded_before_the_format_check() {
        assert_eq!(validate_short_token("My-Link").unwrap(), "my-link");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(validate_short_token("  my-link\t").unwrap(), "my-link");
    }

    #[test]
    fn test_empty_after_trim_is_missing_field() {
        assert_eq!(
            validate_short_token("   "),
            Err(RejectReason::MissingField(Field::ShortToken))
        );
        assert_eq!(
            validate_short_token(""),
            Err(RejectReason::MissingField(Field::ShortToken))
        );
    }

    #[test]
    fn test_leading_or_trailing_hyphen_rejected() {
        assert_eq!(
            validate_short_token("-link"),
            Err(RejectReason::InvalidTokenFormat)
        );
        assert_eq!(
            validate_short_token("link-"),
            Err(RejectReason::InvalidTokenFormat)
        );
    }

    #[test]
    fn test_consecutive_hyphens_rejected() {
        assert_eq!(
            validate_short_token("my--link"),
            Err(RejectReason::InvalidTokenFormat)
        );
    }

    #[test]
    fn test_characters_outside_letters_and_hyphens_rejected() {
        for raw in ["my_link", "My_Link", "link2", "my link", "lïnk", "a.b", "-"] {
            assert_eq!(
                validate_short_token(raw),
                Err(RejectReason::InvalidTokenFormat),
                "expected '{raw}' to be rejected"
            );
        }
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let first = validate_short_token("my_link");
        let second = validate_short_token("my_link");
        assert_eq!(first, second);
        assert_eq!(first, Err(RejectReason::InvalidTokenFormat));
    }
}
