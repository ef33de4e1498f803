//! Pure validation of registration input. No I/O.
//!
//! Each validator is an ordered sequence of independent predicate checks
//! evaluated in a fixed order, returning the first applicable
//! [`RejectReason`]: field-missing checks precede format checks, which
//! precede the destination-semantic checks.
//!
//! - [`token::validate_short_token`] - alias token normalization and format
//! - [`destination::validate_destination`] - destination URL rules
//! - [`validate_registration`] - both fields, in request order

pub mod destination;
pub mod reason;
pub mod token;

pub use destination::validate_destination;
pub use reason::{Field, RejectReason};
pub use token::validate_short_token;

/// Validates a full registration request and returns the normalized
/// `(short_token, destination)` pair.
///
/// Short-circuits on the first failure. Missing-field checks for both
/// fields run before anything else, with a missing destination reported
/// ahead of a missing token; then the token format check; then the
/// destination checks.
pub fn validate_registration(
    short_token: &str,
    destination: &str,
    service_domain: &str,
) -> Result<(String, String), RejectReason> {
    if destination.trim().is_empty() {
        return Err(RejectReason::MissingField(Field::Destination));
    }
    if short_token.trim().is_empty() {
        return Err(RejectReason::MissingField(Field::ShortToken));
    }

    let short_token = validate_short_token(short_token)?;
    let destination = validate_destination(destination, service_domain)?;

    Ok((short_token, destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pair_is_normalized() {
        let (token, dest) =
            validate_registration("My-Link", " https://Docs.Example.com/Guide ", "atomurl.ga")
                .unwrap();

        assert_eq!(token, "my-link");
        assert_eq!(dest, "https://docs.example.com/Guide");
    }

    #[test]
    fn test_missing_destination_reported_before_missing_token() {
        assert_eq!(
            validate_registration("", "", "atomurl.ga"),
            Err(RejectReason::MissingField(Field::Destination))
        );
        assert_eq!(
            validate_registration("  ", "https://example.org/", "atomurl.ga"),
            Err(RejectReason::MissingField(Field::ShortToken))
        );
    }

    #[test]
    fn test_token_format_checked_before_destination_semantics() {
        // Both fields are bad; the token format failure wins.
        assert_eq!(
            validate_registration("Bad_Token", "http://example.com:8080/x", "atomurl.ga"),
            Err(RejectReason::InvalidTokenFormat)
        );
    }
}
