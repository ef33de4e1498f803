//! Tagged rejection reasons returned by the validators.

use thiserror::Error;

/// The request field a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ShortToken,
    Destination,
}

impl Field {
    /// Wire name of the field, as it appears in request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ShortToken => "short_token",
            Field::Destination => "destination",
        }
    }
}

/// Why a candidate registration was rejected.
///
/// All variants are client-input errors, recoverable by resubmission.
/// Validation short-circuits, so a single reason is returned per request:
/// field-missing checks run first, then the token format check, then the
/// destination checks in their fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("{} not provided or field missing", .0.as_str())]
    MissingField(Field),

    #[error("destination is not a well-formed URL")]
    MalformedUrl,

    #[error("destination must be an absolute URL with a host")]
    NotAbsolute,

    #[error("destination must not carry an explicit port")]
    PortNotAllowed,

    #[error("destination scheme must be http or https")]
    InvalidScheme,

    #[error("destination must not embed a username or password")]
    UserInfoNotAllowed,

    #[error("destination points back at this service")]
    SelfReferential,

    #[error("short token must be lower-case letter groups separated by single hyphens")]
    InvalidTokenFormat,
}

impl RejectReason {
    /// Stable machine-readable code carried in error response details.
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::MissingField(_) => "missing_field",
            RejectReason::MalformedUrl => "malformed_url",
            RejectReason::NotAbsolute => "not_absolute",
            RejectReason::PortNotAllowed => "port_not_allowed",
            RejectReason::InvalidScheme => "invalid_scheme",
            RejectReason::UserInfoNotAllowed => "userinfo_not_allowed",
            RejectReason::SelfReferential => "self_referential",
            RejectReason::InvalidTokenFormat => "invalid_token_format",
        }
    }
}
