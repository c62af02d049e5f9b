//! Failures reported by the string and literal helpers.

use super::catalog::ErrorCode;
use std::fmt;
use thiserror::Error;

/// Kind of literal a validator was asked to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Base-10 TCP/UDP port number.
    Port,
    /// IPv4 dotted quad or IPv6 presentation-format address.
    IpAddress,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Port => write!(f, "port number"),
            Self::IpAddress => write!(f, "IP address"),
        }
    }
}

/// Errors returned by the bounded-buffer and validation helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// An argument was absent or the destination has zero capacity.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The destination has no writable byte left before its terminator.
    #[error("buffer full: {len} of {capacity} bytes occupied")]
    BufferFull { len: usize, capacity: usize },

    /// A literal was rejected by its validation rule.
    #[error("invalid {kind}: '{value}'")]
    InvalidValue { kind: LiteralKind, value: String },
}

impl GuardError {
    pub(crate) fn invalid_value(kind: LiteralKind, value: Option<&str>) -> Self {
        Self::InvalidValue {
            kind,
            value: value.unwrap_or_default().to_string(),
        }
    }

    /// Returns the catalogue code describing this failure.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidParameter(_) => ErrorCode::InvalidParameter,
            Self::BufferFull { .. } => ErrorCode::StringBufferOverflow,
            Self::InvalidValue {
                kind: LiteralKind::Port,
                ..
            } => ErrorCode::ConfigInvalidPort,
            Self::InvalidValue {
                kind: LiteralKind::IpAddress,
                ..
            } => ErrorCode::ConfigInvalidIp,
        }
    }
}

impl From<GuardError> for ErrorCode {
    fn from(err: GuardError) -> Self {
        err.code()
    }
}
