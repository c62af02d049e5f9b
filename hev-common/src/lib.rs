//! Shared error catalogue and defensive string helpers for hev services.
//!
//! - [`errors`]: numeric error codes grouped into category bands, their fixed
//!   messages, and the error type returned by the helpers below.
//! - [`buffer`]: caller-owned, NUL-terminated buffers with bounded copy and
//!   append.
//! - [`strings`]: ASCII whitespace trimming and blank detection.
//! - [`validate`]: port and IP-address literal validation.
//! - [`config`]: `HEV_*` environment overrides built on the validators.
//! - [`testing`]: tracing setup for test binaries.
//!
//! Every helper is synchronous and reentrant and keeps no state between calls.

pub mod buffer;
pub mod config;
pub mod errors;
pub mod strings;
pub mod testing;
pub mod validate;

pub use buffer::{BoundedBuffer, bounded_append, bounded_copy};
pub use config::{ConfigSource, EnvError, EnvParser, Sourced};
pub use errors::{
    ErrorCategory, ErrorCode, ErrorEntry, GuardError, LiteralKind, UNKNOWN_ERROR_MESSAGE,
    is_config_error, is_network_error, is_success, message,
};
pub use strings::{is_blank, trim};
pub use validate::{MAX_PORT, MIN_PORT, validate_ip_address, validate_port};
