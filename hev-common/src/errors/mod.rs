//! Error catalogue and helper error types for hev services.
//!
//! # Error Code Bands
//!
//! | Range        | Category    |
//! |--------------|-------------|
//! | 0            | Success     |
//! | -1 .. -6     | General     |
//! | -100 .. -106 | Config      |
//! | -200 .. -208 | Network     |
//! | -300 .. -304 | Auth        |
//! | -400 .. -404 | Protocol    |
//! | -500 .. -505 | Filesystem  |
//! | -600 .. -603 | String      |
//! | -700 .. -702 | System      |

pub mod catalog;
pub mod guard;

pub use catalog::{
    ErrorCategory, ErrorCode, ErrorEntry, UNKNOWN_ERROR_MESSAGE, is_config_error,
    is_network_error, is_success, message,
};
pub use guard::{GuardError, LiteralKind};
