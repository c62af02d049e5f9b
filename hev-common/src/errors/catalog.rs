//! Error Catalog for hev services
//!
//! Every failure a hev component can report maps to a signed integer code.
//! Codes are grouped into contiguous bands, one band per subsystem, and each
//! code carries a fixed message. Callers and log scrapers match on the exact
//! message text, so messages must never be reworded.
//!
//! # Error Code Bands
//!
//! | Range        | Category       | Description                          |
//! |--------------|----------------|--------------------------------------|
//! | 0            | Success        | Operation completed successfully     |
//! | -1 .. -6     | General        | Generic runtime failures             |
//! | -100 .. -106 | Config         | Configuration loading and values     |
//! | -200 .. -208 | Network        | Socket and connection failures       |
//! | -300 .. -304 | Auth           | Credentials and auth file handling   |
//! | -400 .. -404 | Protocol       | Malformed or unsupported requests    |
//! | -500 .. -505 | Filesystem     | File access                          |
//! | -600 .. -603 | String         | String buffer handling               |
//! | -700 .. -702 | System         | Operating system resources           |
//!
//! # Example
//!
//! ```rust
//! use hev_common::errors::catalog::{self, ErrorCode};
//!
//! assert_eq!(catalog::message(-104), "Invalid port number");
//! assert!(catalog::is_config_error(ErrorCode::ConfigInvalidPort.code()));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Message returned for any code outside the enumerated set.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Error code enumeration covering every hev error scenario.
///
/// The discriminant of each variant is its wire/log value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ErrorCode {
    /// Operation completed successfully
    Success = 0,

    // =========================================================================
    // General Errors (-1 .. -6)
    // =========================================================================
    /// Invalid parameter provided
    InvalidParameter = -1,
    /// Out of memory
    OutOfMemory = -2,
    /// Operation failed
    OperationFailed = -3,
    /// Operation not supported
    NotSupported = -4,
    /// Operation timed out
    Timeout = -5,
    /// Operation was interrupted
    Interrupted = -6,

    // =========================================================================
    // Config Errors (-100 .. -106)
    // =========================================================================
    /// Invalid configuration file
    ConfigInvalidFile = -100,
    /// Configuration parse error
    ConfigParseError = -101,
    /// Missing required configuration parameter
    ConfigMissingRequired = -102,
    /// Invalid configuration value
    ConfigInvalidValue = -103,
    /// Invalid port number
    ConfigInvalidPort = -104,
    /// Invalid IP address
    ConfigInvalidIp = -105,
    /// Invalid file path
    ConfigInvalidPath = -106,

    // =========================================================================
    // Network Errors (-200 .. -208)
    // =========================================================================
    /// Socket creation failed
    NetworkSocketFailed = -200,
    /// Socket bind failed
    NetworkBindFailed = -201,
    /// Connection failed
    NetworkConnectFailed = -202,
    /// Accept connection failed
    NetworkAcceptFailed = -203,
    /// Send data failed
    NetworkSendFailed = -204,
    /// Receive data failed
    NetworkRecvFailed = -205,
    /// Address already in use
    NetworkAddressInUse = -206,
    /// Connection refused
    NetworkConnectionRefused = -207,
    /// Host unreachable
    NetworkHostUnreachable = -208,

    // =========================================================================
    // Auth Errors (-300 .. -304)
    // =========================================================================
    /// Invalid authentication credentials
    AuthInvalidCredentials = -300,
    /// Authentication file not found
    AuthFileNotFound = -301,
    /// Authentication file read error
    AuthFileReadError = -302,
    /// Authentication file format error
    AuthFileFormatError = -303,
    /// User not found
    AuthUserNotFound = -304,

    // =========================================================================
    // Protocol Errors (-400 .. -404)
    // =========================================================================
    /// Invalid protocol version
    ProtocolInvalidVersion = -400,
    /// Invalid protocol command
    ProtocolInvalidCommand = -401,
    /// Invalid protocol address
    ProtocolInvalidAddress = -402,
    /// Unsupported protocol method
    ProtocolUnsupportedMethod = -403,
    /// Malformed protocol packet
    ProtocolMalformedPacket = -404,

    // =========================================================================
    // Filesystem Errors (-500 .. -505)
    // =========================================================================
    /// File not found
    FileNotFound = -500,
    /// File access denied
    FileAccessDenied = -501,
    /// File read error
    FileReadError = -502,
    /// File write error
    FileWriteError = -503,
    /// File delete error
    FileDeleteError = -504,
    /// File already exists
    FileAlreadyExists = -505,

    // =========================================================================
    // String Errors (-600 .. -603)
    // =========================================================================
    /// String null pointer
    StringNullPointer = -600,
    /// String buffer overflow
    StringBufferOverflow = -601,
    /// Invalid string format
    StringInvalidFormat = -602,
    /// String truncated
    StringTruncated = -603,

    // =========================================================================
    // System Errors (-700 .. -702)
    // =========================================================================
    /// System resource exhausted
    SystemResourceExhausted = -700,
    /// System permission denied
    SystemPermissionDenied = -701,
    /// System feature not implemented
    SystemNotImplemented = -702,
}

impl ErrorCode {
    /// Returns the numeric value of this code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        *self as i32
    }

    /// Looks up the variant for a numeric code.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.code() == code)
    }

    /// Returns the category band this code belongs to.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Success => ErrorCategory::Success,

            Self::InvalidParameter
            | Self::OutOfMemory
            | Self::OperationFailed
            | Self::NotSupported
            | Self::Timeout
            | Self::Interrupted => ErrorCategory::General,

            Self::ConfigInvalidFile
            | Self::ConfigParseError
            | Self::ConfigMissingRequired
            | Self::ConfigInvalidValue
            | Self::ConfigInvalidPort
            | Self::ConfigInvalidIp
            | Self::ConfigInvalidPath => ErrorCategory::Config,

            Self::NetworkSocketFailed
            | Self::NetworkBindFailed
            | Self::NetworkConnectFailed
            | Self::NetworkAcceptFailed
            | Self::NetworkSendFailed
            | Self::NetworkRecvFailed
            | Self::NetworkAddressInUse
            | Self::NetworkConnectionRefused
            | Self::NetworkHostUnreachable => ErrorCategory::Network,

            Self::AuthInvalidCredentials
            | Self::AuthFileNotFound
            | Self::AuthFileReadError
            | Self::AuthFileFormatError
            | Self::AuthUserNotFound => ErrorCategory::Auth,

            Self::ProtocolInvalidVersion
            | Self::ProtocolInvalidCommand
            | Self::ProtocolInvalidAddress
            | Self::ProtocolUnsupportedMethod
            | Self::ProtocolMalformedPacket => ErrorCategory::Protocol,

            Self::FileNotFound
            | Self::FileAccessDenied
            | Self::FileReadError
            | Self::FileWriteError
            | Self::FileDeleteError
            | Self::FileAlreadyExists => ErrorCategory::Filesystem,

            Self::StringNullPointer
            | Self::StringBufferOverflow
            | Self::StringInvalidFormat
            | Self::StringTruncated => ErrorCategory::String,

            Self::SystemResourceExhausted
            | Self::SystemPermissionDenied
            | Self::SystemNotImplemented => ErrorCategory::System,
        }
    }

    /// Returns the full entry for this error.
    #[must_use]
    pub fn entry(&self) -> ErrorEntry {
        ErrorEntry {
            code: self.code(),
            category: self.category(),
            message: self.message().to_string(),
        }
    }

    /// Returns the fixed message for this error.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "Operation completed successfully",

            Self::InvalidParameter => "Invalid parameter provided",
            Self::OutOfMemory => "Out of memory",
            Self::OperationFailed => "Operation failed",
            Self::NotSupported => "Operation not supported",
            Self::Timeout => "Operation timed out",
            Self::Interrupted => "Operation was interrupted",

            Self::ConfigInvalidFile => "Invalid configuration file",
            Self::ConfigParseError => "Configuration parse error",
            Self::ConfigMissingRequired => "Missing required configuration parameter",
            Self::ConfigInvalidValue => "Invalid configuration value",
            Self::ConfigInvalidPort => "Invalid port number",
            Self::ConfigInvalidIp => "Invalid IP address",
            Self::ConfigInvalidPath => "Invalid file path",

            Self::NetworkSocketFailed => "Socket creation failed",
            Self::NetworkBindFailed => "Socket bind failed",
            Self::NetworkConnectFailed => "Connection failed",
            Self::NetworkAcceptFailed => "Accept connection failed",
            Self::NetworkSendFailed => "Send data failed",
            Self::NetworkRecvFailed => "Receive data failed",
            Self::NetworkAddressInUse => "Address already in use",
            Self::NetworkConnectionRefused => "Connection refused",
            Self::NetworkHostUnreachable => "Host unreachable",

            Self::AuthInvalidCredentials => "Invalid authentication credentials",
            Self::AuthFileNotFound => "Authentication file not found",
            Self::AuthFileReadError => "Authentication file read error",
            Self::AuthFileFormatError => "Authentication file format error",
            Self::AuthUserNotFound => "User not found",

            Self::ProtocolInvalidVersion => "Invalid protocol version",
            Self::ProtocolInvalidCommand => "Invalid protocol command",
            Self::ProtocolInvalidAddress => "Invalid protocol address",
            Self::ProtocolUnsupportedMethod => "Unsupported protocol method",
            Self::ProtocolMalformedPacket => "Malformed protocol packet",

            Self::FileNotFound => "File not found",
            Self::FileAccessDenied => "File access denied",
            Self::FileReadError => "File read error",
            Self::FileWriteError => "File write error",
            Self::FileDeleteError => "File delete error",
            Self::FileAlreadyExists => "File already exists",

            Self::StringNullPointer => "String null pointer",
            Self::StringBufferOverflow => "String buffer overflow",
            Self::StringInvalidFormat => "Invalid string format",
            Self::StringTruncated => "String truncated",

            Self::SystemResourceExhausted => "System resource exhausted",
            Self::SystemPermissionDenied => "System permission denied",
            Self::SystemNotImplemented => "System feature not implemented",
        }
    }

    /// Returns all error codes, band by band in descending numeric order.
    #[must_use]
    pub const fn all() -> &'static [ErrorCode] {
        &[
            // Success
            Self::Success,
            // General
            Self::InvalidParameter,
            Self::OutOfMemory,
            Self::OperationFailed,
            Self::NotSupported,
            Self::Timeout,
            Self::Interrupted,
            // Config
            Self::ConfigInvalidFile,
            Self::ConfigParseError,
            Self::ConfigMissingRequired,
            Self::ConfigInvalidValue,
            Self::ConfigInvalidPort,
            Self::ConfigInvalidIp,
            Self::ConfigInvalidPath,
            // Network
            Self::NetworkSocketFailed,
            Self::NetworkBindFailed,
            Self::NetworkConnectFailed,
            Self::NetworkAcceptFailed,
            Self::NetworkSendFailed,
            Self::NetworkRecvFailed,
            Self::NetworkAddressInUse,
            Self::NetworkConnectionRefused,
            Self::NetworkHostUnreachable,
            // Auth
            Self::AuthInvalidCredentials,
            Self::AuthFileNotFound,
            Self::AuthFileReadError,
            Self::AuthFileFormatError,
            Self::AuthUserNotFound,
            // Protocol
            Self::ProtocolInvalidVersion,
            Self::ProtocolInvalidCommand,
            Self::ProtocolInvalidAddress,
            Self::ProtocolUnsupportedMethod,
            Self::ProtocolMalformedPacket,
            // Filesystem
            Self::FileNotFound,
            Self::FileAccessDenied,
            Self::FileReadError,
            Self::FileWriteError,
            Self::FileDeleteError,
            Self::FileAlreadyExists,
            // String
            Self::StringNullPointer,
            Self::StringBufferOverflow,
            Self::StringInvalidFormat,
            Self::StringTruncated,
            // System
            Self::SystemResourceExhausted,
            Self::SystemPermissionDenied,
            Self::SystemNotImplemented,
        ]
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error category for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// The single success code (0)
    Success,
    /// Generic runtime failures (-1 .. -6)
    General,
    /// Configuration errors (-100 .. -106)
    Config,
    /// Network errors (-200 .. -208)
    Network,
    /// Authentication errors (-300 .. -304)
    Auth,
    /// Protocol errors (-400 .. -404)
    Protocol,
    /// Filesystem errors (-500 .. -505)
    Filesystem,
    /// String handling errors (-600 .. -603)
    String,
    /// System resource errors (-700 .. -702)
    System,
}

impl ErrorCategory {
    /// Returns every category, highest band first.
    #[must_use]
    pub const fn all() -> &'static [ErrorCategory] {
        &[
            Self::Success,
            Self::General,
            Self::Config,
            Self::Network,
            Self::Auth,
            Self::Protocol,
            Self::Filesystem,
            Self::String,
            Self::System,
        ]
    }

    /// Returns the inclusive code band owned by this category.
    ///
    /// Bands are spelled out per category; they must not be derived from
    /// variant ordering.
    #[must_use]
    pub const fn band(&self) -> RangeInclusive<i32> {
        match self {
            Self::Success => 0..=0,
            Self::General => -6..=-1,
            Self::Config => -106..=-100,
            Self::Network => -208..=-200,
            Self::Auth => -304..=-300,
            Self::Protocol => -404..=-400,
            Self::Filesystem => -505..=-500,
            Self::String => -603..=-600,
            Self::System => -702..=-700,
        }
    }

    /// Maps a raw code to its category, or `None` when it falls outside
    /// every band.
    #[must_use]
    pub fn of(code: i32) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.band().contains(&code))
    }

    /// Returns a human-readable name for the category.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::General => "General",
            Self::Config => "Configuration",
            Self::Network => "Network",
            Self::Auth => "Authentication",
            Self::Protocol => "Protocol",
            Self::Filesystem => "Filesystem",
            Self::String => "String",
            Self::System => "System",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Complete error entry with all metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ErrorEntry {
    /// Numeric error code
    pub code: i32,
    /// Error category
    pub category: ErrorCategory,
    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.code, self.message, self.category)
    }
}

/// Returns the message for a raw code, or [`UNKNOWN_ERROR_MESSAGE`].
#[must_use]
pub fn message(code: i32) -> &'static str {
    ErrorCode::from_code(code).map_or(UNKNOWN_ERROR_MESSAGE, |c| c.message())
}

/// True iff `code` is the success code.
#[must_use]
pub const fn is_success(code: i32) -> bool {
    code == ErrorCode::Success.code()
}

/// True iff `code` lies in the configuration band.
#[must_use]
pub fn is_config_error(code: i32) -> bool {
    ErrorCategory::Config.band().contains(&code)
}

/// True iff `code` lies in the network band.
#[must_use]
pub fn is_network_error(code: i32) -> bool {
    ErrorCategory::Network.band().contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_error_code_numbers_are_unique() {
        let mut seen = HashSet::new();
        for code in ErrorCode::all() {
            assert!(
                seen.insert(code.code()),
                "Duplicate error code number: {}",
                code.code()
            );
        }
    }

    #[test]
    fn test_total_error_code_count() {
        assert_eq!(ErrorCode::all().len(), 46);
    }

    #[test]
    fn test_every_code_sits_in_its_category_band() {
        for code in ErrorCode::all() {
            assert!(
                code.category().band().contains(&code.code()),
                "{:?} ({}) outside band of {:?}",
                code,
                code.code(),
                code.category()
            );
            assert_eq!(ErrorCategory::of(code.code()), Some(code.category()));
        }
    }

    #[test]
    fn test_bands_are_fully_enumerated() {
        for category in ErrorCategory::all() {
            for raw in category.band() {
                let code = ErrorCode::from_code(raw)
                    .unwrap_or_else(|| panic!("band {category} has no code for {raw}"));
                assert_eq!(code.category(), *category);
            }
        }
    }

    #[test]
    fn test_category_band_boundaries() {
        assert_eq!(ErrorCategory::of(0), Some(ErrorCategory::Success));
        assert_eq!(ErrorCategory::of(-1), Some(ErrorCategory::General));
        assert_eq!(ErrorCategory::of(-6), Some(ErrorCategory::General));
        assert_eq!(ErrorCategory::of(-7), None);
        assert_eq!(ErrorCategory::of(-99), None);
        assert_eq!(ErrorCategory::of(-100), Some(ErrorCategory::Config));
        assert_eq!(ErrorCategory::of(-106), Some(ErrorCategory::Config));
        assert_eq!(ErrorCategory::of(-107), None);
        assert_eq!(ErrorCategory::of(-200), Some(ErrorCategory::Network));
        assert_eq!(ErrorCategory::of(-208), Some(ErrorCategory::Network));
        assert_eq!(ErrorCategory::of(-209), None);
        assert_eq!(ErrorCategory::of(-304), Some(ErrorCategory::Auth));
        assert_eq!(ErrorCategory::of(-404), Some(ErrorCategory::Protocol));
        assert_eq!(ErrorCategory::of(-505), Some(ErrorCategory::Filesystem));
        assert_eq!(ErrorCategory::of(-603), Some(ErrorCategory::String));
        assert_eq!(ErrorCategory::of(-702), Some(ErrorCategory::System));
        assert_eq!(ErrorCategory::of(-703), None);
        assert_eq!(ErrorCategory::of(1), None);
    }

    #[test]
    fn test_predicates() {
        assert!(is_success(0));
        assert!(!is_success(-1));
        assert!(!is_success(1));

        assert!(is_config_error(-104));
        assert!(is_config_error(-100));
        assert!(is_config_error(-106));
        assert!(!is_config_error(-1));
        assert!(!is_config_error(-99));
        assert!(!is_config_error(-107));

        assert!(is_network_error(-206));
        assert!(is_network_error(-200));
        assert!(is_network_error(-208));
        assert!(!is_network_error(-199));
        assert!(!is_network_error(-209));
        assert!(!is_network_error(-104));
    }

    #[test]
    fn test_unknown_codes_match_no_category() {
        for raw in [-9999, -7, -50, -150, -250, -800, 1, i32::MIN, i32::MAX] {
            assert!(!is_success(raw));
            assert!(!is_config_error(raw));
            assert!(!is_network_error(raw));
            assert_eq!(message(raw), UNKNOWN_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_messages_verbatim() {
        assert_eq!(message(0), "Operation completed successfully");
        assert_eq!(message(-1), "Invalid parameter provided");
        assert_eq!(message(-102), "Missing required configuration parameter");
        assert_eq!(message(-104), "Invalid port number");
        assert_eq!(message(-105), "Invalid IP address");
        assert_eq!(message(-206), "Address already in use");
        assert_eq!(message(-304), "User not found");
        assert_eq!(message(-601), "String buffer overflow");
        assert_eq!(message(-702), "System feature not implemented");
        assert_eq!(message(-9999), "Unknown error");
    }

    #[test]
    fn test_all_errors_have_message() {
        for code in ErrorCode::all() {
            let msg = code.message();
            assert!(!msg.is_empty(), "Error {:?} has empty message", code);
            assert_ne!(msg, UNKNOWN_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_error_entry_serialization() {
        let entry = ErrorCode::ConfigInvalidPort.entry();
        let json = serde_json::to_string(&entry).expect("serialization failed");
        assert!(json.contains("-104"));
        assert!(json.contains("\"config\""));

        let parsed: ErrorEntry = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(parsed.code, -104);
        assert_eq!(parsed.category, ErrorCategory::Config);
        assert_eq!(parsed.message, "Invalid port number");
    }

    #[test]
    fn test_error_code_serialization() {
        let json =
            serde_json::to_string(&ErrorCode::NetworkAddressInUse).expect("serialization failed");
        assert_eq!(json, "\"NETWORK_ADDRESS_IN_USE\"");

        let parsed: ErrorCode = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(parsed, ErrorCode::NetworkAddressInUse);
    }

    #[test]
    fn test_display_implementations() {
        assert_eq!(ErrorCode::ConfigInvalidPort.to_string(), "[-104] Invalid port number");
        assert_eq!(ErrorCategory::Config.to_string(), "Configuration");
        assert_eq!(
            ErrorCode::NetworkHostUnreachable.entry().to_string(),
            "[-208] Host unreachable (Network)"
        );
    }

    #[test]
    fn test_from_code_roundtrip() {
        assert_eq!(ErrorCode::from_code(-603), Some(ErrorCode::StringTruncated));
        assert_eq!(ErrorCode::from_code(-9999), None);
        assert_eq!(i32::from(ErrorCode::SystemPermissionDenied), -701);
    }
}
