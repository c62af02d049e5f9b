//! Environment variable parsing with type safety.
//!
//! Provides a typed reader for `HEV_*` variables that validates network
//! literals, collects errors instead of aborting, and records where each
//! value came from.

use super::source::Sourced;
use crate::errors::{ErrorCode, GuardError};
use crate::strings::{is_blank, trim};
use crate::validate::{validate_ip_address, validate_port};
use std::env;
use std::net::IpAddr;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during environment variable parsing.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Value rejected by a literal validator.
    #[error("Rejected value for {var}: {source}")]
    Rejected {
        var: String,
        #[source]
        source: GuardError,
    },
}

impl EnvError {
    /// Returns the catalogue code describing this failure.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Rejected { source, .. } => source.code(),
        }
    }
}

/// Type-safe environment variable parser.
///
/// Collects errors during parsing so all issues can be reported at once.
pub struct EnvParser {
    prefix: &'static str,
    errors: Vec<EnvError>,
}

impl EnvParser {
    /// Create a new parser with the HEV_ prefix.
    pub fn new() -> Self {
        Self::with_prefix("HEV_")
    }

    /// Create a parser for a different variable prefix.
    pub fn with_prefix(prefix: &'static str) -> Self {
        Self {
            prefix,
            errors: Vec::new(),
        }
    }

    /// Get all accumulated errors.
    pub fn errors(&self) -> &[EnvError] {
        &self.errors
    }

    /// Check if any errors occurred.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Take ownership of errors.
    pub fn take_errors(&mut self) -> Vec<EnvError> {
        std::mem::take(&mut self.errors)
    }

    fn var_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Trimmed value of a variable; unset, non-UTF-8, and blank all read as `None`.
    fn lookup(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .filter(|value| !is_blank(value.as_str()))
            .map(|value| trim(value.as_str()).to_string())
    }

    fn reject<T>(&mut self, var_name: String, source: GuardError, default: T) -> Sourced<T> {
        warn!(var = %var_name, error = %source, "ignoring invalid environment override");
        self.errors.push(EnvError::Rejected {
            var: var_name,
            source,
        });
        Sourced::default_value(default)
    }

    /// Get a string value with default. Blank values count as unset.
    pub fn get_string(&mut self, name: &str, default: &str) -> Sourced<String> {
        let var_name = self.var_name(name);
        match Self::lookup(&var_name) {
            Some(value) => Sourced::from_env(value, var_name),
            None => Sourced::default_value(default.to_string()),
        }
    }

    /// Get a port number with default, validated as a base-10 literal in
    /// `1..=65535`.
    pub fn get_port(&mut self, name: &str, default: u16) -> Sourced<u16> {
        let var_name = self.var_name(name);
        let Some(value) = Self::lookup(&var_name) else {
            return Sourced::default_value(default);
        };
        match validate_port(value.as_str()) {
            Ok(port) => {
                debug!(var = %var_name, port, "port override from environment");
                Sourced::from_env(port, var_name)
            }
            Err(e) => self.reject(var_name, e, default),
        }
    }

    /// Get an IPv4 or IPv6 address with default.
    pub fn get_ip_address(&mut self, name: &str, default: IpAddr) -> Sourced<IpAddr> {
        let var_name = self.var_name(name);
        let Some(value) = Self::lookup(&var_name) else {
            return Sourced::default_value(default);
        };
        match validate_ip_address(value.as_str()) {
            Ok(addr) => {
                debug!(var = %var_name, %addr, "address override from environment");
                Sourced::from_env(addr, var_name)
            }
            Err(e) => self.reject(var_name, e, default),
        }
    }
}

impl Default for EnvParser {
    fn default() -> Self {
        Self::new()
    }
}
