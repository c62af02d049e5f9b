//! Port and IP-address literal validation.
//!
//! Only plain literal forms are accepted: a base-10 port made of ASCII digits,
//! an IPv4 dotted quad, or an IPv6 presentation-format address. Hostnames,
//! CIDR suffixes, and zone-scoped addresses (`fe80::1%eth0`) are rejected.

use crate::errors::{GuardError, LiteralKind};
use crate::strings::is_blank;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Lowest accepted port.
pub const MIN_PORT: u16 = 1;
/// Highest accepted port.
pub const MAX_PORT: u16 = u16::MAX;

/// Validate a port literal and return its value.
///
/// The literal must be non-blank, consist only of ASCII digits, and fall in
/// `1..=65535`. Signs, surrounding whitespace, and trailing characters are
/// rejected.
pub fn validate_port<'a>(text: impl Into<Option<&'a str>>) -> Result<u16, GuardError> {
    let text = text.into();
    let invalid = || GuardError::invalid_value(LiteralKind::Port, text);

    let digits = match text {
        Some(t) if !is_blank(t) => t,
        _ => return Err(invalid()),
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // Overflow past u32 is just another out-of-range value.
    let value: u32 = digits.parse().map_err(|_| invalid())?;
    u16::try_from(value)
        .ok()
        .filter(|port| *port >= MIN_PORT)
        .ok_or_else(invalid)
}

/// Validate an IPv4 or IPv6 literal and return the parsed address.
///
/// IPv4 is tried first.
pub fn validate_ip_address<'a>(text: impl Into<Option<&'a str>>) -> Result<IpAddr, GuardError> {
    let text = text.into();
    let invalid = || GuardError::invalid_value(LiteralKind::IpAddress, text);

    let literal = match text {
        Some(t) if !is_blank(t) => t,
        _ => return Err(invalid()),
    };

    if let Ok(v4) = literal.parse::<Ipv4Addr>() {
        return Ok(IpAddr::V4(v4));
    }
    literal
        .parse::<Ipv6Addr>()
        .map(IpAddr::V6)
        .map_err(|_| invalid())
}
