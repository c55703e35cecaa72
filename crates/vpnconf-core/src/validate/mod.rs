//! Stateless validation checks
//!
//! Pure syntax and membership checks used by the facade and the settings
//! store before any value is committed. No side effects.

use crate::settings::{DnsMode, Protocol};

/// Check whether `candidate` is a syntactically valid IPv4 dotted quad
///
/// Valid means exactly four dot-separated decimal groups, each an integer
/// in `0..=255`, with no extra characters. Signs, whitespace and empty
/// groups are invalid, so `"+1.2.3.4"` and `"1..2.3"` are rejected even
/// though their groups would parse as integers.
pub fn is_valid_ipv4(candidate: &str) -> bool {
    let mut groups = 0;
    for group in candidate.split('.') {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match group.parse::<u16>() {
            Ok(value) if value <= 255 => groups += 1,
            _ => return false,
        }
    }
    groups == 4
}

/// Membership check: is `value` a supported protocol raw value
pub fn is_valid_protocol(value: &str) -> bool {
    value.parse::<Protocol>().is_ok()
}

/// Membership check: is `value` a recognized DNS mode
pub fn is_valid_dns_mode(value: &str) -> bool {
    value.parse::<DnsMode>().is_ok()
}
