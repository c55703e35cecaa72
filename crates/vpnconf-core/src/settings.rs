//! Domain types for user-configurable connection preferences
//!
//! This module defines the closed enumerations (protocol, kill switch mode,
//! DNS mode, NetShield level, account tier) and the [`UserSettings`]
//! aggregate they belong to. The enumerations are exhaustive by
//! construction; string-level membership checks live in their [`FromStr`]
//! impls and in the [`crate::validate`] module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported VPN tunneling protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// OpenVPN over UDP
    #[serde(rename = "udp")]
    OpenVpnUdp,
    /// OpenVPN over TCP
    #[serde(rename = "tcp")]
    OpenVpnTcp,
    /// WireGuard
    WireGuard,
}

impl Protocol {
    /// The implementation family this protocol belongs to
    pub fn family(&self) -> ProtocolFamily {
        match self {
            Protocol::OpenVpnUdp | Protocol::OpenVpnTcp => ProtocolFamily::OpenVpn,
            Protocol::WireGuard => ProtocolFamily::WireGuard,
        }
    }

    /// The raw wire value for this protocol (what callers type and what
    /// gets persisted)
    pub fn raw_value(&self) -> &'static str {
        match self {
            Protocol::OpenVpnUdp => "udp",
            Protocol::OpenVpnTcp => "tcp",
            Protocol::WireGuard => "wireguard",
        }
    }

    /// All supported protocols, in menu order
    pub fn all() -> &'static [Protocol] {
        &[
            Protocol::OpenVpnUdp,
            Protocol::OpenVpnTcp,
            Protocol::WireGuard,
        ]
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol::OpenVpnUdp
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "udp" => Ok(Protocol::OpenVpnUdp),
            "tcp" => Ok(Protocol::OpenVpnTcp),
            "wireguard" => Ok(Protocol::WireGuard),
            other => Err(Error::invalid_setting(format!(
                "Selected option \"{}\" is either incorrect or protocol is (yet) not supported",
                other
            ))),
        }
    }
}

/// Protocol implementation family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolFamily {
    /// OpenVPN (UDP and TCP transports)
    OpenVpn,
    /// WireGuard
    WireGuard,
}

/// Kill switch operating mode
///
/// The variant set is defined by the kill switch controller contract:
/// `Disabled` (off), `Soft` (on while connected), `Hard` (on permanently,
/// requires the system connectivity check to be disabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KillswitchMode {
    /// Kill switch off
    #[default]
    Disabled,
    /// Kill switch active while a session is up
    Soft,
    /// Kill switch permanently active
    Hard,
}

/// Fixed display-text table for kill switch modes
///
/// These literals are a controller contract and must match it verbatim.
pub const KILLSWITCH_STATUS_TEXT: &[(KillswitchMode, &str)] = &[
    (KillswitchMode::Disabled, "Disabled"),
    (KillswitchMode::Soft, "On"),
    (KillswitchMode::Hard, "Permanent"),
];

/// DNS override mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DnsMode {
    /// Use the automatically assigned resolvers
    #[default]
    Automatic,
    /// Use the user-provided custom resolver list
    Custom,
}

impl FromStr for DnsMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "automatic" => Ok(DnsMode::Automatic),
            "custom" => Ok(DnsMode::Custom),
            other => Err(Error::invalid_setting(format!(
                "Invalid DNS setting status \"{}\"",
                other
            ))),
        }
    }
}

/// NetShield traffic-filtering level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetshieldLevel {
    /// Filtering off (the free-tier default)
    #[default]
    Disabled,
    /// Block known malware domains
    BlockMalware,
    /// Block malware, ads and trackers
    BlockAdsAndMalware,
}

/// Subscription tier, ordered from free upwards
///
/// The ordinal ordering matters: paid features compare against
/// [`AccountTier::Free`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountTier {
    /// Free tier
    Free,
    /// Basic paid tier
    Basic,
    /// Plus tier
    Plus,
    /// Visionary tier
    Visionary,
}

impl AccountTier {
    /// Whether this tier unlocks paid-only features such as NetShield
    pub fn is_paid(&self) -> bool {
        *self > AccountTier::Free
    }
}

/// Aggregate of all user-configurable connection preferences
///
/// This is a value read from and written to the settings store on every
/// call; the core keeps no in-process copy, so the persisted store stays
/// the single source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Default tunneling protocol
    pub protocol: Protocol,

    /// Kill switch operating mode
    pub killswitch: KillswitchMode,

    /// DNS override mode
    pub dns_mode: DnsMode,

    /// Custom resolver addresses, meaningful only when `dns_mode` is
    /// [`DnsMode::Custom`]; order is preserved
    #[serde(default)]
    pub custom_dns: Vec<String>,

    /// NetShield filtering level
    pub netshield: NetshieldLevel,
}

impl UserSettings {
    /// Validate the cross-field invariants of the aggregate
    ///
    /// Custom DNS mode requires a non-empty resolver list where every
    /// entry is a syntactically valid IPv4 address.
    pub fn validate(&self) -> Result<(), Error> {
        if self.dns_mode == DnsMode::Custom {
            if self.custom_dns.is_empty() {
                return Err(Error::invalid_setting(
                    "Custom DNS requires at least one DNS server",
                ));
            }
            for server in &self.custom_dns {
                if !crate::validate::is_valid_ipv4(server) {
                    return Err(Error::invalid_ip(server.clone()));
                }
            }
        }
        Ok(())
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            protocol: Protocol::default(),
            killswitch: KillswitchMode::default(),
            dns_mode: DnsMode::default(),
            custom_dns: Vec::new(),
            netshield: NetshieldLevel::default(),
        }
    }
}
