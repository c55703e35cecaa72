//! Human-readable projection of user settings
//!
//! Maps the raw enumerations to the literal display strings the client UI
//! shows. The projection is derived, never persisted, and recomputed on
//! every read.
//!
//! Note the deliberate asymmetry with the raw aggregate: custom DNS
//! servers are folded into the DNS string (`"Custom: a, b"`) instead of
//! being exposed as a separate field.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::settings::{
    DnsMode, NetshieldLevel, ProtocolFamily, UserSettings, KILLSWITCH_STATUS_TEXT,
};

/// Read-only, display-oriented projection of [`UserSettings`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// e.g. `"OpenVPN (UDP)"` or `"WIREGUARD"`
    pub protocol: String,
    /// e.g. `"Disabled"`, `"On"`, `"Permanent"`
    pub killswitch: String,
    /// e.g. `"Automatic"` or `"Custom: 9.9.9.9, 1.1.1.1"`
    pub dns: String,
    /// e.g. `"Malware"`, `"Ads and malware"`, `"Disabled"`
    pub netshield: String,
}

/// Project `settings` into its human-readable form
///
/// Pure and total over the enum domain. The only failure path is a kill
/// switch mode missing from the controller's display-text table, which is
/// unreachable through the validated write surface.
pub fn to_display(settings: &UserSettings) -> Result<DisplaySettings> {
    let protocol = match settings.protocol.family() {
        ProtocolFamily::OpenVpn => {
            format!("OpenVPN ({})", settings.protocol.raw_value().to_uppercase())
        }
        ProtocolFamily::WireGuard => settings.protocol.raw_value().to_uppercase(),
    };

    let killswitch = KILLSWITCH_STATUS_TEXT
        .iter()
        .find(|(mode, _)| *mode == settings.killswitch)
        .map(|(_, text)| (*text).to_string())
        .ok_or_else(|| Error::unmapped_value(format!("{:?}", settings.killswitch)))?;

    let dns = match settings.dns_mode {
        DnsMode::Automatic => "Automatic".to_string(),
        DnsMode::Custom => format!("Custom: {}", settings.custom_dns.join(", ")),
    };

    let netshield = match settings.netshield {
        NetshieldLevel::Disabled => "Disabled",
        NetshieldLevel::BlockMalware => "Malware",
        NetshieldLevel::BlockAdsAndMalware => "Ads and malware",
    }
    .to_string();

    Ok(DisplaySettings {
        protocol,
        killswitch,
        dns,
        netshield,
    })
}
