//! Settings facade
//!
//! The SettingsFacade is responsible for:
//! - Reading current settings from the ConfigStore
//! - Applying tier gating and cross-field validation before any write
//! - Routing kill switch changes through the KillSwitchController
//! - Translating collaborator failures into facade-level errors
//!
//! ## Architecture
//!
//! ```text
//!                       ┌────────────────┐
//!        caller ───────▶│ SettingsFacade │
//!                       └────────────────┘
//!                               │
//!         ┌─────────────────────┼─────────────────────┐
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//! ┌──────────────┐   ┌────────────────────┐   ┌──────────────┐
//! │ ConfigStore  │   │ KillSwitchCtrl     │   │ TierProvider │
//! │ (persist)    │   │ (OS enforcement)   │   │ (gating)     │
//! └──────────────┘   └────────────────────┘   └──────────────┘
//! ```
//!
//! ## Write Flow
//!
//! 1. Validate the requested value fully (syntax, membership, tier)
//! 2. For kill switch changes, let the controller apply the change first
//! 3. Only then delegate the write to the ConfigStore
//!
//! No partial state change ever happens on a validation failure, and
//! nothing is retried inside the facade.

use tracing::{debug, error, info, warn};

use crate::display::{self, DisplaySettings};
use crate::error::{Error, Result};
use crate::settings::{AccountTier, DnsMode, KillswitchMode, NetshieldLevel, Protocol, UserSettings};
use crate::traits::{AccountTierProvider, ConfigStore, KillSwitchController};

/// Upgrade prompt shown when a free-tier account requests NetShield
const NETSHIELD_UPGRADE_PROMPT: &str = "Browse the Internet free of malware, ads, \
    and trackers with NetShield. To use NetShield, upgrade your subscription \
    in your account dashboard.";

/// Remediation guidance when the connectivity check blocks a kill switch change
const CONNECTIVITY_CHECK_GUIDANCE: &str = "Connectivity check could not be disabled. \
    Please disable connectivity check manually to be able to use the kill switch feature.";

/// Validated facade over the persisted user settings
///
/// Each operation is an independent validate-then-delegate transaction:
/// the facade holds no mutable state of its own and re-reads the store on
/// every call, so the persisted store stays the single source of truth.
///
/// ## Threading
///
/// The facade assumes single-writer-at-a-time access for setters; callers
/// that share one instance across writers must serialize them or rely on
/// the store's per-field last-writer-wins atomicity.
pub struct SettingsFacade {
    /// Persisted settings store
    config_store: Box<dyn ConfigStore>,

    /// OS-level kill switch controller
    kill_switch: Box<dyn KillSwitchController>,

    /// Subscription tier source
    tier_provider: Box<dyn AccountTierProvider>,
}

impl SettingsFacade {
    /// Create a new settings facade over the given collaborators
    pub fn new(
        config_store: Box<dyn ConfigStore>,
        kill_switch: Box<dyn KillSwitchController>,
        tier_provider: Box<dyn AccountTierProvider>,
    ) -> Self {
        Self {
            config_store,
            kill_switch,
            tier_provider,
        }
    }

    /// Read the full raw settings aggregate
    ///
    /// The raw aggregate always carries all five fields, including the
    /// custom DNS list as its own field.
    pub async fn settings(&self) -> Result<UserSettings> {
        self.config_store.get().await
    }

    /// Read the settings as their human-readable projection
    ///
    /// The readable projection folds the custom DNS list into the DNS
    /// string and carries four fields; see [`crate::display`].
    pub async fn settings_display(&self) -> Result<DisplaySettings> {
        let settings = self.config_store.get().await?;
        display::to_display(&settings)
    }

    /// Read the current NetShield level
    pub async fn netshield(&self) -> Result<NetshieldLevel> {
        Ok(self.config_store.get().await?.netshield)
    }

    /// Set the NetShield level
    ///
    /// Disabling is always allowed. Any filtering level requires a paid
    /// tier; free-tier requests fail with [`Error::TierRestriction`]
    /// before the store is touched.
    pub async fn set_netshield(&self, level: NetshieldLevel) -> Result<()> {
        if level != NetshieldLevel::Disabled {
            let tier = self.user_tier().await?;
            if !tier.is_paid() {
                debug!("NetShield level {:?} rejected for free tier", level);
                return Err(Error::tier_restriction(NETSHIELD_UPGRADE_PROMPT));
            }
        }

        self.config_store.update_netshield(level).await
    }

    /// Read the current kill switch mode
    pub async fn killswitch(&self) -> Result<KillswitchMode> {
        Ok(self.config_store.get().await?.killswitch)
    }

    /// Set the kill switch mode
    ///
    /// The controller applies the change at the OS layer first; the mode
    /// is persisted only if the controller accepts it, so a rejected
    /// change leaves the stored value untouched.
    pub async fn set_killswitch(&self, mode: KillswitchMode) -> Result<()> {
        if let Err(e) = self.kill_switch.update_from_settings_menu(mode).await {
            return Err(match e {
                Error::ConnectivityCheckDisable(_) => {
                    warn!("Kill switch change to {:?} blocked by connectivity check", mode);
                    Error::kill_switch(CONNECTIVITY_CHECK_GUIDANCE)
                }
                other => {
                    error!("Kill switch controller rejected {:?}: {}", mode, other);
                    Error::kill_switch(other.to_string())
                }
            });
        }

        self.config_store.update_killswitch(mode).await
    }

    /// Read the default tunneling protocol
    pub async fn protocol(&self) -> Result<Protocol> {
        Ok(self.config_store.get().await?.protocol)
    }

    /// Set the default tunneling protocol
    ///
    /// The [`Protocol`] argument makes unsupported values unrepresentable;
    /// string inputs are gated by [`Protocol::from_str`](std::str::FromStr)
    /// before they reach this method.
    pub async fn set_protocol(&self, protocol: Protocol) -> Result<()> {
        info!("Setting protocol to: {}", protocol);
        self.config_store.update_protocol(protocol).await?;
        info!("Default protocol has been updated to \"{}\"", protocol);
        Ok(())
    }

    /// Read the current DNS mode
    pub async fn dns_mode(&self) -> Result<DnsMode> {
        Ok(self.config_store.get().await?.dns_mode)
    }

    /// Read the custom DNS resolver list
    pub async fn custom_dns_servers(&self) -> Result<Vec<String>> {
        Ok(self.config_store.get().await?.custom_dns)
    }

    /// Set the DNS mode together with the custom resolver list
    ///
    /// Custom mode requires at least one server. Every entry is validated
    /// through the store's IP validation authority before anything is
    /// persisted; the first invalid entry fails the whole call with
    /// [`Error::InvalidIp`] naming the offending value.
    pub async fn set_dns(&self, mode: DnsMode, servers: Vec<String>) -> Result<()> {
        if mode == DnsMode::Custom && servers.is_empty() {
            return Err(Error::invalid_setting(
                "Custom DNS requires at least one DNS server",
            ));
        }

        for server in &servers {
            if !self.config_store.is_valid_ip(server) {
                error!("{} is an invalid IP", server);
                return Err(Error::invalid_ip(server.clone()));
            }
        }

        self.config_store.update_dns(mode, servers).await
    }

    /// Read the current subscription tier
    pub async fn user_tier(&self) -> Result<AccountTier> {
        self.tier_provider
            .tier()
            .await
            .map_err(|e| Error::tier_lookup(e.to_string()))
    }

    /// Check a candidate resolver address against the store's validation
    /// authority
    ///
    /// Exposed for callers that pre-validate, e.g. interactive prompts.
    pub fn is_valid_ip(&self, candidate: &str) -> bool {
        self.config_store.is_valid_ip(candidate)
    }

    /// Reset every setting to its documented default
    ///
    /// Does not disconnect an active session; that remains a caller
    /// concern.
    pub async fn reset_to_defaults(&self) -> Result<()> {
        self.config_store
            .reset_defaults()
            .await
            .map_err(|e| Error::reset(e.to_string()))
    }
}
