//! Minimal embedding example for vpnconf-core
//!
//! This example demonstrates using vpnconf-core as a library in a custom
//! application: collaborators are provided by the host, the facade owns
//! the validation and coordination.

use vpnconf_core::settings::{AccountTier, DnsMode, KillswitchMode, NetshieldLevel, Protocol};
use vpnconf_core::traits::{AccountTierProvider, KillSwitchController};
use vpnconf_core::{MemoryConfigStore, Result, SettingsFacade};

/// Kill switch controller that accepts every change
///
/// A real host would reconfigure the firewall here and fail with
/// `Error::ConnectivityCheckDisable` when the system probe cannot be
/// turned off.
struct AcceptingKillSwitch;

#[async_trait::async_trait]
impl KillSwitchController for AcceptingKillSwitch {
    async fn update_from_settings_menu(&self, mode: KillswitchMode) -> Result<()> {
        tracing::info!("kill switch applied at OS layer: {:?}", mode);
        Ok(())
    }
}

/// Tier provider with a fixed subscription tier
struct StaticTierProvider(AccountTier);

#[async_trait::async_trait]
impl AccountTierProvider for StaticTierProvider {
    async fn tier(&self) -> Result<AccountTier> {
        Ok(self.0)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let facade = SettingsFacade::new(
        Box::new(MemoryConfigStore::new()),
        Box::new(AcceptingKillSwitch),
        Box::new(StaticTierProvider(AccountTier::Plus)),
    );

    // Change a few preferences through the validated surface
    facade.set_protocol(Protocol::WireGuard).await?;
    facade.set_killswitch(KillswitchMode::Soft).await?;
    facade
        .set_dns(
            DnsMode::Custom,
            vec!["9.9.9.9".to_string(), "1.1.1.1".to_string()],
        )
        .await?;
    facade.set_netshield(NetshieldLevel::BlockAdsAndMalware).await?;

    // A malformed resolver is rejected before anything is persisted
    if let Err(e) = facade.set_dns(DnsMode::Custom, vec!["300.1.1.1".to_string()]).await {
        println!("rejected as expected: {e}");
    }

    let display = facade.settings_display().await?;
    println!("Protocol:    {}", display.protocol);
    println!("Kill switch: {}", display.killswitch);
    println!("DNS:         {}", display.dns);
    println!("NetShield:   {}", display.netshield);

    facade.reset_to_defaults().await?;
    println!(
        "after reset: {}",
        facade.settings_display().await?.protocol
    );

    Ok(())
}
