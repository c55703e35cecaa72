//! Contract Test: Reset To Defaults
//!
//! Constraints verified:
//! - reset_to_defaults restores the documented default aggregate
//! - Store failures surface as Reset errors
//!
//! If this test fails, the reset path is broken.

mod common;

use common::*;
use vpnconf_core::settings::{
    AccountTier, DnsMode, KillswitchMode, NetshieldLevel, Protocol, UserSettings,
};
use vpnconf_core::Error;

#[tokio::test]
async fn reset_restores_default_aggregate() {
    let (facade, store) = simple_facade(AccountTier::Plus);

    facade.set_protocol(Protocol::WireGuard).await.unwrap();
    facade.set_killswitch(KillswitchMode::Hard).await.unwrap();
    facade
        .set_dns(DnsMode::Custom, vec!["9.9.9.9".to_string()])
        .await
        .unwrap();
    facade
        .set_netshield(NetshieldLevel::BlockAdsAndMalware)
        .await
        .unwrap();

    facade.reset_to_defaults().await.unwrap();
    assert_eq!(store.reset_call_count(), 1);

    let settings = facade.settings().await.unwrap();
    assert_eq!(settings, UserSettings::default());
    assert_eq!(settings.protocol, Protocol::OpenVpnUdp);
    assert_eq!(settings.killswitch, KillswitchMode::Disabled);
    assert_eq!(settings.dns_mode, DnsMode::Automatic);
    assert_eq!(settings.netshield, NetshieldLevel::Disabled);
}

#[tokio::test]
async fn reset_failure_is_wrapped() {
    let store = RecordingConfigStore::new();
    let controller = FakeKillSwitchController::new(ControllerBehavior::Accept);
    let provider = FakeTierProvider::new(AccountTier::Free);
    let facade = facade_with(&store, &controller, &provider);

    store.fail_resets();

    let err = facade.reset_to_defaults().await.unwrap_err();
    assert!(matches!(err, Error::Reset(_)));
}
