//! Test doubles and common utilities for facade contract tests
//!
//! The fakes record collaborator calls so tests can verify ordering
//! guarantees (validate fully before any persistence side effect) without
//! real persistence or OS integration. All fakes are `Clone` and share
//! their state/counters across clones, so a test can hand one clone to
//! the facade and keep another for assertions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use vpnconf_core::error::{Error, Result};
use vpnconf_core::settings::{
    AccountTier, DnsMode, KillswitchMode, NetshieldLevel, Protocol, UserSettings,
};
use vpnconf_core::traits::{AccountTierProvider, ConfigStore, KillSwitchController};
use vpnconf_core::SettingsFacade;

/// A ConfigStore fake that records every write
#[derive(Clone)]
pub struct RecordingConfigStore {
    settings: Arc<Mutex<UserSettings>>,
    protocol_writes: Arc<AtomicUsize>,
    killswitch_writes: Arc<AtomicUsize>,
    netshield_writes: Arc<AtomicUsize>,
    dns_writes: Arc<AtomicUsize>,
    reset_calls: Arc<AtomicUsize>,
    fail_reset: Arc<AtomicUsize>,
}

impl RecordingConfigStore {
    pub fn new() -> Self {
        Self {
            settings: Arc::new(Mutex::new(UserSettings::default())),
            protocol_writes: Arc::new(AtomicUsize::new(0)),
            killswitch_writes: Arc::new(AtomicUsize::new(0)),
            netshield_writes: Arc::new(AtomicUsize::new(0)),
            dns_writes: Arc::new(AtomicUsize::new(0)),
            reset_calls: Arc::new(AtomicUsize::new(0)),
            fail_reset: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Snapshot of the currently persisted settings
    pub fn persisted(&self) -> UserSettings {
        self.settings.lock().unwrap().clone()
    }

    pub fn protocol_write_count(&self) -> usize {
        self.protocol_writes.load(Ordering::SeqCst)
    }

    pub fn killswitch_write_count(&self) -> usize {
        self.killswitch_writes.load(Ordering::SeqCst)
    }

    pub fn netshield_write_count(&self) -> usize {
        self.netshield_writes.load(Ordering::SeqCst)
    }

    pub fn dns_write_count(&self) -> usize {
        self.dns_writes.load(Ordering::SeqCst)
    }

    pub fn reset_call_count(&self) -> usize {
        self.reset_calls.load(Ordering::SeqCst)
    }

    /// Make subsequent reset_defaults calls fail
    pub fn fail_resets(&self) {
        self.fail_reset.store(1, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl ConfigStore for RecordingConfigStore {
    async fn get(&self) -> Result<UserSettings> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn update_protocol(&self, protocol: Protocol) -> Result<()> {
        self.protocol_writes.fetch_add(1, Ordering::SeqCst);
        self.settings.lock().unwrap().protocol = protocol;
        Ok(())
    }

    async fn update_killswitch(&self, mode: KillswitchMode) -> Result<()> {
        self.killswitch_writes.fetch_add(1, Ordering::SeqCst);
        self.settings.lock().unwrap().killswitch = mode;
        Ok(())
    }

    async fn update_netshield(&self, level: NetshieldLevel) -> Result<()> {
        self.netshield_writes.fetch_add(1, Ordering::SeqCst);
        self.settings.lock().unwrap().netshield = level;
        Ok(())
    }

    async fn update_dns(&self, mode: DnsMode, servers: Vec<String>) -> Result<()> {
        self.dns_writes.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.settings.lock().unwrap();
        guard.dns_mode = mode;
        guard.custom_dns = servers;
        Ok(())
    }

    async fn reset_defaults(&self) -> Result<()> {
        self.reset_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reset.load(Ordering::SeqCst) != 0 {
            return Err(Error::persistence("settings file is read-only"));
        }
        *self.settings.lock().unwrap() = UserSettings::default();
        Ok(())
    }
}

/// How the fake kill switch controller responds to changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerBehavior {
    /// Accept every change
    Accept,
    /// Fail because the connectivity check could not be disabled
    RejectConnectivityCheck,
    /// Fail with an unrelated controller error
    RejectOther,
}

/// A KillSwitchController fake with scripted behavior
#[derive(Clone)]
pub struct FakeKillSwitchController {
    behavior: ControllerBehavior,
    update_calls: Arc<AtomicUsize>,
    last_mode: Arc<Mutex<Option<KillswitchMode>>>,
}

impl FakeKillSwitchController {
    pub fn new(behavior: ControllerBehavior) -> Self {
        Self {
            behavior,
            update_calls: Arc::new(AtomicUsize::new(0)),
            last_mode: Arc::new(Mutex::new(None)),
        }
    }

    pub fn update_call_count(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn last_mode(&self) -> Option<KillswitchMode> {
        *self.last_mode.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl KillSwitchController for FakeKillSwitchController {
    async fn update_from_settings_menu(&self, mode: KillswitchMode) -> Result<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_mode.lock().unwrap() = Some(mode);

        match self.behavior {
            ControllerBehavior::Accept => Ok(()),
            ControllerBehavior::RejectConnectivityCheck => Err(Error::connectivity_check(
                "NetworkManager refused to disable the probe",
            )),
            ControllerBehavior::RejectOther => Err(Error::Other("backend unavailable".to_string())),
        }
    }
}

/// An AccountTierProvider fake returning a fixed tier
#[derive(Clone)]
pub struct FakeTierProvider {
    tier: Option<AccountTier>,
    lookup_calls: Arc<AtomicUsize>,
}

impl FakeTierProvider {
    pub fn new(tier: AccountTier) -> Self {
        Self {
            tier: Some(tier),
            lookup_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A provider whose lookups always fail
    pub fn failing() -> Self {
        Self {
            tier: None,
            lookup_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn lookup_call_count(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AccountTierProvider for FakeTierProvider {
    async fn tier(&self) -> Result<AccountTier> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        self.tier
            .ok_or_else(|| Error::Other("session keyring unavailable".to_string()))
    }
}

/// Helper to build a facade over recording fakes
pub fn facade_with(
    store: &RecordingConfigStore,
    controller: &FakeKillSwitchController,
    tier: &FakeTierProvider,
) -> SettingsFacade {
    SettingsFacade::new(
        Box::new(store.clone()),
        Box::new(controller.clone()),
        Box::new(tier.clone()),
    )
}

/// Helper: facade over a fresh store, accepting controller, given tier
pub fn simple_facade(tier: AccountTier) -> (SettingsFacade, RecordingConfigStore) {
    let store = RecordingConfigStore::new();
    let controller = FakeKillSwitchController::new(ControllerBehavior::Accept);
    let provider = FakeTierProvider::new(tier);
    let facade = facade_with(&store, &controller, &provider);
    (facade, store)
}
