// # Memory Config Store
//
// In-memory implementation of ConfigStore.
//
// ## Purpose
//
// Provides a simple, fast settings store that doesn't persist across
// restarts. Useful for testing and for embedding the facade in hosts that
// manage persistence themselves.
//
// ## Crash Behavior
//
// - All settings revert to defaults on restart
// - No recovery possible (state is in-memory only)

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::settings::{DnsMode, KillswitchMode, NetshieldLevel, Protocol, UserSettings};
use crate::traits::ConfigStore;
use crate::Error;

/// In-memory config store implementation
///
/// Settings live in a [`UserSettings`] value behind an RwLock. Clones
/// share the same underlying state.
///
/// # Example
///
/// ```rust,no_run
/// use vpnconf_core::store::MemoryConfigStore;
/// use vpnconf_core::traits::ConfigStore;
/// use vpnconf_core::Protocol;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = MemoryConfigStore::new();
///
///     store.update_protocol(Protocol::WireGuard).await?;
///     assert_eq!(store.get().await?.protocol, Protocol::WireGuard);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MemoryConfigStore {
    inner: Arc<RwLock<UserSettings>>,
}

impl MemoryConfigStore {
    /// Create a memory store holding the default settings
    pub fn new() -> Self {
        Self::with_settings(UserSettings::default())
    }

    /// Create a memory store pre-populated with `settings`
    pub fn with_settings(settings: UserSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }
}

impl Default for MemoryConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn get(&self) -> Result<UserSettings, Error> {
        Ok(self.inner.read().await.clone())
    }

    async fn update_protocol(&self, protocol: Protocol) -> Result<(), Error> {
        self.inner.write().await.protocol = protocol;
        Ok(())
    }

    async fn update_killswitch(&self, mode: KillswitchMode) -> Result<(), Error> {
        self.inner.write().await.killswitch = mode;
        Ok(())
    }

    async fn update_netshield(&self, level: NetshieldLevel) -> Result<(), Error> {
        self.inner.write().await.netshield = level;
        Ok(())
    }

    async fn update_dns(&self, mode: DnsMode, servers: Vec<String>) -> Result<(), Error> {
        let mut guard = self.inner.write().await;
        guard.dns_mode = mode;
        guard.custom_dns = servers;
        Ok(())
    }

    async fn reset_defaults(&self) -> Result<(), Error> {
        *self.inner.write().await = UserSettings::default();
        Ok(())
    }
}
