// # Config Store Trait
//
// Defines the interface for the persisted settings store.
//
// ## Purpose
//
// The store is the single source of truth for user settings: the facade
// re-reads it on every call and never caches, so concurrent external edits
// are reflected on the next read.
//
// ## Implementations
//
// - In-memory: `store::MemoryConfigStore` (tests, embedding)
// - File-based: `store::FileConfigStore` (JSON on disk)

use async_trait::async_trait;

use crate::settings::{DnsMode, KillswitchMode, NetshieldLevel, Protocol, UserSettings};

/// Trait for persisted settings store implementations
///
/// # Thread Safety
///
/// All methods must be safe to call concurrently from multiple tasks.
/// Implementations must provide at least last-writer-wins atomicity per
/// field; the facade itself does no locking.
///
/// # Responsibility Boundaries
///
/// Store implementations persist and retrieve values. They do not apply
/// tier gating, cross-field validation, or kill switch coordination —
/// those are owned by `SettingsFacade` and run before any write reaches
/// the store.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the full persisted settings aggregate
    async fn get(&self) -> Result<UserSettings, crate::Error>;

    /// Persist the default tunneling protocol
    async fn update_protocol(&self, protocol: Protocol) -> Result<(), crate::Error>;

    /// Persist the kill switch mode
    ///
    /// Only called by the facade after the kill switch controller has
    /// accepted the change.
    async fn update_killswitch(&self, mode: KillswitchMode) -> Result<(), crate::Error>;

    /// Persist the NetShield level
    async fn update_netshield(&self, level: NetshieldLevel) -> Result<(), crate::Error>;

    /// Persist the DNS mode together with the custom resolver list
    ///
    /// The two fields are written together so a mode flip never leaves a
    /// stale server list behind.
    async fn update_dns(&self, mode: DnsMode, servers: Vec<String>) -> Result<(), crate::Error>;

    /// Reset every setting to its documented default
    async fn reset_defaults(&self) -> Result<(), crate::Error>;

    /// Delegated IP validation authority
    ///
    /// The store owns the definition of an acceptable resolver address.
    /// The default implementation applies the core's dotted-quad check;
    /// implementations may override it.
    fn is_valid_ip(&self, candidate: &str) -> bool {
        crate::validate::is_valid_ipv4(candidate)
    }
}
