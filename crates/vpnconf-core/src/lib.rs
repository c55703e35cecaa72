// # vpnconf-core
//
// Core library for validated VPN client settings management.
//
// ## Architecture Overview
//
// This library mediates reads and writes of user-configurable connection
// preferences against a persisted store, enforcing cross-field invariants
// and subscription-tier restrictions before any value is committed:
//
// - **ConfigStore**: Trait for the persisted settings store
// - **KillSwitchController**: Trait for OS-level kill switch enforcement
// - **AccountTierProvider**: Trait for subscription tier lookup
// - **SettingsFacade**: Orchestrates validate-then-delegate transactions
// - **validate / display**: Stateless checks and the human-readable
//   projection of the settings
//
// ## Design Principles
//
// 1. **Single Source of Truth**: Every read re-fetches from the store;
//    the facade caches nothing
// 2. **Validate Before Persist**: No partial writes on validation failure
// 3. **Closed Enumerations**: Unsupported values are unrepresentable past
//    the parsing boundary
// 4. **Library-First**: Collaborators are constructor-injected trait
//    objects, trivially replaceable with fakes

pub mod display;
pub mod error;
pub mod facade;
pub mod settings;
pub mod store;
pub mod traits;
pub mod validate;

// Re-export core types for convenience
pub use display::DisplaySettings;
pub use error::{Error, Result};
pub use facade::SettingsFacade;
pub use settings::{
    AccountTier, DnsMode, KillswitchMode, NetshieldLevel, Protocol, ProtocolFamily, UserSettings,
};
pub use store::{FileConfigStore, MemoryConfigStore};
pub use traits::{AccountTierProvider, ConfigStore, KillSwitchController};
