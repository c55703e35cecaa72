//! Collaborator contracts for the settings core
//!
//! This module defines the abstract interfaces the facade delegates to.
//!
//! - [`ConfigStore`]: persisted user settings
//! - [`KillSwitchController`]: OS-level kill switch state
//! - [`AccountTierProvider`]: current subscription tier

pub mod config_store;
pub mod kill_switch;
pub mod tier;

pub use config_store::ConfigStore;
pub use kill_switch::KillSwitchController;
pub use tier::AccountTierProvider;
