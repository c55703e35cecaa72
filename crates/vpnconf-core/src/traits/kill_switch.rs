// # Kill Switch Controller Trait
//
// Defines the interface for the OS-level kill switch controller.
//
// ## Purpose
//
// Kill switch changes must be applied at the OS/firewall layer before the
// persisted setting follows them. The facade calls this controller first
// and only updates the store if the controller accepts the change.
//
// ## Connectivity Check Coupling
//
// Enabling the permanent mode requires the system connectivity check to
// be disabled. When the controller cannot disable it, it must fail with
// `Error::ConnectivityCheckDisable` so the facade can surface remediation
// guidance to the user.

use async_trait::async_trait;

use crate::settings::KillswitchMode;

/// Trait for kill switch controller implementations
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// # Responsibility Boundaries
///
/// The controller enforces kill switch state at the OS layer. It does not
/// persist settings (owned by `ConfigStore`) and does not decide whether
/// a change is allowed (owned by `SettingsFacade`).
#[async_trait]
pub trait KillSwitchController: Send + Sync {
    /// Apply a kill switch mode change requested from the settings menu
    ///
    /// # Returns
    ///
    /// - `Ok(())`: the change was applied at the OS layer
    /// - `Err(Error::ConnectivityCheckDisable)`: the system connectivity
    ///   check could not be disabled
    /// - `Err(_)`: any other controller failure
    async fn update_from_settings_menu(&self, mode: KillswitchMode) -> Result<(), crate::Error>;
}
