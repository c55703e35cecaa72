//! Error types for the settings core
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for settings operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the settings system
#[derive(Error, Debug)]
pub enum Error {
    /// A value outside the supported enumeration was requested
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// A custom DNS entry is not a syntactically valid IPv4 address
    #[error("{0} is invalid. Please provide a valid IP DNS server.")]
    InvalidIp(String),

    /// The requested feature requires a paid subscription tier
    #[error("{0}")]
    TierRestriction(String),

    /// The kill switch controller could not apply the requested change
    #[error("Unable to set kill switch setting: {0}")]
    KillSwitchConfiguration(String),

    /// Controller-level failure: the system connectivity check could not
    /// be disabled. The facade translates this into a
    /// [`Error::KillSwitchConfiguration`] with remediation guidance.
    #[error("Connectivity check could not be disabled: {0}")]
    ConnectivityCheckDisable(String),

    /// Settings store failure
    #[error("Settings store error: {0}")]
    Persistence(String),

    /// Account tier lookup failure
    #[error("Unable to determine account tier: {0}")]
    TierLookup(String),

    /// Reset-to-defaults failure
    #[error("Unable to reset settings to defaults: {0}")]
    Reset(String),

    /// A raw value has no entry in its display mapping
    #[error("No display mapping for value: {0}")]
    UnmappedValue(String),

    /// I/O errors from store implementations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid setting error
    pub fn invalid_setting(msg: impl Into<String>) -> Self {
        Self::InvalidSetting(msg.into())
    }

    /// Create an invalid IP error naming the offending value
    pub fn invalid_ip(ip: impl Into<String>) -> Self {
        Self::InvalidIp(ip.into())
    }

    /// Create a tier restriction error
    pub fn tier_restriction(msg: impl Into<String>) -> Self {
        Self::TierRestriction(msg.into())
    }

    /// Create a kill switch configuration error
    pub fn kill_switch(msg: impl Into<String>) -> Self {
        Self::KillSwitchConfiguration(msg.into())
    }

    /// Create a connectivity check error
    pub fn connectivity_check(msg: impl Into<String>) -> Self {
        Self::ConnectivityCheckDisable(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create a tier lookup error
    pub fn tier_lookup(msg: impl Into<String>) -> Self {
        Self::TierLookup(msg.into())
    }

    /// Create a reset error
    pub fn reset(msg: impl Into<String>) -> Self {
        Self::Reset(msg.into())
    }

    /// Create an unmapped value error
    pub fn unmapped_value(msg: impl Into<String>) -> Self {
        Self::UnmappedValue(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
