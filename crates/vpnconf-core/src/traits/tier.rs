// # Account Tier Provider Trait
//
// Defines the interface for resolving the current subscription tier.
//
// The tier gates paid-only features (NetShield). How the tier is resolved
// (cached session data, keyring, remote account service) is the
// implementation's concern; the facade only needs a synchronous-looking
// read that completes or fails.

use async_trait::async_trait;

use crate::settings::AccountTier;

/// Trait for account tier lookup implementations
#[async_trait]
pub trait AccountTierProvider: Send + Sync {
    /// The current subscription tier
    async fn tier(&self) -> Result<AccountTier, crate::Error>;
}
