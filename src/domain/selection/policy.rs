//! How a pricing-grid tier choice treats earlier picks.

use serde::{Deserialize, Serialize};

/// Policy applied by `select_tier`.
///
/// Choosing a subscription never discards anything; only tier choices from the
/// pricing grid are affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierSelectionPolicy {
    /// A new tier starts a fresh selection: everything else is cleared first.
    #[default]
    StartFresh,

    /// A new tier only replaces the previous tier.
    KeepInterests,
}

impl TierSelectionPolicy {
    pub fn clears_on_tier(&self) -> bool {
        matches!(self, TierSelectionPolicy::StartFresh)
    }
}
