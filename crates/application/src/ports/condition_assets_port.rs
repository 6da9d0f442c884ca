//! Condition assets port
//!
//! Lookup from a provider condition label to the icon, animation and
//! ambient sound the UI shows for it. Injected wherever rendering happens.

use domain::ConditionLabel;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// Presentation assets for one weather condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionAssets {
    /// Icon glyph or icon name
    pub icon: String,
    /// Animation resource (e.g. a lottie file)
    pub animation: String,
    /// Ambient sound resource
    pub sound: String,
}

/// Port for resolving condition assets
///
/// Unknown labels must resolve to a default entry rather than fail.
#[cfg_attr(test, automock)]
pub trait ConditionAssetsPort: Send + Sync {
    /// Assets for the given condition
    fn assets_for(&self, condition: &ConditionLabel) -> ConditionAssets;
}
