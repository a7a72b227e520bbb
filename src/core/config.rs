//! Engine configuration.
//!
//! ```
//! use tile_merge::{EngineConfig, MergeRule};
//!
//! let config = EngineConfig::default()
//!     .with_seed(7)
//!     .with_merge_rule(MergeRule::Cascade);
//! assert_eq!(config.seed, Some(7));
//! ```

use serde::{Deserialize, Serialize};

/// How merged tiles behave for the rest of a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MergeRule {
    /// A tile created by a merge cannot merge again in the same move.
    ///
    /// `[2, 2, 2, 2]` moved left becomes `[4, 4, 0, 0]`.
    #[default]
    Single,

    /// Merged tiles keep absorbing equal neighbors until the board settles.
    ///
    /// `[2, 2, 2, 2]` moved left becomes `[8, 0, 0, 0]`.
    Cascade,
}

/// Configuration for a `BoardEngine`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Spawn RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Merge behavior.
    #[serde(default)]
    pub merge_rule: MergeRule,
}

impl EngineConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the spawn RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the merge rule.
    #[must_use]
    pub fn with_merge_rule(mut self, rule: MergeRule) -> Self {
        self.merge_rule = rule;
        self
    }
}
