//! Balance knobs: which cost curve prices upgrades, and how far a critical
//! cascade may stack. Hosts can build a [`Balance`] in code or load it from
//! TOML alongside their other game data; omitted keys keep their defaults.
//!
//! ```toml
//! cost_curve = "geometric"
//! max_critical_hits = 64
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{EconomyError, EconomyResult};

/// Stacked-hit ceiling for one click.
pub const DEFAULT_MAX_CRITICAL_HITS: u32 = 10_000;

/// Price policy for `level ≥ 1` (level 0 always costs the base price).
/// The formulas live in `systems::upgrade_cost_curve`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCurve {
    /// `base × (factor³)^L × 1.5^(L²) × 1.1^(L³)`
    #[default]
    Steep,
    /// `base × factor^L`
    Geometric,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    pub cost_curve: CostCurve,
    pub max_critical_hits: u32,
}

impl Default for Balance {
    fn default() -> Self {
        Self { cost_curve: CostCurve::Steep, max_critical_hits: DEFAULT_MAX_CRITICAL_HITS }
    }
}

impl Balance {
    /// The simpler curve some saves were balanced against.
    pub fn geometric() -> Self {
        Self { cost_curve: CostCurve::Geometric, ..Self::default() }
    }

    pub fn from_toml(text: &str) -> EconomyResult<Self> {
        let balance: Balance = toml::from_str(text)?;
        if balance.max_critical_hits == 0 {
            return Err(EconomyError::InvalidConfig(
                "max_critical_hits must be at least 1".to_string(),
            ));
        }
        Ok(balance)
    }
}
