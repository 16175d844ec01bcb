//! Progress records: the shape the persistence layer stores.
//!
//! Only player progress is captured (`{id, level, purchased}` per upgrade plus
//! pixel totals). Definitions are static data and are re-loaded, then saved
//! levels are laid back over them with [`restore`]. Records carry a semantic
//! version so a host can warn before loading something from a different
//! format generation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EconomyResult;
use crate::mechanics::decimal::Decimal;
use crate::upgrade::Upgrade;

/// Bump major for breaking layout changes, minor for additions, patch for fixes.
pub const SAVE_VERSION: &str = "2.0.0";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SaveVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SaveVersion {
    pub fn current() -> Self {
        SaveVersion::parse(SAVE_VERSION)
    }

    /// Lenient `major.minor.patch`; missing or unreadable parts count as 0.
    pub fn parse(text: &str) -> Self {
        let mut parts = text.split('.').map(leading_number);
        Self {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            patch: parts.next().unwrap_or(0),
        }
    }
}

impl fmt::Display for SaveVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Digits at the start of `part` (`"2rc1"` → 2), 0 when there are none.
fn leading_number(part: &str) -> u32 {
    let digits: String = part.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
    Compatible,
    /// Loadable, but the player should be told.
    Warning,
    Incompatible,
}

/// Compare a saved version string against [`SAVE_VERSION`]. A record without
/// a version is only a warning.
pub fn check_compatibility(saved: Option<&str>) -> Compatibility {
    let Some(saved) = saved else {
        return Compatibility::Warning;
    };
    if saved == SAVE_VERSION {
        return Compatibility::Compatible;
    }
    let current = SaveVersion::current();
    let saved = SaveVersion::parse(saved);
    if saved.major != current.major {
        Compatibility::Incompatible
    } else if saved.minor != current.minor {
        Compatibility::Warning
    } else {
        Compatibility::Compatible
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeProgress {
    pub id: String,
    pub level: u32,
    #[serde(default)]
    pub purchased: bool,
}

impl From<&Upgrade> for UpgradeProgress {
    fn from(upgrade: &Upgrade) -> Self {
        Self { id: upgrade.id.clone(), level: upgrade.level, purchased: upgrade.purchased }
    }
}

/// Pixel totals tracked by the host next to the upgrade levels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub pixels: Decimal,
    #[serde(default)]
    pub total_pixels: Decimal,
    #[serde(default)]
    pub spent_pixels: Decimal,
    #[serde(default)]
    pub completed_frames: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(flatten)]
    pub totals: Totals,
    pub upgrades: Vec<UpgradeProgress>,
}

impl ProgressRecord {
    pub fn compatibility(&self) -> Compatibility {
        check_compatibility(self.version.as_deref())
    }

    pub fn to_json(&self) -> EconomyResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> EconomyResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Snapshot progress at the current [`SAVE_VERSION`].
pub fn capture(upgrades: &[Upgrade], totals: &Totals) -> ProgressRecord {
    ProgressRecord {
        version: Some(SAVE_VERSION.to_string()),
        totals: totals.clone(),
        upgrades: upgrades.iter().map(UpgradeProgress::from).collect(),
    }
}

/// Lay saved levels over freshly loaded upgrades. Upgrades without a record
/// stay at their current level; records for unknown ids are skipped; levels
/// above `max_level` are clamped.
pub fn restore(upgrades: &[Upgrade], saved: &[UpgradeProgress]) -> Vec<Upgrade> {
    for record in saved {
        if !upgrades.iter().any(|u| u.id == record.id) {
            warn!(id = %record.id, "saved progress for unknown upgrade skipped");
        }
    }
    upgrades
        .iter()
        .map(|upgrade| match saved.iter().find(|r| r.id == upgrade.id) {
            Some(record) => {
                let restored = upgrade.with_level(record.level);
                if restored.level != record.level {
                    warn!(id = %upgrade.id, saved = record.level, clamped = restored.level, "saved level above max");
                }
                restored
            }
            None => upgrade.clone(),
        })
        .collect()
}
