//! Stat aggregation: folds an upgrade collection into the numbers the game
//! loop reads every tick.
//!
//! Each stat scans the whole collection, keeps the upgrades of one kind that
//! have at least one level, and folds `value × level` per the kind's
//! [`Fold`](crate::upgrade::Fold) rule:
//!
//! | stat                        | kind                        | fold    | seed |
//! |-----------------------------|-----------------------------|---------|------|
//! | `pixel_rate`                | `rate`                      | sum     | 0    |
//! | `pixel_multiplier`          | `rate_multiplier`           | product | 1    |
//! | `click_power`               | `click`                     | sum     | 1    |
//! | `click_multiplier`          | `click_multiplier`          | product | 1    |
//! | `click_critical_chance`     | `click_critical`            | sum     | 0    |
//! | `click_critical_multiplier` | `click_critical_multiplier` | product | 2    |
//! | `auto_click_rate`           | `click_automation`          | sum     | 0    |
//!
//! Critical chance is deliberately unbounded: `1.5` means one guaranteed hit
//! and a 50% shot at a second.

use serde::Serialize;

use crate::mechanics::decimal::Decimal;
use crate::upgrade::{Fold, Upgrade, UpgradeKind};

/// Pixels per click before any upgrade.
pub const BASE_CLICK_POWER: u32 = 1;
/// Per-hit critical multiplier before any upgrade.
pub const BASE_CRITICAL_MULTIPLIER: u32 = 2;

/// Fold every levelled upgrade of `kind` onto `seed`.
pub fn aggregate(upgrades: &[Upgrade], kind: UpgradeKind, seed: Decimal) -> Decimal {
    let owned = upgrades.iter().filter(|u| u.kind == kind && u.level > 0);
    match kind.fold() {
        Some(Fold::Sum) => owned.fold(seed, |acc, u| acc + u.contribution()),
        Some(Fold::Product) => owned.fold(seed, |acc, u| acc * (Decimal::one() + u.contribution())),
        None => seed,
    }
}

/// Passive pixels per second before multipliers.
pub fn pixel_rate(upgrades: &[Upgrade]) -> Decimal {
    aggregate(upgrades, UpgradeKind::Rate, Decimal::zero())
}

pub fn pixel_multiplier(upgrades: &[Upgrade]) -> Decimal {
    aggregate(upgrades, UpgradeKind::RateMultiplier, Decimal::one())
}

/// Pixels per click before multipliers and criticals.
pub fn click_power(upgrades: &[Upgrade]) -> Decimal {
    aggregate(upgrades, UpgradeKind::Click, Decimal::from(BASE_CLICK_POWER))
}

pub fn click_multiplier(upgrades: &[Upgrade]) -> Decimal {
    aggregate(upgrades, UpgradeKind::ClickMultiplier, Decimal::one())
}

/// `pixel_rate × pixel_multiplier`.
pub fn total_pixel_generation(upgrades: &[Upgrade]) -> Decimal {
    pixel_rate(upgrades) * pixel_multiplier(upgrades)
}

/// `click_power × click_multiplier`, before criticals.
pub fn total_click_power(upgrades: &[Upgrade]) -> Decimal {
    click_power(upgrades) * click_multiplier(upgrades)
}

/// Critical chance per click; may exceed 1.
pub fn click_critical_chance(upgrades: &[Upgrade]) -> Decimal {
    aggregate(upgrades, UpgradeKind::ClickCritical, Decimal::zero())
}

/// Multiplier applied once per stacked critical hit.
pub fn click_critical_multiplier(upgrades: &[Upgrade]) -> Decimal {
    aggregate(
        upgrades,
        UpgradeKind::ClickCriticalMultiplier,
        Decimal::from(BASE_CRITICAL_MULTIPLIER),
    )
}

/// Automatic clicks per second.
pub fn auto_click_rate(upgrades: &[Upgrade]) -> Decimal {
    aggregate(upgrades, UpgradeKind::ClickAutomation, Decimal::zero())
}

/// Every stat at once, for a render or tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSheet {
    pub pixel_rate: Decimal,
    pub pixel_multiplier: Decimal,
    pub click_power: Decimal,
    pub click_multiplier: Decimal,
    pub total_pixel_generation: Decimal,
    pub total_click_power: Decimal,
    pub click_critical_chance: Decimal,
    pub click_critical_multiplier: Decimal,
    pub auto_click_rate: Decimal,
}

impl StatSheet {
    pub fn of(upgrades: &[Upgrade]) -> Self {
        let pixel_rate = pixel_rate(upgrades);
        let pixel_multiplier = pixel_multiplier(upgrades);
        let click_power = click_power(upgrades);
        let click_multiplier = click_multiplier(upgrades);
        Self {
            total_pixel_generation: &pixel_rate * &pixel_multiplier,
            total_click_power: &click_power * &click_multiplier,
            pixel_rate,
            pixel_multiplier,
            click_power,
            click_multiplier,
            click_critical_chance: click_critical_chance(upgrades),
            click_critical_multiplier: click_critical_multiplier(upgrades),
            auto_click_rate: auto_click_rate(upgrades),
        }
    }
}
