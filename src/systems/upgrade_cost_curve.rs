//! Upgrade cost curve: what the next level of an upgrade costs.
//!
//! Level 0 always costs the base price. Past that, [`CostCurve::Steep`]
//! compounds three terms so late levels run away fast:
//!
//! `base × (factor³)^L × 1.5^(L²) × 1.1^(L³)`
//!
//! while [`CostCurve::Geometric`] is the plain `base × factor^L`. Both are
//! strictly increasing in `L` whenever `factor > 1` and `base > 0`.

use crate::config::CostCurve;
use crate::mechanics::decimal::Decimal;
use crate::upgrade::Upgrade;

/// Price of the purchase that takes an upgrade from `level` to `level + 1`.
pub fn price_at(curve: CostCurve, base: &Decimal, factor: &Decimal, level: u32) -> Decimal {
    if level == 0 {
        return base.clone();
    }
    let lvl = u64::from(level);
    match curve {
        CostCurve::Steep => {
            let cubed_factor = &(factor * factor) * factor;
            let squared = lvl.saturating_mul(lvl);
            let cubed = squared.saturating_mul(lvl);
            let base_scaling = cubed_factor.pow(lvl);
            let quadratic = Decimal::new(15, 1).pow(squared);
            let cubic = Decimal::new(11, 1).pow(cubed);
            &(&(base * &base_scaling) * &quadratic) * &cubic
        }
        CostCurve::Geometric => base * &factor.pow(lvl),
    }
}

/// Current price of `upgrade`.
#[inline]
pub fn cost(upgrade: &Upgrade, curve: CostCurve) -> Decimal {
    price_at(curve, &upgrade.cost, &upgrade.cost_factor, upgrade.level)
}

/// Prices of the next `count` purchases, stopping early at `max_level`.
pub fn schedule(upgrade: &Upgrade, curve: CostCurve, count: u32) -> Vec<Decimal> {
    let end = match upgrade.max_level {
        Some(max) => max.min(upgrade.level.saturating_add(count)),
        None => upgrade.level.saturating_add(count),
    };
    (upgrade.level..end)
        .map(|lvl| price_at(curve, &upgrade.cost, &upgrade.cost_factor, lvl))
        .collect()
}

/// Seconds of passive income until `price` is affordable (TTU).
/// Zero when already affordable; `None` when it never will be at this rate.
pub fn time_to_afford(price: &Decimal, pixels: &Decimal, rate: &Decimal) -> Option<Decimal> {
    if pixels.gte(price) {
        return Some(Decimal::zero());
    }
    if !rate.is_positive() {
        return None;
    }
    (price - pixels).checked_div(rate).ok()
}
