//! Critical-hit cascade for a single click.
//!
//! The critical chance is read as a stack of Bernoulli trials: each trial
//! succeeds with `min(remaining, 1)` and a success spends one whole unit of
//! chance. A chance of `2.3` therefore guarantees two hits and gives a 30%
//! shot at a third; the cascade stops at the first miss. `n` hits multiply the
//! click by `critical_multiplier^n`.
//!
//! Randomness is injected through [`UnitSource`], so a seeded generator or a
//! scripted list of draws makes every outcome reproducible.

use serde::Serialize;
use tracing::debug;

use crate::config::DEFAULT_MAX_CRITICAL_HITS;
use crate::mechanics::decimal::Decimal;
use crate::mechanics::stoch::UnitSource;
use crate::systems::stats;
use crate::upgrade::Upgrade;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CriticalHit {
    pub happened: bool,
    /// `critical_multiplier^hits`, or `1` without a hit.
    pub multiplier: Decimal,
    pub hits: u32,
}

impl CriticalHit {
    pub fn none() -> Self {
        Self { happened: false, multiplier: Decimal::one(), hits: 0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalOutcome {
    /// Pixels this click yields, criticals included.
    pub click_power: Decimal,
    pub critical: CriticalHit,
}

/// Resolve one click with the default hit ceiling.
pub fn apply_click<S: UnitSource + ?Sized>(upgrades: &[Upgrade], source: &mut S) -> CriticalOutcome {
    apply_click_capped(upgrades, source, DEFAULT_MAX_CRITICAL_HITS)
}

/// Resolve one click; the cascade never stacks past `max_hits`.
pub fn apply_click_capped<S: UnitSource + ?Sized>(
    upgrades: &[Upgrade],
    source: &mut S,
    max_hits: u32,
) -> CriticalOutcome {
    let base = stats::total_click_power(upgrades);
    let chance = stats::click_critical_chance(upgrades);
    if chance.is_zero() {
        return CriticalOutcome { click_power: base, critical: CriticalHit::none() };
    }

    let hits = roll_hits(&chance, source, max_hits);
    if hits == 0 {
        return CriticalOutcome { click_power: base, critical: CriticalHit::none() };
    }

    let multiplier = stats::click_critical_multiplier(upgrades).pow(u64::from(hits));
    let click_power = &base * &multiplier;
    debug!(hits, %multiplier, %click_power, "critical click");
    CriticalOutcome {
        click_power,
        critical: CriticalHit { happened: true, multiplier, hits },
    }
}

/// Count stacked hits for `chance`, one draw per trial until the first miss.
pub fn roll_hits<S: UnitSource + ?Sized>(chance: &Decimal, source: &mut S, max_hits: u32) -> u32 {
    let one = Decimal::one();
    let mut remaining = chance.clone();
    let mut hits = 0u32;
    while hits < max_hits {
        let threshold = if remaining < one { &remaining } else { &one };
        if !succeeds(source.next_unit(), threshold) {
            break;
        }
        hits += 1;
        remaining = &remaining - &one;
        if !remaining.is_positive() {
            break;
        }
    }
    hits
}

/// `draw < threshold`, compared as exact decimals.
#[inline]
fn succeeds(draw: f64, threshold: &Decimal) -> bool {
    match Decimal::try_from(draw) {
        Ok(draw) => &draw < threshold,
        Err(_) => false,
    }
}
