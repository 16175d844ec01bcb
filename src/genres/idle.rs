// src/genres/idle.rs
#![cfg(feature = "genre-idle")]

//! Idle genre orchestrator.
//!
//! Bundles a [`Balance`] with the player's upgrade collection and exposes
//! the systems as value-returning calls:
//! - upgrade_cost_curve → `cost_of`, `time_to_afford`
//! - purchase           → `purchase` (returns the next economy, never mutates)
//! - stats              → `stats`, `accrue`, `auto_click_yield`
//! - critical           → `click`
//! - progress           → `capture`, `restore`
//!
//! The host keeps the pixel count itself and threads it through these calls.

use crate::config::Balance;
use crate::error::{EconomyError, EconomyResult};
use crate::mechanics::decimal::Decimal;
use crate::mechanics::stoch::UnitSource;
use crate::systems::critical::{self, CriticalOutcome};
use crate::systems::progress::{self, ProgressRecord, Totals};
use crate::systems::purchase::{self, PurchaseOutcome};
use crate::systems::stats::{self, StatSheet};
use crate::systems::upgrade_cost_curve;
use crate::upgrade::{self, Upgrade};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdleEconomy {
    pub balance: Balance,
    pub upgrades: Vec<Upgrade>,
}

impl IdleEconomy {
    pub fn new(balance: Balance, upgrades: Vec<Upgrade>) -> Self {
        Self { balance, upgrades }
    }

    /// Load definitions from a JSON array; invalid entries are dropped.
    pub fn from_json(balance: Balance, definitions: &str) -> EconomyResult<Self> {
        Ok(Self::new(balance, upgrade::load_upgrades_json(definitions)?))
    }

    pub fn upgrade(&self, id: &str) -> EconomyResult<&Upgrade> {
        self.upgrades
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| EconomyError::UnknownUpgrade(id.to_string()))
    }

    pub fn stats(&self) -> StatSheet {
        StatSheet::of(&self.upgrades)
    }

    pub fn cost_of(&self, id: &str) -> EconomyResult<Decimal> {
        Ok(upgrade_cost_curve::cost(self.upgrade(id)?, self.balance.cost_curve))
    }

    /// Seconds of passive income until `id` is affordable from `pixels`.
    pub fn time_to_afford(&self, id: &str, pixels: &Decimal) -> EconomyResult<Option<Decimal>> {
        let price = self.cost_of(id)?;
        let rate = stats::total_pixel_generation(&self.upgrades);
        Ok(upgrade_cost_curve::time_to_afford(&price, pixels, &rate))
    }

    /// Attempt a purchase. The returned economy carries the new level on
    /// success and equals `self` on rejection.
    pub fn purchase(&self, id: &str, pixels: &Decimal) -> EconomyResult<(IdleEconomy, PurchaseOutcome)> {
        let (upgrades, outcome) =
            purchase::purchase_in(&self.upgrades, id, pixels, self.balance.cost_curve)?;
        Ok((Self::new(self.balance, upgrades), outcome))
    }

    /// One manual click, criticals included.
    pub fn click<S: UnitSource + ?Sized>(&self, source: &mut S) -> CriticalOutcome {
        critical::apply_click_capped(&self.upgrades, source, self.balance.max_critical_hits)
    }

    /// `pixels + total_pixel_generation × seconds`.
    pub fn accrue(&self, pixels: &Decimal, seconds: &Decimal) -> Decimal {
        let earned = &stats::total_pixel_generation(&self.upgrades) * seconds;
        pixels + &earned
    }

    /// Pixels the auto-clicker earns over `seconds` (no criticals).
    pub fn auto_click_yield(&self, seconds: &Decimal) -> Decimal {
        let clicks = &stats::auto_click_rate(&self.upgrades) * seconds;
        &clicks * &stats::total_click_power(&self.upgrades)
    }

    pub fn capture(&self, totals: &Totals) -> ProgressRecord {
        progress::capture(&self.upgrades, totals)
    }

    /// Same definitions with the record's levels laid over them.
    pub fn restore(&self, record: &ProgressRecord) -> IdleEconomy {
        Self::new(self.balance, progress::restore(&self.upgrades, &record.upgrades))
    }
}
