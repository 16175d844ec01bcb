//! Purchase resolution: the only state-changing operation of the economy.
//!
//! Nothing here mutates an upgrade. A successful purchase returns a
//! [`LevelPatch`] (`level + 1`) together with the reduced pixel total; the host
//! applies the patch when it commits the purchase. A rejected purchase leaves
//! the total untouched and says why.

use tracing::debug;

use crate::config::CostCurve;
use crate::error::{EconomyError, EconomyResult};
use crate::mechanics::decimal::Decimal;
use crate::systems::upgrade_cost_curve;
use crate::upgrade::{LevelPatch, Upgrade};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    InsufficientFunds,
    MaxLevel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased {
        patch: LevelPatch,
        new_total: Decimal,
        spent: Decimal,
    },
    Rejected {
        reason: Rejection,
        /// The pixels the caller offered, unchanged.
        total: Decimal,
    },
}

impl PurchaseOutcome {
    pub fn success(&self) -> bool {
        matches!(self, PurchaseOutcome::Purchased { .. })
    }

    /// Pixels left after the attempt (unchanged on rejection).
    pub fn new_total(&self) -> &Decimal {
        match self {
            PurchaseOutcome::Purchased { new_total, .. } => new_total,
            PurchaseOutcome::Rejected { total, .. } => total,
        }
    }

    pub fn spent(&self) -> Option<&Decimal> {
        match self {
            PurchaseOutcome::Purchased { spent, .. } => Some(spent),
            PurchaseOutcome::Rejected { .. } => None,
        }
    }

    pub fn patch(&self) -> Option<&LevelPatch> {
        match self {
            PurchaseOutcome::Purchased { patch, .. } => Some(patch),
            PurchaseOutcome::Rejected { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            PurchaseOutcome::Purchased { .. } => None,
            PurchaseOutcome::Rejected { reason, .. } => Some(*reason),
        }
    }
}

/// Try to buy one level of `upgrade` with `available` pixels.
pub fn purchase(upgrade: &Upgrade, available: &Decimal, curve: CostCurve) -> PurchaseOutcome {
    if upgrade.is_maxed() || upgrade.level == u32::MAX {
        debug!(id = %upgrade.id, level = upgrade.level, "purchase rejected: max level");
        return PurchaseOutcome::Rejected { reason: Rejection::MaxLevel, total: available.clone() };
    }
    let price = upgrade_cost_curve::cost(upgrade, curve);
    if !available.gte(&price) {
        debug!(id = %upgrade.id, %price, %available, "purchase rejected: insufficient funds");
        return PurchaseOutcome::Rejected {
            reason: Rejection::InsufficientFunds,
            total: available.clone(),
        };
    }
    let new_total = available - &price;
    let level = upgrade.level + 1;
    debug!(id = %upgrade.id, level, spent = %price, remaining = %new_total, "upgrade purchased");
    PurchaseOutcome::Purchased {
        patch: LevelPatch { id: upgrade.id.clone(), level },
        new_total,
        spent: price,
    }
}

/// Buy by id against a collection; returns the collection as it stands after
/// the attempt (a copy with the patch applied, or an unchanged copy).
pub fn purchase_in(
    upgrades: &[Upgrade],
    id: &str,
    available: &Decimal,
    curve: CostCurve,
) -> EconomyResult<(Vec<Upgrade>, PurchaseOutcome)> {
    let upgrade = upgrades
        .iter()
        .find(|u| u.id == id)
        .ok_or_else(|| EconomyError::UnknownUpgrade(id.to_string()))?;
    let outcome = purchase(upgrade, available, curve);
    let next = match outcome.patch() {
        Some(patch) => patch.apply(upgrades),
        None => upgrades.to_vec(),
    };
    Ok((next, outcome))
}
