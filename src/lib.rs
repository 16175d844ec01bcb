/*!
`pixel_economy` — upgrade valuation and purchase engine for an idle pixel game.

What it does
- Prices an upgrade's next level on a steep multi-term curve (or a plain
  geometric one), with exact decimals that stay monotonic across dozens of
  orders of magnitude.
- Folds an upgrade collection into game stats: passive rate, click power,
  their multipliers, critical chance and multiplier, auto-click rate.
- Resolves purchases against a pixel total and returns the level change as an
  explicit patch instead of mutating anything.
- Resolves a click's critical cascade, where chance above 100% stacks hits
  and each hit compounds the multiplier.

How to use (call surface only)
- Load definitions with `upgrade::load_upgrades_json` (invalid entries are
  dropped) or build `Upgrade`s directly.
- Read stats with `systems::stats::*` or `StatSheet::of`.
- Price with `systems::upgrade_cost_curve::cost(&upgrade, curve)`.
- Buy with `systems::purchase::purchase` / `purchase_in` and apply the patch.
- Click with `systems::critical::apply_click(&upgrades, &mut rng)`, where
  `rng` is any `rand_core::RngCore` (see `mechanics::stoch::seeded`) or a
  `ScriptedDraws`.
- Or hold everything in a `genres::idle::IdleEconomy`.

What it does NOT do
- No storage, no rendering, no settings. Progress records are produced and
  consumed as values; where they are kept is up to the host.
*/

pub mod config;
pub mod error;
pub mod upgrade;

pub mod mechanics;
pub mod systems;
pub mod genres;

pub use config::{Balance, CostCurve};
pub use error::{EconomyError, EconomyResult};
pub use mechanics::decimal::Decimal;
pub use upgrade::{LevelPatch, Upgrade, UpgradeKind, load_upgrades, load_upgrades_json};
