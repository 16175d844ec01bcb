// tests/core.rs
use pixel_economy::mechanics::{ScriptedDraws, format_number};
use pixel_economy::systems::critical::apply_click;
use pixel_economy::systems::purchase::purchase;
use pixel_economy::systems::stats::pixel_multiplier;
use pixel_economy::systems::upgrade_cost_curve::cost;
use pixel_economy::{CostCurve, Decimal, Upgrade, UpgradeKind};

fn d(text: &str) -> Decimal {
    Decimal::parse(text).unwrap()
}

fn upgrade(name: &str, kind: UpgradeKind, cost: &str, factor: &str, value: &str) -> Upgrade {
    Upgrade::new("", name, kind, d(cost), d(factor), d(value))
}

/* ──────────────────────────────────────────────────────────────────────────
1) First purchase of a rate upgrade spends the whole balance
────────────────────────────────────────────────────────────────────────── */

#[test]
fn first_rate_purchase_spends_exact_funds_and_raises_price() {
    let intern = upgrade("Pixel Intern", UpgradeKind::Rate, "10", "2", "1");

    let outcome = purchase(&intern, &d("10"), CostCurve::Geometric);
    assert!(outcome.success());
    assert_eq!(outcome.new_total().to_string(), "0");
    assert_eq!(outcome.spent(), Some(&d("10")));

    let patch = outcome.patch().expect("purchase should carry a patch");
    assert_eq!(patch.id, "pixel-intern");
    assert_eq!(patch.level, 1);

    let bought = patch.apply_to(&intern);
    assert_eq!(bought.level, 1);
    assert!(bought.purchased);
    assert_eq!(cost(&bought, CostCurve::Geometric), d("20"));
    // base × factor³ × 1.5 × 1.1
    assert_eq!(cost(&bought, CostCurve::Steep), d("132"));

    // The input was never touched.
    assert_eq!(intern.level, 0);
    assert!(!intern.purchased);
}

/* ──────────────────────────────────────────────────────────────────────────
2) Multipliers compound multiplicatively
────────────────────────────────────────────────────────────────────────── */

#[test]
fn two_half_rate_multipliers_compound_to_two_and_a_quarter() {
    let upgrades = vec![
        upgrade("Overclock", UpgradeKind::RateMultiplier, "100", "2", "0.5").with_level(1),
        upgrade("Cooling", UpgradeKind::RateMultiplier, "100", "2", "0.5").with_level(1),
    ];
    assert_eq!(pixel_multiplier(&upgrades), d("2.25"));
}

/* ──────────────────────────────────────────────────────────────────────────
3) Critical chance above 100% stacks hits
────────────────────────────────────────────────────────────────────────── */

#[test]
fn chance_of_one_and_a_half_with_zero_draws_hits_twice() {
    let upgrades = vec![upgrade("Lucky Pixel", UpgradeKind::ClickCritical, "10", "2", "1.5").with_level(1)];
    let mut draws = ScriptedDraws::constant(0.0);

    let outcome = apply_click(&upgrades, &mut draws);
    assert!(outcome.critical.happened);
    assert_eq!(outcome.critical.hits, 2);
    assert_eq!(outcome.critical.multiplier, d("4"));
    assert_eq!(outcome.click_power, d("4"));
    // Two hits, then the remaining chance is spent; no third draw.
    assert_eq!(draws.consumed(), 2);
}

/* ──────────────────────────────────────────────────────────────────────────
4) Display
────────────────────────────────────────────────────────────────────────── */

#[test]
fn one_million_formats_as_one_m() {
    assert_eq!(format_number(&Decimal::from(1_000_000u32)), "1M");
}
