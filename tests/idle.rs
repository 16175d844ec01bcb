// tests/idle.rs
use pixel_economy::genres::idle::IdleEconomy;
use pixel_economy::mechanics::ScriptedDraws;
use pixel_economy::systems::progress::{Compatibility, Totals};
use pixel_economy::systems::purchase::Rejection;
use pixel_economy::{Balance, Decimal, EconomyError};

const SAMPLE: &str = include_str!("../data/upgrades.json");

fn d(text: &str) -> Decimal {
    Decimal::parse(text).unwrap()
}

fn economy() -> IdleEconomy {
    IdleEconomy::from_json(Balance::geometric(), SAMPLE).unwrap()
}

/* ──────────────────────────────────────────────────────────────────────────
1) A short play session through the orchestrator
────────────────────────────────────────────────────────────────────────── */

#[test]
fn buying_an_intern_starts_passive_income() {
    let start = economy();
    assert_eq!(start.stats().total_pixel_generation, Decimal::zero());
    assert_eq!(start.time_to_afford("pixel-intern", &d("5")), Ok(None));

    let (next, outcome) = start.purchase("pixel-intern", &d("20")).unwrap();
    assert!(outcome.success());
    assert_eq!(outcome.new_total(), &d("5"));
    assert_eq!(next.upgrade("pixel-intern").unwrap().level, 1);
    // Purchases never touch the economy they were made on.
    assert_eq!(start.upgrade("pixel-intern").unwrap().level, 0);

    assert_eq!(next.accrue(&d("5"), &d("10")), d("15"));
    // 15 × 1.15 = 17.25, shortfall 12.25 at 1 px/s
    assert_eq!(next.cost_of("pixel-intern"), Ok(d("17.25")));
    assert_eq!(next.time_to_afford("pixel-intern", &d("5")), Ok(Some(d("12.25"))));
}

#[test]
fn rejected_purchase_returns_the_same_economy() {
    let start = economy();
    let (next, outcome) = start.purchase("overclock", &d("10")).unwrap();
    assert_eq!(outcome.rejection(), Some(Rejection::InsufficientFunds));
    assert_eq!(next, start);
}

#[test]
fn unknown_ids_are_errors() {
    let start = economy();
    assert_eq!(start.cost_of("nope"), Err(EconomyError::UnknownUpgrade("nope".into())));
    assert!(start.purchase("nope", &d("1e9")).is_err());
}

#[test]
fn auto_clicker_yields_click_power_per_click() {
    let (bought, _) = economy().purchase("auto-clicker", &d("500")).unwrap();
    let (bought, _) = bought.purchase("sharper-stylus", &d("10")).unwrap();
    // 0.5 clicks/s × 2 px/click × 60 s
    assert_eq!(bought.auto_click_yield(&d("60")), d("60"));
}

#[test]
fn click_uses_the_balance_hit_ceiling() {
    let mut economy = economy();
    economy.balance.max_critical_hits = 3;
    let lucky = economy
        .upgrades
        .iter()
        .position(|u| u.id == "lucky-pixel")
        .unwrap();
    economy.upgrades[lucky] = economy.upgrades[lucky].with_level(100);

    let outcome = economy.click(&mut ScriptedDraws::constant(0.0));
    assert_eq!(outcome.critical.hits, 3);
    assert_eq!(outcome.click_power, d("8"));
}

#[test]
fn capture_then_restore_round_trips_levels() {
    let (played, _) = economy().purchase("pixel-intern", &d("15")).unwrap();
    let record = played.capture(&Totals { pixels: d("3"), ..Totals::default() });
    assert_eq!(record.compatibility(), Compatibility::Compatible);

    let fresh = economy();
    assert_eq!(fresh.restore(&record), played);
}
