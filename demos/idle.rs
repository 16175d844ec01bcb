// demos/idle.rs
// Run with:
//   RUST_LOG=pixel_economy=debug cargo run --example idle

use pixel_economy::genres::idle::IdleEconomy;
use pixel_economy::mechanics::{format_number, seeded};
use pixel_economy::systems::progress::Totals;
use pixel_economy::{Balance, Decimal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut economy = IdleEconomy::from_json(Balance::default(), include_str!("../data/upgrades.json"))?;
    let mut rng = seeded(7);
    let mut pixels = Decimal::zero();
    let mut spent = Decimal::zero();
    let mut earned = Decimal::zero();
    let one_second = Decimal::one();

    // Simple greedy player: click ten times a second, buy the cheapest
    // affordable upgrade once per second.
    for second in 1..=600u32 {
        for _ in 0..10 {
            let click = economy.click(&mut rng);
            pixels = &pixels + &click.click_power;
            earned = &earned + &click.click_power;
        }
        let auto = economy.auto_click_yield(&one_second);
        let passive = &economy.stats().total_pixel_generation + &auto;
        pixels = economy.accrue(&pixels, &one_second) + auto;
        earned = &earned + &passive;

        let cheapest = economy
            .upgrades
            .iter()
            .filter_map(|u| economy.cost_of(&u.id).ok().map(|c| (u.id.clone(), c)))
            .filter(|(_, cost)| pixels.gte(cost))
            .min_by(|a, b| a.1.cmp(&b.1));
        if let Some((id, _)) = cheapest {
            let (next, outcome) = economy.purchase(&id, &pixels)?;
            if let Some(cost) = outcome.spent() {
                spent = &spent + cost;
                println!("[{second:>3}s] bought {id} for {}", format_number(cost));
            }
            pixels = outcome.new_total().clone();
            economy = next;
        }
    }

    let sheet = economy.stats();
    println!("== after 10 minutes ==");
    println!("pixels        {}", format_number(&pixels));
    println!("rate          {}/s", format_number(&sheet.total_pixel_generation));
    println!("click power   {}", format_number(&sheet.total_click_power));
    println!("crit chance   {}", sheet.click_critical_chance);
    println!("crit mult     {}", sheet.click_critical_multiplier);

    let record = economy.capture(&Totals {
        pixels,
        total_pixels: earned,
        spent_pixels: spent,
        completed_frames: 0,
    });
    println!("{}", record.to_json()?);
    Ok(())
}
