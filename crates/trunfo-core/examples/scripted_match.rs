//! Scripted match example for trunfo-core
//!
//! This example demonstrates the library API without the interactive
//! prompt:
//! - Build two city cards programmatically
//! - Derive their secondary attributes
//! - Compare the cards and print the sheets and the result table

use trunfo_core::{compare, render, Card, DerivedMetrics, Ruleset};

fn main() -> std::io::Result<()> {
    println!("=== Super Trunfo scripted match ===");

    let rules = Ruleset::full();
    let sp = Card::new("São Paulo", 12_325_232, 15, 1_521_110_000.0, 828_980_000_000.0);
    let rio = Card::new("Rio de Janeiro", 6_747_815, 20, 1_200_180_000.0, 359_634_000_000.0);

    let metrics_sp = DerivedMetrics::for_card(&sp, rules);
    let metrics_rio = DerivedMetrics::for_card(&rio, rules);

    let mut out = std::io::stdout().lock();
    render::write_card(&mut out, &sp, &metrics_sp)?;
    render::write_card(&mut out, &rio, &metrics_rio)?;

    let result = compare(&sp, &metrics_sp, &rio, &metrics_rio);
    render::write_comparison(&mut out, &result)?;

    Ok(())
}
