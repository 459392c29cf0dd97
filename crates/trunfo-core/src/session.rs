// crates/trunfo-core/src/session.rs

//! The single linear game flow: collect, derive, compare, present.

use std::io::{BufRead, Write};

use crate::compare::compare;
use crate::error::Result;
use crate::metrics::DerivedMetrics;
use crate::model::Ruleset;
use crate::{prompt, render};

/// Runs one full duel over the given streams.
///
/// Greets the player, reads two cards, derives their secondary attributes
/// and prints both card sheets. In the full variant the duel ends with the
/// attribute-by-attribute result table; the basic variant stops after the
/// sheets.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, rules: Ruleset) -> Result<()> {
    render::write_welcome(output)?;

    writeln!(output, "--- Cadastro da Carta 1 ---")?;
    let card1 = prompt::read_card(input, output)?;

    writeln!(output)?;
    writeln!(output, "--- Cadastro da Carta 2 ---")?;
    let card2 = prompt::read_card(input, output)?;

    let metrics1 = DerivedMetrics::for_card(&card1, rules);
    let metrics2 = DerivedMetrics::for_card(&card2, rules);

    render::write_card(output, &card1, &metrics1)?;
    render::write_card(output, &card2, &metrics2)?;

    if rules.power_score {
        let result = compare(&card1, &metrics1, &card2, &metrics2);
        render::write_comparison(output, &result)?;
    }

    Ok(())
}
