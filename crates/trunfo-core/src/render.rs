// crates/trunfo-core/src/render.rs

//! Card sheet and result rendering.
//!
//! Labels, borders and number formatting reproduce the printed card sheet:
//! reals with two decimals, `m²`/`hab/m²` units, the `R$` currency prefix,
//! and 1/0 result flags.

use std::io::{self, Write};

use crate::compare::CardComparison;
use crate::metrics::DerivedMetrics;
use crate::model::Card;

const BORDER: &str = "----------------------------------";

/// Greeting printed before any card is entered.
pub fn write_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Seja bem-vindo ao jogo Super Trunfo!")?;
    writeln!(out, "Cadastre suas cartas para jogar!")?;
    writeln!(out)
}

/// Prints one card's sheet: the raw attributes followed by the derived
/// ones. The SUPER PODER line appears only when the metrics carry one.
pub fn write_card<W: Write>(out: &mut W, card: &Card, metrics: &DerivedMetrics) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{BORDER}")?;
    writeln!(out, "CADASTRO DA CARTA SUPER TRUNFO")?;
    writeln!(out, "Cidade: {}", card.city)?;
    writeln!(out, "População: {}", card.population)?;
    writeln!(out, "Area do Município: {:.2} m²", card.area)?;
    writeln!(out, "PIB do Município: R$ {:.2}", card.gdp)?;
    writeln!(out, "Pontos Turísticos: {}", card.tourist_spots)?;
    writeln!(out, ">> Densidade Populacional: {:.2} hab/m²", metrics.density)?;
    writeln!(out, ">> PIB Per Capita: R$ {:.2}", metrics.per_capita)?;
    if let Some(power) = metrics.power {
        writeln!(out, "SUPER PODER: {power}")?;
    }
    writeln!(out, "{BORDER}")
}

/// Prints the final result table, one 1/0 line per attribute.
pub fn write_comparison<W: Write>(out: &mut W, result: &CardComparison) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{BORDER}")?;
    writeln!(out, "     RESULTADO DA COMPARAÇÃO")?;
    writeln!(out, "(1 = CARTA 1 VENCE, 0 = CARTA 2 VENCE/EMPATE)")?;
    writeln!(out, "{BORDER}")?;
    writeln!(out, "População: {}", flag(result.population))?;
    writeln!(out, "Area do Município: {}", flag(result.area))?;
    writeln!(out, "PIB do Município: {}", flag(result.gdp))?;
    writeln!(out, "Pontos Turísticos: {}", flag(result.tourist_spots))?;
    writeln!(out, ">> Densidade Populacional: {}", flag(result.density))?;
    writeln!(out, ">> PIB Per Capita: {}", flag(result.per_capita))?;
    if let Some(power) = result.power {
        writeln!(out, "SUPER PODER: {}", flag(power))?;
    }
    writeln!(out, "{BORDER}")
}

fn flag(card1_wins: bool) -> u8 {
    card1_wins as u8
}
