//! trunfo — interactive Super Trunfo duel between two city cards
//!
//! This binary runs the whole game in one sitting: it prompts for the
//! attributes of two city cards, derives population density, per-capita
//! GDP and the aggregate SUPER PODER score, prints both card sheets and
//! reports which card wins each attribute (lower density wins; everything
//! else is won by the strictly greater value).
//!
//! Usage examples
//! --------------
//!
//! - Play the full game
//!   $ trunfo
//!
//! - Play the basic variant (no SUPER PODER, no result table)
//!   $ trunfo --basic
//!
//! Input protocol
//! --------------
//!
//! Each card is entered as five answers: city name (one line, at most 29
//! characters kept), population, area in m², GDP, and the number of
//! tourist points. A malformed number is rejected and the field asked
//! again; closing the input mid-card aborts the game with an error.
//!
//! See also: the repository README for the card sheet layout.
mod args;

use crate::args::CliArgs;
use clap::Parser;
use trunfo_core::{session, Ruleset};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let rules = if args.basic {
        Ruleset::basic()
    } else {
        Ruleset::full()
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(&mut stdin.lock(), &mut stdout.lock(), rules)?;

    Ok(())
}
