// crates/trunfo-core/src/compare.rs

use serde::{Deserialize, Serialize};

use crate::metrics::DerivedMetrics;
use crate::model::Card;

/// Outcome of pitting two cards against each other.
///
/// Each flag is `true` iff card 1 strictly wins that attribute; `false`
/// covers both a card 2 win and a tie. There is no separate tie flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardComparison {
    pub population: bool,
    pub area: bool,
    pub gdp: bool,
    pub tourist_spots: bool,
    /// Inverted rule: the LOWER density wins this attribute.
    pub density: bool,
    pub per_capita: bool,
    /// `None` when either side played without a power score.
    pub power: Option<bool>,
}

/// Compares every attribute of two cards.
///
/// Strictly greater wins everywhere except population density, where the
/// lower value takes the attribute.
///
/// # Examples
/// ```rust
/// use trunfo_core::{compare, Card, DerivedMetrics, Ruleset};
///
/// let rules = Ruleset::full();
/// let sp = Card::new("São Paulo", 1000, 3, 100.0, 5000.0);
/// let rio = Card::new("Rio de Janeiro", 2000, 5, 50.0, 3000.0);
///
/// let result = compare(
///     &sp,
///     &DerivedMetrics::for_card(&sp, rules),
///     &rio,
///     &DerivedMetrics::for_card(&rio, rules),
/// );
/// assert!(result.density); // 10.00 hab/m² beats 40.00 hab/m²
/// assert!(!result.population); // 1000 loses to 2000
/// ```
pub fn compare(
    card1: &Card,
    metrics1: &DerivedMetrics,
    card2: &Card,
    metrics2: &DerivedMetrics,
) -> CardComparison {
    CardComparison {
        population: card1.population > card2.population,
        area: card1.area > card2.area,
        gdp: card1.gdp > card2.gdp,
        tourist_spots: card1.tourist_spots > card2.tourist_spots,
        density: metrics1.density < metrics2.density,
        per_capita: metrics1.per_capita > metrics2.per_capita,
        power: match (metrics1.power, metrics2.power) {
            (Some(p1), Some(p2)) => Some(p1 > p2),
            _ => None,
        },
    }
}
