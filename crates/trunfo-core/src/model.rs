// crates/trunfo-core/src/model.rs

use serde::{Deserialize, Serialize};

/// Longest city name kept on a card; longer input is truncated.
pub const MAX_CITY_LEN: usize = 29;

/// One player's card: the raw city attributes as entered.
///
/// A card is filled exactly once, either interactively by
/// [`crate::prompt::read_card`] or programmatically via [`Card::new`], and
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub city: String,
    pub population: u64,
    /// Number of tourist points of interest.
    pub tourist_spots: u32,
    /// Municipal area in square meters.
    pub area: f64,
    /// Gross domestic product, in the local currency.
    pub gdp: f64,
}

impl Card {
    /// Builds a card directly, applying the same city-name cap the
    /// interactive prompt applies.
    pub fn new(
        city: impl Into<String>,
        population: u64,
        tourist_spots: u32,
        area: f64,
        gdp: f64,
    ) -> Self {
        Self {
            city: truncate_city(&city.into()),
            population,
            tourist_spots,
            area,
            gdp,
        }
    }
}

/// Caps a city name at [`MAX_CITY_LEN`] characters without splitting a
/// multi-byte character.
pub(crate) fn truncate_city(raw: &str) -> String {
    raw.chars().take(MAX_CITY_LEN).collect()
}

/// Which variant of the game is being played.
///
/// The full game carries the aggregate SUPER PODER attribute and ends with
/// the attribute-by-attribute result table; the basic variant stops after
/// the two card sheets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    pub power_score: bool,
}

impl Ruleset {
    pub fn full() -> Self {
        Self { power_score: true }
    }

    pub fn basic() -> Self {
        Self { power_score: false }
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::full()
    }
}
