// crates/trunfo-core/src/metrics.rs

use serde::{Deserialize, Serialize};

use crate::model::{Card, Ruleset};

/// Secondary attributes computed once from a card's raw values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Inhabitants per square meter. Zero when the card has no area.
    pub density: f64,
    /// GDP per inhabitant. Zero when the card has no population.
    pub per_capita: f64,
    /// Aggregate SUPER PODER score; `None` in the basic variant.
    pub power: Option<i64>,
}

impl DerivedMetrics {
    /// Derives the secondary attributes for one card.
    ///
    /// Both ratios fall back to zero instead of dividing by zero. The power
    /// score drops the fractional part of area and GDP toward zero and
    /// accumulates the four terms in an `i64`.
    pub fn for_card(card: &Card, rules: Ruleset) -> Self {
        let density = if card.area > 0.0 {
            card.population as f64 / card.area
        } else {
            0.0
        };

        let per_capita = if card.population > 0 {
            card.gdp / card.population as f64
        } else {
            0.0
        };

        let power = rules.power_score.then(|| {
            card.area.trunc() as i64
                + i64::from(card.tourist_spots)
                + card.gdp.trunc() as i64
                + card.population as i64
        });

        Self {
            density,
            per_capita,
            power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(population: u64, tourist_spots: u32, area: f64, gdp: f64) -> Card {
        Card::new("Teste", population, tourist_spots, area, gdp)
    }

    #[test]
    fn density_is_population_over_area() {
        let m = DerivedMetrics::for_card(&card(1000, 3, 100.0, 5000.0), Ruleset::full());
        assert_eq!(m.density, 10.0);
    }

    #[test]
    fn zero_area_yields_zero_density() {
        let m = DerivedMetrics::for_card(&card(1000, 3, 0.0, 5000.0), Ruleset::full());
        assert_eq!(m.density, 0.0);
    }

    #[test]
    fn per_capita_is_gdp_over_population() {
        let m = DerivedMetrics::for_card(&card(2000, 5, 50.0, 3000.0), Ruleset::full());
        assert_eq!(m.per_capita, 1.5);
    }

    #[test]
    fn zero_population_yields_zero_per_capita() {
        let m = DerivedMetrics::for_card(&card(0, 5, 50.0, 3000.0), Ruleset::full());
        assert_eq!(m.per_capita, 0.0);
    }

    #[test]
    fn power_sums_all_four_attributes() {
        let m = DerivedMetrics::for_card(&card(1000, 3, 100.0, 5000.0), Ruleset::full());
        assert_eq!(m.power, Some(100 + 3 + 5000 + 1000));
    }

    #[test]
    fn power_truncates_each_real_term_toward_zero() {
        // 100.9 and 5000.9 contribute 100 and 5000: the fractional parts are
        // dropped per term, not after summing.
        let m = DerivedMetrics::for_card(&card(1000, 3, 100.9, 5000.9), Ruleset::full());
        assert_eq!(m.power, Some(100 + 3 + 5000 + 1000));
    }

    #[test]
    fn basic_variant_has_no_power_score() {
        let m = DerivedMetrics::for_card(&card(1000, 3, 100.0, 5000.0), Ruleset::basic());
        assert_eq!(m.power, None);
    }
}
