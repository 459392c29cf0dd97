// crates/trunfo-core/src/prompt.rs

//! Interactive card entry.
//!
//! Every answer is consumed as one full line, so a numeric read can never
//! leave a stray terminator behind for the next field. Malformed numbers
//! are rejected and the field asked again; only an exhausted input stream
//! aborts the collection.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{Result, TrunfoError};
use crate::model::Card;

/// Printed before re-prompting a field that failed to parse.
const INVALID_INPUT: &str = "Valor inválido, tente novamente.";

/// Collects one card from `input`, echoing prompts to `output`.
///
/// Prompt order and wording follow the card sheet: city, population, area,
/// GDP, tourist points. The city name is capped at
/// [`crate::model::MAX_CITY_LEN`] characters.
pub fn read_card<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Card> {
    let city = prompt_line(input, output, "Cidade: ")?;
    let population = prompt_parsed(input, output, "População: ", |_: &u64| true)?;
    let area = prompt_parsed(input, output, "Área M²: ", is_valid_real)?;
    let gdp = prompt_parsed(input, output, "PIB: ", is_valid_real)?;
    let tourist_spots = prompt_parsed(input, output, "Pontos Turísticos: ", |_: &u32| true)?;

    Ok(Card::new(city, population, tourist_spots, area, gdp))
}

/// Negative and non-finite reals never describe a city; reject them. A zero
/// area still gets through here and is handled by the derivation fallback.
fn is_valid_real(value: &f64) -> bool {
    value.is_finite() && *value >= 0.0
}

/// Writes `label` without a newline, flushes, and reads one answer line
/// with its terminator trimmed.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &'static str,
) -> Result<String> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(TrunfoError::UnexpectedEof {
            field: label.trim_end_matches([':', ' ']),
        });
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Re-prompts `label` until the answer parses as `T` and passes `accept`.
fn prompt_parsed<T, R, W>(
    input: &mut R,
    output: &mut W,
    label: &'static str,
    accept: impl Fn(&T) -> bool,
) -> Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt_line(input, output, label)?;
        match line.trim().parse::<T>() {
            Ok(value) if accept(&value) => return Ok(value),
            _ => writeln!(output, "{INVALID_INPUT}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MAX_CITY_LEN;
    use std::io::Cursor;

    fn collect(script: &str) -> (Result<Card>, String) {
        let mut input = Cursor::new(script.as_bytes());
        let mut output = Vec::new();
        let card = read_card(&mut input, &mut output);
        (card, String::from_utf8(output).unwrap())
    }

    #[test]
    fn reads_one_card_in_sheet_order() {
        let (card, output) = collect("São Paulo\n1000\n100\n5000\n3\n");
        let card = card.unwrap();

        assert_eq!(card.city, "São Paulo");
        assert_eq!(card.population, 1000);
        assert_eq!(card.area, 100.0);
        assert_eq!(card.gdp, 5000.0);
        assert_eq!(card.tourist_spots, 3);
        assert_eq!(
            output,
            "Cidade: População: Área M²: PIB: Pontos Turísticos: "
        );
    }

    #[test]
    fn crlf_terminators_are_trimmed() {
        let (card, _) = collect("Natal\r\n10\r\n1.5\r\n2.5\r\n1\r\n");
        let card = card.unwrap();
        assert_eq!(card.city, "Natal");
        assert_eq!(card.area, 1.5);
    }

    #[test]
    fn long_city_names_are_truncated() {
        let name = "x".repeat(45);
        let (card, _) = collect(&format!("{name}\n1\n1\n1\n1\n"));
        assert_eq!(card.unwrap().city.chars().count(), MAX_CITY_LEN);
    }

    #[test]
    fn malformed_numbers_are_rejected_and_reprompted() {
        let (card, output) = collect("Recife\nmuita gente\n1000\n50\n200\n4\n");
        assert_eq!(card.unwrap().population, 1000);
        assert!(output.contains(INVALID_INPUT));
        // The population prompt must appear twice.
        assert_eq!(output.matches("População: ").count(), 2);
    }

    #[test]
    fn negative_reals_are_rejected_and_reprompted() {
        let (card, output) = collect("Recife\n1000\n-50\n50\n200\n4\n");
        let card = card.unwrap();
        assert_eq!(card.area, 50.0);
        assert_eq!(card.gdp, 200.0);
        assert!(output.contains(INVALID_INPUT));
    }

    #[test]
    fn non_finite_reals_are_rejected_and_reprompted() {
        let (card, output) = collect("Recife\n1000\ninf\n50\nNaN\n200\n4\n");
        let card = card.unwrap();
        assert_eq!(card.area, 50.0);
        assert_eq!(card.gdp, 200.0);
        assert_eq!(output.matches(INVALID_INPUT).count(), 2);
    }

    #[test]
    fn exhausted_input_names_the_missing_field() {
        let (card, _) = collect("Recife\n1000\n");
        match card {
            Err(TrunfoError::UnexpectedEof { field }) => assert_eq!(field, "Área M²"),
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_fails_on_the_city_field() {
        let (card, _) = collect("");
        match card {
            Err(TrunfoError::UnexpectedEof { field }) => assert_eq!(field, "Cidade"),
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }
}
