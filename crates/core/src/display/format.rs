//! Badge text formatting.
//!
//! Turns a [`DisplayState`] into a short string for the toolbar badge.
//! Numeric formatting follows the historical behavior: one decimal plus a
//! "k" suffix for abbreviated thousands, otherwise whole units, with the
//! result truncated to [`BADGE_MAX_CHARS`]. The truncation may silently drop
//! digits for very large prices; that quirk is kept on purpose.

use rust_decimal::{Decimal, RoundingStrategy};

use super::DisplayState;
use crate::constants::BADGE_MAX_CHARS;

const ABBREVIATION_THRESHOLD: Decimal = Decimal::ONE_THOUSAND;

/// Format a display state into badge text of at most four characters.
///
/// Pure function of the state and the abbreviation preference.
pub fn format_badge(state: &DisplayState, abbreviation: bool) -> String {
    let text = match state {
        DisplayState::Price(price) => format_price(*price, abbreviation),
        DisplayState::NoKey => "No Key".to_string(),
        DisplayState::NoData => "No Data".to_string(),
        DisplayState::Error => "Err".to_string(),
    };
    truncate(&text)
}

fn format_price(price: Decimal, abbreviation: bool) -> String {
    if abbreviation && price >= ABBREVIATION_THRESHOLD {
        // Half-away-from-zero matches the rounding the badge always used.
        let thousands = (price / ABBREVIATION_THRESHOLD)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.1}k", thousands)
    } else {
        let whole = price.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{}", whole)
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(BADGE_MAX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_abbreviated_thousands() {
        let state = DisplayState::Price(dec!(1234));
        assert_eq!(format_badge(&state, true), "1.2k");

        let state = DisplayState::Price(dec!(2345.6));
        assert_eq!(format_badge(&state, true), "2.3k");

        let state = DisplayState::Price(dec!(2000));
        assert_eq!(format_badge(&state, true), "2.0k");
    }

    #[test]
    fn test_abbreviation_only_at_or_above_one_thousand() {
        let state = DisplayState::Price(dec!(999.4));
        assert_eq!(format_badge(&state, true), "999");

        let state = DisplayState::Price(dec!(1000));
        assert_eq!(format_badge(&state, true), "1.0k");
    }

    #[test]
    fn test_whole_units_without_abbreviation() {
        let state = DisplayState::Price(dec!(2345.6));
        assert_eq!(format_badge(&state, false), "2346");

        let state = DisplayState::Price(dec!(987.2));
        assert_eq!(format_badge(&state, false), "987");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let state = DisplayState::Price(dec!(1850.5));
        assert_eq!(format_badge(&state, false), "1851");

        let state = DisplayState::Price(dec!(1250));
        assert_eq!(format_badge(&state, true), "1.3k");
    }

    #[test]
    fn test_truncates_to_four_characters() {
        // Five digits truncate to four. Known quirk, kept.
        let state = DisplayState::Price(dec!(12345));
        assert_eq!(format_badge(&state, false), "1234");

        // Abbreviated six-figure price loses the suffix.
        let state = DisplayState::Price(dec!(123456));
        assert_eq!(format_badge(&state, true), "123.");
    }

    #[test]
    fn test_sentinel_states() {
        assert_eq!(format_badge(&DisplayState::NoKey, false), "No K");
        assert_eq!(format_badge(&DisplayState::NoData, false), "No D");
        assert_eq!(format_badge(&DisplayState::Error, false), "Err");
    }

    #[test]
    fn test_sentinels_ignore_abbreviation_flag() {
        assert_eq!(format_badge(&DisplayState::NoKey, true), "No K");
        assert_eq!(format_badge(&DisplayState::Error, true), "Err");
    }
}
