//! Most-recent-value lookup over year-prefixed indicator keys.

use marketfit_core::constants::YEAR_SEGMENT_LEN;
use marketfit_core::models::CountryProfile;

/// Latest numeric value of the indicator family ending in `suffix`.
///
/// Among keys that end with `suffix` and carry a finite number, returns the
/// value of the lexicographically greatest key. Keys start with a four-digit
/// year, so the greatest key is the most recent year. Keys without a valid
/// year segment are ignored so they can never outrank a real year.
pub fn latest(profile: &CountryProfile, suffix: &str) -> Option<f64> {
    profile
        .iter()
        .rev()
        .filter(|(key, _)| has_year_prefix(key) && key.ends_with(suffix))
        .find_map(|(_, value)| value.as_number())
}

/// `true` for keys shaped `YYYY.<rest>`.
pub fn has_year_prefix(key: &str) -> bool {
    let bytes = key.as_bytes();
    bytes.len() > YEAR_SEGMENT_LEN
        && bytes[..YEAR_SEGMENT_LEN].iter().all(u8::is_ascii_digit)
        && bytes[YEAR_SEGMENT_LEN] == b'.'
}
