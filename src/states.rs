//! Fixed allow-list of the 50 U.S. states.
//!
//! The spending API lists the District of Columbia and the territories
//! alongside the states. Only codes in [`US_STATES`] take part in state
//! rankings; everything else is skipped before any per-state request.

/// `(FIPS code, postal abbreviation)` for each of the 50 states.
pub static US_STATES: &[(&str, &str)] = &[
    ("01", "AL"),
    ("02", "AK"),
    ("04", "AZ"),
    ("05", "AR"),
    ("06", "CA"),
    ("08", "CO"),
    ("09", "CT"),
    ("10", "DE"),
    ("12", "FL"),
    ("13", "GA"),
    ("15", "HI"),
    ("16", "ID"),
    ("17", "IL"),
    ("18", "IN"),
    ("19", "IA"),
    ("20", "KS"),
    ("21", "KY"),
    ("22", "LA"),
    ("23", "ME"),
    ("24", "MD"),
    ("25", "MA"),
    ("26", "MI"),
    ("27", "MN"),
    ("28", "MS"),
    ("29", "MO"),
    ("30", "MT"),
    ("31", "NE"),
    ("32", "NV"),
    ("33", "NH"),
    ("34", "NJ"),
    ("35", "NM"),
    ("36", "NY"),
    ("37", "NC"),
    ("38", "ND"),
    ("39", "OH"),
    ("40", "OK"),
    ("41", "OR"),
    ("42", "PA"),
    ("44", "RI"),
    ("45", "SC"),
    ("46", "SD"),
    ("47", "TN"),
    ("48", "TX"),
    ("49", "UT"),
    ("50", "VT"),
    ("51", "VA"),
    ("53", "WA"),
    ("54", "WV"),
    ("55", "WI"),
    ("56", "WY"),
];

/// Returns `true` if `fips` is one of the 50 states.
pub fn is_us_state(fips: &str) -> bool {
    US_STATES.iter().any(|(code, _)| *code == fips.trim())
}

/// Postal abbreviation for a state FIPS code.
pub fn abbreviation(fips: &str) -> Option<&'static str> {
    US_STATES
        .iter()
        .find(|(code, _)| *code == fips.trim())
        .map(|(_, abbr)| *abbr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_fifty_states() {
        assert_eq!(US_STATES.len(), 50);
    }

    #[test]
    fn test_dc_and_territories_excluded() {
        assert!(!is_us_state("11")); // DC
        assert!(!is_us_state("72")); // Puerto Rico
        assert!(!is_us_state("66")); // Guam
        assert!(!is_us_state("78")); // U.S. Virgin Islands
    }

    #[test]
    fn test_known_states() {
        assert!(is_us_state("48"));
        assert!(is_us_state("02"));
        assert_eq!(abbreviation("48"), Some("TX"));
        assert_eq!(abbreviation("72"), None);
    }
}
