use usability_core::model::{DemographicRecord, LikertScore};

/// Parse the age box. Out-of-range values are left to the domain validator.
///
/// # Errors
///
/// Returns a user-facing message if the text is not a whole number.
pub fn parse_age(raw: &str) -> Result<u32, String> {
    raw.trim().parse::<u32>().map_err(|_| {
        format!(
            "Age must be a whole number between {} and {}.",
            DemographicRecord::MIN_AGE,
            DemographicRecord::MAX_AGE
        )
    })
}

/// Parse a slider value, falling back to the neutral score on garbage input.
#[must_use]
pub fn parse_score(raw: &str) -> u8 {
    raw.trim()
        .parse::<u8>()
        .ok()
        .and_then(LikertScore::new)
        .map_or(LikertScore::NEUTRAL, LikertScore::value)
}
