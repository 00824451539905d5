/// Column names shared by writers and the report aggregation.
pub mod columns {
    pub const TIMESTAMP: &str = "timestamp";

    pub const CONSENT_GIVEN: &str = "consent_given";

    pub const NAME: &str = "name";
    pub const AGE: &str = "age";
    pub const OCCUPATION: &str = "occupation";
    pub const FAMILIARITY: &str = "familiarity";
    pub const FREQUENCY: &str = "frequency";

    pub const TASK_NAME: &str = "task_name";
    pub const SUCCESS: &str = "success";
    pub const DURATION_SECONDS: &str = "duration_seconds";
    pub const NOTES: &str = "notes";

    pub const SATISFACTION: &str = "satisfaction";
    pub const DIFFICULTY: &str = "difficulty";
    pub const OPEN_FEEDBACK: &str = "open_feedback";
}

/// One flat, ordered key-value row ready to be persisted.
///
/// Field order is significant: the first record written to a category fixes
/// the header of its backing file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping insertion order.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Boolean cell encoding used by record files.
#[must_use]
pub fn format_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Lenient boolean cell decoding; unknown values are `None`.
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
