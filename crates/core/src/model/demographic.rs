use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::{Record, columns};
use crate::time::format_timestamp;

/// Name written in place of whatever the participant typed when anonymizing.
pub const ANONYMOUS_NAME: &str = "Anonymous";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DemographicError {
    #[error("age must be between {min} and {max}, got {age}")]
    AgeOutOfRange { age: u32, min: u32, max: u32 },

    #[error("unknown familiarity option: {0}")]
    UnknownFamiliarity(String),

    #[error("unknown frequency option: {0}")]
    UnknownFrequency(String),
}

/// Whether the optional name field is persisted or replaced with [`ANONYMOUS_NAME`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamePolicy {
    #[default]
    Anonymize,
    Keep,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Familiarity {
    #[default]
    VeryFamiliar,
    MildlyFamiliar,
    NotFamiliar,
}

impl Familiarity {
    pub const ALL: [Familiarity; 3] = [
        Familiarity::VeryFamiliar,
        Familiarity::MildlyFamiliar,
        Familiarity::NotFamiliar,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Familiarity::VeryFamiliar => "Very familiar",
            Familiarity::MildlyFamiliar => "Mildly familiar",
            Familiarity::NotFamiliar => "Not familiar",
        }
    }
}

impl fmt::Display for Familiarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Familiarity {
    type Err = DemographicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| DemographicError::UnknownFamiliarity(s.to_string()))
    }
}

/// How often the participant checks the weather.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CheckFrequency {
    #[default]
    Daily,
    Weekly,
    Periodically,
    AlmostNever,
}

impl CheckFrequency {
    pub const ALL: [CheckFrequency; 4] = [
        CheckFrequency::Daily,
        CheckFrequency::Weekly,
        CheckFrequency::Periodically,
        CheckFrequency::AlmostNever,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CheckFrequency::Daily => "Daily",
            CheckFrequency::Weekly => "Weekly",
            CheckFrequency::Periodically => "Periodically",
            CheckFrequency::AlmostNever => "Almost never",
        }
    }
}

impl fmt::Display for CheckFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CheckFrequency {
    type Err = DemographicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| DemographicError::UnknownFrequency(s.to_string()))
    }
}

/// Raw demographic answers as entered on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemographicDraft {
    pub name: String,
    pub age: u32,
    pub occupation: String,
    pub familiarity: Familiarity,
    pub frequency: CheckFrequency,
}

impl Default for DemographicDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: DemographicRecord::MIN_AGE,
            occupation: String::new(),
            familiarity: Familiarity::default(),
            frequency: CheckFrequency::default(),
        }
    }
}

impl DemographicDraft {
    /// Validate the answers and stamp them.
    ///
    /// # Errors
    ///
    /// Returns `DemographicError::AgeOutOfRange` if the age is outside `10..=100`.
    pub fn validate(
        self,
        timestamp: DateTime<Utc>,
        policy: NamePolicy,
    ) -> Result<DemographicRecord, DemographicError> {
        let range = DemographicRecord::MIN_AGE..=DemographicRecord::MAX_AGE;
        if !range.contains(&self.age) {
            return Err(DemographicError::AgeOutOfRange {
                age: self.age,
                min: DemographicRecord::MIN_AGE,
                max: DemographicRecord::MAX_AGE,
            });
        }

        let name = match policy {
            NamePolicy::Anonymize => ANONYMOUS_NAME.to_string(),
            NamePolicy::Keep => self.name.trim().to_string(),
        };

        Ok(DemographicRecord {
            timestamp,
            name,
            age: self.age,
            occupation: self.occupation.trim().to_string(),
            familiarity: self.familiarity,
            frequency: self.frequency,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemographicRecord {
    timestamp: DateTime<Utc>,
    name: String,
    age: u32,
    occupation: String,
    familiarity: Familiarity,
    frequency: CheckFrequency,
}

impl DemographicRecord {
    pub const MIN_AGE: u32 = 10;
    pub const MAX_AGE: u32 = 100;

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn occupation(&self) -> &str {
        &self.occupation
    }

    #[must_use]
    pub fn familiarity(&self) -> Familiarity {
        self.familiarity
    }

    #[must_use]
    pub fn frequency(&self) -> CheckFrequency {
        self.frequency
    }
}

impl From<&DemographicRecord> for Record {
    fn from(value: &DemographicRecord) -> Self {
        Record::new()
            .with_field(columns::TIMESTAMP, format_timestamp(value.timestamp))
            .with_field(columns::NAME, value.name.clone())
            .with_field(columns::AGE, value.age.to_string())
            .with_field(columns::OCCUPATION, value.occupation.clone())
            .with_field(columns::FAMILIARITY, value.familiarity.label())
            .with_field(columns::FREQUENCY, value.frequency.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn draft(age: u32) -> DemographicDraft {
        DemographicDraft {
            name: "  Ada  ".to_string(),
            age,
            occupation: " Engineer ".to_string(),
            familiarity: Familiarity::MildlyFamiliar,
            frequency: CheckFrequency::AlmostNever,
        }
    }

    #[test]
    fn anonymize_replaces_entered_name() {
        let record = draft(30).validate(fixed_now(), NamePolicy::Anonymize).unwrap();
        assert_eq!(record.name(), ANONYMOUS_NAME);
        assert_eq!(record.occupation(), "Engineer");
    }

    #[test]
    fn keep_policy_persists_trimmed_name() {
        let record = draft(30).validate(fixed_now(), NamePolicy::Keep).unwrap();
        assert_eq!(record.name(), "Ada");
    }

    #[test]
    fn age_bounds_are_enforced() {
        assert!(draft(10).validate(fixed_now(), NamePolicy::default()).is_ok());
        assert!(draft(100).validate(fixed_now(), NamePolicy::default()).is_ok());
        let err = draft(9).validate(fixed_now(), NamePolicy::default()).unwrap_err();
        assert!(matches!(err, DemographicError::AgeOutOfRange { age: 9, .. }));
        assert!(draft(101).validate(fixed_now(), NamePolicy::default()).is_err());
    }

    #[test]
    fn record_columns_follow_form_order() {
        let record: Record = (&draft(42).validate(fixed_now(), NamePolicy::Anonymize).unwrap()).into();
        let names: Vec<_> = record.field_names().collect();
        assert_eq!(
            names,
            vec!["timestamp", "name", "age", "occupation", "familiarity", "frequency"]
        );
        assert_eq!(record.get("familiarity"), Some("Mildly familiar"));
        assert_eq!(record.get("frequency"), Some("Almost never"));
    }

    #[test]
    fn options_parse_from_labels() {
        assert_eq!("Not familiar".parse::<Familiarity>().unwrap(), Familiarity::NotFamiliar);
        assert_eq!("Weekly".parse::<CheckFrequency>().unwrap(), CheckFrequency::Weekly);
        assert!("Hourly".parse::<CheckFrequency>().is_err());
    }
}
