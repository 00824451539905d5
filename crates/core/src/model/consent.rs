use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Record, columns, format_bool};
use crate::time::format_timestamp;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConsentError {
    #[error("You must agree to the consent terms before proceeding.")]
    NotGiven,
}

/// Participant agreement to take part in the study.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentRecord {
    timestamp: DateTime<Utc>,
    consent_given: bool,
}

impl ConsentRecord {
    /// Accept a consent submission.
    ///
    /// # Errors
    ///
    /// Returns `ConsentError::NotGiven` when the agreement box was left unchecked.
    pub fn new(timestamp: DateTime<Utc>, consent_given: bool) -> Result<Self, ConsentError> {
        if !consent_given {
            return Err(ConsentError::NotGiven);
        }
        Ok(Self {
            timestamp,
            consent_given,
        })
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn consent_given(&self) -> bool {
        self.consent_given
    }
}

impl From<&ConsentRecord> for Record {
    fn from(value: &ConsentRecord) -> Self {
        Record::new()
            .with_field(columns::TIMESTAMP, format_timestamp(value.timestamp))
            .with_field(columns::CONSENT_GIVEN, format_bool(value.consent_given))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn unchecked_consent_is_rejected() {
        let err = ConsentRecord::new(fixed_now(), false).unwrap_err();
        assert_eq!(err, ConsentError::NotGiven);
    }

    #[test]
    fn consent_maps_to_two_columns() {
        let record: Record = (&ConsentRecord::new(fixed_now(), true).unwrap()).into();
        let names: Vec<_> = record.field_names().collect();
        assert_eq!(names, vec!["timestamp", "consent_given"]);
        assert_eq!(record.get("consent_given"), Some("True"));
        assert_eq!(record.get("timestamp"), Some("2023-11-14 22:13:20"));
    }
}
