use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Record, columns};
use crate::time::format_timestamp;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExitError {
    #[error("{field} must be between 1 and 5, got {value}")]
    ScoreOutOfRange { field: &'static str, value: u8 },
}

/// Five-point rating used by the exit questionnaire sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LikertScore(u8);

impl LikertScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const NEUTRAL: u8 = 3;

    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for LikertScore {
    fn default() -> Self {
        Self(Self::NEUTRAL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitDraft {
    pub satisfaction: u8,
    pub difficulty: u8,
    pub open_feedback: String,
}

impl Default for ExitDraft {
    fn default() -> Self {
        Self {
            satisfaction: LikertScore::NEUTRAL,
            difficulty: LikertScore::NEUTRAL,
            open_feedback: String::new(),
        }
    }
}

impl ExitDraft {
    /// Validate slider values and stamp the questionnaire.
    ///
    /// # Errors
    ///
    /// Returns `ExitError::ScoreOutOfRange` if either score is outside `1..=5`.
    pub fn validate(self, timestamp: DateTime<Utc>) -> Result<ExitRecord, ExitError> {
        let satisfaction = LikertScore::new(self.satisfaction).ok_or(ExitError::ScoreOutOfRange {
            field: columns::SATISFACTION,
            value: self.satisfaction,
        })?;
        let difficulty = LikertScore::new(self.difficulty).ok_or(ExitError::ScoreOutOfRange {
            field: columns::DIFFICULTY,
            value: self.difficulty,
        })?;

        Ok(ExitRecord {
            timestamp,
            satisfaction,
            difficulty,
            open_feedback: self.open_feedback,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitRecord {
    timestamp: DateTime<Utc>,
    satisfaction: LikertScore,
    difficulty: LikertScore,
    open_feedback: String,
}

impl ExitRecord {
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn satisfaction(&self) -> LikertScore {
        self.satisfaction
    }

    #[must_use]
    pub fn difficulty(&self) -> LikertScore {
        self.difficulty
    }

    #[must_use]
    pub fn open_feedback(&self) -> &str {
        &self.open_feedback
    }
}

impl From<&ExitRecord> for Record {
    fn from(value: &ExitRecord) -> Self {
        Record::new()
            .with_field(columns::TIMESTAMP, format_timestamp(value.timestamp))
            .with_field(columns::SATISFACTION, value.satisfaction.value().to_string())
            .with_field(columns::DIFFICULTY, value.difficulty.value().to_string())
            .with_field(columns::OPEN_FEEDBACK, value.open_feedback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn default_draft_is_neutral() {
        let record = ExitDraft::default().validate(fixed_now()).unwrap();
        assert_eq!(record.satisfaction().value(), 3);
        assert_eq!(record.difficulty().value(), 3);
    }

    #[test]
    fn scores_outside_scale_are_rejected() {
        let draft = ExitDraft {
            satisfaction: 6,
            ..ExitDraft::default()
        };
        assert_eq!(
            draft.validate(fixed_now()).unwrap_err(),
            ExitError::ScoreOutOfRange {
                field: "satisfaction",
                value: 6
            }
        );
        assert!(LikertScore::new(0).is_none());
    }

    #[test]
    fn exit_record_keeps_feedback_verbatim() {
        let record = ExitDraft {
            satisfaction: 5,
            difficulty: 1,
            open_feedback: "Units toggle, hard to find".into(),
        }
        .validate(fixed_now())
        .unwrap();
        let row: Record = (&record).into();
        assert_eq!(row.get("satisfaction"), Some("5"));
        assert_eq!(row.get("difficulty"), Some("1"));
        assert_eq!(row.get("open_feedback"), Some("Units toggle, hard to find"));
    }
}
