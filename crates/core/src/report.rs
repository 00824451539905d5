//! Aggregates shown on the report page.
//!
//! Everything here is pure: it works on already-loaded [`Table`]s and never
//! touches storage.

use crate::model::{Table, columns, parse_bool};

/// Number of occurrences of one distinct cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Number of truthy cells in `column`. Missing columns count as zero.
#[must_use]
pub fn count_true(table: &Table, column: &str) -> usize {
    table.column(column).map_or(0, |cells| {
        cells
            .into_iter()
            .filter(|cell| parse_bool(cell) == Some(true))
            .count()
    })
}

/// Arithmetic mean of the numeric cells in `column`.
///
/// Blank and non-numeric cells are skipped. `None` when nothing is left.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(table: &Table, column: &str) -> Option<f64> {
    let cells = table.column(column)?;
    let values: Vec<f64> = cells
        .into_iter()
        .filter_map(|cell| cell.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Histogram of the non-blank cells in `column`.
///
/// Ordered by count, most frequent first; ties keep first-appearance order.
#[must_use]
pub fn value_counts(table: &Table, column: &str) -> Vec<ValueCount> {
    let Some(cells) = table.column(column) else {
        return Vec::new();
    };
    let mut counts: Vec<ValueCount> = Vec::new();
    for cell in cells {
        let value = cell.trim();
        if value.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|entry| entry.value == value) {
            Some(entry) => entry.count += 1,
            None => counts.push(ValueCount {
                value: value.to_string(),
                count: 1,
            }),
        }
    }
    // Stable sort keeps first-appearance order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsentSummary {
    pub consent_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemographicSummary {
    pub mean_age: Option<f64>,
    pub familiarity: Vec<ValueCount>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskSummary {
    pub mean_duration_secs: Option<f64>,
    pub durations: Vec<ValueCount>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExitSummary {
    pub mean_satisfaction: Option<f64>,
    pub mean_difficulty: Option<f64>,
    /// Row count of the demographic table, not of the exit table.
    pub total_participants: usize,
}

/// One category's slice of the report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportSection<S> {
    /// No rows yet; nothing is aggregated.
    Empty,
    Ready { table: Table, summary: S },
}

impl<S> ReportSection<S> {
    fn build(table: Table, summarize: impl FnOnce(&Table) -> S) -> Self {
        if table.is_empty() {
            return Self::Empty;
        }
        let summary = summarize(&table);
        Self::Ready { table, summary }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn summary(&self) -> Option<&S> {
        match self {
            Self::Empty => None,
            Self::Ready { summary, .. } => Some(summary),
        }
    }

    #[must_use]
    pub fn table(&self) -> Option<&Table> {
        match self {
            Self::Empty => None,
            Self::Ready { table, .. } => Some(table),
        }
    }
}

/// Aggregated results across all four categories.
#[derive(Debug, Clone, PartialEq)]
pub struct UsabilityReport {
    pub consent: ReportSection<ConsentSummary>,
    pub demographic: ReportSection<DemographicSummary>,
    pub task: ReportSection<TaskSummary>,
    pub exit: ReportSection<ExitSummary>,
}

impl UsabilityReport {
    #[must_use]
    pub fn from_tables(consent: Table, demographic: Table, task: Table, exit: Table) -> Self {
        let total_participants = demographic.row_count();

        Self {
            consent: ReportSection::build(consent, |table| ConsentSummary {
                consent_count: count_true(table, columns::CONSENT_GIVEN),
            }),
            demographic: ReportSection::build(demographic, |table| DemographicSummary {
                mean_age: mean(table, columns::AGE),
                familiarity: value_counts(table, columns::FAMILIARITY),
            }),
            task: ReportSection::build(task, |table| TaskSummary {
                mean_duration_secs: mean(table, columns::DURATION_SECONDS),
                durations: value_counts(table, columns::DURATION_SECONDS),
            }),
            exit: ReportSection::build(exit, |table| ExitSummary {
                mean_satisfaction: mean(table, columns::SATISFACTION),
                mean_difficulty: mean(table, columns::DIFFICULTY),
                total_participants,
            }),
        }
    }
}
