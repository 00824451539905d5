use usability_core::model::Table;
use usability_core::report::{ReportSection, UsabilityReport, ValueCount};

use crate::vm::time_fmt::format_duration_secs;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableVm {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl From<&Table> for TableVm {
    fn from(table: &Table) -> Self {
        Self {
            columns: table.columns().to_vec(),
            rows: table.rows().to_vec(),
        }
    }
}

/// One bar of a histogram; `percent` is relative to the tallest bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarVm {
    pub label: String,
    pub count: usize,
    pub percent: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsentSectionVm {
    pub table: TableVm,
    pub consent_count_line: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemographicSectionVm {
    pub table: TableVm,
    pub average_age_line: String,
    pub familiarity: Vec<BarVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskSectionVm {
    pub table: TableVm,
    pub average_duration_line: String,
    pub durations: Vec<BarVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExitSectionVm {
    pub table: TableVm,
    pub satisfaction_line: String,
    pub difficulty_line: String,
    pub participants_line: String,
}

/// Display-ready report. `None` sections render a placeholder notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub consent: Option<ConsentSectionVm>,
    pub demographic: Option<DemographicSectionVm>,
    pub task: Option<TaskSectionVm>,
    pub exit: Option<ExitSectionVm>,
}

#[must_use]
pub fn format_mean(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "n/a".to_string(), |mean| format!("{mean:.decimals$}"))
}

fn bars(counts: &[ValueCount]) -> Vec<BarVm> {
    let tallest = counts.iter().map(|c| c.count).max().unwrap_or(0).max(1);
    counts
        .iter()
        .map(|c| BarVm {
            label: c.value.clone(),
            count: c.count,
            percent: c.count * 100 / tallest,
        })
        .collect()
}

fn section<S, T>(section: &ReportSection<S>, map: impl FnOnce(TableVm, &S) -> T) -> Option<T> {
    match section {
        ReportSection::Empty => None,
        ReportSection::Ready { table, summary } => Some(map(TableVm::from(table), summary)),
    }
}

#[must_use]
pub fn map_report(report: &UsabilityReport) -> ReportVm {
    ReportVm {
        consent: section(&report.consent, |table, summary| ConsentSectionVm {
            table,
            consent_count_line: format!(
                "Total participants who gave consent: {}",
                summary.consent_count
            ),
        }),
        demographic: section(&report.demographic, |table, summary| DemographicSectionVm {
            table,
            average_age_line: format!("Average age: {}", format_mean(summary.mean_age, 1)),
            familiarity: bars(&summary.familiarity),
        }),
        task: section(&report.task, |table, summary| TaskSectionVm {
            table,
            average_duration_line: format!(
                "Average time to complete task: {}",
                summary
                    .mean_duration_secs
                    .map_or_else(|| "n/a".to_string(), format_duration_secs)
            ),
            durations: bars(&summary.durations),
        }),
        exit: section(&report.exit, |table, summary| ExitSectionVm {
            table,
            satisfaction_line: format!(
                "Average Satisfaction: {}",
                format_mean(summary.mean_satisfaction, 2)
            ),
            difficulty_line: format!(
                "Average Difficulty: {}",
                format_mean(summary.mean_difficulty, 2)
            ),
            participants_line: format!("Total participants: {}", summary.total_participants),
        }),
    }
}
