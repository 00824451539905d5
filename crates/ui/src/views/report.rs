use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::components::{BarChart, DataTable, Notice};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ReportVm, map_report};

#[component]
pub fn ReportView() -> Element {
    let ctx = use_context::<AppContext>();
    let reports = ctx.reports();

    let mut resource = use_resource(move || {
        let reports = reports.clone();
        async move {
            let report = reports.build_report().await.map_err(|err| {
                tracing::error!(%err, "report load failed");
                ViewError::Storage
            })?;
            Ok::<_, ViewError>(map_report(&report))
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Usability Report - Aggregated Results" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(report) => rsx! {
                    ReportSections { report }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "error-state",
                        p { "{err.message()}" }
                        button {
                            class: "button",
                            r#type: "button",
                            onclick: move |_| resource.restart(),
                            "Retry"
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ReportSections(report: ReportVm) -> Element {
    rsx! {
        section { class: "report-section",
            h3 { "Consent Data" }
            match report.consent {
                Some(consent) => rsx! {
                    DataTable { table: consent.table }
                    p { "{consent.consent_count_line}" }
                },
                None => rsx! {
                    Notice { text: "No consent data available yet." }
                },
            }
        }
        section { class: "report-section",
            h3 { "Demographic Data" }
            match report.demographic {
                Some(demographic) => rsx! {
                    DataTable { table: demographic.table }
                    p { "{demographic.average_age_line}" }
                    BarChart { title: "Familiarity with weather apps", bars: demographic.familiarity }
                },
                None => rsx! {
                    Notice { text: "No demographic data available yet." }
                },
            }
        }
        section { class: "report-section",
            h3 { "Task Performance Data" }
            match report.task {
                Some(task) => rsx! {
                    DataTable { table: task.table }
                    p { "{task.average_duration_line}" }
                    BarChart { title: "Task durations (seconds)", bars: task.durations }
                },
                None => rsx! {
                    Notice { text: "No task data available yet." }
                },
            }
        }
        section { class: "report-section",
            h3 { "Exit Questionnaire Data" }
            match report.exit {
                Some(exit) => rsx! {
                    DataTable { table: exit.table }
                    h4 { "Exit Questionnaire Averages" }
                    p { "{exit.satisfaction_line}" }
                    p { "{exit.difficulty_line}" }
                    p { "{exit.participants_line}" }
                },
                None => rsx! {
                    Notice { text: "No exit questionnaire data available yet." }
                },
            }
        }
    }
}
