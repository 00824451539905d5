use dioxus::prelude::*;

use crate::views::SubmitState;
use crate::vm::{BarVm, TableVm};

#[component]
pub fn StatusMessage(state: SubmitState) -> Element {
    match state {
        SubmitState::Idle => rsx! {},
        SubmitState::Saving => rsx! {
            p { class: "status status--pending", "Saving..." }
        },
        SubmitState::Saved(message) => rsx! {
            p { class: "status status--success", "{message}" }
        },
        SubmitState::Rejected(message) => rsx! {
            p { class: "status status--warning", "{message}" }
        },
        SubmitState::Failed(err) => rsx! {
            p { class: "status status--error", "{err.message()}" }
        },
    }
}

#[component]
pub fn DataTable(table: TableVm) -> Element {
    rsx! {
        div { class: "table-wrap",
            table { class: "data-table",
                thead {
                    tr {
                        for column in table.columns {
                            th { "{column}" }
                        }
                    }
                }
                tbody {
                    for row in table.rows {
                        tr {
                            for cell in row {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Horizontal bars; widths are relative to the most frequent value.
#[component]
pub fn BarChart(title: String, bars: Vec<BarVm>) -> Element {
    rsx! {
        figure { class: "bar-chart",
            figcaption { "{title}" }
            if bars.is_empty() {
                p { class: "muted", "No values to chart." }
            }
            for bar in bars {
                div { class: "bar-row",
                    span { class: "bar-label", "{bar.label}" }
                    div { class: "bar-track",
                        div { class: "bar-fill", style: "width: {bar.percent}%;" }
                    }
                    span { class: "bar-count", "{bar.count}" }
                }
            }
        }
    }
}

#[component]
pub fn Notice(text: String) -> Element {
    rsx! {
        p { class: "notice", "{text}" }
    }
}
