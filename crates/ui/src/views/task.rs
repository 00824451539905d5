use dioxus::prelude::*;
use services::{TaskAnswers, TimerSnapshot};
use usability_core::model::TaskOutcome;

use crate::context::AppContext;
use crate::views::SubmitState;
use crate::views::components::StatusMessage;
use crate::vm::{format_datetime, format_duration_secs};

pub(crate) const TASK_SAVED: &str = "Task results saved.";

#[component]
pub fn TaskView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.session_id();
    let timers = ctx.timers();
    let responses = ctx.responses();
    let tasks = ctx.task_catalog().tasks().to_vec();
    let first_task = ctx.task_catalog().first().unwrap_or_default().to_string();

    let mut selected_task = use_signal(move || first_task);
    let mut outcome = use_signal(TaskOutcome::default);
    let mut notes = use_signal(String::new);
    let timer = use_signal({
        let timers = timers.clone();
        move || timers.snapshot(session)
    });
    let status = use_signal(|| SubmitState::Idle);

    let on_start = use_callback({
        let timers = timers.clone();
        let mut timer = timer;
        move |()| {
            timers.start(session);
            timer.set(timers.snapshot(session));
        }
    });

    let on_stop = use_callback({
        let timers = timers.clone();
        let mut timer = timer;
        move |()| {
            timers.stop(session);
            timer.set(timers.snapshot(session));
        }
    });

    let on_save = use_callback(move |()| {
        let responses = responses.clone();
        let timers = timers.clone();
        let answers = TaskAnswers {
            task_name: selected_task(),
            outcome: outcome(),
            notes: notes(),
        };
        let mut status = status;
        let mut timer = timer;
        spawn(async move {
            status.set(SubmitState::Saving);
            let result = responses.submit_task(session, answers).await;
            status.set(SubmitState::from_result(result, TASK_SAVED));
            timer.set(timers.snapshot(session));
        });
    });

    rsx! {
        div { class: "page",
            h2 { "Task Page" }
            h3 { "Instructions" }
            ul {
                li { "Select a task to perform on the Weather App." }
                li { "Prior to starting the task, press 'Start Task Timer', and press 'Stop Task Timer' once completed." }
                li { "Record if the task was successful and include any additional notes (such as errors or difficulty navigating)." }
            }

            label { class: "field",
                span { "Select Task" }
                select {
                    value: "{selected_task}",
                    onchange: move |evt: FormEvent| selected_task.set(evt.value()),
                    for task in tasks {
                        option {
                            value: "{task}",
                            selected: selected_task() == task,
                            "{task}"
                        }
                    }
                }
            }
            p { class: "task-description",
                strong { "Task Description: " }
                "You have selected {selected_task}"
            }

            div { class: "timer",
                button {
                    class: "button",
                    r#type: "button",
                    onclick: move |_| on_start.call(()),
                    "Start Task Timer"
                }
                button {
                    class: "button button--secondary",
                    r#type: "button",
                    onclick: move |_| on_stop.call(()),
                    "Stop Task Timer"
                }
                TimerReadout { snapshot: timer() }
            }

            fieldset { class: "field",
                legend { "Was the task completed successfully?" }
                for choice in TaskOutcome::ALL {
                    label { class: "radio",
                        input {
                            r#type: "radio",
                            name: "outcome",
                            value: choice.label(),
                            checked: outcome() == choice,
                            onchange: move |_| outcome.set(choice),
                        }
                        span { "{choice}" }
                    }
                }
            }

            label { class: "field",
                span { "Observer Notes" }
                textarea {
                    value: "{notes}",
                    oninput: move |evt: FormEvent| notes.set(evt.value()),
                }
            }

            button {
                class: "button",
                r#type: "button",
                disabled: status().is_saving(),
                onclick: move |_| on_save.call(()),
                "Save Task Results"
            }
            StatusMessage { state: status() }
        }
    }
}

#[component]
fn TimerReadout(snapshot: TimerSnapshot) -> Element {
    if snapshot.running {
        let since = snapshot.started_at.map(format_datetime).unwrap_or_default();
        let previous = snapshot.duration_secs.map(format_duration_secs);
        return rsx! {
            p { class: "timer-readout", "Timer running since {since}" }
            if let Some(previous) = previous {
                p { class: "timer-readout muted", "Previous run: {previous}" }
            }
        };
    }
    match snapshot.duration_secs {
        Some(secs) => {
            let duration = format_duration_secs(secs);
            rsx! {
                p { class: "timer-readout", "Measured duration: {duration}" }
            }
        }
        None => rsx! {
            p { class: "timer-readout muted", "Timer not started." }
        },
    }
}
