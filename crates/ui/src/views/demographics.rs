use dioxus::prelude::*;
use usability_core::model::{CheckFrequency, DemographicDraft, DemographicRecord, Familiarity};

use crate::context::AppContext;
use crate::views::SubmitState;
use crate::views::components::StatusMessage;
use crate::vm::parse_age;

pub(crate) const DEMOGRAPHICS_SAVED: &str = "Your response has been recorded";

#[component]
pub fn DemographicsView() -> Element {
    let ctx = use_context::<AppContext>();
    let responses = ctx.responses();

    let mut name = use_signal(String::new);
    let mut age = use_signal(|| DemographicRecord::MIN_AGE.to_string());
    let mut occupation = use_signal(String::new);
    let mut familiarity = use_signal(Familiarity::default);
    let mut frequency = use_signal(CheckFrequency::default);
    let status = use_signal(|| SubmitState::Idle);

    let on_submit = use_callback(move |()| {
        let mut status = status;
        let age = match parse_age(&age()) {
            Ok(age) => age,
            Err(message) => {
                status.set(SubmitState::Rejected(message));
                return;
            }
        };
        let draft = DemographicDraft {
            name: name(),
            age,
            occupation: occupation(),
            familiarity: familiarity(),
            frequency: frequency(),
        };
        let responses = responses.clone();
        spawn(async move {
            status.set(SubmitState::Saving);
            let result = responses.submit_demographics(draft).await;
            status.set(SubmitState::from_result(result, DEMOGRAPHICS_SAVED));
        });
    });

    let min_age = DemographicRecord::MIN_AGE;
    let max_age = DemographicRecord::MAX_AGE;

    rsx! {
        div { class: "page",
            h2 { "Demographic Questionnaire" }
            form {
                class: "form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                label { class: "field",
                    span { "Your Name (Optional)" }
                    input {
                        r#type: "text",
                        value: "{name}",
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Age" }
                    input {
                        r#type: "number",
                        min: "{min_age}",
                        max: "{max_age}",
                        step: "1",
                        value: "{age}",
                        oninput: move |evt: FormEvent| age.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Occupation" }
                    input {
                        r#type: "text",
                        value: "{occupation}",
                        oninput: move |evt: FormEvent| occupation.set(evt.value()),
                    }
                }
                fieldset { class: "field",
                    legend { "How familiar are you with weather apps?" }
                    for choice in Familiarity::ALL {
                        label { class: "radio",
                            input {
                                r#type: "radio",
                                name: "familiarity",
                                value: choice.label(),
                                checked: familiarity() == choice,
                                onchange: move |_| familiarity.set(choice),
                            }
                            span { "{choice}" }
                        }
                    }
                }
                label { class: "field",
                    span { "How often do you check the weather?" }
                    select {
                        value: frequency().label(),
                        onchange: move |evt: FormEvent| {
                            if let Ok(choice) = evt.value().parse::<CheckFrequency>() {
                                frequency.set(choice);
                            }
                        },
                        for choice in CheckFrequency::ALL {
                            option {
                                value: choice.label(),
                                selected: frequency() == choice,
                                "{choice}"
                            }
                        }
                    }
                }
                button {
                    class: "button",
                    r#type: "submit",
                    disabled: status().is_saving(),
                    "Submit Demographics"
                }
            }
            StatusMessage { state: status() }
        }
    }
}
