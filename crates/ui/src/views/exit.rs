use dioxus::prelude::*;
use usability_core::model::{ExitDraft, LikertScore};

use crate::context::AppContext;
use crate::views::SubmitState;
use crate::views::components::StatusMessage;
use crate::vm::parse_score;

pub(crate) const EXIT_SAVED: &str = "Exit questionnaire data saved.";

#[component]
pub fn ExitView() -> Element {
    let ctx = use_context::<AppContext>();
    let responses = ctx.responses();

    let satisfaction = use_signal(|| LikertScore::NEUTRAL);
    let difficulty = use_signal(|| LikertScore::NEUTRAL);
    let mut feedback = use_signal(String::new);
    let status = use_signal(|| SubmitState::Idle);

    let on_submit = use_callback(move |()| {
        let responses = responses.clone();
        let draft = ExitDraft {
            satisfaction: satisfaction(),
            difficulty: difficulty(),
            open_feedback: feedback(),
        };
        let mut status = status;
        spawn(async move {
            status.set(SubmitState::Saving);
            let result = responses.submit_exit(draft).await;
            status.set(SubmitState::from_result(result, EXIT_SAVED));
        });
    });

    rsx! {
        div { class: "page",
            h2 { "Exit Questionnaire" }
            form {
                class: "form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                ScoreSlider { label: "Overall, how satisfied were you?", score: satisfaction }
                ScoreSlider { label: "How difficult was completing the task?", score: difficulty }
                label { class: "field",
                    span { "Did you encounter any issues or have suggestions?" }
                    textarea {
                        value: "{feedback}",
                        oninput: move |evt: FormEvent| feedback.set(evt.value()),
                    }
                }
                button {
                    class: "button",
                    r#type: "submit",
                    disabled: status().is_saving(),
                    "Submit Exit Questionnaire"
                }
            }
            StatusMessage { state: status() }
        }
    }
}

#[component]
fn ScoreSlider(label: String, score: Signal<u8>) -> Element {
    let mut score = score;
    let min = LikertScore::MIN;
    let max = LikertScore::MAX;
    rsx! {
        label { class: "field slider",
            span { "{label}" }
            div { class: "slider-row",
                input {
                    r#type: "range",
                    min: "{min}",
                    max: "{max}",
                    step: "1",
                    value: "{score}",
                    oninput: move |evt: FormEvent| score.set(parse_score(&evt.value())),
                }
                output { class: "slider-value", "{score}" }
            }
        }
    }
}
