#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::SubmitState;
use crate::views::components::StatusMessage;

pub(crate) const CONSENT_SAVED: &str = "Consent recorded. Thank you!";

#[component]
pub fn ConsentView() -> Element {
    let ctx = use_context::<AppContext>();
    let responses = ctx.responses();

    let mut agreed = use_signal(|| false);
    let status = use_signal(|| SubmitState::Idle);

    let on_submit = use_callback(move |()| {
        let responses = responses.clone();
        let consent_given = agreed();
        let mut status = status;
        spawn(async move {
            status.set(SubmitState::Saving);
            let result = responses.submit_consent(consent_given).await;
            status.set(SubmitState::from_result(result, CONSENT_SAVED));
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ConsentTestHandles>() {
                handles.register(on_submit);
            }
        }
    }

    rsx! {
        div { class: "page",
            h2 { "Consent Form" }
            p {
                "By continuing you are agreeing to engage in a usability study of my weather app interface. "
                "Your response is anonymous and will be used for educational and/or design purposes only."
            }
            label { class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: agreed(),
                    onchange: move |evt: FormEvent| agreed.set(evt.checked()),
                }
                span { "I agree to participate in this usability test." }
            }
            button {
                class: "button",
                r#type: "button",
                disabled: status().is_saving(),
                onclick: move |_| on_submit.call(()),
                "Submit Consent"
            }
            StatusMessage { state: status() }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ConsentTestHandles {
    submit: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl ConsentTestHandles {
    pub(crate) fn register(&self, submit: Callback<()>) {
        *self.submit.borrow_mut() = Some(submit);
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        (*self.submit.borrow()).expect("consent submit registered")
    }
}
