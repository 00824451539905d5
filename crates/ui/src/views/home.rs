use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Introduction" }
            p { "Welcome to the Usability Testing Tool for HCI." }
            p { "In this app, you will:" }
            ol {
                li { "Provide consent for data collection." }
                li { "Fill out a short demographic questionnaire." }
                li { "Perform a specific task (or tasks)." }
                li { "Answer an exit questionnaire about your experience." }
                li { "View a summary report (for demonstration purposes)." }
            }
            Link { class: "button", to: Route::Consent {}, "Get started" }
        }
    }
}
