use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::app::STUDY_TITLE;
use crate::views::{ConsentView, DemographicsView, ExitView, HomeView, ReportView, TaskView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/consent", ConsentView)] Consent {},
        #[route("/demographics", DemographicsView)] Demographics {},
        #[route("/task", TaskView)] Task {},
        #[route("/exit", ExitView)] Exit {},
        #[route("/report", ReportView)] Report {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "{STUDY_TITLE}" }
                Tabs {}
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Tabs() -> Element {
    rsx! {
        nav { class: "tabs",
            Link { class: "tab", active_class: "tab--active", to: Route::Home {}, "Home" }
            Link { class: "tab", active_class: "tab--active", to: Route::Consent {}, "Consent" }
            Link { class: "tab", active_class: "tab--active", to: Route::Demographics {}, "Demographics" }
            Link { class: "tab", active_class: "tab--active", to: Route::Task {}, "Task" }
            Link { class: "tab", active_class: "tab--active", to: Route::Exit {}, "Exit Questionnaire" }
            Link { class: "tab", active_class: "tab--active", to: Route::Report {}, "Report" }
        }
    }
}
