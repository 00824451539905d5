use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AppServices, Clock, ReportService, ResponseService, StudySettings, TaskTimerService,
};
use storage::repository::Storage;
use usability_core::model::{SessionId, TaskCatalog};
use usability_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::consent::ConsentTestHandles;
use crate::views::{ConsentView, DemographicsView, ExitView, HomeView, ReportView, TaskView};

#[derive(Clone)]
struct TestApp {
    session_id: SessionId,
    services: AppServices,
}

impl UiApp for TestApp {
    fn session_id(&self) -> SessionId {
        self.session_id
    }

    fn task_catalog(&self) -> TaskCatalog {
        self.services.task_catalog().clone()
    }

    fn responses(&self) -> Arc<ResponseService> {
        self.services.responses()
    }

    fn timers(&self) -> Arc<TaskTimerService> {
        self.services.timers()
    }

    fn reports(&self) -> Arc<ReportService> {
        self.services.reports()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Consent,
    Demographics,
    Task,
    Exit,
    Report,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    consent_handles: Option<ConsentTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.consent_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Consent => rsx! { ConsentView {} },
        ViewKind::Demographics => rsx! { DemographicsView {} },
        ViewKind::Task => rsx! { TaskView {} },
        ViewKind::Exit => rsx! { ExitView {} },
        ViewKind::Report => rsx! { ReportView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub session_id: SessionId,
    pub responses: Arc<ResponseService>,
    pub timers: Arc<TaskTimerService>,
    pub consent_handles: Option<ConsentTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drain().await;
    }

    async fn drain(&mut self) {
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    /// Press "Submit Consent" and wait for the submission to finish.
    pub async fn submit_consent(&mut self) {
        let submit = self
            .consent_handles
            .as_ref()
            .expect("consent view harness")
            .submit();
        self.dom.in_runtime(|| submit.call(()));
        self.drain().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, &Storage::in_memory())
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: &Storage) -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let services = AppServices::from_storage(storage, clock, StudySettings::default());
    let session_id = SessionId::new();
    let responses = services.responses();
    let timers = services.timers();

    let consent_handles = (view == ViewKind::Consent).then(ConsentTestHandles::default);

    let app = Arc::new(TestApp {
        session_id,
        services,
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            consent_handles: consent_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        session_id,
        responses,
        timers,
        consent_handles,
    }
}
