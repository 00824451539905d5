use std::sync::Arc;

use chrono::Duration;
use storage::repository::{InMemoryRepository, RecordReader, Storage, StorageError};
use usability_core::model::{
    Category, CheckFrequency, DemographicDraft, ExitDraft, Familiarity, Table, TaskOutcome,
};
use usability_core::time::fixed_now;

use services::TaskAnswers;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_introduction() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome to the Usability Testing Tool for HCI."), "missing intro in {html}");
    assert!(html.contains("Answer an exit questionnaire"), "missing steps in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn consent_view_smoke_renders_agreement() {
    let mut harness = setup_view_harness(ViewKind::Consent);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("I agree to participate in this usability test."), "missing checkbox in {html}");
    assert!(html.contains("Submit Consent"), "missing button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn consent_view_smoke_warns_when_unchecked() {
    let storage = Storage::in_memory();
    let mut harness = setup_view_harness_with_storage(ViewKind::Consent, &storage);
    harness.rebuild();

    harness.submit_consent().await;
    let html = harness.render();
    assert!(html.contains("status--warning"), "missing warning style in {html}");
    assert!(
        html.contains("You must agree to the consent terms before proceeding."),
        "missing warning in {html}"
    );
    assert!(!html.contains("Consent recorded. Thank you!"), "unexpected success in {html}");

    let table = storage.reader.load(Category::Consent).await.expect("load consent");
    assert!(table.is_empty(), "unchecked consent was written");
}

#[tokio::test(flavor = "current_thread")]
async fn demographics_view_smoke_renders_choices() {
    let mut harness = setup_view_harness(ViewKind::Demographics);
    harness.rebuild();
    let html = harness.render();
    for label in ["Very familiar", "Mildly familiar", "Not familiar", "Almost never"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("Your Name (Optional)"), "missing name field in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn task_view_smoke_describes_first_task() {
    let mut harness = setup_view_harness(ViewKind::Task);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("You have selected Task 1: Find current weather conditions"),
        "missing task description in {html}"
    );
    assert!(html.contains("Timer not started."), "missing idle timer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn task_view_smoke_shows_measured_duration() {
    let mut harness = setup_view_harness(ViewKind::Task);
    let start = fixed_now();
    harness.timers.start_at(harness.session_id, start);
    harness
        .timers
        .stop_at(harness.session_id, start + Duration::milliseconds(12_500));

    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Measured duration: 12.50 seconds"),
        "missing duration in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn task_view_smoke_shows_running_timer_after_restart() {
    let mut harness = setup_view_harness(ViewKind::Task);
    let start = fixed_now();
    harness.timers.start_at(harness.session_id, start);
    harness
        .timers
        .stop_at(harness.session_id, start + Duration::seconds(5));
    harness
        .timers
        .start_at(harness.session_id, start + Duration::seconds(60));

    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Timer running since 2023-11-14 22:14:20"),
        "missing running timer in {html}"
    );
    assert!(html.contains("Previous run: 5.00 seconds"), "missing previous run in {html}");
    assert!(!html.contains("Measured duration"), "stale duration shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exit_view_smoke_defaults_to_neutral_scores() {
    let mut harness = setup_view_harness(ViewKind::Exit);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Overall, how satisfied were you?"), "missing slider in {html}");
    assert!(html.contains("value=\"3\""), "missing neutral score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn report_view_smoke_renders_placeholders_when_empty() {
    let mut harness = setup_view_harness(ViewKind::Report);
    harness.settle().await;
    let html = harness.render();
    for notice in [
        "No consent data available yet.",
        "No demographic data available yet.",
        "No task data available yet.",
        "No exit questionnaire data available yet.",
    ] {
        assert!(html.contains(notice), "missing {notice} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn report_view_smoke_renders_aggregates() {
    let mut harness = setup_view_harness(ViewKind::Report);
    let responses = Arc::clone(&harness.responses);
    responses.submit_consent(true).await.expect("consent");
    responses.submit_consent(true).await.expect("consent");
    for age in [25, 35] {
        responses
            .submit_demographics(DemographicDraft {
                name: "Sam".into(),
                age,
                occupation: "Student".into(),
                familiarity: Familiarity::VeryFamiliar,
                frequency: CheckFrequency::Daily,
            })
            .await
            .expect("demographics");
    }
    let start = fixed_now();
    harness.timers.start_at(harness.session_id, start);
    harness
        .timers
        .stop_at(harness.session_id, start + Duration::milliseconds(12_500));
    responses
        .submit_task(
            harness.session_id,
            TaskAnswers {
                task_name: "Task 1".into(),
                outcome: TaskOutcome::Yes,
                notes: "none".into(),
            },
        )
        .await
        .expect("task");
    responses
        .submit_exit(ExitDraft {
            satisfaction: 4,
            difficulty: 2,
            open_feedback: String::new(),
        })
        .await
        .expect("exit");

    harness.settle().await;
    let html = harness.render();
    for line in [
        "Total participants who gave consent: 2",
        "Average age: 30.0",
        "Average time to complete task: 12.50 seconds",
        "Average Satisfaction: 4.00",
        "Average Difficulty: 2.00",
        "Total participants: 2",
    ] {
        assert!(html.contains(line), "missing {line} in {html}");
    }
    assert!(html.contains("Anonymous"), "name was not anonymized in {html}");
}

struct FailingReader;

#[async_trait::async_trait]
impl RecordReader for FailingReader {
    async fn load(&self, category: Category) -> Result<Table, StorageError> {
        Err(StorageError::Malformed {
            category,
            message: "row 2 has 3 fields, expected 2".to_string(),
        })
    }
}

#[tokio::test(flavor = "current_thread")]
async fn report_view_smoke_renders_error_state() {
    let repo = InMemoryRepository::new();
    let storage = Storage {
        records: Arc::new(repo),
        reader: Arc::new(FailingReader),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Report, &storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}
