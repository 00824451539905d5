use std::fs;

use chrono::Duration;
use services::{AppServices, Clock, StudySettings, TaskAnswers};
use storage::StorageConfig;
use storage::repository::{RecordStore, Storage};
use usability_core::model::{
    Category, DemographicDraft, ExitDraft, NamePolicy, Record, SessionId, TaskCatalog,
    TaskOutcome,
};
use usability_core::time::fixed_now;

fn csv_services(dir: &std::path::Path) -> AppServices {
    AppServices::new_csv(
        StorageConfig::new(dir),
        Clock::fixed(fixed_now()),
        StudySettings::default(),
    )
    .expect("services")
}

#[tokio::test]
async fn task_scenario_writes_one_row_and_reports_mean_duration() {
    let dir = tempfile::tempdir().unwrap();
    let services = csv_services(dir.path());
    let session = SessionId::new();
    let task_name = services.task_catalog().first().unwrap().to_string();

    let timers = services.timers();
    timers.start_at(session, fixed_now());
    timers.stop_at(session, fixed_now() + Duration::milliseconds(12_500));

    services
        .responses()
        .submit_task(
            session,
            TaskAnswers {
                task_name: task_name.clone(),
                outcome: TaskOutcome::Yes,
                notes: "none".into(),
            },
        )
        .await
        .expect("submit task");

    let raw = fs::read_to_string(dir.path().join("task_data.csv")).unwrap();
    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "timestamp,task_name,success,duration_seconds,notes");
    assert_eq!(
        lines[1],
        format!("2023-11-14 22:13:20,{task_name},Yes,12.5,none")
    );

    let report = services.reports().build_report().await.expect("report");
    let task = report.task.summary().expect("task summary");
    assert_eq!(task.mean_duration_secs, Some(12.5));
}

#[tokio::test]
async fn full_participant_walkthrough_populates_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let services = csv_services(dir.path());
    let responses = services.responses();
    let session = SessionId::new();

    responses.submit_consent(true).await.expect("consent");
    for age in [25, 35] {
        responses
            .submit_demographics(DemographicDraft {
                age,
                ..DemographicDraft::default()
            })
            .await
            .expect("demographics");
    }
    responses
        .submit_task(
            session,
            TaskAnswers {
                task_name: "Task 3".into(),
                outcome: TaskOutcome::Partial,
                notes: String::new(),
            },
        )
        .await
        .expect("task");
    responses
        .submit_exit(ExitDraft {
            satisfaction: 4,
            difficulty: 2,
            open_feedback: "Fine".into(),
        })
        .await
        .expect("exit");

    let report = services.reports().build_report().await.expect("report");
    assert_eq!(report.consent.summary().unwrap().consent_count, 1);
    assert_eq!(report.demographic.summary().unwrap().mean_age, Some(30.0));
    assert_eq!(report.task.summary().unwrap().mean_duration_secs, None);
    let exit = report.exit.summary().unwrap();
    assert_eq!(exit.mean_satisfaction, Some(4.0));
    assert_eq!(exit.total_participants, 2);
}

#[tokio::test]
async fn declined_rows_on_disk_are_not_counted() {
    let storage = Storage::in_memory();
    for given in ["True", "True", "False"] {
        let row = Record::new()
            .with_field("timestamp", "2023-11-14 22:13:20")
            .with_field("consent_given", given);
        storage
            .records
            .append(Category::Consent, &row)
            .await
            .expect("append");
    }

    let services = AppServices::from_storage(
        &storage,
        Clock::fixed(fixed_now()),
        StudySettings::default(),
    );
    let report = services.reports().build_report().await.expect("report");
    assert_eq!(report.consent.summary().unwrap().consent_count, 2);
}

#[tokio::test]
async fn keep_names_setting_reaches_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let services = AppServices::new_csv(
        StorageConfig::new(dir.path()),
        Clock::fixed(fixed_now()),
        StudySettings::default()
            .with_name_policy(NamePolicy::Keep)
            .with_task_catalog(TaskCatalog::new(["Only task"])),
    )
    .expect("services");
    assert_eq!(services.task_catalog().tasks(), ["Only task"]);

    services
        .responses()
        .submit_demographics(DemographicDraft {
            name: "Margaret".into(),
            age: 40,
            ..DemographicDraft::default()
        })
        .await
        .expect("demographics");

    let raw = fs::read_to_string(dir.path().join("demographic_data.csv")).unwrap();
    assert!(raw.contains(",Margaret,40,"), "unexpected file contents: {raw}");
}
