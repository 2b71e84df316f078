use super::test_utils::{ScriptedGenerator, SYLLABUS};
use serde_json::Value;
use studyplan::export::{read_export, to_json, write_export};
use studyplan::progress::NoopListener;
use studyplan::{PipelineOptions, PlannerError, PlannerSession};
use tempfile::TempDir;

#[tokio::test(start_paused = true)]
async fn exported_document_uses_consumer_field_names() {
    let generator = ScriptedGenerator::new(3);
    let mut session = PlannerSession::new(SYLLABUS);
    session
        .run(&generator, &PipelineOptions::default(), &NoopListener)
        .await
        .unwrap();
    let calendar = session.calendar.unwrap();

    let value: Value = serde_json::from_str(&to_json(&calendar).unwrap()).unwrap();
    assert_eq!(value["semester"], "Fall 2025");
    let weeks = value["weeks"].as_array().unwrap();
    assert_eq!(weeks.len(), 3);

    let week = &weeks[1];
    assert_eq!(week["week_number"], 2);
    assert_eq!(week["week_dates"], "Sep 05 - Sep 11");
    assert_eq!(week["goals"][0], "generated goal for week 2");
    assert!(week.get("weekly_goals").is_none());

    let block = &week["schedule"][0]["blocks"][0];
    assert_eq!(block["time"], "6:00pm - 8:00pm");
    assert_eq!(block["topic"], "topic-w2");
    assert!(block.get("time_range").is_none());
    assert_eq!(week["schedule"][1]["blocks"], Value::Array(vec![]));
}

#[tokio::test(start_paused = true)]
async fn written_calendar_reads_back_unchanged() {
    let generator = ScriptedGenerator::new(5);
    let mut session = PlannerSession::new(SYLLABUS);
    session
        .run(&generator, &PipelineOptions::default(), &NoopListener)
        .await
        .unwrap();
    let calendar = session.calendar.unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("calendar.json");
    write_export(&calendar, &path).unwrap();
    assert_eq!(read_export(&path).unwrap(), calendar);
}

#[test]
fn malformed_export_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"course_name": "CS", "weeks": "nope"}"#).unwrap();
    assert!(matches!(read_export(&path), Err(PlannerError::Json(_))));
}
