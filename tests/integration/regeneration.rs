use super::test_utils::{ScriptedGenerator, SYLLABUS};
use parking_lot::Mutex;
use studyplan::calendar::WeekWindow;
use studyplan::progress::{NoopListener, ProgressEvent};
use studyplan::{PipelineOptions, PlannerError, PlannerSession};

async fn generated_session(total_weeks: u32) -> PlannerSession {
    let generator = ScriptedGenerator::new(total_weeks);
    let mut session = PlannerSession::new(SYLLABUS);
    session
        .run(&generator, &PipelineOptions::default(), &NoopListener)
        .await
        .unwrap();
    session
}

fn notes_of(session: &PlannerSession, week: u32) -> Option<String> {
    session.calendar.as_ref().unwrap().week(week).unwrap().schedule[0].blocks[0]
        .notes
        .clone()
}

#[tokio::test(start_paused = true)]
async fn only_targets_change() {
    let mut session = generated_session(10).await;
    let before = session.calendar.clone().unwrap();

    let generator = ScriptedGenerator::new(10).tagged("regenerated");
    let report = session
        .regenerate(&generator, &[5, 3], &NoopListener)
        .await
        .unwrap();

    assert_eq!(report.regenerated, vec![3, 5]);
    assert!(report.missing.is_empty());
    let after = session.calendar.as_ref().unwrap();
    assert_eq!(after.week_numbers(), (1..=10).collect::<Vec<_>>());
    for week in &after.weeks {
        if week.week_number == 3 || week.week_number == 5 {
            assert_eq!(notes_of(&session, week.week_number).as_deref(), Some("regenerated"));
        } else {
            assert_eq!(Some(week), before.week(week.week_number));
        }
    }

    let info = session.semester_info.as_ref().unwrap();
    assert_eq!(
        after.week(5).unwrap().week_dates,
        WeekWindow::compute(info, 5).label()
    );
}

#[tokio::test(start_paused = true)]
async fn context_holds_only_earlier_weeks() {
    let mut session = generated_session(10).await;
    let generator = ScriptedGenerator::new(10).tagged("regenerated");
    session
        .regenerate(&generator, &[3, 5], &NoopListener)
        .await
        .unwrap();

    let week_five = generator.batch_request_for(5).unwrap();
    assert!(week_five
        .system
        .contains("Previous: topic-w2, topic-w3, topic-w4\n"));
    assert!(week_five.system.contains("weeks 5-5 of 10"));
    let week_three = generator.batch_request_for(3).unwrap();
    assert!(week_three.system.contains("Previous: topic-w1, topic-w2\n"));

    let first = ScriptedGenerator::new(10);
    session.regenerate(&first, &[1], &NoopListener).await.unwrap();
    assert!(first
        .batch_request_for(1)
        .unwrap()
        .system
        .contains("Previous: None"));
}

#[tokio::test(start_paused = true)]
async fn progress_reports_each_target() {
    let mut session = generated_session(6).await;
    let events = Mutex::new(Vec::new());
    let listener = |event: &ProgressEvent| events.lock().push(event.clone());

    session
        .regenerate(&ScriptedGenerator::new(6), &[6, 2, 6], &listener)
        .await
        .unwrap();

    assert_eq!(
        *events.lock(),
        vec![
            ProgressEvent::RegenerationStarted {
                index: 1,
                total: 2,
                week_number: 2
            },
            ProgressEvent::RegenerationStarted {
                index: 2,
                total: 2,
                week_number: 6
            },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn failure_leaves_calendar_untouched() {
    let mut session = generated_session(6).await;
    let before = session.calendar.clone();

    let generator = ScriptedGenerator::new(6).tagged("regenerated").failing_at(4);
    let err = session
        .regenerate(&generator, &[2, 4], &NoopListener)
        .await
        .unwrap_err();

    assert!(err.is_external_fault());
    assert_eq!(session.calendar, before);
    assert!(!session.generation_in_progress);
}

#[tokio::test(start_paused = true)]
async fn targets_outside_calendar_are_reported() {
    let mut session = generated_session(4).await;
    let report = session
        .regenerate(&ScriptedGenerator::new(4), &[9], &NoopListener)
        .await
        .unwrap();
    assert!(report.regenerated.is_empty());
    assert_eq!(report.missing, vec![9]);
    assert_eq!(session.calendar.unwrap().week_numbers(), vec![1, 2, 3, 4]);
}

#[tokio::test(start_paused = true)]
async fn regenerating_without_calendar_is_rejected() {
    let mut session = PlannerSession::new(SYLLABUS);
    let err = session
        .regenerate(&ScriptedGenerator::new(4), &[1], &NoopListener)
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput(_)));
}
