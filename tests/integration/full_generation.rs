use super::test_utils::{ScriptedGenerator, SYLLABUS};
use parking_lot::Mutex;
use studyplan::calendar::{SchedulerConfig, WeekWindow};
use studyplan::progress::{NoopListener, ProgressBus, ProgressEvent};
use studyplan::{PipelineOptions, PlannerError, PlannerSession, Stage};

fn options(batch_size: u32, fan_out: u32) -> PipelineOptions {
    PipelineOptions {
        scheduler: SchedulerConfig {
            batch_size,
            fan_out,
        },
        ..PipelineOptions::default()
    }
}

#[tokio::test(start_paused = true)]
async fn ten_weeks_arrive_complete_and_ordered() {
    let generator = ScriptedGenerator::new(10);
    let events = Mutex::new(Vec::new());
    let listener = |event: &ProgressEvent| events.lock().push(event.clone());

    let mut session = PlannerSession::new(SYLLABUS);
    session
        .run(&generator, &options(2, 2), &listener)
        .await
        .unwrap();

    let calendar = session.calendar.as_ref().unwrap();
    assert_eq!(calendar.week_numbers(), (1..=10).collect::<Vec<_>>());
    assert_eq!(
        calendar.course_name,
        "CS 2110: Object-Oriented Programming and Data Structures"
    );
    assert_eq!(calendar.semester, "Fall 2025");
    assert_eq!(generator.batch_requests().len(), 5);

    let waves: Vec<(usize, usize)> = events
        .lock()
        .iter()
        .filter_map(|event| match event {
            ProgressEvent::WaveStarted {
                index,
                weeks_completed,
                total,
                ..
            } => {
                assert_eq!(*total, 3);
                Some((*index, *weeks_completed))
            }
            _ => None,
        })
        .collect();
    assert_eq!(waves, vec![(1, 0), (2, 4), (3, 8)]);
}

#[tokio::test(start_paused = true)]
async fn week_set_is_independent_of_scheduler_policy() {
    for (batch_size, fan_out) in [(1, 1), (1, 4), (3, 2), (5, 1), (20, 3)] {
        let generator = ScriptedGenerator::new(7);
        let mut session = PlannerSession::new(SYLLABUS);
        session
            .run(&generator, &options(batch_size, fan_out), &NoopListener)
            .await
            .unwrap();
        assert_eq!(
            session.calendar.unwrap().week_numbers(),
            (1..=7).collect::<Vec<_>>(),
            "batch_size={batch_size} fan_out={fan_out}"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn service_labels_are_replaced_by_local_windows() {
    let generator = ScriptedGenerator::new(4);
    let mut session = PlannerSession::new(SYLLABUS);
    session
        .run(&generator, &PipelineOptions::default(), &NoopListener)
        .await
        .unwrap();

    let info = session.semester_info.as_ref().unwrap();
    for week in &session.calendar.as_ref().unwrap().weeks {
        let window = WeekWindow::compute(info, week.week_number);
        assert_eq!(week.week_dates, window.label());
        // content is kept positionally
        assert_eq!(
            week.topics().collect::<Vec<_>>(),
            vec![format!("topic-w{}", week.week_number)]
        );
    }
    assert_eq!(session.calendar.unwrap().weeks[0].week_dates, "Aug 29 - Sep 04");
}

#[tokio::test(start_paused = true)]
async fn batch_prompts_carry_deadlines_for_their_windows() {
    let generator = ScriptedGenerator::new(4);
    let mut session = PlannerSession::new(SYLLABUS);
    session
        .run(&generator, &PipelineOptions::default(), &NoopListener)
        .await
        .unwrap();

    let first = generator.batch_request_for(1).unwrap();
    assert!(first
        .system
        .contains("Week 1 (Aug 29 - Sep 04): - Student Introductions due: 2025-08-29"));
    assert!(first
        .system
        .contains("Week 2 (Sep 05 - Sep 11): - Assignment 1: 2025-09-05"));
    let second = generator.batch_request_for(3).unwrap();
    assert!(second
        .system
        .contains("Week 3 (Sep 12 - Sep 18): No major deadlines this week"));
    // Sibling batches in the first wave see no earlier weeks.
    assert!(second.system.contains("Previous: None"));
}

#[tokio::test(start_paused = true)]
async fn failed_batch_aborts_without_partial_calendar() {
    let generator = ScriptedGenerator::new(10).failing_at(7);
    let (bus, receiver) = ProgressBus::new_pair();
    let mut session = PlannerSession::new(SYLLABUS);

    let err = session
        .run(&generator, &PipelineOptions::default(), &bus)
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::BatchFailed { start_week: 7, .. }));
    assert!(err.is_external_fault());
    assert!(session.calendar.is_none());
    assert!(!session.generation_in_progress);
    assert_eq!(session.completed_stages, vec![Stage::ExtractInfo]);

    let events: Vec<ProgressEvent> = receiver.try_iter().collect();
    assert!(matches!(
        events.last(),
        Some(ProgressEvent::BatchFailed { start_week: 7, .. })
    ));
    // the wave covering weeks 9-10 never starts
    assert!(generator.batch_request_for(9).is_none());
}

#[tokio::test(start_paused = true)]
async fn short_answers_leave_known_gaps() {
    let mut generator = ScriptedGenerator::new(4);
    generator.short_batches = true;
    let mut session = PlannerSession::new(SYLLABUS);
    session
        .run(&generator, &PipelineOptions::default(), &NoopListener)
        .await
        .unwrap();
    assert_eq!(session.calendar.unwrap().week_numbers(), vec![1, 3]);
}

#[tokio::test(start_paused = true)]
async fn quiz_stage_includes_topics() {
    let generator = ScriptedGenerator::new(2);
    let mut session = PlannerSession::new(SYLLABUS);
    let options = PipelineOptions {
        generate_quiz: true,
        ..PipelineOptions::default()
    };
    session.run(&generator, &options, &NoopListener).await.unwrap();

    assert_eq!(session.quiz.as_ref().unwrap().questions.len(), 2);
    let quiz_request = generator
        .requests
        .lock()
        .iter()
        .find(|r| r.kind == studyplan::RequestKind::Quiz)
        .cloned()
        .unwrap();
    assert!(quiz_request
        .payload
        .ends_with("Key topics: Java, Recursion, Linked Lists, Trees, Graphs"));
}
