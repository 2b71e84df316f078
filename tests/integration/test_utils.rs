//! Shared test utilities for integration tests
//!
//! A scripted generation service that answers by request kind, and environment
//! isolation for configuration tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::time::Duration;
use studyplan::{GenerationRequest, PlannerError, RequestKind, StructuredGenerator};

pub const SYLLABUS: &str = "CS 2110: Object-Oriented Programming and Data Structures\n\
Fall 2025\n\
Instructor: Dr. Example\n\
Assignments are due Fridays.\n";

/// Answers every request kind with deterministic content.
///
/// Week answers carry bogus week numbers and labels, and each week's only topic
/// is `topic-w{N}` for the slot it was requested for. Later batches answer
/// sooner so that completions arrive out of order.
pub struct ScriptedGenerator {
    pub semester: Value,
    pub fail_batch_at: Option<u32>,
    pub short_batches: bool,
    /// Written into every generated block's notes and goals.
    pub tag: &'static str,
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn new(total_weeks: u32) -> Self {
        Self::with_semester(json!({
            "start_date": "Fri Aug 29, 2025",
            "end_date": "2025-12-12",
            "total_weeks": total_weeks,
            "key_deadlines": [
                {"date": "2025-08-29", "description": "Student Introductions due"},
                {"date": "09/05/2025", "description": "Assignment 1"},
                {"date": "TBD", "description": "Final project"}
            ],
            "major_topics": ["Java", "Recursion", "Linked Lists", "Trees", "Graphs"]
        }))
    }

    pub fn with_semester(semester: Value) -> Self {
        Self {
            semester,
            fail_batch_at: None,
            short_batches: false,
            tag: "generated",
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_at(mut self, start_week: u32) -> Self {
        self.fail_batch_at = Some(start_week);
        self
    }

    pub fn tagged(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    pub fn batch_requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|r| matches!(r.kind, RequestKind::WeekBatch { .. }))
            .cloned()
            .collect()
    }

    pub fn batch_request_for(&self, start_week: u32) -> Option<GenerationRequest> {
        self.batch_requests().into_iter().find(|r| {
            matches!(r.kind, RequestKind::WeekBatch { start_week: s, .. } if s == start_week)
        })
    }
}

pub fn scripted_week(week: u32, tag: &str) -> Value {
    json!({
        "week_number": 900 + week,
        "week_dates": "not a real label",
        "schedule": [
            {
                "day": "Monday",
                "blocks": [{
                    "course": "CS 2110",
                    "topic": format!("topic-w{week}"),
                    "time_range": "6:00pm - 8:00pm",
                    "notes": tag
                }]
            },
            {"day": "Tuesday", "blocks": []}
        ],
        "weekly_goals": [format!("{tag} goal for week {week}")]
    })
}

#[async_trait]
impl StructuredGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Value, PlannerError> {
        self.requests.lock().push(request.clone());
        match request.kind {
            RequestKind::SemesterInfo => Ok(self.semester.clone()),
            RequestKind::Quiz => Ok(json!({
                "topic": "Data Structures",
                "questions": ["What is a linked list?", "Define recursion."]
            })),
            RequestKind::WeekBatch { start_week, count } => {
                let delay = 40u64.saturating_sub(u64::from(start_week) * 3);
                tokio::time::sleep(Duration::from_millis(delay)).await;
                if self.fail_batch_at == Some(start_week) {
                    return Err(PlannerError::ProviderRequestFailed(
                        "scripted outage".to_string(),
                    ));
                }
                let produced = if self.short_batches && count > 1 {
                    count - 1
                } else {
                    count
                };
                let weeks: Vec<Value> = (start_week..start_week + produced)
                    .map(|week| scripted_week(week, self.tag))
                    .collect();
                Ok(json!({ "weeks": weeks }))
            }
        }
    }
}

/// Serializes tests that modify process environment variables.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Sets variables for the duration of a test and restores them on drop.
pub struct EnvGuard {
    saved: Vec<(String, Option<OsString>)>,
}

impl EnvGuard {
    pub fn set(vars: &[(&str, Option<&str>)]) -> Self {
        let saved = vars
            .iter()
            .map(|(name, _)| (name.to_string(), std::env::var_os(name)))
            .collect();
        for (name, value) in vars {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in &self.saved {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}
