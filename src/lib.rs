//! Studyplan: syllabus to multi-week self-study calendar
//!
//! Extracts semester facts from a syllabus with one generation call, then generates
//! the weekly calendar in waves of concurrent batch calls, restoring week order
//! deterministically. Individual weeks can later be regenerated in place.

pub mod calendar;
pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod export;
pub mod extract;
pub mod generation;
pub mod logging;
pub mod pipeline;
pub mod progress;
pub mod provider;
pub mod quiz;
pub mod regeneration;
pub mod types;

pub use error::{DateError, PlannerError};
pub use generation::{GenerationRequest, RequestKind, StructuredGenerator};
pub use pipeline::{PipelineOptions, PlannerSession, Stage};
pub use types::{CalendarArtifact, Quiz, SemesterInfo, WeeklyCalendar};
