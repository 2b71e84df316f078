//! Property-based tests for scheduling and windowing guarantees

mod wave_plan;
mod windowing;
