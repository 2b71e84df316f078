//! Integration tests for the studyplan calendar pipeline

mod config_integration;
mod export_format;
mod full_generation;
mod regeneration;
mod test_utils;
