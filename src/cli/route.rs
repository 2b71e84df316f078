//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::help::{command_name, uses_generation_service};
use crate::cli::output::TerminalProgress;
use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_calendar_summary, format_extraction_text, format_init_summary, format_quiz_text,
    format_regeneration_report, format_week_detail,
};
use crate::config::{ConfigLoader, PlannerConfig};
use crate::export::{
    info_sidecar_path, read_export, read_semester_info, to_json, write_export,
    write_semester_info,
};
use crate::extract::{extract_semester_info, Extraction};
use crate::generation::{ProviderGenerator, StructuredGenerator};
use crate::pipeline::{PipelineOptions, PlannerSession};
use crate::quiz::generate_quiz;
use anyhow::{anyhow, Context};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Runtime context for CLI execution: workspace and resolved configuration.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: PlannerConfig,
}

impl RunContext {
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ConfigLoader::load(&workspace_root).context("Failed to load configuration")?,
        };
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub async fn execute(&self, command: &Commands) -> anyhow::Result<String> {
        let started = Instant::now();
        if uses_generation_service(command) {
            self.config.ensure_valid()?;
        }
        let output = self.execute_inner(command).await?;
        info!(
            command = command_name(command),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command completed"
        );
        Ok(output)
    }

    async fn execute_inner(&self, command: &Commands) -> anyhow::Result<String> {
        match command {
            Commands::Generate {
                syllabus,
                output,
                quiz,
                batch_size,
                fan_out,
            } => {
                self.handle_generate(
                    &self.generator()?,
                    syllabus,
                    output.as_deref(),
                    *quiz,
                    *batch_size,
                    *fan_out,
                )
                .await
            }
            Commands::Regenerate {
                syllabus,
                calendar,
                info,
                weeks,
                output,
            } => {
                self.handle_regenerate(
                    &self.generator()?,
                    syllabus,
                    calendar,
                    info.as_deref(),
                    weeks,
                    output.as_deref(),
                )
                .await
            }
            Commands::Extract { syllabus, format } => {
                let text = read_syllabus(syllabus)?;
                let extraction = extract_semester_info(&self.generator()?, &text).await?;
                match format {
                    OutputFormat::Json => Ok(serde_json::to_string_pretty(&extraction)?),
                    OutputFormat::Text => Ok(format_extraction_text(&extraction)),
                }
            }
            Commands::Quiz {
                syllabus,
                with_topics,
                format,
            } => {
                let text = read_syllabus(syllabus)?;
                let generator = self.generator()?;
                let info = if *with_topics {
                    Some(extract_semester_info(&generator, &text).await?.info)
                } else {
                    None
                };
                let quiz = generate_quiz(&generator, &text, info.as_ref()).await?;
                match format {
                    OutputFormat::Json => Ok(serde_json::to_string_pretty(&quiz)?),
                    OutputFormat::Text => Ok(format_quiz_text(&quiz)),
                }
            }
            Commands::Show { calendar, week } => {
                let artifact = read_export(calendar)
                    .with_context(|| format!("Failed to read calendar {}", calendar.display()))?;
                match week {
                    Some(number) => artifact
                        .week(*number)
                        .map(format_week_detail)
                        .ok_or_else(|| anyhow!("Week {} is not in the calendar", number)),
                    None => Ok(format_calendar_summary(&artifact)),
                }
            }
            Commands::Init { force } => {
                let path = self.workspace_root.join("config").join("config.toml");
                PlannerConfig::default().write_to(&path, *force)?;
                Ok(format_init_summary(&path))
            }
        }
    }

    async fn handle_generate(
        &self,
        generator: &dyn StructuredGenerator,
        syllabus: &Path,
        output: Option<&Path>,
        quiz: bool,
        batch_size: Option<u32>,
        fan_out: Option<u32>,
    ) -> anyhow::Result<String> {
        let text = read_syllabus(syllabus)?;
        let mut options = PipelineOptions {
            scheduler: self.config.scheduler,
            generate_calendar: true,
            generate_quiz: quiz,
        };
        if let Some(size) = batch_size {
            options.scheduler.batch_size = size;
        }
        if let Some(fan_out) = fan_out {
            options.scheduler.fan_out = fan_out;
        }

        let mut session = PlannerSession::new(text);
        session.run(generator, &options, &TerminalProgress).await?;
        let calendar = session
            .calendar
            .as_ref()
            .ok_or_else(|| anyhow!("Generation finished without a calendar"))?;

        let mut out = match output {
            Some(path) => {
                write_export(calendar, path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                let info = session
                    .semester_info
                    .clone()
                    .ok_or_else(|| anyhow!("Generation finished without semester info"))?;
                let info_path = info_sidecar_path(path);
                let extraction = Extraction {
                    info,
                    warnings: session.date_warnings.clone(),
                };
                write_semester_info(&extraction, &info_path)
                    .with_context(|| format!("Failed to write {}", info_path.display()))?;
                format!(
                    "Wrote {} weeks for {} to {} (semester info: {})",
                    calendar.weeks.len(),
                    calendar.course_name,
                    path.display(),
                    info_path.display()
                )
            }
            None => to_json(calendar)?,
        };
        if let Some(quiz) = &session.quiz {
            match output {
                Some(_) => {
                    out.push_str("\n\n");
                    out.push_str(&format_quiz_text(quiz));
                }
                // stdout carries the calendar JSON only
                None => eprintln!("{}", format_quiz_text(quiz)),
            }
        }
        Ok(out)
    }

    /// Regenerate against the semester info the calendar was built from, never a
    /// fresh extraction, so new windows line up with the untouched weeks.
    async fn handle_regenerate(
        &self,
        generator: &dyn StructuredGenerator,
        syllabus: &Path,
        calendar_path: &Path,
        info_path: Option<&Path>,
        weeks: &[u32],
        output: Option<&Path>,
    ) -> anyhow::Result<String> {
        let text = read_syllabus(syllabus)?;
        let calendar = read_export(calendar_path)
            .with_context(|| format!("Failed to read calendar {}", calendar_path.display()))?;
        let info_path = info_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| info_sidecar_path(calendar_path));
        let extraction = read_semester_info(&info_path).with_context(|| {
            format!(
                "Failed to read semester info {} (pass --info with `studyplan extract --format json` output)",
                info_path.display()
            )
        })?;

        let mut session = PlannerSession::with_calendar(text, extraction.info.clone(), calendar);
        let report = session.regenerate(generator, weeks, &TerminalProgress).await?;

        let target = output.unwrap_or(calendar_path);
        let calendar = session
            .calendar
            .as_ref()
            .ok_or_else(|| anyhow!("Regeneration lost the calendar"))?;
        write_export(calendar, target)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        let target_info = info_sidecar_path(target);
        if target_info != info_path {
            write_semester_info(&extraction, &target_info)
                .with_context(|| format!("Failed to write {}", target_info.display()))?;
        }
        Ok(format_regeneration_report(&report, target))
    }

    fn generator(&self) -> anyhow::Result<ProviderGenerator> {
        ProviderGenerator::from_config(&self.config.provider)
            .context("Failed to create generation provider")
    }
}

fn read_syllabus(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read syllabus {}", path.display()))
}
