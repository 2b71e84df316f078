//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{format_progress, map_error, TerminalProgress};
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{format_calendar_summary, format_week_detail};
pub use route::RunContext;
