//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name used in log events (e.g. "generate", "regenerate").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Regenerate { .. } => "regenerate",
        Commands::Extract { .. } => "extract",
        Commands::Quiz { .. } => "quiz",
        Commands::Show { .. } => "show",
        Commands::Init { .. } => "init",
    }
}

/// Whether the command talks to the generation service.
pub fn uses_generation_service(command: &Commands) -> bool {
    !matches!(command, Commands::Show { .. } | Commands::Init { .. })
}
