//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("provider.provider_type", "ollama")?
        .set_default("provider.model", "llama3.1:8b")?
        .set_default("provider.default_options.temperature", 0.2)?
        .set_default("provider.default_options.json_output", true)?
        .set_default("scheduler.batch_size", 2)?
        .set_default("scheduler.fan_out", 2)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
