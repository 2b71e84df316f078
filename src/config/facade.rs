//! Config loading facade: defaults, global file, workspace files, environment.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::PlannerConfig;
use config::{Environment, File};
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "STUDYPLAN";
pub const ENV_SEPARATOR: &str = "__";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load layered configuration for `workspace_root`.
    ///
    /// Precedence (lowest to highest): defaults, global file, `config/config.toml`,
    /// `config/{STUDYPLAN_ENV}.toml`, `STUDYPLAN__SECTION__KEY` variables.
    pub fn load(workspace_root: &Path) -> Result<PlannerConfig, config::ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder);
        let builder = workspace_file::add_to_builder(builder, workspace_root);
        builder
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// Load a single explicit file over the defaults.
    pub fn load_from_file(path: &Path) -> Result<PlannerConfig, config::ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
    }
}
