use super::test_utils::{EnvGuard, ENV_MUTEX};
use std::fs;
use studyplan::config::{ConfigLoader, PlannerConfig, ProviderType};
use tempfile::TempDir;

fn write_workspace_file(root: &std::path::Path, name: &str, contents: &str) {
    let dir = root.join("config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn environment_file_overrides_base_file() {
    let _lock = ENV_MUTEX.lock();
    let home = TempDir::new().unwrap();
    let _env = EnvGuard::set(&[
        ("XDG_CONFIG_HOME", home.path().to_str()),
        ("STUDYPLAN_ENV", Some("ci")),
        ("STUDYPLAN__SCHEDULER__BATCH_SIZE", None),
        ("STUDYPLAN__SCHEDULER__FAN_OUT", None),
    ]);

    let workspace = TempDir::new().unwrap();
    write_workspace_file(
        workspace.path(),
        "config.toml",
        "[scheduler]\nbatch_size = 3\nfan_out = 4\n",
    );
    write_workspace_file(workspace.path(), "ci.toml", "[scheduler]\nfan_out = 1\n");
    write_workspace_file(workspace.path(), "development.toml", "[scheduler]\nfan_out = 9\n");

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.scheduler.batch_size, 3);
    assert_eq!(config.scheduler.fan_out, 1);
    assert_eq!(config.provider.provider_type, ProviderType::Ollama);
    assert!(config.provider.default_options.json_output);
}

#[test]
fn environment_variables_win_over_files() {
    let _lock = ENV_MUTEX.lock();
    let home = TempDir::new().unwrap();
    let _env = EnvGuard::set(&[
        ("XDG_CONFIG_HOME", home.path().to_str()),
        ("STUDYPLAN_ENV", None),
        ("STUDYPLAN__SCHEDULER__BATCH_SIZE", None),
        ("STUDYPLAN__SCHEDULER__FAN_OUT", Some("5")),
    ]);

    let workspace = TempDir::new().unwrap();
    write_workspace_file(workspace.path(), "config.toml", "[scheduler]\nfan_out = 3\n");

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.scheduler.fan_out, 5);
    assert_eq!(config.scheduler.batch_size, 2);
}

#[test]
fn invalid_scheduler_fails_validation() {
    let _lock = ENV_MUTEX.lock();
    let home = TempDir::new().unwrap();
    let _env = EnvGuard::set(&[
        ("XDG_CONFIG_HOME", home.path().to_str()),
        ("STUDYPLAN_ENV", None),
        ("STUDYPLAN__SCHEDULER__BATCH_SIZE", None),
        ("STUDYPLAN__SCHEDULER__FAN_OUT", None),
    ]);

    let workspace = TempDir::new().unwrap();
    write_workspace_file(workspace.path(), "config.toml", "[scheduler]\nbatch_size = 0\n");

    let config = ConfigLoader::load(workspace.path()).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(config.ensure_valid().is_err());
}

#[test]
fn written_defaults_load_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config").join("config.toml");
    PlannerConfig::default().write_to(&path, false).unwrap();

    let loaded = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(loaded.scheduler, PlannerConfig::default().scheduler);
    assert_eq!(loaded.provider.model, PlannerConfig::default().provider.model);
    assert!(loaded.validate().is_ok());
}
