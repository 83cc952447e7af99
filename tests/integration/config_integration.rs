//! Integration tests for configuration driving registration

use editorskit_features::config::ConfigLoader;
use editorskit_features::hooks::BLOCK_EDITOR_SETTINGS;
use editorskit_features::labels::{LabelPolicy, SourceLabels};
use editorskit_features::provider::FILTER_NAME;
use editorskit_features::{Registrar, SettingsHooks};
use parking_lot::Mutex;
use std::sync::Arc;
use tempfile::TempDir;

/// Serializes tests that touch process environment variables
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets variables for the life of the guard and restores prior values on drop
struct EnvGuard {
    saved: Vec<(&'static str, Option<std::ffi::OsString>)>,
}

impl EnvGuard {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        let mut saved = Vec::with_capacity(vars.len());
        for (name, value) in vars {
            saved.push((*name, std::env::var_os(name)));
            std::env::set_var(name, value);
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.saved.drain(..) {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}

#[test]
fn test_config_priority_orders_provider() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("features.toml");
    std::fs::write(
        &config_file,
        r#"
[provider]
priority = 1
accepted_args = 1
label_policy = "fallback_to_key"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_file_only(&config_file).unwrap();
    assert_eq!(config.provider.label_policy, LabelPolicy::FallbackToKey);

    let hooks = SettingsHooks::new();
    hooks
        .add_filter(BLOCK_EDITOR_SETTINGS, "core", 10, 2, |s, _| s)
        .unwrap();
    Registrar::new()
        .register(&hooks, Arc::new(SourceLabels), config.provider)
        .unwrap();

    assert_eq!(
        hooks.filter_names(BLOCK_EDITOR_SETTINGS),
        vec![FILTER_NAME, "core"]
    );
}

#[test]
fn test_unparseable_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("features.toml");
    std::fs::write(&config_file, "[provider\npriority = ").unwrap();

    assert!(ConfigLoader::load_file_only(&config_file).is_err());
}

#[test]
fn test_environment_overrides_config_file() {
    let _lock = ENV_LOCK.lock();
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("features.toml");
    std::fs::write(
        &config_file,
        r#"
[provider]
priority = 20
config_key = "fromFile"
text_domain = "file-domain"
"#,
    )
    .unwrap();

    let _env = EnvGuard::set(&[
        ("EDITORSKIT_PROVIDER__PRIORITY", "7"),
        ("EDITORSKIT_PROVIDER__CONFIG_KEY", "ekFeatures"),
        ("EDITORSKIT_PROVIDER__LABEL_POLICY", "fallback_to_key"),
    ]);

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(config.provider.priority, 7);
    assert_eq!(config.provider.config_key, "ekFeatures");
    assert_eq!(config.provider.label_policy, LabelPolicy::FallbackToKey);
    // Keys the environment leaves alone still come from the file
    assert_eq!(config.provider.text_domain, "file-domain");

    let file_only = ConfigLoader::load_file_only(&config_file).unwrap();
    assert_eq!(file_only.provider.priority, 20);
    assert_eq!(file_only.provider.config_key, "fromFile");
    assert_eq!(file_only.provider.label_policy, LabelPolicy::Strict);
}

#[test]
fn test_user_config_file_then_environment() {
    let _lock = ENV_LOCK.lock();
    let config_home = TempDir::new().unwrap();
    let user_dir = config_home.path().join("editorskit");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("features.toml"),
        r#"
[provider]
priority = 15
config_key = "userKey"
"#,
    )
    .unwrap();

    let home = config_home.path().to_str().unwrap();
    {
        let _env = EnvGuard::set(&[("XDG_CONFIG_HOME", home)]);
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.provider.priority, 15);
        assert_eq!(config.provider.config_key, "userKey");
    }

    let _env = EnvGuard::set(&[
        ("XDG_CONFIG_HOME", home),
        ("EDITORSKIT_PROVIDER__PRIORITY", "3"),
    ]);
    let config = ConfigLoader::load().unwrap();
    assert_eq!(config.provider.priority, 3);
    assert_eq!(config.provider.config_key, "userKey");
}
