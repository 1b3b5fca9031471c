//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`NamePolicy`] that
//! is handed to the validator.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--store`, `--no-color`, `--output-format`)
//! 2. Environment variables, `ROLEKEEPER__<SECTION>__<KEY>`
//! 3. Config file (`--config FILE`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use rolekeeper_core::domain::NamePolicy;
use serde::{Deserialize, Serialize};

use crate::cli::global::GlobalArgs;

const ENV_PREFIX: &str = "ROLEKEEPER";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where roles are kept.
    pub storage: StorageConfig,
    /// Naming rules.
    pub policy: NamePolicy,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding every role.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is not given.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                path: Self::default_store_path(),
            },
            policy: NamePolicy::default(),
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// for the default location). An explicit file must exist unless
    /// `require_file` is false, which `init` uses before the file is written.
    pub fn load(config_file: Option<&PathBuf>, require_file: bool) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(require_file),
            None => File::from(Self::config_path()).required(false),
        };

        let lists = ["reserved_names", "reserved_prefixes", "protected_names"];
        let mut env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",");
        for key in lists {
            env = env.with_list_parse_key(&format!("policy.{key}"));
        }

        let mut cfg: Self = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        cfg.policy = cfg.policy.normalized();
        Ok(cfg)
    }

    /// Apply flags that override file and environment values.
    pub fn apply_overrides(mut self, args: &GlobalArgs) -> Self {
        if let Some(store) = &args.store {
            self.storage.path = store.clone();
        }
        if args.no_color {
            self.output.no_color = true;
        }
        self
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.rolekeeper.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "rolekeeper", "rolekeeper")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".rolekeeper.toml"))
    }

    /// The file `init` writes and `config path` reports.
    pub fn active_config_path(explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(Self::config_path, Path::to_path_buf)
    }

    fn default_store_path() -> PathBuf {
        directories::ProjectDirs::from("io", "rolekeeper", "rolekeeper")
            .map(|d| d.data_dir().join("roles.json"))
            .unwrap_or_else(|| PathBuf::from("roles.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::fs;

    fn args() -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            store: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn default_policy_is_the_builtin_one() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.policy, NamePolicy::default());
        assert_eq!(cfg.policy.max_length(), 100);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn default_store_is_a_json_file() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.storage.path.extension().and_then(|e| e.to_str()),
            Some("json")
        );
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rolekeeper.toml");
        fs::write(
            &path,
            r#"
[storage]
path = "/tmp/elsewhere.json"

[policy]
max_length = 20
protected_names = ["owner", "admin"]
"#,
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path), true).unwrap();
        assert_eq!(cfg.storage.path, PathBuf::from("/tmp/elsewhere.json"));
        assert_eq!(cfg.policy.max_length(), 20);
        assert!(cfg.policy.protected_names().contains("OWNER"));
        // Untouched sections keep their defaults.
        assert!(cfg.policy.reserved_names().contains("SYSTEM"));
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_explicit_file_is_an_error_only_when_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path), true).is_err());
        assert!(AppConfig::load(Some(&path), false).is_ok());
    }

    #[test]
    fn flags_override_loaded_values() {
        let mut args = args();
        args.store = Some(PathBuf::from("flag.json"));
        args.no_color = true;

        let cfg = AppConfig::default().apply_overrides(&args);
        assert_eq!(cfg.storage.path, PathBuf::from("flag.json"));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }

    #[test]
    fn active_path_prefers_explicit() {
        let explicit = PathBuf::from("mine.toml");
        assert_eq!(
            AppConfig::active_config_path(Some(&explicit)),
            PathBuf::from("mine.toml")
        );
    }
}
