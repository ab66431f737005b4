//! Configuration loader
//!
//! Resolution order:
//! 1. Built-in defaults ([`BuildConfig::default`])
//! 2. Optional YAML file; a relative `source_dir` in the file is taken
//!    relative to the file's own directory
//! 3. Command-line flags and `PINCFG_BUILDER_*` environment variables

use std::path::{Path, PathBuf};

use crate::config::schema::BuildConfig;
use crate::error::ConfigError;

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOverrides {
    /// Replaces `source_dir`.
    pub source_dir: Option<PathBuf>,
    /// Replaces `output`.
    pub output: Option<PathBuf>,
    /// Replaces `mysensors_header`.
    pub mysensors_header: Option<PathBuf>,
    /// Replaces `types_header`.
    pub types_header: Option<PathBuf>,
    /// Replaces `scripts` when non-empty.
    pub scripts: Vec<PathBuf>,
    /// Forces strict placeholder checking on.
    pub strict: bool,
}

impl BuildOverrides {
    /// Apply these overrides on top of `config`.
    pub fn apply(self, config: &mut BuildConfig) {
        if let Some(dir) = self.source_dir {
            config.source_dir = dir;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(header) = self.mysensors_header {
            config.mysensors_header = header;
        }
        if let Some(header) = self.types_header {
            config.types_header = header;
        }
        if !self.scripts.is_empty() {
            config.scripts = self.scripts;
        }
        config.strict |= self.strict;
    }
}

/// Load a build configuration from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML, contains
/// unknown keys, or fails validation.
pub fn load_config(path: &Path) -> Result<BuildConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config = load_config_str(&raw, path)?;
    if config.source_dir.is_relative() {
        if let Some(base) = path.parent() {
            config.source_dir = base.join(&config.source_dir);
        }
    }

    tracing::debug!(path = %path.display(), source_dir = %config.source_dir.display(), "loaded build config");
    Ok(config)
}

/// Parse a build configuration from YAML text.
///
/// `path` is only used for error messages. An empty document yields the
/// defaults.
///
/// # Errors
///
/// Returns an error if the YAML is malformed, contains unknown keys, or
/// fails validation.
pub fn load_config_str(yaml: &str, path: &Path) -> Result<BuildConfig, ConfigError> {
    let yaml = yaml.strip_prefix('\u{feff}').unwrap_or(yaml);

    let config: BuildConfig = if yaml.trim().is_empty() {
        BuildConfig::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?
    };

    validate(&config)?;
    Ok(config)
}

/// Check invariants serde cannot express.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for the first violated invariant.
pub fn validate(config: &BuildConfig) -> Result<(), ConfigError> {
    if config.scripts.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "scripts".to_string(),
            message: "at least one script fragment is required".to_string(),
        });
    }

    for (field, token) in [
        ("placeholders.stylesheet", &config.placeholders.stylesheet),
        ("placeholders.script", &config.placeholders.script),
    ] {
        if token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: "placeholder token must not be empty".to_string(),
            });
        }
    }

    if config.placeholders.stylesheet == config.placeholders.script {
        return Err(ConfigError::InvalidValue {
            field: "placeholders".to_string(),
            message: "stylesheet and script tokens must differ".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_is_default() {
        let config = load_config_str("", Path::new("build.yaml")).unwrap();
        assert_eq!(config, BuildConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "output: site/index.html\nstrict: true\n";
        let config = load_config_str(yaml, Path::new("build.yaml")).unwrap();
        assert_eq!(config.output, PathBuf::from("site/index.html"));
        assert!(config.strict);
        assert_eq!(config.scripts, BuildConfig::default().scripts);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = load_config_str("tempalte: x.html\n", Path::new("build.yaml")).unwrap_err();
        match err {
            ConfigError::Parse { path, message, .. } => {
                assert_eq!(path, PathBuf::from("build.yaml"));
                assert!(message.contains("tempalte"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_script_list_rejected() {
        let err = load_config_str("scripts: []\n", Path::new("build.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "scripts"));
    }

    #[test]
    fn test_identical_placeholders_rejected() {
        let yaml = "placeholders:\n  stylesheet: '@@X@@'\n  script: '@@X@@'\n";
        let err = load_config_str(yaml, Path::new("build.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = BuildConfig::default();
        BuildOverrides {
            source_dir: Some(PathBuf::from("/src")),
            scripts: vec![PathBuf::from("main.js")],
            strict: true,
            ..BuildOverrides::default()
        }
        .apply(&mut config);
        assert_eq!(config.source_dir, PathBuf::from("/src"));
        assert_eq!(config.scripts, vec![PathBuf::from("main.js")]);
        assert!(config.strict);
        assert_eq!(config.output, BuildConfig::default().output);
    }

    #[test]
    fn test_strict_override_never_disables() {
        let mut config = BuildConfig {
            strict: true,
            ..BuildConfig::default()
        };
        BuildOverrides::default().apply(&mut config);
        assert!(config.strict);
    }

    #[test]
    fn test_file_relative_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.yaml");
        std::fs::write(&path, "source_dir: web\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.source_dir, dir.path().join("web"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/pincfg/build.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
