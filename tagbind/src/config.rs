use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILENAME, DEFAULT_ELEMENT_KEYS, DEFAULT_TARGET};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for tagbind.
    pub tagbind: TagbindConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
    /// Config files found during discovery that failed to parse, with the parse error.
    #[serde(skip)]
    pub rejected_files: Vec<(PathBuf, String)>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(deny_unknown_fields)]
/// Configuration options for tagbind.
pub struct TagbindConfig {
    /// Markup file to rewrite, relative to the config file's directory.
    pub target: Option<PathBuf>,
    /// Element keys, replacing the built-in list.
    pub keys: Option<Vec<String>>,
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }
        // `Path::pop` stops at a relative path's first component.
        if let Ok(absolute) = current.canonicalize() {
            current = absolute;
        }

        let mut rejected_files = Vec::new();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                match fs::read_to_string(&candidate).map(|c| toml::from_str::<Config>(&c)) {
                    Ok(Ok(mut config)) => {
                        config.config_file_path = Some(candidate);
                        config.rejected_files = rejected_files;
                        return config;
                    }
                    Ok(Err(e)) => rejected_files.push((candidate, e.message().to_owned())),
                    Err(e) => rejected_files.push((candidate, e.to_string())),
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config {
            rejected_files,
            ..Config::default()
        }
    }

    /// Target path from the config, resolved against the config file's directory.
    #[must_use]
    pub fn target(&self) -> Option<PathBuf> {
        let target = self.tagbind.target.as_ref()?;
        match self.config_file_path.as_deref().and_then(Path::parent) {
            Some(dir) if target.is_relative() => Some(dir.join(target)),
            _ => Some(target.clone()),
        }
    }

    /// Resolve the file to rewrite: CLI argument, then config, then the built-in default.
    #[must_use]
    pub fn resolve_target(&self, cli_path: Option<&Path>) -> PathBuf {
        cli_path
            .map(Path::to_path_buf)
            .or_else(|| self.target())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET))
    }

    /// Resolve the element keys: CLI keys, then config, then the built-in list.
    #[must_use]
    pub fn resolve_keys(&self, cli_keys: &[String]) -> Vec<String> {
        if !cli_keys.is_empty() {
            return cli_keys.to_vec();
        }
        self.tagbind.keys.clone().unwrap_or_else(|| {
            DEFAULT_ELEMENT_KEYS
                .iter()
                .map(|key| (*key).to_owned())
                .collect()
        })
    }
}
