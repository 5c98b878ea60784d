use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::Dialect;

pub const CONFIG_FILE_NAME: &str = ".xgenrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for paths excluded from the scan (e.g. vendored trees).
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_output_root")]
    pub output_root: String,
    #[serde(default = "default_dialects")]
    pub dialects: Vec<Dialect>,
    #[serde(default = "default_test_file_prefix")]
    pub test_file_prefix: String,
    #[serde(default = "default_runner_base_name")]
    pub runner_base_name: String,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_output_root() -> String {
    "./".to_string()
}

fn default_dialects() -> Vec<Dialect> {
    Dialect::all()
}

fn default_test_file_prefix() -> String {
    "xtest_".to_string()
}

fn default_runner_base_name() -> String {
    "xunit_runner".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            source_root: default_source_root(),
            output_root: default_output_root(),
            dialects: default_dialects(),
            test_file_prefix: default_test_file_prefix(),
            runner_base_name: default_runner_base_name(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid, or if
    /// the naming convention fields are empty or contain path separators.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.test_file_prefix.is_empty() {
            anyhow::bail!("'testFilePrefix' must not be empty");
        }
        if self.test_file_prefix.contains(['/', '\\']) {
            anyhow::bail!(
                "'testFilePrefix' must be a file name prefix, not a path: \"{}\"",
                self.test_file_prefix
            );
        }

        if self.runner_base_name.is_empty() {
            anyhow::bail!("'runnerBaseName' must not be empty");
        }
        if self.runner_base_name.contains(['/', '\\']) {
            anyhow::bail!(
                "'runnerBaseName' must be a file name, not a path: \"{}\"",
                self.runner_base_name
            );
        }

        if self.dialects.is_empty() {
            anyhow::bail!("'dialects' must select at least one dialect");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
