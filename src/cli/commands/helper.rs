use std::env;

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::config::load_config;
use crate::core::GeneratorOptions;

/// Load configuration, apply CLI overrides, and compile the result into
/// the options value the pipeline consumes.
pub fn resolve_options(common: &CommonArgs) -> Result<GeneratorOptions> {
    let start_dir = env::current_dir().context("Failed to resolve current directory")?;
    let mut config = load_config(&start_dir)?.config;

    if let Some(root) = &common.source_root {
        config.source_root = root.to_string_lossy().into_owned();
    }
    if let Some(root) = &common.output_root {
        config.output_root = root.to_string_lossy().into_owned();
    }
    if !common.dialects.is_empty() {
        config.dialects = common.dialects.clone();
    }

    GeneratorOptions::from_config(&config)
}
