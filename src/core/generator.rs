use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;

use super::dialect::Dialect;
use super::emit::{render_runner, runner_file_name};
use super::extract::extract_pools;
use super::scanner::scan_candidates;
use crate::config::Config;

/// Everything one generator run needs, resolved up front.
///
/// Keeping this explicit (instead of reading the working directory and
/// fixed constants mid-run) lets the pipeline run against any tree, which
/// is how the unit tests exercise it.
#[derive(Debug)]
pub struct GeneratorOptions {
    pub source_root: PathBuf,
    pub output_root: PathBuf,
    pub dialects: Vec<Dialect>,
    pub test_file_prefix: String,
    pub runner_base_name: String,
    pub ignores: Vec<Pattern>,
}

impl GeneratorOptions {
    pub fn from_config(config: &Config) -> Result<Self> {
        let ignores = config
            .ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            source_root: PathBuf::from(&config.source_root),
            output_root: PathBuf::from(&config.output_root),
            dialects: config.dialects.clone(),
            test_file_prefix: config.test_file_prefix.clone(),
            runner_base_name: config.runner_base_name.clone(),
            ignores,
        })
    }
}

/// One planned runner file: the dialect it serves, the name it will be
/// written under, and the fully rendered content.
#[derive(Debug)]
pub struct RunnerDocument {
    pub dialect: Dialect,
    pub file_name: String,
    pub pools: BTreeSet<String>,
    pub candidate_count: usize,
    pub content: String,
}

impl RunnerDocument {
    /// Whether the runner on disk differs from this planned content.
    /// A missing or unreadable file counts as stale.
    pub fn is_stale(&self, output_root: &Path) -> bool {
        match fs::read_to_string(output_root.join(&self.file_name)) {
            Ok(existing) => existing != self.content,
            Err(_) => true,
        }
    }
}

/// Run the scan/extract/aggregate/render stages for every selected dialect
/// without writing anything.
///
/// Dialects are processed strictly in sequence; duplicates in the selection
/// collapse to one run each. Every selected dialect yields a document, even
/// when no candidate declared a pool.
pub fn plan_runners(options: &GeneratorOptions) -> Result<Vec<RunnerDocument>> {
    let mut dialects: Vec<Dialect> = Vec::new();
    for dialect in &options.dialects {
        if !dialects.contains(dialect) {
            dialects.push(*dialect);
        }
    }

    let mut documents = Vec::with_capacity(dialects.len());
    for dialect in dialects {
        let candidates = scan_candidates(
            &options.source_root,
            &options.test_file_prefix,
            dialect,
            &options.ignores,
        )?;

        let mut pools = BTreeSet::new();
        for path in &candidates {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read test source: {}", path.display()))?;
            pools.extend(extract_pools(&text));
        }

        let content = render_runner(dialect, &pools);
        documents.push(RunnerDocument {
            dialect,
            file_name: runner_file_name(&options.runner_base_name, dialect),
            pools,
            candidate_count: candidates.len(),
            content,
        });
    }

    Ok(documents)
}

/// Persist planned runners under `output_root`, truncating any existing
/// file of the same name.
pub fn write_runners(documents: &[RunnerDocument], output_root: &Path) -> Result<()> {
    for doc in documents {
        let path = output_root.join(&doc.file_name);
        fs::write(&path, &doc.content)
            .with_context(|| format!("Failed to write runner: {}", path.display()))?;
    }
    Ok(())
}
