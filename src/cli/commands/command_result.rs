use std::collections::BTreeSet;

use crate::core::Dialect;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    List(ListSummary),
    Init(InitSummary),
}

/// Per-runner outcome of a `generate` run.
#[derive(Debug)]
pub struct RunnerSummary {
    pub dialect: Dialect,
    pub file_name: String,
    pub pools: BTreeSet<String>,
    pub candidate_count: usize,
    /// Only meaningful in check mode: the on-disk runner differs from the
    /// planned content (or is missing).
    pub stale: bool,
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub runners: Vec<RunnerSummary>,
    pub is_check: bool,
}

/// Pools discovered for one dialect, as printed by `list`.
#[derive(Debug)]
pub struct DialectPools {
    pub dialect: Dialect,
    pub pools: BTreeSet<String>,
    pub candidate_count: usize,
}

#[derive(Debug)]
pub struct ListSummary {
    pub dialects: Vec<DialectPools>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running xgen commands
pub struct CommandResult {
    pub summary: CommandSummary,
    /// If true, exit code 1 should be returned (stale runners found by
    /// `generate --check`).
    pub failed: bool,
}
