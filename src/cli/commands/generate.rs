use anyhow::Result;

use super::super::args::GenerateCommand;
use super::{
    CommandResult, CommandSummary, GenerateSummary, RunnerSummary, helper::resolve_options,
};
use crate::core::{plan_runners, write_runners};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let options = resolve_options(&args.common)?;

    let documents = plan_runners(&options)?;

    if !args.check {
        write_runners(&documents, &options.output_root)?;
    }

    let runners: Vec<RunnerSummary> = documents
        .iter()
        .map(|doc| RunnerSummary {
            dialect: doc.dialect,
            file_name: doc.file_name.clone(),
            pools: doc.pools.clone(),
            candidate_count: doc.candidate_count,
            stale: args.check && doc.is_stale(&options.output_root),
        })
        .collect();

    let failed = args.check && runners.iter().any(|r| r.stale);

    Ok(CommandResult {
        summary: CommandSummary::Generate(GenerateSummary {
            runners,
            is_check: args.check,
        }),
        failed,
    })
}
