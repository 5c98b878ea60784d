use anyhow::Result;

use super::super::args::ListCommand;
use super::{CommandResult, CommandSummary, DialectPools, ListSummary, helper::resolve_options};
use crate::core::plan_runners;

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let options = resolve_options(&cmd.args.common)?;

    let documents = plan_runners(&options)?;

    let dialects = documents
        .into_iter()
        .map(|doc| DialectPools {
            dialect: doc.dialect,
            pools: doc.pools,
            candidate_count: doc.candidate_count,
        })
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::List(ListSummary { dialects }),
        failed: false,
    })
}
