use std::path::PathBuf;

use clap::Args;
use repeatability_analysis::{deviation::EnrichedDataset, grouping, summary};

use crate::{command::InputArg, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct GroupsArg {
    #[clap(flatten)]
    input: InputArg,

    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GroupsArg) -> anyhow::Result<()> {
    let (dataset, _config) = arg.input.load()?;
    let enriched = EnrichedDataset::from_dataset(&dataset);
    let groups = grouping::group_by_start_angle(&enriched);
    let summaries = summary::summarize_groups(&groups)?;
    Output::save_json(&summaries, arg.output.as_deref())
}
