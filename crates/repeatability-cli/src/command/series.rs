use std::path::PathBuf;

use clap::Args;
use repeatability_analysis::{deviation::EnrichedDataset, series::TrialSeries};

use crate::{command::InputArg, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct SeriesArg {
    #[clap(flatten)]
    input: InputArg,

    /// Label every N-th trial (overrides the config, 0 disables labels)
    #[arg(long)]
    label_interval: Option<usize>,

    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SeriesArg) -> anyhow::Result<()> {
    let (dataset, config) = arg.input.load()?;
    let interval = arg.label_interval.unwrap_or(config.label_interval);
    let series = TrialSeries::from_dataset(&EnrichedDataset::from_dataset(&dataset), interval);
    Output::save_json(&series, arg.output.as_deref())
}
