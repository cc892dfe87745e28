use std::path::PathBuf;

use clap::Args;
use repeatability_analysis::{deviation::EnrichedDataset, report::TrendOverlay};

use crate::{command::InputArg, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct TrendArg {
    #[clap(flatten)]
    input: InputArg,

    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &TrendArg) -> anyhow::Result<()> {
    let (dataset, _config) = arg.input.load()?;
    let trend = TrendOverlay::fit(&EnrichedDataset::from_dataset(&dataset))?;
    Output::save_json(&trend, arg.output.as_deref())
}
