use std::path::PathBuf;

use clap::Args;
use repeatability_analysis::{deviation::EnrichedDataset, report};

use crate::{command::InputArg, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct HistogramArg {
    #[clap(flatten)]
    input: InputArg,

    /// Number of bins (overrides the config)
    #[arg(long)]
    bins: Option<usize>,

    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &HistogramArg) -> anyhow::Result<()> {
    let (dataset, config) = arg.input.load()?;
    let bins = arg.bins.unwrap_or(config.histogram_bins);
    let histogram = report::dial_error_histogram(&EnrichedDataset::from_dataset(&dataset), bins)?;
    Output::save_json(&histogram, arg.output.as_deref())
}
