use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use repeatability_analysis::deviation::EnrichedDataset;
use repeatability_stats::percentiles::Percentiles;

use crate::{command::InputArg, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct PercentilesArg {
    #[clap(flatten)]
    input: InputArg,

    /// Percentile points to compute (comma-separated, 0 to 100)
    #[arg(long, value_delimiter = ',', default_values_t = [5.0, 25.0, 50.0, 75.0, 95.0])]
    points: Vec<f64>,

    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &PercentilesArg) -> anyhow::Result<()> {
    if let Some(p) = arg.points.iter().find(|p| !(0.0..=100.0).contains(*p)) {
        anyhow::bail!("Percentile point {p} is outside 0..=100");
    }
    let (dataset, _config) = arg.input.load()?;
    let dial_errors = EnrichedDataset::from_dataset(&dataset).dial_errors();
    let percentiles = Percentiles::new(&dial_errors, &arg.points)
        .context("Failed to compute dial error percentiles")?;
    for (point, value) in percentiles.iter() {
        tracing::debug!(point, value, "dial error percentile");
    }
    Output::save_json(&percentiles, arg.output.as_deref())
}
