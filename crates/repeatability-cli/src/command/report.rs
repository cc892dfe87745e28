use std::path::PathBuf;

use clap::Args;
use repeatability_analysis::report::AnalysisReport;

use crate::{command::InputArg, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    input: InputArg,

    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let (dataset, config) = arg.input.load()?;
    let report = AnalysisReport::build(&dataset, &config)?;
    Output::save_json(&report, arg.output.as_deref())
}
