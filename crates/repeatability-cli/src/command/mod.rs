use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use repeatability_analysis::{report::AnalysisConfig, trial::Dataset};

use self::{
    groups::GroupsArg, histogram::HistogramArg, percentiles::PercentilesArg, report::ReportArg,
    series::SeriesArg, summary::SummaryArg, trend::TrendArg,
};
use crate::util;

mod groups;
mod histogram;
mod percentiles;
mod report;
mod series;
mod summary;
mod trend;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run the full analysis and write every chart's data as JSON
    Report(#[clap(flatten)] ReportArg),
    /// Print a human-readable statistics report
    Summary(#[clap(flatten)] SummaryArg),
    /// Bin dial errors into an equal-width histogram
    Histogram(#[clap(flatten)] HistogramArg),
    /// Fit the trend of dial error against start angle
    Trend(#[clap(flatten)] TrendArg),
    /// Summarize deviation and dial error per start angle
    Groups(#[clap(flatten)] GroupsArg),
    /// Extract the trial-by-trial deviation series
    Series(#[clap(flatten)] SeriesArg),
    /// Compute percentiles of dial error
    Percentiles(#[clap(flatten)] PercentilesArg),
}

/// Input options shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct InputArg {
    /// Path to the trial table JSON file (split layout)
    pub table: PathBuf,

    /// Path to an analysis config JSON file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Header of the start angle column
    #[arg(long)]
    pub start_angle_column: Option<String>,

    /// Header of the target angle column
    #[arg(long)]
    pub target_angle_column: Option<String>,

    /// Header of the final angle column
    #[arg(long)]
    pub final_angle_column: Option<String>,

    /// Header of the dial indicator error column
    #[arg(long)]
    pub dial_error_column: Option<String>,
}

impl InputArg {
    /// Loads the config, applies column overrides, and reads the table.
    pub(crate) fn load(&self) -> anyhow::Result<(Dataset, AnalysisConfig)> {
        let mut config = match &self.config {
            Some(path) => util::read_config_file(path)?,
            None => AnalysisConfig::default(),
        };

        let columns = &mut config.columns;
        let overrides = [
            (&mut columns.start_angle, &self.start_angle_column),
            (&mut columns.target_angle, &self.target_angle_column),
            (&mut columns.final_angle, &self.final_angle_column),
            (&mut columns.dial_error, &self.dial_error_column),
        ];
        for (column, value) in overrides {
            if let Some(value) = value {
                column.clone_from(value);
            }
        }
        tracing::debug!(?config, "resolved analysis config");

        let dataset = util::read_table_file(&self.table, &config.columns)?;
        Ok((dataset, config))
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Histogram(arg) => histogram::run(&arg)?,
        Mode::Trend(arg) => trend::run(&arg)?,
        Mode::Groups(arg) => groups::run(&arg)?,
        Mode::Series(arg) => series::run(&arg)?,
        Mode::Percentiles(arg) => percentiles::run(&arg)?,
    }
    Ok(())
}
