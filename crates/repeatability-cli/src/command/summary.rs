//! Human-readable statistics report
//!
//! Writes the dial error summary over all trials followed by a table of
//! deviation and dial error statistics per start angle.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Args;
use repeatability_analysis::{
    deviation::EnrichedDataset,
    grouping,
    summary::{self, DatasetSummary, GroupSummary},
};
use repeatability_stats::descriptive::DescriptiveStats;

use crate::{command::InputArg, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    input: InputArg,

    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let (dataset, _config) = arg.input.load()?;
    let enriched = EnrichedDataset::from_dataset(&dataset);
    let overall = DatasetSummary::from_dataset(&enriched)?;
    let groups = summary::summarize_groups(&grouping::group_by_start_angle(&enriched))?;

    let mut output = Output::from_output_path(arg.output.as_deref())?;
    write_report(&mut output, &overall, &groups)
        .and_then(|()| output.flush())
        .with_context(|| format!("Failed to write report to {}", output.display_path()))?;
    Ok(())
}

fn write_report<W>(out: &mut W, overall: &DatasetSummary, groups: &[GroupSummary]) -> io::Result<()>
where
    W: Write,
{
    write_dial_error_report(out, overall)?;
    writeln!(out)?;
    write_deviation_report(out, &overall.deviation)?;
    writeln!(out)?;
    write_group_table(out, groups)
}

fn write_dial_error_report<W: Write>(out: &mut W, summary: &DatasetSummary) -> io::Result<()> {
    let stats = &summary.dial_error;
    let rule = "=".repeat(50);
    writeln!(out, "{rule}")?;
    writeln!(out, "Dial Indicator Error Report")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Samples: {}", summary.trial_count)?;
    writeln!(out, "Range: {:.3} mm - {:.3} mm", stats.min, stats.max)?;
    writeln!(out, "Mean: {:.3} mm", stats.mean)?;
    writeln!(out, "Median: {:.3} mm", stats.median)?;
    writeln!(out, "Std dev: {:.3} mm", stats.std_dev)?;
    writeln!(out, "IQR: {:.3} mm", stats.iqr)?;
    writeln!(out, "Outliers: {}", stats.outlier_count)?;
    if !stats.outliers.is_empty() {
        writeln!(out, "Outlier values: {:?}", stats.outliers)?;
    }
    writeln!(out, "{rule}")
}

fn write_deviation_report<W: Write>(out: &mut W, stats: &DescriptiveStats) -> io::Result<()> {
    writeln!(out, "Deviation (final - target):")?;
    writeln!(
        out,
        "  mean {:.4}°, std dev {:.4}°, range {:.4}° .. {:.4}°",
        stats.mean, stats.std_dev, stats.min, stats.max
    )
}

fn write_group_table<W: Write>(out: &mut W, groups: &[GroupSummary]) -> io::Result<()> {
    writeln!(out, "By Start Angle")?;
    writeln!(
        out,
        "  {:>10} {:>6} {:>12} {:>12} {:>10} {:>10} {:>10} {:>9}",
        "Start", "Trials", "Dev Mean", "Dev Std", "Err Q1", "Err Med", "Err Q3", "Outliers",
    )?;
    // start(10) + trials(6) + 2 * dev(12) + 3 * err(10) + outliers(9) + spaces(7)
    writeln!(out, "  {}", "-".repeat(86))?;
    for group in groups {
        writeln!(
            out,
            "  {:>9}° {:>6} {:>12.4} {:>12.4} {:>10.3} {:>10.3} {:>10.3} {:>9}",
            group.start_angle,
            group.count(),
            group.deviation.mean,
            group.deviation.std_dev,
            group.dial_error.q1,
            group.dial_error.median,
            group.dial_error.q3,
            group.dial_error.outlier_count,
        )?;
    }
    Ok(())
}
