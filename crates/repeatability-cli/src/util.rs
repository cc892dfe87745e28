use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use repeatability_analysis::{
    report::AnalysisConfig,
    table::{ColumnNames, SplitTable},
    trial::Dataset,
};

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn from_output_path(output_path: Option<&Path>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path: path.to_owned(),
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        tracing::info!(output = %self.display_path(), "wrote JSON output");
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read analysis settings from a JSON file
///
/// Fields absent from the file keep their defaults.
///
/// # Errors
///
/// Returns error if file cannot be opened or parsed
pub fn read_config_file<P>(path: P) -> anyhow::Result<AnalysisConfig>
where
    P: AsRef<Path>,
{
    read_json_file("config", path)
}

/// Read a trial table in split JSON layout and convert it into a dataset
///
/// # Arguments
///
/// * `path` - Path to the table JSON file
/// * `columns` - Headers of the four trial columns
///
/// # Errors
///
/// Returns error if file cannot be opened or parsed, or if the table lacks a
/// required column or holds a non-numeric cell
pub fn read_table_file<P>(path: P, columns: &ColumnNames) -> anyhow::Result<Dataset>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let table: SplitTable = read_json_file("table", path)?;
    let dataset = table
        .to_dataset(columns)
        .with_context(|| format!("Invalid trial table: {}", path.display()))?;
    tracing::info!(path = %path.display(), trials = dataset.len(), "loaded trial table");
    Ok(dataset)
}
