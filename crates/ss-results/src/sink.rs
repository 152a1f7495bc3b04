//! Trajectory writers.

use crate::format::format_general;
use crate::types::SampleRecord;
use crate::{ResultsError, ResultsResult};
use ss_sim::Trajectory;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

const TEXT_HEADER: &str = "Time(s) Column1 Column2 Y";
const CSV_HEADER: &str = "time_s,x0,x1,y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Legacy whitespace-separated layout, no trailing newline.
    #[default]
    Text,
    Csv,
    JsonLines,
}

impl OutputFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "txt" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            "jsonl" => Some(Self::JsonLines),
            _ => None,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ResultsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "jsonl" | "json-lines" => Ok(Self::JsonLines),
            other => Err(ResultsError::UnknownFormat(other.to_string())),
        }
    }
}

/// Write every sample of `trajectory` in field order `(t, x0, x1, y)`.
pub fn write_trajectory<W: Write>(
    writer: &mut W,
    trajectory: &Trajectory,
    format: OutputFormat,
) -> ResultsResult<()> {
    let records = SampleRecord::from_trajectory(trajectory);
    match format {
        OutputFormat::Text => {
            write!(writer, "{TEXT_HEADER}")?;
            for r in &records {
                write!(
                    writer,
                    "\n{} {} {} {}",
                    format_general(r.time_s),
                    format_general(r.x0),
                    format_general(r.x1),
                    format_general(r.y)
                )?;
            }
        }
        OutputFormat::Csv => {
            writeln!(writer, "{CSV_HEADER}")?;
            for r in &records {
                writeln!(writer, "{},{},{},{}", r.time_s, r.x0, r.x1, r.y)?;
            }
        }
        OutputFormat::JsonLines => {
            for r in &records {
                serde_json::to_writer(&mut *writer, r)?;
                writeln!(writer)?;
            }
        }
    }
    Ok(())
}

/// Create (or truncate) `path` and write the trajectory to it.
pub fn write_trajectory_file(
    path: &Path,
    trajectory: &Trajectory,
    format: OutputFormat,
) -> ResultsResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_trajectory(&mut writer, trajectory, format)?;
    writer.flush()?;
    Ok(())
}

/// Read records written with [`OutputFormat::JsonLines`]. Blank lines are skipped.
pub fn read_json_lines<R: BufRead>(reader: R) -> ResultsResult<Vec<SampleRecord>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            records.push(serde_json::from_str(&line)?);
        }
    }
    Ok(records)
}
