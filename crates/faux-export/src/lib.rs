//! Record batch export for the fauxgen framework.
//!
//! Three flat formats are supported, all operating on an already
//! materialized slice of [`Record`]s:
//!
//! - CSV ([`write_csv`]) with a header row taken from the first record
//! - JSON ([`write_json`]) as a single array document
//! - BSON ([`write_bson`]) as a single `{ "records": [...] }` document
//!
//! [`export_file`] writes a batch to a path in any of the formats.

mod bson_writer;
mod csv_writer;
mod error;
mod json_writer;

pub use bson_writer::{read_bson, write_bson};
pub use csv_writer::write_csv;
pub use error::ExportError;
pub use json_writer::{read_json, write_json};

use faux_core::Record;
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Default buffer size for file output.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Bson,
}

impl ExportFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Bson => "bson",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "bson" => Ok(Self::Bson),
            other => Err(format!("unknown export format '{other}', expected json, csv or bson")),
        }
    }
}

/// Write a batch to `path`, replacing any existing file.
///
/// `pretty` only affects JSON output.
pub fn export_file<P: AsRef<Path>>(
    records: &[Record],
    path: P,
    format: ExportFormat,
    pretty: bool,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    info!(
        "Writing {} records to '{}' as {}",
        records.len(),
        path.display(),
        format
    );

    let file = File::create(path)?;
    let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    match format {
        ExportFormat::Json => write_json(records, writer, pretty)?,
        ExportFormat::Csv => write_csv(records, writer)?,
        ExportFormat::Bson => write_bson(records, writer)?,
    }

    info!(
        "Export complete: {} bytes written to '{}'",
        std::fs::metadata(path)?.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn batch() -> Vec<Record> {
        (0..3)
            .map(|i| Record::new().with("id", i).with("label", format!("row-{i}")))
            .collect()
    }

    #[test]
    fn test_export_file_formats() {
        let dir = TempDir::new().unwrap();
        let records = batch();

        let json = dir.path().join("out.json");
        export_file(&records, &json, ExportFormat::Json, false).unwrap();
        assert_eq!(read_json(File::open(&json).unwrap()).unwrap(), records);

        let bson = dir.path().join("out.bson");
        export_file(&records, &bson, ExportFormat::Bson, false).unwrap();
        assert_eq!(read_bson(File::open(&bson).unwrap()).unwrap(), records);

        let csv = dir.path().join("out.csv");
        export_file(&records, &csv, ExportFormat::Csv, false).unwrap();
        let text = std::fs::read_to_string(&csv).unwrap();
        assert_eq!(text, "id,label\n0,row-0\n1,row-1\n2,row-2\n");
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = export_file(&batch(), path, ExportFormat::Json, false).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::Bson.to_string(), "bson");
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
