//! Delimited tabular output.

use crate::error::ExportError;
use csv::Writer;
use faux_core::Record;
use std::io::Write;
use tracing::debug;

/// Write records as CSV.
///
/// The header is taken from the first record. Later records contribute
/// only the header's columns: missing keys and nulls become empty
/// cells, nested values are written as compact JSON. An empty batch
/// writes nothing.
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<(), ExportError> {
    let Some(first) = records.first() else {
        debug!("No records to write as CSV");
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().collect();
    let mut writer = Writer::from_writer(writer);
    writer.write_record(&headers)?;

    for record in records {
        let row = headers.iter().map(|key| {
            record
                .get(key)
                .map(|value| value.to_string())
                .unwrap_or_default()
        });
        writer.write_record(row)?;
    }

    writer.flush()?;
    debug!("Wrote {} CSV rows with {} columns", records.len(), headers.len());
    Ok(())
}
