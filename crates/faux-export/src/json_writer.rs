//! JSON array output.

use crate::error::ExportError;
use faux_core::Record;
use std::io::{Read, Write};
use tracing::debug;

/// Write records as a single JSON array.
pub fn write_json<W: Write>(records: &[Record], mut writer: W, pretty: bool) -> Result<(), ExportError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!("Wrote {} records as JSON", records.len());
    Ok(())
}

/// Read a JSON array written by [`write_json`].
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Record>, ExportError> {
    Ok(serde_json::from_reader(reader)?)
}
