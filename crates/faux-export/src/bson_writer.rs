//! BSON output.
//!
//! A batch is stored as one document, `{ "records": [...] }`, since a
//! BSON document cannot have an array at its root.

use crate::error::ExportError;
use bson::Document;
use faux_core::Record;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::debug;

#[derive(Serialize)]
struct BatchRef<'a> {
    records: &'a [Record],
}

#[derive(Deserialize)]
struct Batch {
    records: Vec<Record>,
}

/// Write records as one BSON document.
pub fn write_bson<W: Write>(records: &[Record], mut writer: W) -> Result<(), ExportError> {
    let document = bson::to_document(&BatchRef { records })?;
    document.to_writer(&mut writer)?;
    writer.flush()?;
    debug!("Wrote {} records as BSON", records.len());
    Ok(())
}

/// Read a batch written by [`write_bson`].
pub fn read_bson<R: Read>(mut reader: R) -> Result<Vec<Record>, ExportError> {
    let document = Document::from_reader(&mut reader)?;
    let batch: Batch = bson::from_document(document)?;
    Ok(batch.records)
}
