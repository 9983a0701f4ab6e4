//! Batches of records built from a producer.

use crate::error::FieldError;
use crate::template::{produce, SchemaTemplate};
use faux_core::Record;
use faux_export::{export_file, ExportFormat};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

type Producer = Box<dyn FnMut() -> Result<Record, FieldError>>;

/// A record producer plus the number of records to build from it.
///
/// [`Schema::create`] materializes the batch once and keeps it, so every
/// export of the same instance writes the same records. Iterating the
/// schema instead calls the producer lazily, one record per step.
///
/// ```rust
/// use faux_core::{Locale, Record};
/// use faux_schema::{Field, Schema};
///
/// let mut field = Field::new(Locale::En, 42u64).unwrap();
/// let mut schema = Schema::new(
///     move || {
///         Ok(Record::new()
///             .with("name", field.call("full_name")?)
///             .with("email", field.call("person.email")?))
///     },
///     5,
/// )
/// .unwrap();
///
/// let records = schema.create().unwrap();
/// assert_eq!(records.len(), 5);
/// assert_eq!(records[0].keys().collect::<Vec<_>>(), vec!["name", "email"]);
/// ```
pub struct Schema {
    producer: Producer,
    iterations: usize,
    position: usize,
    batch: Option<Vec<Record>>,
}

impl Schema {
    pub fn new<F>(producer: F, iterations: usize) -> Result<Self, FieldError>
    where
        F: FnMut() -> Result<Record, FieldError> + 'static,
    {
        if iterations < 1 {
            return Err(FieldError::InvalidIterationCount(iterations));
        }
        Ok(Self {
            producer: Box::new(producer),
            iterations,
            position: 0,
            batch: None,
        })
    }

    /// Build a schema whose records follow a declarative template.
    pub fn from_template(template: &SchemaTemplate) -> Result<Self, FieldError> {
        let mut field = template.field()?;
        let columns = template.columns();
        debug!(
            locale = %template.locale,
            seed = %template.seed(),
            columns = columns.len(),
            iterations = template.iterations,
            "Built schema from template"
        );
        Self::new(move || produce(&mut field, &columns), template.iterations)
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The batch of `iterations` records, produced on first use.
    pub fn create(&mut self) -> Result<&[Record], FieldError> {
        let batch = match self.batch.take() {
            Some(batch) => batch,
            None => self.materialize()?,
        };
        Ok(self.batch.insert(batch).as_slice())
    }

    /// Drop the cached batch and produce a fresh one.
    pub fn regenerate(&mut self) -> Result<&[Record], FieldError> {
        self.batch = None;
        self.create()
    }

    fn materialize(&mut self) -> Result<Vec<Record>, FieldError> {
        let iterations = self.iterations;
        let records = (0..iterations)
            .map(|_| (self.producer)())
            .collect::<Result<Vec<_>, _>>()?;
        info!("Created batch of {} records", records.len());
        Ok(records)
    }

    /// Whether lazy iteration has records left.
    pub fn has_next(&self) -> bool {
        self.position < self.iterations
    }

    /// Number of records yielded by lazy iteration so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Restart lazy iteration from zero.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn to_json<P: AsRef<Path>>(&mut self, path: P, pretty: bool) -> Result<(), FieldError> {
        self.export(path, ExportFormat::Json, pretty)
    }

    pub fn to_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<(), FieldError> {
        self.export(path, ExportFormat::Csv, false)
    }

    pub fn to_bson<P: AsRef<Path>>(&mut self, path: P) -> Result<(), FieldError> {
        self.export(path, ExportFormat::Bson, false)
    }

    /// Write the batch from [`Schema::create`] to `path`.
    pub fn export<P: AsRef<Path>>(&mut self, path: P, format: ExportFormat, pretty: bool) -> Result<(), FieldError> {
        let records = self.create()?;
        export_file(records, path, format, pretty)?;
        Ok(())
    }
}

impl Iterator for Schema {
    type Item = Result<Record, FieldError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        self.position += 1;
        Some((self.producer)())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.iterations - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Schema {}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("iterations", &self.iterations)
            .field("position", &self.position)
            .field("created", &self.batch.is_some())
            .finish()
    }
}
