//! ARFF output
//!
//! Writes streams in the Attribute-Relation File Format: a header declaring
//! every attribute as `{0,1}` and the class as `{0,...,9}`, then one
//! comma-separated line per record.

use crate::concept::NUM_CLASSES;
use crate::error::Result;
use crate::record::Record;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Relation name written in the header
pub const RELATION: &str = "LED";

/// Streaming ARFF writer
pub struct ArffWriter<W: Write> {
    inner: W,
    records_written: usize,
}

impl ArffWriter<BufWriter<File>> {
    /// Create a writer for a new file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ArffWriter<W> {
    /// Wrap any writer
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            records_written: 0,
        }
    }

    /// Write the relation, attribute declarations and `@data` marker
    pub fn write_header(&mut self, num_attributes: usize) -> Result<()> {
        writeln!(self.inner, "@relation {}", RELATION)?;
        writeln!(self.inner)?;
        for a in 0..num_attributes {
            writeln!(self.inner, "@attribute a{} {{0,1}}", a)?;
        }
        let classes: Vec<String> = (0..NUM_CLASSES).map(|c| c.to_string()).collect();
        writeln!(self.inner)?;
        writeln!(self.inner, "@attribute class {{{}}}", classes.join(","))?;
        writeln!(self.inner)?;
        writeln!(self.inner, "@data")?;
        Ok(())
    }

    /// Write one data line
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        writeln!(self.inner, "{}", record)?;
        self.records_written += 1;
        Ok(())
    }

    /// Number of data lines written so far
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flush and return the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Write a complete ARFF file for `records`
pub fn write_arff<'a, P, I>(path: P, num_attributes: usize, records: I) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Record>,
{
    let path = path.as_ref();
    let mut writer = ArffWriter::create(path)?;
    writer.write_header(num_attributes)?;
    for record in records {
        writer.write_record(record)?;
    }
    let written = writer.records_written();
    writer.finish()?;

    info!("Wrote {} records to {:?}", written, path);
    Ok(written)
}
