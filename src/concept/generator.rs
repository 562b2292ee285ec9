//! Record generation from a single concept

use super::table::{DigitTable, NUM_CLASSES};
use super::RecordSource;
use crate::error::Result;
use crate::record::Record;
use rand::{Rng, RngCore};

/// A drifted digit table and the length of its block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    table: DigitTable,
    length: usize,
}

impl Concept {
    /// Create a concept from an existing table
    pub fn new(table: DigitTable, length: usize) -> Self {
        Self { table, length }
    }

    /// Build a fresh table with `magnitude` swaps and wrap it
    pub fn drifted<R: Rng + ?Sized>(
        length: usize,
        num_irrelevant: usize,
        magnitude: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let table = DigitTable::drifted(num_irrelevant, magnitude, rng)?;
        Ok(Self::new(table, length))
    }

    /// The concept's table
    pub fn table(&self) -> &DigitTable {
        &self.table
    }

    /// Attributes per record
    pub fn num_attributes(&self) -> usize {
        self.table.num_columns()
    }

    /// Record for a given label, irrelevant slots drawn from `rng`
    ///
    /// # Panics
    ///
    /// Panics if `label` is not a digit class (`label >= NUM_CLASSES`).
    pub(crate) fn record_for<R: Rng + ?Sized>(&self, label: usize, rng: &mut R) -> Record {
        debug_assert!(label < NUM_CLASSES, "label {} is not a digit class", label);
        let attributes = self
            .table
            .row(label)
            .iter()
            .map(|cell| cell.resolve(rng))
            .collect();
        Record::new(attributes, label as u8)
    }
}

impl RecordSource for Concept {
    fn create_record(&self, rng: &mut dyn RngCore) -> Record {
        let label = rng.gen_range(0..NUM_CLASSES);
        self.record_for(label, rng)
    }

    fn length(&self) -> usize {
        self.length
    }
}
