//! Concepts: label-generation rules active over a span of the stream
//!
//! A concept is a [`DigitTable`], possibly drifted away from the canonical
//! seven-segment layout, together with the number of records it contributes.

mod generator;
mod table;

pub use generator::Concept;
pub use table::{max_effective_swaps, Cell, DigitTable, NUM_CLASSES, NUM_RELEVANT};

use crate::record::Record;
use rand::RngCore;

/// Trait for anything that can emit labeled records
pub trait RecordSource {
    /// Draw a single record
    fn create_record(&self, rng: &mut dyn RngCore) -> Record;

    /// Number of records in this source's pure block
    fn length(&self) -> usize;

    /// Generate the full pure block
    fn generate(&self, rng: &mut dyn RngCore) -> Vec<Record> {
        (0..self.length()).map(|_| self.create_record(rng)).collect()
    }
}
