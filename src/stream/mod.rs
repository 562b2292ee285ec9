//! Stream composition
//!
//! - `layout` - Segment positions shared by composer and metadata
//! - `transition` - Sigmoid ramp and transition zones
//! - `composer` - Assembles concepts and transitions into one stream

mod composer;
mod layout;
mod transition;

pub use composer::StreamComposer;
pub use layout::{Segment, SegmentKind, StreamLayout};
pub use transition::{sigmoid, TransitionZone};

use crate::record::Record;

/// A fully materialized record stream
#[derive(Debug, Clone)]
pub struct Stream {
    records: Vec<Record>,
    /// Concept that generated each record
    origins: Vec<usize>,
    layout: StreamLayout,
}

impl Stream {
    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the stream is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in stream order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Mutable access for in-place noise
    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    /// Concept index behind each record
    pub fn origins(&self) -> &[usize] {
        &self.origins
    }

    /// Segment layout the stream was assembled from
    pub fn layout(&self) -> &StreamLayout {
        &self.layout
    }

    /// Iterate over records
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Attributes per record, zero for an empty stream
    pub fn num_attributes(&self) -> usize {
        self.records.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Take ownership of the records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Stream {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
