//! Segment layout of a composed stream
//!
//! Both the composer and the metadata calculator derive drift positions
//! from [`StreamLayout`], so reported boundaries always match the records.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// What a segment of the stream contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Pure block of concept `i`
    Concept(usize),
    /// Blend between concept `i` and `i + 1`
    Transition(usize),
}

/// Contiguous `[start, end)` span of the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: usize,
    pub end: usize,
}

impl Segment {
    /// Number of records in the segment
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check for a zero-width segment
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Index range covered by the segment
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Alternating concept and transition segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamLayout {
    segments: Vec<Segment>,
}

impl StreamLayout {
    /// Lay out `concept 0, transition 0, concept 1, ...` by running sum.
    ///
    /// Every boundary gets a transition segment, zero-width when its window
    /// is zero. Concepts beyond `transition_lengths.len() + 1` are ignored.
    pub fn new(concept_lengths: &[usize], transition_lengths: &[usize]) -> Self {
        let mut segments = Vec::with_capacity(concept_lengths.len() * 2);
        let mut pointer = 0;

        for (i, &length) in concept_lengths.iter().enumerate() {
            segments.push(Segment {
                kind: SegmentKind::Concept(i),
                start: pointer,
                end: pointer + length,
            });
            pointer += length;

            if i + 1 < concept_lengths.len() {
                let width = transition_lengths.get(i).copied().unwrap_or(0);
                segments.push(Segment {
                    kind: SegmentKind::Transition(i),
                    start: pointer,
                    end: pointer + width,
                });
                pointer += width;
            }
        }

        Self { segments }
    }

    /// All segments in stream order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total number of records
    pub fn total_length(&self) -> usize {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Number of concepts
    pub fn num_concepts(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s.kind, SegmentKind::Concept(_)))
            .count()
    }

    /// Pure block of concept `index`
    pub fn concept(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index * 2)
    }

    /// Transition after concept `boundary`
    pub fn transition(&self, boundary: usize) -> Option<&Segment> {
        self.segments.get(boundary * 2 + 1)
    }

    /// `[start, end)` of every transition, one per boundary
    pub fn drift_intervals(&self) -> Vec<[usize; 2]> {
        self.segments
            .iter()
            .filter(|s| matches!(s.kind, SegmentKind::Transition(_)))
            .map(|s| [s.start, s.end])
            .collect()
    }

    /// Non-empty segment containing `position`
    pub fn segment_at(&self, position: usize) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|s| !s.is_empty() && s.range().contains(&position))
    }
}
