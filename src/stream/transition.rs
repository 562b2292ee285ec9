//! Transition zones between adjacent concepts
//!
//! Inside a window of width `W`, record `j` comes from the next concept with
//! probability [`sigmoid`]`(j, W)`. Wide windows give gradual drift, narrow
//! ones approach abrupt drift.

use crate::concept::RecordSource;
use crate::record::Record;
use rand::{Rng, RngCore};

/// Steepness of the ramp, scaled by the window width
const STEEPNESS: f64 = 8.0;

/// Logistic ramp centred on the window midpoint.
///
/// `sigmoid(0, w) ≈ 0.018` and `sigmoid(w, w) ≈ 0.982` for every `w > 0`.
pub fn sigmoid(position: usize, width: usize) -> f64 {
    if width == 0 {
        return 1.0;
    }
    let w = width as f64;
    let k = STEEPNESS / w;
    1.0 / (1.0 + (-k * (position as f64 - w / 2.0)).exp())
}

/// Records drawn for one boundary, with the concept each came from
#[derive(Debug, Clone, Default)]
pub struct TransitionZone {
    /// Boundary index: blends concept `boundary` into `boundary + 1`
    pub boundary: usize,
    pub records: Vec<Record>,
    pub origins: Vec<usize>,
}

impl TransitionZone {
    /// Draw `width` records blending `from` into `to`
    pub fn generate<S: RecordSource + ?Sized>(
        boundary: usize,
        width: usize,
        from: &S,
        to: &S,
        rng: &mut dyn RngCore,
    ) -> Self {
        let mut records = Vec::with_capacity(width);
        let mut origins = Vec::with_capacity(width);

        for j in 0..width {
            if rng.gen::<f64>() < sigmoid(j, width) {
                records.push(to.create_record(rng));
                origins.push(boundary + 1);
            } else {
                records.push(from.create_record(rng));
                origins.push(boundary);
            }
        }

        Self {
            boundary,
            records,
            origins,
        }
    }

    /// Number of records in the zone
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check for an empty zone
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
