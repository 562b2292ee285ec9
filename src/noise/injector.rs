//! In-place attribute and label corruption

use super::NoiseLocations;
use crate::concept::NUM_CLASSES;
use crate::error::{GeneratorError, Result};
use crate::record::Record;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What was changed at one noise location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseEvent {
    pub position: usize,
    /// Attribute whose bit was complemented
    pub flipped_attribute: Option<usize>,
    /// Label before label noise
    pub original_label: u8,
    /// Replacement label, when label noise is on
    pub new_label: Option<u8>,
}

/// Corrupts records at precomputed locations
#[derive(Debug, Clone)]
pub struct NoiseInjector<'a> {
    attribute_indices: &'a [usize],
    label_noise: bool,
}

impl<'a> NoiseInjector<'a> {
    /// Create an injector.
    ///
    /// # Arguments
    ///
    /// * `attribute_indices` - Attributes eligible for a bit flip; empty disables attribute noise
    /// * `label_noise` - Replace the label at every location
    pub fn new(attribute_indices: &'a [usize], label_noise: bool) -> Self {
        Self {
            attribute_indices,
            label_noise,
        }
    }

    /// Check if attribute noise is enabled
    pub fn attribute_noise(&self) -> bool {
        !self.attribute_indices.is_empty()
    }

    /// Check if label noise is enabled
    pub fn label_noise(&self) -> bool {
        self.label_noise
    }

    /// Apply noise in place and report each change.
    ///
    /// Attribute flips run over all locations first, then label
    /// replacement; the stream length never changes.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        records: &mut [Record],
        locations: &NoiseLocations,
        rng: &mut R,
    ) -> Result<Vec<NoiseEvent>> {
        self.check(records, locations)?;

        let mut events: Vec<NoiseEvent> = locations
            .as_slice()
            .iter()
            .map(|&position| NoiseEvent {
                position,
                flipped_attribute: None,
                original_label: records[position].label,
                new_label: None,
            })
            .collect();

        if self.attribute_noise() {
            for event in events.iter_mut() {
                if let Some(&index) = self.attribute_indices.choose(rng) {
                    records[event.position].flip(index);
                    event.flipped_attribute = Some(index);
                }
            }
        }

        if self.label_noise {
            for event in events.iter_mut() {
                let current = records[event.position].label;
                let mut replacement = rng.gen_range(0..NUM_CLASSES as u8);
                while replacement == current {
                    replacement = rng.gen_range(0..NUM_CLASSES as u8);
                }
                records[event.position].label = replacement;
                event.new_label = Some(replacement);
            }
        }

        Ok(events)
    }

    fn check(&self, records: &[Record], locations: &NoiseLocations) -> Result<()> {
        if let Some(&position) = locations.as_slice().iter().find(|&&p| p >= records.len()) {
            return Err(GeneratorError::invalid(format!(
                "noise location {} outside stream of {} records",
                position,
                records.len()
            )));
        }
        let width = records.iter().map(|r| r.len()).min().unwrap_or(0);
        if !records.is_empty() {
            if let Some(&index) = self.attribute_indices.iter().find(|&&i| i >= width) {
                return Err(GeneratorError::invalid(format!(
                    "attribute noise index {} outside records of {} attributes",
                    index, width
                )));
            }
        }
        Ok(())
    }
}
