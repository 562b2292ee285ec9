//! Stream metadata
//!
//! Ground-truth description of a generated stream: where the drifts are,
//! which records are noisy and the configuration that produced it.

use crate::config::StreamConfig;
use crate::error::Result;
use crate::noise::NoiseLocations;
use crate::stream::StreamLayout;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Summary of one generated stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamMetadata {
    pub total_len: usize,
    pub num_drifts: usize,
    /// `[start, end)` of each transition zone
    pub drift_locations: Vec<[usize; 2]>,
    pub noise_locations: Vec<usize>,
    pub equal_concept_length: bool,
    pub equal_transition_length: bool,
    /// Column swaps applied to each concept's table
    #[serde(default)]
    pub concept_swaps: Vec<Vec<(usize, usize)>>,
    #[serde(flatten)]
    pub config: StreamConfig,
}

impl StreamMetadata {
    /// Derive metadata from the configuration and noise locations.
    ///
    /// Drift locations come from [`StreamLayout`], the same layout the
    /// composer assembles records by.
    pub fn compute(config: &StreamConfig, noise_locations: &NoiseLocations) -> Self {
        let layout = StreamLayout::new(&config.concept_lengths, &config.transition_lengths);

        Self {
            total_len: layout.total_length(),
            num_drifts: config.transition_lengths.len(),
            drift_locations: layout.drift_intervals(),
            noise_locations: noise_locations.as_slice().to_vec(),
            equal_concept_length: all_equal(&config.concept_lengths),
            equal_transition_length: all_equal(&config.transition_lengths),
            concept_swaps: Vec::new(),
            config: config.clone(),
        }
    }

    /// Attach the swaps each concept's table was built with
    pub fn with_swaps(mut self, concept_swaps: Vec<Vec<(usize, usize)>>) -> Self {
        self.concept_swaps = concept_swaps;
        self
    }

    /// Check if `position` lies inside any transition zone
    pub fn in_transition(&self, position: usize) -> bool {
        self.drift_locations
            .iter()
            .any(|&[start, end]| (start..end).contains(&position))
    }

    /// Save metadata as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Load metadata from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn all_equal(values: &[usize]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config() -> StreamConfig {
        StreamConfig::new(vec![100, 200, 300], vec![0, 1, 2], vec![10, 20])
    }

    #[test]
    fn test_drift_locations_running_sum() {
        let meta = StreamMetadata::compute(&config(), &NoiseLocations::default());
        assert_eq!(meta.total_len, 630);
        assert_eq!(meta.num_drifts, 2);
        assert_eq!(meta.drift_locations, vec![[100, 110], [310, 330]]);
        assert!(!meta.equal_concept_length);
        assert!(!meta.equal_transition_length);
    }

    #[test]
    fn test_equal_flags() {
        let config = StreamConfig::new(vec![50, 50, 50], vec![0, 1, 1], vec![5, 5]);
        let meta = StreamMetadata::compute(&config, &NoiseLocations::default());
        assert!(meta.equal_concept_length);
        assert!(meta.equal_transition_length);

        let single = StreamConfig::new(vec![50], vec![0], vec![]);
        let meta = StreamMetadata::compute(&single, &NoiseLocations::default());
        assert!(meta.equal_transition_length);
        assert!(meta.drift_locations.is_empty());
    }

    #[test]
    fn test_compute_is_pure() {
        let noise = NoiseLocations::from(vec![3, 1, 400]);
        let a = StreamMetadata::compute(&config(), &noise);
        let b = StreamMetadata::compute(&config(), &noise);
        assert_eq!(a, b);
        assert_eq!(a.noise_locations, vec![3, 1, 400]);
    }

    #[test]
    fn test_in_transition() {
        let meta = StreamMetadata::compute(&config(), &NoiseLocations::default());
        assert!(meta.in_transition(100));
        assert!(meta.in_transition(109));
        assert!(!meta.in_transition(110));
        assert!(meta.in_transition(329));
    }

    #[test]
    fn test_json_echoes_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meta.json");

        let meta = StreamMetadata::compute(&config(), &NoiseLocations::from(vec![5]))
            .with_swaps(vec![vec![], vec![(0, 3)], vec![(1, 2), (4, 6)]]);
        meta.save(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["concept_lengths"], serde_json::json!([100, 200, 300]));
        assert_eq!(value["total_len"], 630);

        assert_eq!(StreamMetadata::load(&path).unwrap(), meta);
    }
}
