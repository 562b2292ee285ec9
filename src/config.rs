//! Stream configuration
//!
//! A [`StreamConfig`] fully describes one generated stream: the concepts,
//! the transitions between them, the noise model and the seed.

use crate::concept::{max_effective_swaps, NUM_RELEVANT};
use crate::error::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for a single drifting stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Number of records in each concept, in stream order
    pub concept_lengths: Vec<usize>,
    /// Number of column swaps applied to each concept's table
    pub drift_magnitudes: Vec<usize>,
    /// Transition window between concept i and i + 1
    pub transition_lengths: Vec<usize>,
    /// Irrelevant attributes appended after the seven segments
    pub num_irrelevant: usize,
    /// Fraction of records that receive noise
    pub noise_rate: f64,
    /// Attribute indices eligible for a bit flip; empty disables attribute noise
    pub attribute_noise: Vec<usize>,
    /// Replace the label of every noisy record
    pub label_noise: bool,
    /// Master random seed
    pub seed: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            concept_lengths: vec![25_000, 25_000, 25_000, 25_000],
            drift_magnitudes: vec![1, 3, 2, 5],
            transition_lengths: vec![500, 500, 500],
            num_irrelevant: 17,
            noise_rate: 0.1,
            attribute_noise: (0..NUM_RELEVANT).collect(),
            label_noise: false,
            seed: 1,
        }
    }
}

impl StreamConfig {
    /// Create a noise-free configuration from concept layout only
    pub fn new(
        concept_lengths: Vec<usize>,
        drift_magnitudes: Vec<usize>,
        transition_lengths: Vec<usize>,
    ) -> Self {
        Self {
            concept_lengths,
            drift_magnitudes,
            transition_lengths,
            num_irrelevant: 0,
            noise_rate: 0.0,
            attribute_noise: Vec::new(),
            label_noise: false,
            seed: 0,
        }
    }

    /// Set the number of irrelevant attributes
    pub fn with_irrelevant(mut self, num_irrelevant: usize) -> Self {
        self.num_irrelevant = num_irrelevant;
        self
    }

    /// Set the noise model
    pub fn with_noise(mut self, rate: f64, attribute_noise: Vec<usize>, label_noise: bool) -> Self {
        self.noise_rate = rate;
        self.attribute_noise = attribute_noise;
        self.label_noise = label_noise;
        self
    }

    /// Set the master seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of concepts in the stream
    pub fn num_concepts(&self) -> usize {
        self.concept_lengths.len()
    }

    /// Number of concept boundaries
    pub fn num_drifts(&self) -> usize {
        self.transition_lengths.len()
    }

    /// Attribute count of every record
    pub fn num_attributes(&self) -> usize {
        NUM_RELEVANT + self.num_irrelevant
    }

    /// Length of the composed stream, transitions included
    pub fn total_length(&self) -> usize {
        self.concept_lengths.iter().sum::<usize>() + self.transition_lengths.iter().sum::<usize>()
    }

    /// Number of noisy records, `round(noise_rate * total_length)`
    pub fn noise_count(&self) -> usize {
        (self.noise_rate * self.total_length() as f64).round() as usize
    }

    /// Reject malformed configurations before any generation work
    pub fn validate(&self) -> Result<()> {
        if self.concept_lengths.is_empty() {
            return Err(GeneratorError::invalid("at least one concept is required"));
        }
        if let Some(i) = self.concept_lengths.iter().position(|&len| len == 0) {
            return Err(GeneratorError::invalid(format!(
                "concept {} has zero length",
                i
            )));
        }
        if self.drift_magnitudes.len() != self.concept_lengths.len() {
            return Err(GeneratorError::invalid(format!(
                "{} drift magnitudes given for {} concepts",
                self.drift_magnitudes.len(),
                self.concept_lengths.len()
            )));
        }
        if self.transition_lengths.len() + 1 != self.concept_lengths.len() {
            return Err(GeneratorError::invalid(format!(
                "{} transitions given for {} concepts, expected {}",
                self.transition_lengths.len(),
                self.concept_lengths.len(),
                self.concept_lengths.len() - 1
            )));
        }
        if !self.noise_rate.is_finite() || !(0.0..=1.0).contains(&self.noise_rate) {
            return Err(GeneratorError::invalid(format!(
                "noise rate {} outside [0, 1]",
                self.noise_rate
            )));
        }
        if self.noise_count() > self.total_length() {
            return Err(GeneratorError::invalid(format!(
                "{} noise locations requested from a stream of {} records",
                self.noise_count(),
                self.total_length()
            )));
        }
        let num_attributes = self.num_attributes();
        if let Some(&index) = self.attribute_noise.iter().find(|&&i| i >= num_attributes) {
            return Err(GeneratorError::invalid(format!(
                "attribute noise index {} outside [0, {})",
                index, num_attributes
            )));
        }

        let available = max_effective_swaps(self.num_irrelevant);
        if let Some(&magnitude) = self.drift_magnitudes.iter().find(|&&m| m > available) {
            return Err(GeneratorError::DegenerateDrift {
                magnitude,
                requested: available + 1,
                columns: num_attributes,
            });
        }

        Ok(())
    }

    /// Load configuration from a TOML file, or JSON when the extension says so
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Ok(config)
    }

    /// Save configuration as TOML, or JSON when the extension says so
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn two_concepts() -> StreamConfig {
        StreamConfig::new(vec![100, 100], vec![0, 2], vec![10])
    }

    #[test]
    fn test_default_is_valid() {
        let config = StreamConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_length(), 101_500);
        assert_eq!(config.num_attributes(), 24);
        assert_eq!(config.noise_count(), 10_150);
    }

    #[test]
    fn test_transition_count_mismatch() {
        let config = StreamConfig::new(vec![100, 100], vec![0, 2], vec![]);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_magnitude_count_mismatch() {
        let config = StreamConfig::new(vec![100, 100], vec![0], vec![5]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_length_concept() {
        let config = StreamConfig::new(vec![100, 0], vec![0, 1], vec![5]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_concepts() {
        let config = StreamConfig::new(vec![], vec![], vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_noise_rate_bounds() {
        assert!(two_concepts().with_noise(1.5, vec![], true).validate().is_err());
        assert!(two_concepts().with_noise(-0.1, vec![], true).validate().is_err());
        assert!(two_concepts().with_noise(f64::NAN, vec![], true).validate().is_err());
        assert!(two_concepts().with_noise(1.0, vec![0], true).validate().is_ok());
    }

    #[test]
    fn test_attribute_noise_index_range() {
        let config = two_concepts().with_noise(0.1, vec![7], false);
        assert!(config.validate().is_err());

        let config = two_concepts().with_irrelevant(1).with_noise(0.1, vec![7], false);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_degenerate_drift() {
        let config = StreamConfig::new(vec![10, 10], vec![0, 22], vec![0]);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GeneratorError::DegenerateDrift { .. }));
        assert!(err.is_configuration_error());

        let config = StreamConfig::new(vec![10, 10], vec![0, 21], vec![0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_single_concept_without_transitions() {
        let config = StreamConfig::new(vec![50], vec![0], vec![]);
        assert!(config.validate().is_ok());
        assert_eq!(config.num_drifts(), 0);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stream.toml");

        let config = StreamConfig::default().with_seed(7);
        config.save(&path).unwrap();
        let loaded = StreamConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_json_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stream.json");

        two_concepts().save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.trim_start().starts_with('{'));
        assert_eq!(StreamConfig::load(&path).unwrap(), two_concepts());
    }
}
