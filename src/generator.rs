//! Drifting stream generator
//!
//! Drives the full pipeline for one [`StreamConfig`]: noise locations,
//! concept tables, composition, noise injection and metadata.

use crate::arff;
use crate::concept::Concept;
use crate::config::StreamConfig;
use crate::error::Result;
use crate::metadata::StreamMetadata;
use crate::noise::{NoiseEvent, NoiseInjector, NoiseLocations};
use crate::stream::{Stream, StreamComposer};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Independent seeds derived from the master seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubSeeds {
    /// Noise location sampling
    pub locations: u64,
    /// Concept table drift
    pub concepts: u64,
    /// Record generation and noise values
    pub records: u64,
}

impl SubSeeds {
    /// Derive the sub-seeds from a master seed
    pub fn derive(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            locations: rng.next_u64(),
            concepts: rng.next_u64(),
            records: rng.next_u64(),
        }
    }
}

/// Everything produced for one configuration
#[derive(Debug, Clone)]
pub struct GeneratedStream {
    pub stream: Stream,
    pub concepts: Vec<Concept>,
    pub noise_locations: NoiseLocations,
    pub noise_events: Vec<NoiseEvent>,
    pub metadata: StreamMetadata,
}

impl GeneratedStream {
    /// Write the records as ARFF
    pub fn write_arff<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        arff::write_arff(path, self.stream.num_attributes(), self.stream.records())
    }

    /// Write `<dir>/<name>.arff` and `<dir>/<name>.json`, creating `dir`
    pub fn save<P: AsRef<Path>>(&self, dir: P, name: &str) -> Result<(PathBuf, PathBuf)> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let data_path = dir.join(format!("{}.arff", name));
        let meta_path = dir.join(format!("{}.json", name));
        self.write_arff(&data_path)?;
        self.metadata.save(&meta_path)?;

        Ok((data_path, meta_path))
    }
}

/// Generator for one validated configuration
#[derive(Debug, Clone)]
pub struct StreamGenerator {
    config: StreamConfig,
    seeds: SubSeeds,
}

impl StreamGenerator {
    /// Validate `config` and prepare its seeds
    pub fn new(config: StreamConfig) -> Result<Self> {
        config.validate()?;
        let seeds = SubSeeds::derive(config.seed);
        Ok(Self { config, seeds })
    }

    /// The configuration being generated
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Seeds used by each stage
    pub fn seeds(&self) -> SubSeeds {
        self.seeds
    }

    /// Noise positions over the full composed stream, transitions included
    pub fn noise_locations(&self) -> Result<NoiseLocations> {
        let mut rng = StdRng::seed_from_u64(self.seeds.locations);
        NoiseLocations::sample(&mut rng, self.config.total_length(), self.config.noise_count())
    }

    /// One freshly drifted table per concept.
    ///
    /// Every entry of `drift_magnitudes` is applied, the first included.
    pub fn concepts(&self) -> Result<Vec<Concept>> {
        let mut rng = StdRng::seed_from_u64(self.seeds.concepts);
        self.config
            .concept_lengths
            .iter()
            .zip(&self.config.drift_magnitudes)
            .map(|(&length, &magnitude)| {
                Concept::drifted(length, self.config.num_irrelevant, magnitude, &mut rng)
            })
            .collect()
    }

    /// Run the full pipeline
    pub fn generate(&self) -> Result<GeneratedStream> {
        let noise_locations = self.noise_locations()?;
        let concepts = self.concepts()?;
        for (i, concept) in concepts.iter().enumerate() {
            debug!(concept = i, swaps = ?concept.table().swaps(), "built concept table");
        }

        let mut rng = StdRng::seed_from_u64(self.seeds.records);
        let composer = StreamComposer::new(&concepts, &self.config.transition_lengths)?;
        let mut stream = composer.compose(&mut rng);

        let injector = NoiseInjector::new(&self.config.attribute_noise, self.config.label_noise);
        let noise_events = injector.apply(stream.records_mut(), &noise_locations, &mut rng)?;

        let swaps = concepts
            .iter()
            .map(|c| c.table().swaps().to_vec())
            .collect();
        let metadata = StreamMetadata::compute(&self.config, &noise_locations).with_swaps(swaps);

        info!(
            "Generated {} records: {} concepts, {} drifts, {} noisy",
            stream.len(),
            concepts.len(),
            self.config.num_drifts(),
            noise_locations.len()
        );

        Ok(GeneratedStream {
            stream,
            concepts,
            noise_locations,
            noise_events,
            metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneratorError;

    #[test]
    fn test_sub_seeds_differ() {
        let seeds = SubSeeds::derive(1);
        assert_ne!(seeds.locations, seeds.concepts);
        assert_ne!(seeds.concepts, seeds.records);
        assert_eq!(seeds, SubSeeds::derive(1));
        assert_ne!(seeds, SubSeeds::derive(2));
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = StreamConfig::new(vec![10, 10], vec![0, 1], vec![1, 1]);
        let err = StreamGenerator::new(config).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_generate_matches_metadata() {
        let config = StreamConfig::new(vec![200, 300, 250], vec![0, 2, 4], vec![40, 60])
            .with_irrelevant(3)
            .with_noise(0.05, (0..7).collect(), true)
            .with_seed(17);
        let generated = StreamGenerator::new(config).unwrap().generate().unwrap();

        assert_eq!(generated.stream.len(), 850);
        assert_eq!(generated.metadata.total_len, 850);
        assert_eq!(generated.metadata.drift_locations, vec![[200, 240], [540, 600]]);
        assert_eq!(generated.noise_locations.len(), 43);
        assert_eq!(generated.noise_events.len(), 43);
        assert_eq!(generated.metadata.concept_swaps[2].len(), 4);

        for (i, &[start, end]) in generated.metadata.drift_locations.iter().enumerate() {
            let origins = &generated.stream.origins()[start..end];
            assert!(origins.iter().all(|&o| o == i || o == i + 1));
        }
    }

    #[test]
    fn test_same_seed_reproduces() {
        let config = StreamConfig::new(vec![100, 100], vec![0, 3], vec![20])
            .with_irrelevant(2)
            .with_noise(0.1, vec![0, 1, 2], true)
            .with_seed(5);
        let a = StreamGenerator::new(config.clone()).unwrap().generate().unwrap();
        let b = StreamGenerator::new(config).unwrap().generate().unwrap();

        assert_eq!(a.stream.records(), b.stream.records());
        assert_eq!(a.noise_locations, b.noise_locations);
        assert_eq!(a.metadata, b.metadata);
    }
}
