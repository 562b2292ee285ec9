//! Parameter sweep
//!
//! Enumerates stream configurations for drift-detection experiments and
//! writes one directory per generated stream.

use crate::concept::NUM_RELEVANT;
use crate::config::StreamConfig;
use crate::error::{GeneratorError, Result};
use crate::generator::StreamGenerator;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Value lists and switches for a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub concept_lengths: Vec<usize>,
    pub transition_lengths: Vec<usize>,
    pub noise_rates: Vec<f64>,
    pub magnitudes: Vec<usize>,
    pub num_irrelevant: usize,
    pub attribute_noise: Vec<usize>,
    pub label_noise: bool,
    pub max_drifts: usize,
    /// All concepts of a stream share one length
    pub equal_concept_length: bool,
    /// All transitions of a stream share one length
    pub equal_transition_length: bool,
    /// Seeds the draws of per-stream seeds and unequal lengths
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            concept_lengths: vec![1000, 10_000, 25_000],
            transition_lengths: vec![500, 1000, 10_000],
            noise_rates: vec![0.0, 0.1, 0.2, 0.3],
            magnitudes: (1..=7).collect(),
            num_irrelevant: 17,
            attribute_noise: (0..NUM_RELEVANT).collect(),
            label_noise: false,
            max_drifts: 5,
            equal_concept_length: true,
            equal_transition_length: true,
            seed: 0,
        }
    }
}

impl SweepConfig {
    /// Every stream configuration of the sweep.
    ///
    /// For each drift count, every `(drifts + 1)`-combination of magnitudes
    /// is crossed with each concept length, transition length and noise
    /// rate. Unequal lengths are drawn as a random multiset of the values.
    pub fn parameter_grid(&self) -> Result<Vec<StreamConfig>> {
        if self.max_drifts == 0 {
            return Err(GeneratorError::invalid("a sweep needs at least one drift"));
        }
        if self.concept_lengths.is_empty()
            || self.transition_lengths.is_empty()
            || self.noise_rates.is_empty()
        {
            return Err(GeneratorError::invalid("sweep value lists must not be empty"));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut grid = Vec::new();

        for num_drifts in 1..=self.max_drifts {
            let num_concepts = num_drifts + 1;
            let concept_choices = combinations_with_replacement(&self.concept_lengths, num_concepts);
            let transition_choices =
                combinations_with_replacement(&self.transition_lengths, num_drifts);

            for magnitudes in combinations(&self.magnitudes, num_concepts) {
                for &concept_len in &self.concept_lengths {
                    for &transition_len in &self.transition_lengths {
                        for &noise_rate in &self.noise_rates {
                            let concept_lengths = if self.equal_concept_length {
                                vec![concept_len; num_concepts]
                            } else {
                                pick(&concept_choices, &mut rng)
                            };
                            let transition_lengths = if self.equal_transition_length {
                                vec![transition_len; num_drifts]
                            } else {
                                pick(&transition_choices, &mut rng)
                            };

                            grid.push(StreamConfig {
                                concept_lengths,
                                drift_magnitudes: magnitudes.clone(),
                                transition_lengths,
                                num_irrelevant: self.num_irrelevant,
                                noise_rate,
                                attribute_noise: self.attribute_noise.clone(),
                                label_noise: self.label_noise,
                                seed: rng.gen_range(0..1000),
                            });
                        }
                    }
                }
            }
        }

        Ok(grid)
    }
}

/// One stream written by a sweep
#[derive(Debug, Clone)]
pub struct SweepEntry {
    pub name: String,
    pub data_path: PathBuf,
    pub meta_path: PathBuf,
    pub total_len: usize,
}

/// Generate and save streams as `<root>/<prefix>_<n>/<prefix>_<n>.{arff,json}`
pub fn run_sweep<P: AsRef<Path>>(
    configs: &[StreamConfig],
    root: P,
    prefix: &str,
) -> Result<Vec<SweepEntry>> {
    let root = root.as_ref();
    let mut entries = Vec::with_capacity(configs.len());

    for (count, config) in configs.iter().enumerate() {
        let name = format!("{}_{}", prefix, count);
        let generated = StreamGenerator::new(config.clone())?.generate()?;
        let (data_path, meta_path) = generated.save(root.join(&name), &name)?;

        info!(
            "[{}/{}] {} ({} records)",
            count + 1,
            configs.len(),
            name,
            generated.stream.len()
        );

        entries.push(SweepEntry {
            name,
            data_path,
            meta_path,
            total_len: generated.stream.len(),
        });
    }

    Ok(entries)
}

fn pick<R: Rng + ?Sized>(choices: &[Vec<usize>], rng: &mut R) -> Vec<usize> {
    choices.choose(rng).cloned().unwrap_or_default()
}

/// `k`-combinations of `items` in lexicographic index order
fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if k > n {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        result.push(indices.iter().map(|&i| items[i].clone()).collect());

        // rightmost index that can still advance
        let Some(i) = (0..k).rev().find(|&i| indices[i] != i + n - k) else {
            return result;
        };
        indices[i] += 1;
        for j in (i + 1)..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

/// `k`-multisets of `items` in lexicographic index order
fn combinations_with_replacement<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if n == 0 {
        return if k == 0 { vec![Vec::new()] } else { Vec::new() };
    }

    let mut result = Vec::new();
    let mut indices = vec![0usize; k];
    loop {
        result.push(indices.iter().map(|&i| items[i].clone()).collect());

        let Some(i) = (0..k).rev().find(|&i| indices[i] != n - 1) else {
            return result;
        };
        let next = indices[i] + 1;
        for index in indices.iter_mut().skip(i) {
            *index = next;
        }
    }
}
