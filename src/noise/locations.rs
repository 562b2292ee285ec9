//! Noise location sampling

use crate::error::{GeneratorError, Result};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Distinct record positions selected for corruption, in draw order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoiseLocations(Vec<usize>);

impl NoiseLocations {
    /// Draw `count` distinct positions from `[0, total_length)`
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, total_length: usize, count: usize) -> Result<Self> {
        if count > total_length {
            return Err(GeneratorError::invalid(format!(
                "cannot sample {} noise locations from {} records",
                count, total_length
            )));
        }
        Ok(Self(index::sample(rng, total_length, count).into_vec()))
    }

    /// Draw `round(rate * total_length)` positions
    pub fn from_rate<R: Rng + ?Sized>(rng: &mut R, total_length: usize, rate: f64) -> Result<Self> {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(GeneratorError::invalid(format!(
                "noise rate {} outside [0, 1]",
                rate
            )));
        }
        let count = (rate * total_length as f64).round() as usize;
        Self::sample(rng, total_length, count)
    }

    /// Positions in draw order
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no noise will be injected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Positions in ascending order
    pub fn sorted(&self) -> Vec<usize> {
        let mut positions = self.0.clone();
        positions.sort_unstable();
        positions
    }
}

impl From<Vec<usize>> for NoiseLocations {
    fn from(positions: Vec<usize>) -> Self {
        Self(positions)
    }
}
