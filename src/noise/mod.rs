//! Noise injection
//!
//! Noise positions are fixed up front from their own seed; the injector then
//! flips one eligible attribute bit and/or replaces the label at each.

mod injector;
mod locations;

pub use injector::{NoiseEvent, NoiseInjector};
pub use locations::NoiseLocations;
