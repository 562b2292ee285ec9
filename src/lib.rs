//! LED Concept Drift Streams
//!
//! This library synthesizes labeled data streams with controlled,
//! reproducible concept drift for benchmarking online learners and
//! drift detectors. Records are seven-segment digits (optionally padded
//! with irrelevant attributes); each concept permutes the segment columns,
//! and sigmoid transition zones blend one concept into the next.
//!
//! # Modules
//!
//! - `concept` - Digit tables, column drift and record generation
//! - `stream` - Stream layout, transition zones and composition
//! - `noise` - Noise location sampling and injection
//! - `metadata` - Drift locations and summary statistics
//! - `generator` - End-to-end generation for one configuration
//! - `arff` - ARFF output
//! - `sweep` - Experiment parameter sweeps
//!
//! # Example
//!
//! ```rust,no_run
//! use led_drift_streams::{StreamConfig, StreamGenerator};
//!
//! fn main() -> led_drift_streams::Result<()> {
//!     let config = StreamConfig::new(vec![1000, 1000], vec![0, 3], vec![100])
//!         .with_irrelevant(17)
//!         .with_noise(0.1, (0..7).collect(), false)
//!         .with_seed(42);
//!
//!     let generated = StreamGenerator::new(config)?.generate()?;
//!     generated.save("data_streams/led_test", "led_test")?;
//!     Ok(())
//! }
//! ```

pub mod arff;
pub mod concept;
pub mod config;
pub mod error;
pub mod generator;
pub mod metadata;
pub mod noise;
pub mod record;
pub mod stream;
pub mod sweep;

// Re-export commonly used types
pub use concept::{Concept, DigitTable, RecordSource};
pub use config::StreamConfig;
pub use error::{GeneratorError, Result};
pub use generator::{GeneratedStream, StreamGenerator, SubSeeds};
pub use metadata::StreamMetadata;
pub use noise::{NoiseInjector, NoiseLocations};
pub use record::Record;
pub use stream::{Stream, StreamComposer, StreamLayout};
pub use sweep::SweepConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
