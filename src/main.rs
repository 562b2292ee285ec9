//! LED Drift Stream CLI
//!
//! Generates drifting LED streams as ARFF files with JSON metadata.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use led_drift_streams::sweep::{run_sweep, SweepConfig};
use led_drift_streams::{StreamConfig, StreamGenerator, StreamMetadata};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "led-drift")]
#[command(about = "Synthetic LED streams with controlled concept drift")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single stream
    Generate {
        /// Stream configuration (TOML or JSON); defaults when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the random seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Override the noise rate
        #[arg(short, long)]
        noise_rate: Option<f64>,

        /// Enable label noise
        #[arg(long)]
        label_noise: bool,

        /// Output root directory
        #[arg(short, long, default_value = "data_streams/synthetic")]
        output: PathBuf,

        /// Stream name
        #[arg(long, default_value = "led_test")]
        name: String,
    },

    /// Generate a parameter sweep of streams
    Sweep {
        /// Output root directory
        #[arg(short, long, default_value = "data_streams/synthetic")]
        output: PathBuf,

        /// Maximum number of drifts per stream
        #[arg(short, long, default_value = "5")]
        max_drifts: usize,

        /// Draw concept lengths independently per concept
        #[arg(long)]
        unequal_concepts: bool,

        /// Draw transition lengths independently per boundary
        #[arg(long)]
        unequal_transitions: bool,

        /// Sweep seed
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Stream name prefix
        #[arg(long, default_value = "led")]
        prefix: String,

        /// Generate at most this many streams
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only count the configurations
        #[arg(long)]
        dry_run: bool,
    },

    /// Summarize a saved metadata file
    Inspect {
        /// Metadata JSON file
        path: PathBuf,
    },

    /// Write the default stream configuration
    InitConfig {
        /// Destination (TOML, or JSON by extension)
        path: PathBuf,
    },
}

/// Log directive used when RUST_LOG is unset
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "led_drift_streams=debug,led_drift=debug,info"
    } else {
        "info"
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(cli.verbose)));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Generate {
            config,
            seed,
            noise_rate,
            label_noise,
            output,
            name,
        } => {
            let mut stream_config = match &config {
                Some(path) => StreamConfig::load(path)
                    .with_context(|| format!("Failed to load config: {:?}", path))?,
                None => StreamConfig::default(),
            };
            if let Some(seed) = seed {
                stream_config.seed = seed;
            }
            if let Some(rate) = noise_rate {
                stream_config.noise_rate = rate;
            }
            if label_noise {
                stream_config.label_noise = true;
            }

            info!(
                "Generating {} with {} concepts (seed {})",
                name,
                stream_config.num_concepts(),
                stream_config.seed
            );
            let generated = StreamGenerator::new(stream_config)?.generate()?;
            let (data_path, meta_path) = generated
                .save(output.join(&name), &name)
                .with_context(|| format!("Failed to save stream {}", name))?;

            info!("Data: {:?}", data_path);
            info!("Metadata: {:?}", meta_path);
            info!("Drift locations: {:?}", generated.metadata.drift_locations);
        }

        Commands::Sweep {
            output,
            max_drifts,
            unequal_concepts,
            unequal_transitions,
            seed,
            prefix,
            limit,
            dry_run,
        } => {
            let sweep = SweepConfig {
                max_drifts,
                equal_concept_length: !unequal_concepts,
                equal_transition_length: !unequal_transitions,
                seed,
                ..SweepConfig::default()
            };
            let mut grid = sweep.parameter_grid()?;
            info!("Sweep has {} configurations", grid.len());

            if let Some(limit) = limit {
                if limit < grid.len() {
                    warn!("Limiting sweep to the first {} configurations", limit);
                    grid.truncate(limit);
                }
            }

            if dry_run {
                let records: usize = grid.iter().map(|c| c.total_length()).sum();
                info!("Dry run: {} streams, {} records in total", grid.len(), records);
                return Ok(());
            }

            let entries = run_sweep(&grid, &output, &prefix)?;
            info!("Wrote {} streams to {:?}", entries.len(), output);
        }

        Commands::Inspect { path } => {
            let meta = StreamMetadata::load(&path)
                .with_context(|| format!("Failed to load metadata: {:?}", path))?;

            println!("=== {} ===", path.display());
            println!("Total length:      {}", meta.total_len);
            println!("Concepts:          {:?}", meta.config.concept_lengths);
            println!("Drift magnitudes:  {:?}", meta.config.drift_magnitudes);
            println!("Drifts:            {}", meta.num_drifts);
            for (i, [start, end]) in meta.drift_locations.iter().enumerate() {
                println!("  drift {}: [{}, {})", i, start, end);
            }
            println!(
                "Noise:             {} locations ({:.1}%)",
                meta.noise_locations.len(),
                meta.config.noise_rate * 100.0
            );
            println!("Equal concepts:    {}", meta.equal_concept_length);
            println!("Equal transitions: {}", meta.equal_transition_length);
        }

        Commands::InitConfig { path } => {
            if path.exists() {
                bail!("Refusing to overwrite {:?}", path);
            }
            StreamConfig::default()
                .save(&path)
                .with_context(|| format!("Failed to write config: {:?}", path))?;
            info!("Wrote default configuration to {:?}", path);
        }
    }

    Ok(())
}
