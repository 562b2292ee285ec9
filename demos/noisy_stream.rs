//! Noisy Stream Example
//!
//! Generates a four-concept stream with attribute and label noise and
//! writes it as ARFF plus JSON metadata.
//!
//! Run with: cargo run --example noisy_stream

use led_drift_streams::{StreamConfig, StreamGenerator};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Noisy LED Stream ===\n");

    let config = StreamConfig {
        concept_lengths: vec![5000, 5000, 5000, 5000],
        label_noise: true,
        seed: 7,
        ..StreamConfig::default()
    };

    let generated = StreamGenerator::new(config)?.generate()?;
    let output = std::env::temp_dir().join("led_noisy");
    let (data_path, meta_path) = generated.save(&output, "led_noisy")?;

    println!("Records:         {}", generated.stream.len());
    println!("Attributes:      {}", generated.stream.num_attributes());
    println!("Drift locations: {:?}", generated.metadata.drift_locations);
    println!("Noisy records:   {}", generated.noise_events.len());

    for event in generated.noise_events.iter().take(5) {
        println!(
            "  position {:>6}: flipped {:?}, label {} -> {:?}",
            event.position, event.flipped_attribute, event.original_label, event.new_label
        );
    }

    println!("\nData:     {}", data_path.display());
    println!("Metadata: {}", meta_path.display());

    Ok(())
}
