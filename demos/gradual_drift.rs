//! Gradual Drift Example
//!
//! Shows how the transition window shapes the drift between two concepts.
//!
//! Run with: cargo run --example gradual_drift

use led_drift_streams::stream::sigmoid;
use led_drift_streams::{StreamConfig, StreamGenerator};

fn main() -> anyhow::Result<()> {
    println!("=== Gradual vs Abrupt Drift ===\n");

    for width in [0usize, 10, 200] {
        let config = StreamConfig::new(vec![1000, 1000], vec![0, 4], vec![width]).with_seed(42);
        let generated = StreamGenerator::new(config)?.generate()?;

        println!("Window {}:", width);
        println!("  Total records: {}", generated.stream.len());
        println!("  Drift locations: {:?}", generated.metadata.drift_locations);
        println!("  Swaps in concept 1: {:?}", generated.concepts[1].table().swaps());

        if width > 0 {
            let origins = &generated.stream.origins()[1000..1000 + width];
            let quarter = (width / 4).max(1);
            for (q, chunk) in origins.chunks(quarter).enumerate() {
                let from_next = chunk.iter().filter(|&&o| o == 1).count();
                println!(
                    "  chunk {}: {:>3}/{:<3} from concept 1 (ramp {:.2})",
                    q,
                    from_next,
                    chunk.len(),
                    sigmoid(q * quarter + chunk.len() / 2, width)
                );
            }
        }
        println!();
    }

    Ok(())
}
