//! Streaming Classification: learn and predict from a gapped record stream.
//!
//! Demonstrates the online loop:
//!
//! 1. Encode a scalar reading into a sparse activation pattern
//! 2. Ask the classifier for a prediction before the label is learned
//! 3. Learn the sample whenever the encoder reports a bucket
//! 4. Look back into pattern history by learning iteration
//!
//! Run: cargo run --example streaming_classification --release

use knn_memory::{Classification, KnnClassifier, KnnConfig, Pattern};

const WIDTH: usize = 64;
const ACTIVE: usize = 8;
const BUCKETS: usize = WIDTH - ACTIVE + 1;

/// Simple contiguous-run scalar encoder: nearby values share bits.
fn encode(value: f64, min: f64, max: f64) -> (usize, Pattern) {
    let clamped = value.clamp(min, max);
    let bucket = (((clamped - min) / (max - min)) * (BUCKETS - 1) as f64).round() as usize;
    let active: Vec<usize> = (bucket..bucket + ACTIVE).collect();
    let pattern = Pattern::from_active_indices(WIDTH, &active).expect("bucket fits width");
    (bucket, pattern)
}

fn label(value: f64) -> &'static str {
    match value {
        v if v < 30.0 => "cold",
        v if v < 70.0 => "mild",
        _ => "hot",
    }
}

fn main() -> knn_memory::Result<()> {
    println!("=== Streaming k-NN classification ===\n");

    let config = KnnConfig::default().with_k(3).with_max_steps(5);
    let mut classifier = KnnClassifier::with_config(config)?;

    // Record numbers start at 1000 and skip a few values.
    let stream: Vec<(i64, f64)> = (0..60)
        .filter(|i| i % 7 != 3)
        .map(|i| (1000 + i, 50.0 + 45.0 * ((i as f64) * 0.37).sin()))
        .collect();

    let mut correct = 0;
    let mut scored = 0;
    for &(record_num, reading) in &stream {
        let (bucket, pattern) = encode(reading, 0.0, 100.0);
        let truth = label(reading);
        let info = Classification::new(bucket, truth);

        let result = classifier.compute(record_num, &info, pattern, true, true)?;
        if let Some(result) = result {
            scored += 1;
            if *result.winner() == truth {
                correct += 1;
            }
            println!(
                "record {:>5}  iter {:>3}  reading {:>6.2}  truth {:<4}  predicted {:<4}  votes {}",
                record_num,
                classifier.learn_iteration(),
                reading,
                truth,
                result.winner(),
                result.votes(result.winner()).unwrap_or(0),
            );
        }
    }

    println!(
        "\nAccuracy: {}/{} ({:.1}%)",
        correct,
        scored,
        100.0 * correct as f64 / scored.max(1) as f64
    );
    println!("Stored observations: {}", classifier.len());

    println!("\nPattern history (oldest first):");
    for entry in classifier.history().iter() {
        println!(
            "  iter {:>3}: active bits {:?}",
            entry.iteration,
            entry.pattern.active_indices()
        );
    }

    Ok(())
}
