//! Synthetic keystroke-timing dataset generator.
//!
//! Writes one CSV per emotion label under the output directory, each row a
//! fixed-length sequence of inter-keystroke intervals in milliseconds with
//! the timing signature of that emotion. The CSVs are the training corpus
//! for the keystroke classifier; training itself happens offline.
//!
//! Usage:
//!   cargo run --bin generate_dataset -- [output_dir]

use anyhow::{Context, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::info;

use emotionsense::classifier::SEQUENCE_LEN;

/// Rows generated per emotion.
const SAMPLES: usize = 250;

/// Intervals are clipped to a plausible typing range.
const MIN_INTERVAL_MS: f32 = 10.0;
const MAX_INTERVAL_MS: f32 = 800.0;

fn generate_row(emotion: &str, rng: &mut impl Rng) -> Result<Vec<f32>> {
    let row = match emotion {
        // Fast and very consistent
        "happy" => sample_normal(40.0, 5.0, rng)?,
        // Medium and steady
        "calm" => sample_normal(85.0, 10.0, rng)?,
        // Slow and heavy
        "sad" => sample_normal(450.0, 50.0, rng)?,
        // Rapid bursts mixed with sudden stops
        "stressed" => (0..SEQUENCE_LEN)
            .map(|_| {
                if rng.gen_bool(0.7) {
                    rng.gen_range(20.0..80.0)
                } else {
                    rng.gen_range(200.0..550.0)
                }
            })
            .collect(),
        other => anyhow::bail!("unknown emotion label: {}", other),
    };

    Ok(row
        .into_iter()
        .map(|v| v.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS))
        .collect())
}

fn sample_normal(mean: f32, std_dev: f32, rng: &mut impl Rng) -> Result<Vec<f32>> {
    let normal = Normal::new(mean, std_dev).context("invalid normal distribution parameters")?;
    Ok((0..SEQUENCE_LEN).map(|_| normal.sample(rng)).collect())
}

fn write_csv(path: &Path, rows: &[Vec<f32>]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("failed to create {:?}", path))?;

    for row in rows {
        let line: Vec<String> = row.iter().map(|v| format!("{}", *v as i64)).collect();
        writeln!(file, "{}", line.join(","))?;
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let output_dir = args.get(1).map(String::as_str).unwrap_or("dataset");
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {:?}", output_dir))?;

    let mut rng = rand::thread_rng();

    for emotion in ["happy", "sad", "calm", "stressed"] {
        let rows: Vec<Vec<f32>> = (0..SAMPLES)
            .map(|_| generate_row(emotion, &mut rng))
            .collect::<Result<_>>()?;

        let path = Path::new(output_dir).join(format!("{}.csv", emotion));
        write_csv(&path, &rows)?;
        info!("Wrote {} rows to {:?}", rows.len(), path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_row_length_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for emotion in ["happy", "sad", "calm", "stressed"] {
            let row = generate_row(emotion, &mut rng).unwrap();
            assert_eq!(row.len(), SEQUENCE_LEN);
            assert!(row
                .iter()
                .all(|&v| (MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&v)));
        }
    }

    #[test]
    fn test_unknown_label_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate_row("bored", &mut rng).is_err());
    }

    #[test]
    fn test_happy_faster_than_sad() {
        let mut rng = StdRng::seed_from_u64(7);
        let happy: f32 = generate_row("happy", &mut rng).unwrap().iter().sum();
        let sad: f32 = generate_row("sad", &mut rng).unwrap().iter().sum();
        assert!(happy < sad);
    }
}
