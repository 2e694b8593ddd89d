//! Performance benchmarks for forecast-core

use std::time::Instant;

use chrono::NaiveDate;
use forecast_core::{
    ConfidenceLevel, ForecastGenerator, LeastSquaresTrend, SeededNoise, TrendEstimator,
};

fn generate_series(n: usize) -> Vec<forecast_core::CostPoint> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let values: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64;
            1000.0 + t * 0.5 + 50.0 * (t * 0.1).sin()
        })
        .collect();
    data_spi::daily_series(start, &values).unwrap()
}

fn bench<F>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut(),
{
    // Warmup
    for _ in 0..3 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:30} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== forecast-core benchmarks ===\n");

    for n in [1_000, 10_000, 100_000] {
        let series = generate_series(n);

        bench(&format!("trend n={}", n), 100, || {
            let _ = LeastSquaresTrend.estimate(&series).unwrap();
        });

        let generator = ForecastGenerator::default();
        bench(&format!("forecast 365d n={}", n), 100, || {
            let _ = generator
                .generate(&series, 365, ConfidenceLevel::Medium)
                .unwrap();
        });

        bench(&format!("forecast 365d noisy n={}", n), 100, || {
            let mut noise = SeededNoise::new(42);
            let _ = generator
                .generate_with_noise(&series, 365, ConfidenceLevel::High, &mut noise)
                .unwrap();
        });
    }
}
