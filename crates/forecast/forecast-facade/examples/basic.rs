//! Basic example demonstrating trend estimation and forecasting
//!
//! Run with: cargo run --example basic -p forecast-facade

use chrono::NaiveDate;
use forecast_facade::{
    estimate_trend, summarize, ConfidenceLevel, CostPoint, ForecastGenerator, SeededNoise,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== forecast-facade Basic Examples ===\n");

    let start = NaiveDate::from_ymd_opt(2024, 3, 1).ok_or("bad start date")?;
    let values = [
        812.0, 825.5, 819.0, 840.2, 851.7, 848.9, 866.3, 872.0, 880.4, 894.1,
    ];
    let history: Vec<CostPoint> = start
        .iter_days()
        .zip(values)
        .map(|(date, cost)| CostPoint::new(date, cost))
        .collect();

    // 1. Trend
    let trend = estimate_trend(&history)?;
    println!("1. Trend");
    println!(
        "   slope={:.2}/day intercept={:.2} ({:?})\n",
        trend.slope,
        trend.intercept,
        trend.direction()
    );

    // 2. Deterministic forecast at each confidence level
    let generator = ForecastGenerator::default();
    for level in [ConfidenceLevel::Low, ConfidenceLevel::Medium, ConfidenceLevel::High] {
        let forecast = generator.generate(&history, 7, level)?;
        println!("2. Forecast ({} confidence)", level);
        for p in &forecast {
            println!(
                "   {}  {:>8.2}  [{:>8.2}, {:>8.2}]",
                p.date, p.predicted_cost, p.lower_bound, p.upper_bound
            );
        }
        let summary = summarize(&forecast);
        println!("   week total: {:.2}\n", summary.total_predicted);
    }

    // 3. Noisy forecast, reproducible through the seed
    let mut noise = SeededNoise::new(42);
    let noisy = generator.generate_with_noise(&history, 7, ConfidenceLevel::Medium, &mut noise)?;
    println!("3. Noisy forecast (seed {})", noise.seed());
    for p in &noisy {
        println!("   {}  {:>8.2}", p.date, p.predicted_cost);
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
