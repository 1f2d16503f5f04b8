//! SIP Projection CLI
//!
//! Command-line interface for running SIP return projections.
//! Supports JSON output for API integration via --json and an optional
//! year-by-year CSV export for charting.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use sip_projection::{
    amount_in_words, plan::SipPlan,
    projection::{ProjectionBand, ProjectionConfig, ProjectionEngine, ProjectionResult, YearPoint},
};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "sip_projection", version, about = "SIP return projection calculator")]
struct Cli {
    /// Monthly contribution amount
    #[arg(long, short = 'c')]
    contribution: f64,

    /// Expected annual growth rate in percent (CAGR)
    #[arg(long, short = 'r')]
    rate: f64,

    /// Investment duration in years
    #[arg(long, short = 'y', conflicts_with = "months", required_unless_present = "months")]
    years: Option<u32>,

    /// Investment duration in months (alternative to --years)
    #[arg(long)]
    months: Option<u32>,

    /// Assumed annual inflation in percent
    #[arg(long, default_value_t = 0.0)]
    inflation: f64,

    /// Project at the real (inflation-adjusted) rate
    #[arg(long)]
    adjust_for_inflation: bool,

    /// Best/worst-case band half-width in percentage points
    #[arg(long, default_value_t = 0.0)]
    deviation: f64,

    /// Emit the full response as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Write the year-by-year series to a CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<String>,
}

#[derive(Serialize)]
struct ProjectionResponse {
    plan: SipPlan,
    effective_rate_pct: f64,
    result: ProjectionResult,
    band: Option<ProjectionBand>,
    corpus_in_words: String,
    series: Vec<YearPoint>,
    execution_time_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let plan = match (cli.years, cli.months) {
        (_, Some(months)) => SipPlan::new(cli.contribution, cli.rate, months)?,
        (Some(years), None) => SipPlan::from_years(cli.contribution, cli.rate, years)?,
        (None, None) => unreachable!("clap enforces --years or --months"),
    };

    let engine = ProjectionEngine::new(projection_config(&cli))?;

    let result = engine.project(&plan);
    let band = (cli.deviation > 0.0).then(|| engine.project_band(&plan));
    let series = engine.project_series(&plan);
    let corpus_in_words = amount_in_words(result.future_value)?;

    log::debug!("projection completed in {:?}", start.elapsed());

    if let Some(path) = &cli.csv {
        write_series_csv(path, &series)
            .with_context(|| format!("failed to write series to {}", path))?;
    }

    if cli.json {
        let response = ProjectionResponse {
            plan,
            effective_rate_pct: engine.effective_rate_pct(&plan),
            result,
            band,
            corpus_in_words,
            series,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print_report(&plan, &engine, &result, band.as_ref(), &series, &corpus_in_words);

    if let Some(path) = &cli.csv {
        println!("\nSeries written to: {}", path);
    }

    Ok(())
}

fn projection_config(cli: &Cli) -> ProjectionConfig {
    ProjectionConfig {
        inflation_rate_pct: cli.inflation,
        deviation_pct: cli.deviation,
        adjust_for_inflation: cli.adjust_for_inflation,
    }
}

fn print_report(
    plan: &SipPlan,
    engine: &ProjectionEngine,
    result: &ProjectionResult,
    band: Option<&ProjectionBand>,
    series: &[YearPoint],
    corpus_in_words: &str,
) {
    println!("SIP Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("==================\n");

    println!("Plan:");
    println!("  Monthly Contribution: {:.2}", plan.monthly_contribution());
    println!("  Annual Rate: {:.2}%", plan.annual_rate_pct());
    if engine.config().adjust_for_inflation {
        println!("  Inflation: {:.2}%", engine.config().inflation_rate_pct);
        println!("  Effective Real Rate: {:.4}%", engine.effective_rate_pct(plan));
    }
    println!("  Duration: {} months", plan.duration_months());
    println!();

    println!("Summary:");
    println!("  Total Invested: {:.2}", result.total_invested);
    println!("  Expected Corpus: {:.2}", result.future_value);
    println!("  Wealth Gained: {:.2}", result.wealth_gained);
    println!("  In Words: {}", corpus_in_words);

    if let Some(band) = band {
        println!("\nDeviation Band:");
        println!(
            "  Worst ({:.2}%): {:.2}",
            band.worst_rate_pct, band.worst.future_value
        );
        println!(
            "  Expected ({:.2}%): {:.2}",
            band.expected_rate_pct, band.expected.future_value
        );
        println!(
            "  Best ({:.2}%): {:.2}",
            band.best_rate_pct, band.best.future_value
        );
    }

    println!("\nGrowth by Year:");
    println!("{:>5} {:>7} {:>16} {:>16}", "Year", "Months", "Invested", "Corpus");
    println!("{}", "-".repeat(47));
    for point in series {
        println!(
            "{:>5} {:>7} {:>16.2} {:>16.2}",
            point.year, point.months_elapsed, point.total_invested, point.future_value
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflation_flag_drives_adjustment() {
        let cli = Cli::try_parse_from([
            "sip_projection",
            "-c", "5000",
            "-r", "12",
            "--years", "10",
            "--inflation", "6",
            "--adjust-for-inflation",
        ])
        .unwrap();

        let config = projection_config(&cli);
        assert!(config.adjust_for_inflation);
        assert_eq!(config.inflation_rate_pct, 6.0);
    }

    #[test]
    fn test_inflation_rate_alone_stays_nominal() {
        // Supplying a rate without the flag must not silently deflate
        let cli = Cli::try_parse_from([
            "sip_projection",
            "-c", "5000",
            "-r", "12",
            "--years", "10",
            "--inflation", "6",
        ])
        .unwrap();

        let config = projection_config(&cli);
        assert!(!config.adjust_for_inflation);
    }
}

fn write_series_csv(path: &str, series: &[YearPoint]) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Year,Months,Invested,Corpus")?;
    for point in series {
        writeln!(
            file,
            "{},{},{:.2},{:.2}",
            point.year, point.months_elapsed, point.total_invested, point.future_value
        )?;
    }
    Ok(())
}
