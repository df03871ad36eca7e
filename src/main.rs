//! Loyalty Simulator CLI
//!
//! Command-line interface for running a three-year loyalty program projection

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use loyalty_simulator::{
    format_currency, format_number, NumberFormat, ProgramAssumptions, ProjectionEngine,
    SimulationResults, SimulatorInputs,
};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "loyalty_simulator", version, about = "Three-year loyalty program projection")]
struct Args {
    /// Annual revenue
    #[arg(long, default_value_t = 10_000_000.0)]
    revenue: f64,

    /// Number of customers
    #[arg(long, default_value_t = 100_000.0)]
    customers: f64,

    /// Average basket value
    #[arg(long, default_value_t = 50.0)]
    basket: f64,

    /// Purchases per customer per year
    #[arg(long, default_value_t = 12.0)]
    frequency: f64,

    /// Program budget as a percentage of revenue
    #[arg(long, default_value_t = 4.0)]
    budget_pct: f64,

    /// Share of the program budget spent on rewards (0-100)
    #[arg(long, default_value_t = 60.0)]
    rewards_allocation: f64,

    /// Read inputs from a JSON file instead of the flags above
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory containing program_parameters.csv
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Print a JSON report instead of the console table
    #[arg(long)]
    json: bool,

    /// Write the yearly projections to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Skip input validation
    #[arg(long)]
    unchecked: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    generated_at: DateTime<Utc>,
    inputs: &'a SimulatorInputs,
    results: &'a SimulationResults,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let inputs: SimulatorInputs = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Unable to open inputs file {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("Invalid inputs in {}", path.display()))?
        }
        None => SimulatorInputs::new(
            args.revenue,
            args.customers,
            args.basket,
            args.frequency,
            args.budget_pct,
            args.rewards_allocation,
        ),
    };

    let assumptions = match &args.assumptions {
        Some(dir) => ProgramAssumptions::from_csv_path(dir)
            .with_context(|| format!("Unable to load assumptions from {}", dir.display()))?,
        None => ProgramAssumptions::default_pricing(),
    };

    let engine = ProjectionEngine::new(assumptions);
    let results = if args.unchecked {
        engine.project(&inputs)
    } else {
        engine.project_checked(&inputs).context("Invalid simulator inputs")?
    };

    if let Some(path) = &args.csv {
        write_projections_csv(path, &results)
            .with_context(|| format!("Unable to write {}", path.display()))?;
    }

    if args.json {
        let report = Report {
            generated_at: Utc::now(),
            inputs: &inputs,
            results: &results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&results, &NumberFormat::en_us());
        if let Some(path) = &args.csv {
            println!("\nYearly projections written to: {}", path.display());
        }
    }

    Ok(())
}

fn write_projections_csv(path: &Path, results: &SimulationResults) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for projection in &results.projections {
        writer.serialize(projection)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_table(results: &SimulationResults, fmt: &NumberFormat) {
    println!("Loyalty Simulator v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    println!("{:>4} {:>10} {:>9} {:>14} {:>14} {:>14} {:>10} {:>10}",
        "Year", "Members", "Adoption", "Revenue", "Cost", "Profit", "ROI", "Retention");
    println!("{}", "-".repeat(92));

    for p in &results.projections {
        println!("{:>4} {:>10} {:>8.1}% {:>14} {:>14} {:>14} {:>9.1}% {:>9.1}%",
            p.year,
            format_number(p.active_members, fmt),
            p.adoption_rate,
            format_currency(p.incremental_revenue, fmt),
            format_currency(p.total_cost(), fmt),
            format_currency(p.net_profit, fmt),
            p.roi,
            p.retention_rate,
        );
    }

    let summary = results.summary();
    println!("\nSummary:");
    println!("  Incremental Revenue: {}", format_currency(results.total_incremental_revenue, fmt));
    println!("  Total Cost:          {}", format_currency(summary.total_cost, fmt));
    println!("  Net Profit:          {}", format_currency(summary.total_net_profit, fmt));
    println!("  Average ROI:         {:.1}%", results.average_roi);
    println!("  Payback:             {} months", results.payback_months);
    println!("  Annual Capex:        {}", format_currency(results.annual_capex, fmt));
    println!("  Success Probability: {}%", results.success_probability);
    println!(
        "  Risk Level:          {} ({})",
        results.risk_level,
        results.risk_level.style_class()
    );
}
