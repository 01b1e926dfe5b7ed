use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use pipeline::{RawRecord, build_features};
use predictors::ModelBundle;
use server::RecommendationOrchestrator;

/// PackWise - Packaging Recommendation Engine
#[derive(Parser)]
#[command(name = "packwise")]
#[command(about = "Packaging recommendations from pre-trained box/filler models", long_about = None)]
struct Cli {
    /// Path to the model artifacts directory
    #[arg(short, long, default_value = "models")]
    models_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline for one item/bin pair
    Predict {
        #[arg(long)]
        item_l: f64,
        #[arg(long)]
        item_w: f64,
        #[arg(long)]
        item_h: f64,
        #[arg(long)]
        bin_l: f64,
        #[arg(long)]
        bin_w: f64,
        #[arg(long)]
        bin_h: f64,

        /// Weather context (matched case-insensitively for "humid")
        #[arg(long, default_value = "")]
        weather: String,

        /// Print the payload as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the engineered feature vector (for debugging artifact contracts)
    Features {
        #[arg(long)]
        item_l: f64,
        #[arg(long)]
        item_w: f64,
        #[arg(long)]
        item_h: f64,
        #[arg(long)]
        bin_l: f64,
        #[arg(long)]
        bin_w: f64,
        #[arg(long)]
        bin_h: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict {
            item_l,
            item_w,
            item_h,
            bin_l,
            bin_w,
            bin_h,
            weather,
            json,
        } => {
            let record = RawRecord::from_dimensions(
                [item_l, item_w, item_h],
                [bin_l, bin_w, bin_h],
                weather,
            );
            handle_predict(&cli.models_dir, record, json)?;
        }
        Commands::Features {
            item_l,
            item_w,
            item_h,
            bin_l,
            bin_w,
            bin_h,
        } => {
            let record =
                RawRecord::from_dimensions([item_l, item_w, item_h], [bin_l, bin_w, bin_h], "");
            handle_features(&record);
        }
    }

    Ok(())
}

fn handle_predict(models_dir: &PathBuf, record: RawRecord, json: bool) -> Result<()> {
    let bundle = ModelBundle::load_from_files(models_dir)
        .context("Failed to load model artifacts")?;
    let orchestrator = RecommendationOrchestrator::new(Arc::new(bundle))
        .context("Artifacts don't match the feature contract")?;

    let rec = orchestrator.recommend(&record)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
        return Ok(());
    }

    println!("{} {}", "✓".green(), "Recommendation".bold());
    print_row("Packaging type", &rec.packaging_type);
    print_row("Box dimensions", &rec.box_dimensions);
    print_row("Box category", &rec.box_category);
    print_row("Filler type", &rec.filler_type);
    print_row("Filler amount", &rec.filler_amount);
    print_row("Fit status", &rec.fit_status);
    print_row("Arrangement", &rec.arrangement);
    print_row("Eco swap", &rec.eco_material_swap);
    print_row("Weather", &rec.weather_recommendation);
    print_row("Cost savings", &rec.cost_savings_per_unit);
    print_row(
        "Plastic saved (kg)",
        &rec.environmental_impact.plastic_saved_kg.to_string(),
    );
    print_row(
        "CO2 saved (kg)",
        &rec.environmental_impact.co2_saved_kg.to_string(),
    );
    if rec.anomaly_label == "Anomaly" {
        println!(
            "  {} {} — {}",
            "!".red(),
            rec.anomaly_label.red().bold(),
            rec.fix_suggestion
        );
    } else {
        print_row("Anomaly", &rec.anomaly_label);
    }
    Ok(())
}

fn handle_features(record: &RawRecord) {
    let features = build_features(record);
    println!("{}", "Feature vector (canonical order)".bold());
    let names = [
        "item_l",
        "item_w",
        "item_h",
        "bin_l",
        "bin_w",
        "bin_h",
        "item_volume",
        "bin_volume",
        "volume_ratio",
        "item_area",
        "bin_area",
        "area_ratio",
    ];
    for (i, (name, value)) in names.iter().zip(features.as_array()).enumerate() {
        println!("  [{i:2}] {name:<14} {value}");
    }
}

fn print_row(name: &str, value: &str) {
    println!("  {:<20} {}", format!("{name}:").cyan(), value);
}
