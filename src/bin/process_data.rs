//! Run the full data pipeline: label raw subjects, then split into datasets.
//!
//! Usage:
//!   cargo run --bin process_data -- --input-csv data/subjects.csv --output-json data/labeled_data.json --output-csv-dir data

use anyhow::Result;
use clap::Parser;
use cvd_risk_pipeline::data::{Dataset, Labeler};

#[derive(Parser, Debug)]
#[command(name = "process_data")]
#[command(about = "Convert a raw subject CSV into labeled JSON and split CSV datasets")]
struct Args {
    /// Input CSV file with id,age,weight,height columns
    #[arg(short, long)]
    input_csv: String,

    /// Output path for the labeled JSON artifact
    #[arg(long, default_value = "data/labeled_data.json")]
    output_json: String,

    /// Directory for the training/test/validation CSV files
    #[arg(long, default_value = "data")]
    output_csv_dir: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Create output directories if needed
    if let Some(parent) = std::path::Path::new(&args.output_json).parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::create_dir_all(&args.output_csv_dir)?;

    log::info!("Starting data processing...");

    let mut labeler = Labeler::new();
    labeler.process_csv(&args.input_csv)?;
    labeler.save_json(&args.output_json)?;

    log::info!("Labeled data saved to {}", args.output_json);
    println!("{}", labeler.buckets().summary());

    log::info!("Starting data loading and splitting...");

    let dataset = match Dataset::from_labeled_json(&args.output_json) {
        Ok(dataset) => dataset,
        Err(e) if e.is_not_found() => {
            // The splitter stage is skipped, leaving earlier artifacts intact.
            log::error!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let split = dataset.split(&mut rand::thread_rng());

    log::info!("Training set size: {}", split.training.len());
    log::info!("Test set size: {}", split.test.len());
    log::info!("Validation set size: {}", split.validation.len());

    split.export_csv(&args.output_csv_dir)?;
    log::info!("Datasets saved to {}", args.output_csv_dir);

    Ok(())
}
