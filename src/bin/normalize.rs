//! Normalize a single (age, weight, height) triple.
//!
//! Prints the three normalized values comma-joined on stdout so other
//! processes can shell out to this binary for point-lookup inference.
//!
//! Usage:
//!   cargo run --bin normalize -- 45 80 175

use clap::Parser;
use cvd_risk_pipeline::data::normalize;

#[derive(Parser, Debug)]
#[command(name = "normalize")]
#[command(about = "Normalize one (age, weight, height) triple to the 0-1 feature range")]
struct Args {
    /// Age in years
    age: f64,

    /// Weight in kilograms
    weight: f64,

    /// Height in centimeters
    height: f64,
}

fn main() {
    // clap rejects a wrong argument count or a non-numeric value with a
    // usage error and a non-zero exit before any computation runs.
    let args = Args::parse();

    let [age_norm, weight_norm, height_norm] = normalize(args.age, args.weight, args.height);
    println!("{age_norm},{weight_norm},{height_norm}");
}
