//! CVD Risk Dataset Pipeline
//!
//! Converts raw anthropometric records (age, weight, height) into a labeled
//! dataset of normalized features with a derived cardiovascular-disease risk
//! probability, then partitions it into training/test/validation splits for
//! downstream model consumption.
//!
//! # Modules
//!
//! - `data`: subject records, labeling, and dataset splitting
//! - `policy`: fixed thresholds, coefficients, and scaling ceilings
//! - `error`: pipeline error types
//!
//! # Example
//!
//! ```no_run
//! use cvd_risk_pipeline::data::{Dataset, Labeler};
//!
//! // Label raw subjects and persist the categorized artifact
//! let mut labeler = Labeler::new();
//! labeler.process_csv("data/subjects.csv").unwrap();
//! labeler.save_json("data/labeled_data.json").unwrap();
//!
//! // Build normalized samples from the artifact and split 70/20/10
//! let dataset = Dataset::from_labeled_json("data/labeled_data.json").unwrap();
//! let split = dataset.split(&mut rand::thread_rng());
//! split.export_csv("data").unwrap();
//! ```

pub mod data;
pub mod error;
pub mod policy;

pub use data::*;
pub use error::{PipelineError, Result};
