//! Subject records, labeling, and dataset splitting.
//!
//! Provides functionality for:
//! - Raw and labeled subject data structures
//! - BMI and CVD risk labeling of raw records
//! - Normalized train/test/validation dataset construction

pub mod dataset;
pub mod labeler;
pub mod subject;

pub use dataset::*;
pub use labeler::*;
pub use subject::*;
