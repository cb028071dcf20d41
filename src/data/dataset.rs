//! Flattened sample collection, shuffling, and train/test/validation splits.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::subject::CategoryBuckets;
use crate::error::{PipelineError, Result};
use crate::policy::{limits, split};

/// Normalize one (age, weight, height) triple to the 0-1 feature range.
///
/// Each value is scaled by a fixed physiological ceiling; out-of-range
/// inputs saturate at the range bounds instead of erroring.
pub fn normalize(age: f64, weight_kg: f64, height_cm: f64) -> [f64; 3] {
    [
        (age / limits::MAX_AGE_YEARS).clamp(0.0, 1.0),
        (weight_kg / limits::MAX_WEIGHT_KG).clamp(0.0, 1.0),
        (height_cm / limits::MAX_HEIGHT_CM).clamp(0.0, 1.0),
    ]
}

/// A single training sample: normalized input features and the risk target.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// `[age_norm, weight_norm, height_norm]`
    pub features: [f64; 3],
    /// CVD risk probability the model should learn to predict.
    pub target: f64,
}

/// The flat, category-blind sample collection the splitter operates on.
///
/// Category buckets exist for clinical reporting; sampling for model
/// training is uniform over the whole set, so bucket identity is discarded
/// when the dataset is built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Load the labeled JSON artifact and flatten it into samples.
    ///
    /// A missing artifact maps to [`PipelineError::LabeledDataNotFound`],
    /// which callers are expected to check for rather than crash on.
    pub fn from_labeled_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PipelineError::LabeledDataNotFound(path.to_path_buf())
            } else {
                PipelineError::Io(e)
            }
        })?;

        let buckets: CategoryBuckets = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self::from_buckets(&buckets))
    }

    /// Flatten category buckets into samples, discarding bucket identity.
    pub fn from_buckets(buckets: &CategoryBuckets) -> Self {
        let samples = buckets
            .iter()
            .flat_map(|(_, subjects)| subjects)
            .map(|subject| Sample {
                features: normalize(f64::from(subject.age), subject.weight, subject.height),
                target: subject.cvd_prob,
            })
            .collect();

        Self { samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples, in flattened category order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Shuffle the samples and slice them into training (70%), test (20%),
    /// and validation (10%) subsets.
    ///
    /// Boundaries are `floor(0.7·n)` and `floor(0.9·n)`, so the subsets are
    /// disjoint and exhaustive for any `n`, including 0. The caller supplies
    /// the randomness source: production entry points pass `thread_rng()`
    /// (splits differ run to run), tests pass a seeded generator.
    pub fn split<R: Rng>(self, rng: &mut R) -> DatasetSplit {
        let mut samples = self.samples;
        samples.shuffle(rng);

        let total = samples.len();
        let train_end = (total as f64 * split::TRAIN_FRACTION).floor() as usize;
        let test_end = (total as f64 * split::TRAIN_TEST_FRACTION).floor() as usize;

        let validation = samples.split_off(test_end);
        let test = samples.split_off(train_end);

        DatasetSplit {
            training: samples,
            test,
            validation,
        }
    }
}

/// Disjoint training/test/validation subsets in post-shuffle order.
#[derive(Debug, Clone)]
pub struct DatasetSplit {
    pub training: Vec<Sample>,
    pub test: Vec<Sample>,
    pub validation: Vec<Sample>,
}

impl DatasetSplit {
    /// Total number of samples across the three subsets.
    pub fn total(&self) -> usize {
        self.training.len() + self.test.len() + self.validation.len()
    }

    /// Write each subset as `<name>_data.csv` under `dir`, with a
    /// `age_norm,weight_norm,height_norm,cvd_prob` header and one row per
    /// sample in post-shuffle order.
    pub fn export_csv<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();

        for (name, samples) in [
            ("training", &self.training),
            ("test", &self.test),
            ("validation", &self.validation),
        ] {
            let path = dir.join(format!("{name}_data.csv"));
            let mut wtr = csv::Writer::from_path(&path)?;

            wtr.write_record(["age_norm", "weight_norm", "height_norm", "cvd_prob"])?;
            for sample in samples {
                wtr.write_record(&[
                    sample.features[0].to_string(),
                    sample.features[1].to_string(),
                    sample.features[2].to_string(),
                    sample.target.to_string(),
                ])?;
            }

            wtr.flush()?;
            info!("Exported {} samples to {}", samples.len(), path.display());
        }

        Ok(())
    }
}
