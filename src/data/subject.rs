//! Subject records and BMI category buckets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One raw anthropometric record as it appears in the input CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubject {
    /// Subject identifier (CSV column `id`).
    #[serde(rename = "id")]
    pub subject_id: String,
    /// Age in whole years.
    pub age: u32,
    /// Weight in kilograms.
    pub weight: f64,
    /// Height in centimeters.
    pub height: f64,
}

/// A subject with derived BMI and CVD risk probability attached.
///
/// Created by the labeler and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSubject {
    pub subject_id: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    /// Body Mass Index, rounded to two decimal places.
    pub bmi: f64,
    /// CVD risk probability, rounded to four decimal places, at most 1.0.
    pub cvd_prob: f64,
}

/// The five fixed BMI classification groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    MorbidObese,
}

impl BmiCategory {
    /// All categories in ascending BMI order.
    pub const ALL: [Self; 5] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
        Self::MorbidObese,
    ];

    /// The category name as used in the labeled JSON artifact.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
            Self::MorbidObese => "morbid_obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labeled subjects grouped by BMI category.
///
/// The buckets partition the labeled set: every subject lives in exactly one
/// bucket, in input order. Serializes as a JSON object keyed by the five
/// category names, in ascending BMI order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBuckets {
    pub underweight: Vec<LabeledSubject>,
    pub normal: Vec<LabeledSubject>,
    pub overweight: Vec<LabeledSubject>,
    pub obese: Vec<LabeledSubject>,
    pub morbid_obese: Vec<LabeledSubject>,
}

impl CategoryBuckets {
    /// Create empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subject to the bucket for `category`.
    pub fn push(&mut self, category: BmiCategory, subject: LabeledSubject) {
        self.bucket_mut(category).push(subject);
    }

    /// The subjects in one bucket, in insertion order.
    pub fn get(&self, category: BmiCategory) -> &[LabeledSubject] {
        match category {
            BmiCategory::Underweight => &self.underweight,
            BmiCategory::Normal => &self.normal,
            BmiCategory::Overweight => &self.overweight,
            BmiCategory::Obese => &self.obese,
            BmiCategory::MorbidObese => &self.morbid_obese,
        }
    }

    fn bucket_mut(&mut self, category: BmiCategory) -> &mut Vec<LabeledSubject> {
        match category {
            BmiCategory::Underweight => &mut self.underweight,
            BmiCategory::Normal => &mut self.normal,
            BmiCategory::Overweight => &mut self.overweight,
            BmiCategory::Obese => &mut self.obese,
            BmiCategory::MorbidObese => &mut self.morbid_obese,
        }
    }

    /// Total number of subjects across all buckets.
    pub fn total(&self) -> usize {
        BmiCategory::ALL
            .iter()
            .map(|&category| self.get(category).len())
            .sum()
    }

    /// Check if all buckets are empty.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over the buckets in category order.
    pub fn iter(&self) -> impl Iterator<Item = (BmiCategory, &[LabeledSubject])> {
        BmiCategory::ALL
            .iter()
            .map(move |&category| (category, self.get(category)))
    }

    /// Per-category counts and percentages as a multi-line summary.
    ///
    /// Percentages fall back to 0.0 for an empty set.
    pub fn summary(&self) -> String {
        let total = self.total();
        let mut out = format!("Processed {total} subjects\n");
        for (category, subjects) in self.iter() {
            let count = subjects.len();
            let percent = if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            out.push_str(&format!("  {category}: {count} ({percent:.1}%)\n"));
        }
        out
    }
}
