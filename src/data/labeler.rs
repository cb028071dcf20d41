//! Subject labeling: BMI, CVD risk probability, and category assignment.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::data::subject::{BmiCategory, CategoryBuckets, LabeledSubject, RawSubject};
use crate::error::{PipelineError, Result};
use crate::policy::{category, risk};

/// Body Mass Index from weight in kilograms and height in centimeters,
/// rounded to two decimal places.
///
/// No bounds checking happens here; ingestion rejects degenerate heights
/// before the result can reach the risk model.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to(weight_kg / (height_m * height_m), 2)
}

/// CVD risk probability for a given BMI and age.
///
/// A quadratic in BMI scaled by a logistic curve in age, rounded to four
/// decimal places and capped at 1.0. The result is intentionally not floored
/// at zero.
pub fn calculate_cvd_risk(bmi: f64, age: u32) -> f64 {
    let bmi_risk = risk::BMI_QUADRATIC * bmi * bmi + risk::BMI_LINEAR * bmi + risk::BMI_INTERCEPT;
    let age_risk = risk::AGE_SCALE
        / (1.0 + (-risk::AGE_STEEPNESS * (f64::from(age) - risk::AGE_MIDPOINT)).exp());
    round_to(bmi_risk * age_risk, 4).min(risk::MAX_PROBABILITY)
}

/// Map a BMI value onto its category.
///
/// Cutoffs are exclusive upper bounds: a BMI sitting exactly on a cutoff
/// belongs to the higher category.
pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < category::UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi < category::NORMAL_MAX {
        BmiCategory::Normal
    } else if bmi < category::OVERWEIGHT_MAX {
        BmiCategory::Overweight
    } else if bmi < category::OBESE_MAX {
        BmiCategory::Obese
    } else {
        BmiCategory::MorbidObese
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Transforms raw subject rows into categorized, risk-labeled records.
#[derive(Debug, Clone, Default)]
pub struct Labeler {
    buckets: CategoryBuckets,
}

impl Labeler {
    /// Create a labeler with empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label one raw record.
    ///
    /// Fails on a zero or negative height: f64 division would quietly
    /// produce an infinite or nonsensical BMI and corrupt the risk score.
    pub fn label(&self, raw: RawSubject) -> Result<LabeledSubject> {
        if !(raw.height > 0.0) {
            return Err(PipelineError::InvalidMeasurement {
                subject_id: raw.subject_id,
                message: format!("height must be positive, got {} cm", raw.height),
            });
        }

        let bmi = calculate_bmi(raw.weight, raw.height);
        let cvd_prob = calculate_cvd_risk(bmi, raw.age);

        Ok(LabeledSubject {
            subject_id: raw.subject_id,
            age: raw.age,
            weight: raw.weight,
            height: raw.height,
            bmi,
            cvd_prob,
        })
    }

    /// Read raw subjects from a CSV file with `id,age,weight,height`
    /// columns, label each, and group them by BMI category.
    ///
    /// Returns the number of subjects processed. A missing or non-numeric
    /// field aborts the whole ingestion: category statistics and split
    /// ratios depend on the total record count, so partial reads would skew
    /// everything downstream.
    pub fn process_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let mut rdr = csv::Reader::from_path(path)?;
        let mut count = 0;

        for row in rdr.deserialize() {
            let raw: RawSubject = row?;
            let labeled = self.label(raw)?;
            let category = categorize_bmi(labeled.bmi);
            self.buckets.push(category, labeled);
            count += 1;
        }

        info!("Processed {count} subjects");
        Ok(count)
    }

    /// Persist the bucket mapping as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.buckets)?;
        writer.flush()?;
        Ok(())
    }

    /// The labeled records, grouped by category.
    pub fn buckets(&self) -> &CategoryBuckets {
        &self.buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_bmi() {
        assert!((calculate_bmi(80.0, 175.0) - 26.12).abs() < 1e-10);
        assert!((calculate_bmi(55.3, 160.0) - 21.6).abs() < 1e-10);
        assert!((calculate_bmi(48.0, 165.0) - 17.63).abs() < 1e-10);
    }

    #[test]
    fn test_bmi_matches_raw_formula() {
        for (w, h) in [(62.5_f64, 171.0_f64), (90.0, 183.5), (101.2, 154.0)] {
            let expected = (w / ((h / 100.0) * (h / 100.0)) * 100.0).round() / 100.0;
            assert_eq!(calculate_bmi(w, h), expected);
        }
    }

    #[test]
    fn test_cvd_risk_reference_value() {
        // bmi 26.12 at age 45: bmi_risk ~1.1801, age_risk ~0.2534
        assert!((calculate_cvd_risk(26.12, 45) - 0.2991).abs() < 1e-10);
    }

    #[test]
    fn test_cvd_risk_upper_clamp() {
        // Raw product exceeds 1.0 for high BMI at high age
        assert_eq!(calculate_cvd_risk(35.0, 80), 1.0);
        assert_eq!(calculate_cvd_risk(45.0, 90), 1.0);
    }

    #[test]
    fn test_cvd_risk_has_no_lower_clamp() {
        // The result must equal the rounded raw product, with no max(0, _)
        // applied anywhere on the way out.
        let bmi = 10.0;
        let age = 20u32;
        let bmi_risk = 0.0023 * bmi * bmi - 0.0797 * bmi + 1.6927;
        let age_risk = 0.8861 / (1.0 + (-0.1164 * (f64::from(age) - 52.8598)).exp());
        let raw = ((bmi_risk * age_risk) * 10_000.0).round() / 10_000.0;
        assert_eq!(calculate_cvd_risk(bmi, age), raw);
        assert!((calculate_cvd_risk(bmi, age) - 0.0213).abs() < 1e-10);
    }

    #[test]
    fn test_categorize_bmi_boundaries() {
        assert_eq!(categorize_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(categorize_bmi(18.5), BmiCategory::Normal);
        assert_eq!(categorize_bmi(24.999), BmiCategory::Normal);
        assert_eq!(categorize_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(categorize_bmi(29.999), BmiCategory::Overweight);
        assert_eq!(categorize_bmi(30.0), BmiCategory::Obese);
        assert_eq!(categorize_bmi(39.999), BmiCategory::Obese);
        assert_eq!(categorize_bmi(40.0), BmiCategory::MorbidObese);
    }

    #[test]
    fn test_label_round_trip() {
        let labeler = Labeler::new();
        let labeled = labeler
            .label(RawSubject {
                subject_id: "1".to_string(),
                age: 45,
                weight: 80.0,
                height: 175.0,
            })
            .unwrap();

        assert!((labeled.bmi - 26.12).abs() < 1e-10);
        assert!((labeled.cvd_prob - 0.2991).abs() < 1e-10);
        assert_eq!(categorize_bmi(labeled.bmi), BmiCategory::Overweight);
    }

    #[test]
    fn test_label_rejects_zero_height() {
        let labeler = Labeler::new();
        let result = labeler.label(RawSubject {
            subject_id: "bad".to_string(),
            age: 30,
            weight: 70.0,
            height: 0.0,
        });
        assert!(matches!(
            result,
            Err(PipelineError::InvalidMeasurement { .. })
        ));
    }

    #[test]
    fn test_label_rejects_negative_height() {
        let labeler = Labeler::new();
        assert!(labeler
            .label(RawSubject {
                subject_id: "bad".to_string(),
                age: 30,
                weight: 70.0,
                height: -170.0,
            })
            .is_err());
    }

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_process_csv_partitions_all_records() {
        let csv = write_csv(
            "id,age,weight,height\n\
             1,45,80.0,175.0\n\
             2,22,48.0,165.0\n\
             3,61,95.5,168.0\n\
             4,70,120.0,170.0\n\
             5,28,55.3,160.0\n",
        );

        let mut labeler = Labeler::new();
        let count = labeler.process_csv(csv.path()).unwrap();

        assert_eq!(count, 5);
        assert_eq!(labeler.buckets().total(), 5);
        assert_eq!(labeler.buckets().get(BmiCategory::Underweight).len(), 1);
        assert_eq!(labeler.buckets().get(BmiCategory::Normal).len(), 1);
        assert_eq!(labeler.buckets().get(BmiCategory::Overweight).len(), 1);
        assert_eq!(labeler.buckets().get(BmiCategory::Obese).len(), 1);
        assert_eq!(labeler.buckets().get(BmiCategory::MorbidObese).len(), 1);
    }

    #[test]
    fn test_process_csv_aborts_on_malformed_row() {
        let csv = write_csv(
            "id,age,weight,height\n\
             1,45,80.0,175.0\n\
             2,not_a_number,60.0,170.0\n",
        );

        let mut labeler = Labeler::new();
        assert!(labeler.process_csv(csv.path()).is_err());
    }

    #[test]
    fn test_process_csv_missing_file() {
        let mut labeler = Labeler::new();
        assert!(labeler.process_csv("no/such/file.csv").is_err());
    }
}
