//! Fixed policy values used across the pipeline.
//!
//! Every threshold, coefficient, and ceiling the pipeline applies lives here
//! so the values can be audited or swapped without touching control flow.

/// Coefficients of the empirical CVD risk model.
///
/// The model is fixed, not fit at runtime: a quadratic in BMI scaled by a
/// logistic curve in age.
pub mod risk {
    /// Quadratic BMI term.
    pub const BMI_QUADRATIC: f64 = 0.0023;
    /// Linear BMI term.
    pub const BMI_LINEAR: f64 = -0.0797;
    /// BMI intercept.
    pub const BMI_INTERCEPT: f64 = 1.6927;

    /// Upper asymptote of the age logistic.
    pub const AGE_SCALE: f64 = 0.8861;
    /// Steepness of the age logistic.
    pub const AGE_STEEPNESS: f64 = 0.1164;
    /// Age at the logistic midpoint, in years.
    pub const AGE_MIDPOINT: f64 = 52.8598;

    /// Risk probabilities are capped here. There is no corresponding floor.
    pub const MAX_PROBABILITY: f64 = 1.0;
}

/// BMI category cutoffs. Each value is the exclusive upper bound of its
/// category; a BMI equal to a cutoff belongs to the next category up.
pub mod category {
    pub const UNDERWEIGHT_MAX: f64 = 18.5;
    pub const NORMAL_MAX: f64 = 25.0;
    pub const OVERWEIGHT_MAX: f64 = 30.0;
    pub const OBESE_MAX: f64 = 40.0;
}

/// Assumed physiological maxima used for 0-1 feature scaling.
///
/// Inputs beyond a ceiling saturate at 1.0 rather than erroring.
pub mod limits {
    /// Maximum age in years.
    pub const MAX_AGE_YEARS: f64 = 100.0;
    /// Maximum weight in kilograms.
    pub const MAX_WEIGHT_KG: f64 = 200.0;
    /// Maximum height in centimeters.
    pub const MAX_HEIGHT_CM: f64 = 250.0;
}

/// Train/test/validation split boundaries (70/20/10).
pub mod split {
    /// Fraction of samples assigned to the training set.
    pub const TRAIN_FRACTION: f64 = 0.7;
    /// Cumulative fraction covered by training plus test. Kept as a single
    /// constant: summing 0.7 and 0.2 in f64 lands below 0.9 and shifts the
    /// floor-division boundary.
    pub const TRAIN_TEST_FRACTION: f64 = 0.9;
}
