use serde::{Deserialize, Serialize};

use crate::cooling::{self, CoolingCategory};
use crate::AlertError;

/// The outcome of comparing a temperature reading against a safe range.
///
/// The discriminant is the wire encoding sent to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BreachClassification {
    Normal = 0,
    TooLow = 1,
    TooHigh = 2,
}

impl BreachClassification {
    pub const ALL: [BreachClassification; 3] = [
        BreachClassification::Normal,
        BreachClassification::TooLow,
        BreachClassification::TooHigh,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for BreachClassification {
    type Error = AlertError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BreachClassification::Normal),
            1 => Ok(BreachClassification::TooLow),
            2 => Ok(BreachClassification::TooHigh),
            _ => Err(AlertError::InvalidClassification(code)),
        }
    }
}

impl From<BreachClassification> for u8 {
    fn from(classification: BreachClassification) -> Self {
        classification.code()
    }
}

/// Compare `value` against the inclusive range `[lower, upper]`.
///
/// The low check runs first, so `TooLow` wins if both bounds are violated.
/// NaN fails both comparisons and falls through to `Normal`; use [`classify`]
/// for readings that may not be finite.
pub fn infer(value: f64, lower: f64, upper: f64) -> BreachClassification {
    if value < lower {
        return BreachClassification::TooLow;
    }
    if value > upper {
        return BreachClassification::TooHigh;
    }
    BreachClassification::Normal
}

/// Classify a temperature in degrees Celsius against the limits of a cooling category.
pub fn classify(
    category: CoolingCategory,
    temperature_c: f64,
) -> Result<BreachClassification, AlertError> {
    if temperature_c.is_nan() {
        tracing::warn!(?category, "rejecting NaN temperature reading");
        return Err(AlertError::InvalidReading(temperature_c));
    }

    let range = cooling::lookup(category);
    let classification = infer(temperature_c, range.lower, range.upper);
    tracing::debug!(?category, temperature_c, ?classification, "classified temperature");
    Ok(classification)
}

/// Same as [`classify`] but for an untyped cooling category code.
pub fn classify_code(
    category_code: u8,
    temperature_c: f64,
) -> Result<BreachClassification, AlertError> {
    let category = CoolingCategory::try_from(category_code)?;
    classify(category, temperature_c)
}

#[test]
fn test_infer_breach_according_to_limits() {
    assert_eq!(infer(20.0, 50.0, 100.0), BreachClassification::TooLow);
    assert_eq!(infer(150.0, 50.0, 100.0), BreachClassification::TooHigh);
    assert_eq!(infer(75.0, 50.0, 100.0), BreachClassification::Normal);
}

#[test]
fn test_infer_inclusive_bounds() {
    assert_eq!(infer(50.0, 50.0, 100.0), BreachClassification::Normal);
    assert_eq!(infer(100.0, 50.0, 100.0), BreachClassification::Normal);
    assert_eq!(infer(49.999, 50.0, 100.0), BreachClassification::TooLow);
    assert_eq!(infer(100.001, 50.0, 100.0), BreachClassification::TooHigh);
}

#[test]
fn test_infer_normal_iff_within_range() {
    let bounds = [(0.0, 0.0), (-20.0, 5.0), (0.0, 35.0), (10.0, 1e6)];
    let values = [-1e9, -20.5, -20.0, -1.0, 0.0, 0.5, 5.0, 5.1, 35.0, 36.0, 1e6, 1e9];
    for (lower, upper) in bounds {
        for value in values {
            let expected = if value < lower {
                BreachClassification::TooLow
            } else if value > upper {
                BreachClassification::TooHigh
            } else {
                BreachClassification::Normal
            };
            assert_eq!(infer(value, lower, upper), expected, "{value} in [{lower}, {upper}]");
        }
    }
}

#[test]
fn test_infer_inverted_bounds_prefers_too_low() {
    // 5 is both below lower and above upper
    assert_eq!(infer(5.0, 10.0, 0.0), BreachClassification::TooLow);
    assert_eq!(infer(20.0, 10.0, 0.0), BreachClassification::TooHigh);
}

#[test]
fn test_infer_non_finite() {
    assert_eq!(infer(f64::INFINITY, 0.0, 35.0), BreachClassification::TooHigh);
    assert_eq!(infer(f64::NEG_INFINITY, 0.0, 35.0), BreachClassification::TooLow);
    assert_eq!(infer(f64::NAN, 0.0, 35.0), BreachClassification::Normal);
}

#[test]
fn test_classify_passive_cooling() {
    let c = CoolingCategory::Passive;
    assert_eq!(classify(c, 34.0).unwrap(), BreachClassification::Normal);
    assert_eq!(classify(c, 35.0).unwrap(), BreachClassification::Normal);
    assert_eq!(classify(c, 36.0).unwrap(), BreachClassification::TooHigh);
}

#[test]
fn test_classify_high_active_cooling() {
    let c = CoolingCategory::HighActive;
    assert_eq!(classify(c, 44.0).unwrap(), BreachClassification::Normal);
    assert_eq!(classify(c, 45.0).unwrap(), BreachClassification::Normal);
    assert_eq!(classify(c, 46.0).unwrap(), BreachClassification::TooHigh);
}

#[test]
fn test_classify_medium_active_cooling() {
    let c = CoolingCategory::MediumActive;
    assert_eq!(classify(c, 39.0).unwrap(), BreachClassification::Normal);
    assert_eq!(classify(c, 40.0).unwrap(), BreachClassification::Normal);
    assert_eq!(classify(c, 41.0).unwrap(), BreachClassification::TooHigh);
}

#[test]
fn test_classify_below_zero() {
    for category in CoolingCategory::ALL {
        assert_eq!(classify(category, 0.0).unwrap(), BreachClassification::Normal);
        assert_eq!(classify(category, -0.5).unwrap(), BreachClassification::TooLow);
    }
}

#[test]
fn test_classify_rejects_nan() {
    let result = classify(CoolingCategory::Passive, f64::NAN);
    assert!(matches!(result, Err(AlertError::InvalidReading(v)) if v.is_nan()));
}

#[test]
fn test_classify_code() {
    assert_eq!(classify_code(1, 50.0).unwrap(), BreachClassification::TooHigh);
    assert!(matches!(classify_code(7, 20.0), Err(AlertError::InvalidCategory(7))));
}

#[test]
fn test_classification_codes() {
    for classification in BreachClassification::ALL {
        assert_eq!(BreachClassification::try_from(classification.code()).unwrap(), classification);
    }
    assert!(matches!(
        BreachClassification::try_from(3),
        Err(AlertError::InvalidClassification(3))
    ));
}
