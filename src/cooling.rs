use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AlertError;

/// The cooling mechanism of a battery. Each category has its own safe temperature range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CoolingCategory {
    Passive = 0,
    HighActive = 1,
    MediumActive = 2,
}

impl CoolingCategory {
    pub const ALL: [CoolingCategory; 3] = [
        CoolingCategory::Passive,
        CoolingCategory::HighActive,
        CoolingCategory::MediumActive,
    ];

    /// The integer code used when the category crosses an untyped boundary
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CoolingCategory {
    type Error = AlertError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CoolingCategory::Passive),
            1 => Ok(CoolingCategory::HighActive),
            2 => Ok(CoolingCategory::MediumActive),
            _ => Err(AlertError::InvalidCategory(code)),
        }
    }
}

impl From<CoolingCategory> for u8 {
    fn from(category: CoolingCategory) -> Self {
        category.code()
    }
}

impl FromStr for CoolingCategory {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "passive" => Ok(CoolingCategory::Passive),
            "high-active" | "hi-active" => Ok(CoolingCategory::HighActive),
            "medium-active" | "med-active" => Ok(CoolingCategory::MediumActive),
            _ => Err(AlertError::InvalidCategoryName(s.to_string())),
        }
    }
}

/// An inclusive safe operating interval in degrees Celsius. `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    pub lower: f64,
    pub upper: f64,
}

/// Indexed by `CoolingCategory::code()`
static LIMITS: [TemperatureRange; 3] = [
    TemperatureRange { lower: 0.0, upper: 35.0 },
    TemperatureRange { lower: 0.0, upper: 45.0 },
    TemperatureRange { lower: 0.0, upper: 40.0 },
];

/// The safe temperature range for a cooling category
pub fn lookup(category: CoolingCategory) -> TemperatureRange {
    LIMITS[category.code() as usize]
}

/// Look up a range from an untyped category code, e.g. one read from telemetry.
pub fn lookup_code(code: u8) -> Result<TemperatureRange, AlertError> {
    let category = CoolingCategory::try_from(code)?;
    Ok(lookup(category))
}

#[test]
fn test_lookup_limits() {
    assert_eq!(lookup(CoolingCategory::Passive), TemperatureRange { lower: 0.0, upper: 35.0 });
    assert_eq!(lookup(CoolingCategory::HighActive), TemperatureRange { lower: 0.0, upper: 45.0 });
    assert_eq!(lookup(CoolingCategory::MediumActive), TemperatureRange { lower: 0.0, upper: 40.0 });
}

#[test]
fn test_lookup_is_stable() {
    for category in CoolingCategory::ALL {
        let range = lookup(category);
        assert!(range.lower <= range.upper);
        assert_eq!(lookup(category), range);
        assert_eq!(lookup_code(category.code()).unwrap(), range);
    }
}

#[test]
fn test_lookup_code_out_of_range() {
    let result = lookup_code(3);
    assert!(matches!(result, Err(AlertError::InvalidCategory(3))));
    let result = lookup_code(u8::MAX);
    assert!(matches!(result, Err(AlertError::InvalidCategory(255))));
}

#[test]
fn test_category_from_str() {
    assert_eq!("passive".parse::<CoolingCategory>().unwrap(), CoolingCategory::Passive);
    assert_eq!("High-Active".parse::<CoolingCategory>().unwrap(), CoolingCategory::HighActive);
    assert_eq!("med-active".parse::<CoolingCategory>().unwrap(), CoolingCategory::MediumActive);
    assert!(matches!(
        "liquid".parse::<CoolingCategory>(),
        Err(AlertError::InvalidCategoryName(name)) if name == "liquid"
    ));
}
