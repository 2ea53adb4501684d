use serde::{Deserialize, Deserializer, Serialize};

use crate::CoolingCategory;

/// Longest brand kept on a descriptor, in bytes. Longer names are truncated.
pub const MAX_BRAND_LEN: usize = 48;

/// The static characteristics of a battery under monitoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryDescriptor {
    /// Selects the safe temperature range. Encoded as the integer category code.
    pub cooling_category: CoolingCategory,
    /// Informational only. At most `MAX_BRAND_LEN` bytes.
    #[serde(deserialize_with = "deserialize_brand")]
    brand: String,
}

impl BatteryDescriptor {
    pub fn new(cooling_category: CoolingCategory, brand: &str) -> Self {
        Self {
            cooling_category,
            brand: truncate_brand(brand).to_string(),
        }
    }

    /// Parse a descriptor from a JSON document such as `{"cooling_category": 1, "brand": "Acme"}`
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }
}

fn truncate_brand(brand: &str) -> &str {
    if brand.len() <= MAX_BRAND_LEN {
        return brand;
    }
    let mut end = MAX_BRAND_LEN;
    while !brand.is_char_boundary(end) {
        end -= 1;
    }
    &brand[..end]
}

fn deserialize_brand<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let brand = String::deserialize(deserializer)?;
    Ok(truncate_brand(&brand).to_string())
}

#[test]
fn test_brand_is_truncated() {
    let long = "x".repeat(100);
    let descriptor = BatteryDescriptor::new(CoolingCategory::Passive, &long);
    assert_eq!(descriptor.brand().len(), MAX_BRAND_LEN);

    let short = BatteryDescriptor::new(CoolingCategory::Passive, "SampleBrand");
    assert_eq!(short.brand(), "SampleBrand");
}

#[test]
fn test_brand_truncation_respects_char_boundary() {
    // 47 ascii bytes then a 2 byte char straddling the limit
    let brand = format!("{}é", "a".repeat(47));
    let descriptor = BatteryDescriptor::new(CoolingCategory::Passive, &brand);
    assert_eq!(descriptor.brand(), "a".repeat(47));
}

#[test]
fn test_from_json() {
    let descriptor =
        BatteryDescriptor::from_json(r#"{"cooling_category": 1, "brand": "SampleBrand"}"#).unwrap();
    assert_eq!(descriptor, BatteryDescriptor::new(CoolingCategory::HighActive, "SampleBrand"));

    let long = format!(r#"{{"cooling_category": 0, "brand": "{}"}}"#, "b".repeat(60));
    assert_eq!(BatteryDescriptor::from_json(&long).unwrap().brand().len(), MAX_BRAND_LEN);
}

#[test]
fn test_from_json_invalid_category() {
    let err = BatteryDescriptor::from_json(r#"{"cooling_category": 9, "brand": "x"}"#).unwrap_err();
    assert!(err.to_string().contains("Invalid cooling category code: 9"), "{err}");
}
