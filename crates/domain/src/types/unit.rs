//! Measurement unit types for the conversion engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::impl_domain_string_conversions;

/// Physical quantity category. Conversions never cross categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Length,
    Weight,
    Volume,
    Temperature,
    Area,
    Speed,
    Time,
}

impl_domain_string_conversions!(UnitCategory {
    Length => "length",
    Weight => "weight",
    Volume => "volume",
    Temperature => "temperature",
    Area => "area",
    Speed => "speed",
    Time => "time",
});

impl UnitCategory {
    /// All categories, in the order they are presented to the user.
    pub const ALL: [Self; 7] = [
        Self::Length,
        Self::Weight,
        Self::Volume,
        Self::Temperature,
        Self::Area,
        Self::Speed,
        Self::Time,
    ];
}

/// One measurement unit within a category.
///
/// Units are immutable and statically defined; they are looked up by
/// `(category, id)` and never created at runtime. `to_base` is the
/// multiplicative factor converting 1 unit into the category's base unit.
/// For temperature units the factor is meaningless (set to 1.0); the engine
/// dispatches temperature conversions through explicit affine laws instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub category: UnitCategory,
    pub to_base: f64,
}

/// Display metadata for a unit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCategoryInfo {
    pub category: UnitCategory,
    pub name: &'static str,
    pub icon: &'static str,
    pub base_unit: &'static str,
    pub description: &'static str,
}

/// Immutable record of one performed conversion.
///
/// Appended to the converter history (newest first, capped) and never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub category: UnitCategory,
    pub from_value: f64,
    pub from_unit: String,
    pub to_value: f64,
    pub to_unit: String,
    pub formatted: String,
}

impl ConversionRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        category: UnitCategory,
        from_value: f64,
        from_unit: &str,
        to_value: f64,
        to_unit: &str,
        formatted: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            category,
            from_value,
            from_unit: from_unit.to_string(),
            to_value,
            to_unit: to_unit.to_string(),
            formatted,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_category_string_round_trip() {
        for category in UnitCategory::ALL {
            let parsed = UnitCategory::from_str(&category.to_string()).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_conversion_record_serde_round_trip() {
        let record = ConversionRecord::new(UnitCategory::Length, 1.0, "km", 1000.0, "m", "1000".into());
        let json = serde_json::to_string(&record).unwrap();
        let back: ConversionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
