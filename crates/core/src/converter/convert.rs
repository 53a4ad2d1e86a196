//! Conversion laws
//!
//! Every linear category converts through its base unit with one multiply
//! and one divide. Temperature is the one non-uniform branch: it routes
//! through Celsius using explicit affine laws, dispatched on an enum so the
//! offsets never get forced into the linear factor model.

use daybook_domain::{DaybookError, Result, Unit, UnitCategory};

/// The three fixed temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Resolve a temperature unit id. Any other id is a programming or
    /// config error, not user input.
    pub fn from_unit_id(id: &str) -> Result<Self> {
        match id {
            "c" => Ok(Self::Celsius),
            "f" => Ok(Self::Fahrenheit),
            "k" => Ok(Self::Kelvin),
            other => Err(DaybookError::UnknownUnit(other.to_string())),
        }
    }

    /// Convert a value on this scale to Celsius.
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Kelvin => value - 273.15,
        }
    }

    /// Convert a Celsius value to this scale.
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Self::Kelvin => celsius + 273.15,
        }
    }
}

/// Convert `value` from one unit to another within the same category.
pub fn convert(value: f64, from: &Unit, to: &Unit) -> Result<f64> {
    if from.category != to.category {
        return Err(DaybookError::CategoryMismatch {
            from: from.category.to_string(),
            to: to.category.to_string(),
        });
    }

    if from.category == UnitCategory::Temperature {
        let celsius = TemperatureScale::from_unit_id(from.id)?.to_celsius(value);
        return Ok(TemperatureScale::from_unit_id(to.id)?.from_celsius(celsius));
    }

    Ok(value * from.to_base / to.to_base)
}

#[cfg(test)]
mod tests {
    use super::super::units::find_unit;
    use super::*;

    fn get(category: UnitCategory, id: &str) -> &'static Unit {
        find_unit(category, id).unwrap()
    }

    #[test]
    fn test_linear_conversion_through_base() {
        let km = get(UnitCategory::Length, "km");
        let m = get(UnitCategory::Length, "m");
        assert_eq!(convert(1.0, km, m).unwrap(), 1000.0);

        let g = get(UnitCategory::Weight, "g");
        let kg = get(UnitCategory::Weight, "kg");
        assert_eq!(convert(1000.0, g, kg).unwrap(), 1.0);
    }

    #[test]
    fn test_temperature_fixed_points() {
        let c = get(UnitCategory::Temperature, "c");
        let f = get(UnitCategory::Temperature, "f");
        let k = get(UnitCategory::Temperature, "k");

        assert_eq!(convert(0.0, c, f).unwrap(), 32.0);
        assert_eq!(convert(100.0, c, f).unwrap(), 212.0);
        assert_eq!(convert(0.0, c, k).unwrap(), 273.15);
    }

    #[test]
    fn test_fahrenheit_to_kelvin_routes_through_celsius() {
        let f = get(UnitCategory::Temperature, "f");
        let k = get(UnitCategory::Temperature, "k");
        let result = convert(32.0, f, k).unwrap();
        assert!((result - 273.15).abs() < 1e-12);
    }

    #[test]
    fn test_category_mismatch_rejected() {
        let km = get(UnitCategory::Length, "km");
        let kg = get(UnitCategory::Weight, "kg");
        let err = convert(1.0, km, kg).unwrap_err();
        assert!(matches!(err, DaybookError::CategoryMismatch { .. }));
    }

    #[test]
    fn test_unknown_temperature_id_names_offender() {
        let err = TemperatureScale::from_unit_id("rankine").unwrap_err();
        assert_eq!(err, DaybookError::UnknownUnit("rankine".to_string()));
    }
}
