//! Static unit tables
//!
//! Seven fixed categories with hardcoded scale factors into each category's
//! base unit. The factors are exact definitions (1 mi = 1609.344 m,
//! 1 lb = 0.45359237 kg, 1 yr = 31 556 952 s) and must not be "simplified";
//! round-trip tests depend on them. Temperature units carry a placeholder
//! factor of 1.0 and are converted through explicit affine laws instead.

use daybook_domain::{Unit, UnitCategory, UnitCategoryInfo};

const fn unit(
    id: &'static str,
    name: &'static str,
    symbol: &'static str,
    category: UnitCategory,
    to_base: f64,
) -> Unit {
    Unit { id, name, symbol, category, to_base }
}

/// Length units, base: meter.
pub const LENGTH_UNITS: &[Unit] = &[
    unit("mm", "Millimeter", "mm", UnitCategory::Length, 0.001),
    unit("cm", "Centimeter", "cm", UnitCategory::Length, 0.01),
    unit("m", "Meter", "m", UnitCategory::Length, 1.0),
    unit("km", "Kilometer", "km", UnitCategory::Length, 1000.0),
    unit("in", "Inch", "in", UnitCategory::Length, 0.0254),
    unit("ft", "Foot", "ft", UnitCategory::Length, 0.3048),
    unit("yd", "Yard", "yd", UnitCategory::Length, 0.9144),
    unit("mi", "Mile", "mi", UnitCategory::Length, 1609.344),
];

/// Weight units, base: kilogram.
pub const WEIGHT_UNITS: &[Unit] = &[
    unit("mg", "Milligram", "mg", UnitCategory::Weight, 0.000_001),
    unit("g", "Gram", "g", UnitCategory::Weight, 0.001),
    unit("kg", "Kilogram", "kg", UnitCategory::Weight, 1.0),
    unit("t", "Metric ton", "t", UnitCategory::Weight, 1000.0),
    unit("oz", "Ounce", "oz", UnitCategory::Weight, 0.028_349_523_125),
    unit("lb", "Pound", "lb", UnitCategory::Weight, 0.453_592_37),
    unit("st", "Stone", "st", UnitCategory::Weight, 6.350_293_18),
];

/// Volume units, base: liter.
pub const VOLUME_UNITS: &[Unit] = &[
    unit("ml", "Milliliter", "mL", UnitCategory::Volume, 0.001),
    unit("l", "Liter", "L", UnitCategory::Volume, 1.0),
    unit("m3", "Cubic meter", "m³", UnitCategory::Volume, 1000.0),
    unit("tsp", "Teaspoon", "tsp", UnitCategory::Volume, 0.004_928_92),
    unit("tbsp", "Tablespoon", "tbsp", UnitCategory::Volume, 0.014_786_8),
    unit("fl_oz", "Fluid ounce", "fl oz", UnitCategory::Volume, 0.029_573_5),
    unit("cup", "Cup", "cup", UnitCategory::Volume, 0.24),
    unit("pt", "Pint", "pt", UnitCategory::Volume, 0.473_176),
    unit("qt", "Quart", "qt", UnitCategory::Volume, 0.946_353),
    unit("gal", "Gallon", "gal", UnitCategory::Volume, 3.785_41),
];

/// Temperature units: Celsius, Fahrenheit, Kelvin only. Conversion goes
/// through the affine laws in [`super::convert`], never the linear factor.
pub const TEMPERATURE_UNITS: &[Unit] = &[
    unit("c", "Celsius", "°C", UnitCategory::Temperature, 1.0),
    unit("f", "Fahrenheit", "°F", UnitCategory::Temperature, 1.0),
    unit("k", "Kelvin", "K", UnitCategory::Temperature, 1.0),
];

/// Area units, base: square meter.
pub const AREA_UNITS: &[Unit] = &[
    unit("mm2", "Square millimeter", "mm²", UnitCategory::Area, 0.000_001),
    unit("cm2", "Square centimeter", "cm²", UnitCategory::Area, 0.0001),
    unit("m2", "Square meter", "m²", UnitCategory::Area, 1.0),
    unit("ha", "Hectare", "ha", UnitCategory::Area, 10_000.0),
    unit("km2", "Square kilometer", "km²", UnitCategory::Area, 1_000_000.0),
    unit("in2", "Square inch", "in²", UnitCategory::Area, 0.000_645_16),
    unit("ft2", "Square foot", "ft²", UnitCategory::Area, 0.092_903_04),
    unit("ac", "Acre", "ac", UnitCategory::Area, 4046.856_422_4),
];

/// Speed units, base: meter per second.
pub const SPEED_UNITS: &[Unit] = &[
    unit("mps", "Meter per second", "m/s", UnitCategory::Speed, 1.0),
    unit("kmh", "Kilometer per hour", "km/h", UnitCategory::Speed, 0.277_777_777_777_777_8),
    unit("mph", "Mile per hour", "mph", UnitCategory::Speed, 0.447_04),
    unit("kn", "Knot", "kn", UnitCategory::Speed, 0.514_444),
    unit("fps", "Foot per second", "ft/s", UnitCategory::Speed, 0.3048),
];

/// Time units, base: second. The month is 1/12 of the mean Gregorian year.
pub const TIME_UNITS: &[Unit] = &[
    unit("ms", "Millisecond", "ms", UnitCategory::Time, 0.001),
    unit("s", "Second", "s", UnitCategory::Time, 1.0),
    unit("min", "Minute", "min", UnitCategory::Time, 60.0),
    unit("h", "Hour", "h", UnitCategory::Time, 3600.0),
    unit("d", "Day", "d", UnitCategory::Time, 86_400.0),
    unit("wk", "Week", "wk", UnitCategory::Time, 604_800.0),
    unit("mo", "Month", "mo", UnitCategory::Time, 2_629_746.0),
    unit("yr", "Year", "yr", UnitCategory::Time, 31_556_952.0),
];

/// Category display metadata, one entry per category.
pub const CATEGORY_INFO: &[UnitCategoryInfo] = &[
    UnitCategoryInfo {
        category: UnitCategory::Length,
        name: "Length",
        icon: "📏",
        base_unit: "Meter",
        description: "Distances from millimeters to miles",
    },
    UnitCategoryInfo {
        category: UnitCategory::Weight,
        name: "Weight",
        icon: "⚖️",
        base_unit: "Kilogram",
        description: "Mass from milligrams to metric tons",
    },
    UnitCategoryInfo {
        category: UnitCategory::Volume,
        name: "Volume",
        icon: "🧪",
        base_unit: "Liter",
        description: "Liquid and dry volume measures",
    },
    UnitCategoryInfo {
        category: UnitCategory::Temperature,
        name: "Temperature",
        icon: "🌡️",
        base_unit: "Celsius",
        description: "Celsius, Fahrenheit and Kelvin scales",
    },
    UnitCategoryInfo {
        category: UnitCategory::Area,
        name: "Area",
        icon: "📐",
        base_unit: "Square meter",
        description: "Surfaces from square millimeters to acres",
    },
    UnitCategoryInfo {
        category: UnitCategory::Speed,
        name: "Speed",
        icon: "🚀",
        base_unit: "Meter per second",
        description: "Velocity in metric, imperial and nautical units",
    },
    UnitCategoryInfo {
        category: UnitCategory::Time,
        name: "Time",
        icon: "⏱️",
        base_unit: "Second",
        description: "Durations from milliseconds to years",
    },
];

/// All units belonging to `category`, in presentation order.
pub fn units_for(category: UnitCategory) -> &'static [Unit] {
    match category {
        UnitCategory::Length => LENGTH_UNITS,
        UnitCategory::Weight => WEIGHT_UNITS,
        UnitCategory::Volume => VOLUME_UNITS,
        UnitCategory::Temperature => TEMPERATURE_UNITS,
        UnitCategory::Area => AREA_UNITS,
        UnitCategory::Speed => SPEED_UNITS,
        UnitCategory::Time => TIME_UNITS,
    }
}

/// Look up a unit by `(category, id)`.
pub fn find_unit(category: UnitCategory, id: &str) -> Option<&'static Unit> {
    units_for(category).iter().find(|unit| unit.id == id)
}

/// The base unit of `category` (`to_base == 1`). Temperature's base is
/// Celsius, listed first in its table.
pub fn base_unit(category: UnitCategory) -> &'static Unit {
    let units = units_for(category);
    units
        .iter()
        .find(|unit| unit.to_base == 1.0)
        .unwrap_or(&units[0])
}

/// Display metadata for `category`.
pub fn category_info(category: UnitCategory) -> &'static UnitCategoryInfo {
    // CATEGORY_INFO has one entry per category, same order as UnitCategory::ALL
    CATEGORY_INFO
        .iter()
        .find(|info| info.category == category)
        .unwrap_or(&CATEGORY_INFO[0])
}

/// Default `(from, to)` pair when the user switches to `category`: the base
/// unit and the first other unit in the table.
pub fn default_pair(category: UnitCategory) -> (&'static Unit, &'static Unit) {
    let base = base_unit(category);
    let other = units_for(category)
        .iter()
        .find(|unit| unit.id != base.id)
        .unwrap_or(base);
    (base, other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_base_unit_per_linear_category() {
        for category in UnitCategory::ALL {
            if category == UnitCategory::Temperature {
                continue;
            }
            let bases = units_for(category).iter().filter(|u| u.to_base == 1.0).count();
            assert_eq!(bases, 1, "category {category} must have exactly one base unit");
        }
    }

    #[test]
    fn test_temperature_has_three_fixed_units() {
        let ids: Vec<_> = TEMPERATURE_UNITS.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["c", "f", "k"]);
    }

    #[test]
    fn test_unit_ids_unique_within_category() {
        for category in UnitCategory::ALL {
            let units = units_for(category);
            for (i, a) in units.iter().enumerate() {
                for b in &units[i + 1..] {
                    assert_ne!(a.id, b.id, "duplicate id in {category}");
                }
            }
        }
    }

    #[test]
    fn test_category_info_covers_every_category() {
        for category in UnitCategory::ALL {
            assert_eq!(category_info(category).category, category);
        }
    }

    #[test]
    fn test_default_pair_is_base_plus_other() {
        let (from, to) = default_pair(UnitCategory::Length);
        assert_eq!(from.id, "m");
        assert_ne!(to.id, from.id);
    }

    #[test]
    fn test_find_unit_unknown_id() {
        assert!(find_unit(UnitCategory::Length, "parsec").is_none());
    }
}
