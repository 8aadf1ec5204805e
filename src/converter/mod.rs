//! Unit conversion between length, weight, and temperature units.
//!
//! Length and weight use fixed factors to a base unit (metre, kilogram).
//! Temperatures go through Celsius.

use thiserror::Error;

/// Conversion failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("cannot convert {from} to {to}: different categories")]
    CategoryMismatch { from: String, to: String },

    #[error("'{0}' is not a number")]
    InvalidAmount(String),
}

/// Unit families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Length,
    Weight,
    Temperature,
}

const LENGTH_UNITS: &[(&str, f64)] = &[
    ("m", 1.0),
    ("cm", 0.01),
    ("mm", 0.001),
    ("km", 1000.0),
    ("in", 0.0254),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("mi", 1609.34),
];

const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("kg", 1.0),
    ("g", 0.001),
    ("mg", 0.000001),
    ("lb", 0.453592),
    ("oz", 0.0283495),
];

const TEMPERATURE_UNITS: &[&str] = &["C", "F", "K"];

impl Category {
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "length" => Some(Category::Length),
            "weight" => Some(Category::Weight),
            "temperature" | "temp" => Some(Category::Temperature),
            _ => None,
        }
    }

    /// Unit symbols in display order.
    pub fn units(&self) -> Vec<&'static str> {
        match self {
            Category::Length => LENGTH_UNITS.iter().map(|(u, _)| *u).collect(),
            Category::Weight => WEIGHT_UNITS.iter().map(|(u, _)| *u).collect(),
            Category::Temperature => TEMPERATURE_UNITS.to_vec(),
        }
    }

    /// Default (from, to) pair selected when switching to this category.
    pub fn default_units(&self) -> (&'static str, &'static str) {
        match self {
            Category::Length => ("m", "ft"),
            Category::Weight => ("kg", "lb"),
            Category::Temperature => ("C", "F"),
        }
    }

    pub fn has_unit(&self, unit: &str) -> bool {
        self.units().contains(&unit)
    }

    /// Finds the category a unit symbol belongs to.
    pub fn of_unit(unit: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.has_unit(unit))
    }

    fn factor(&self, unit: &str) -> Option<f64> {
        let table = match self {
            Category::Length => LENGTH_UNITS,
            Category::Weight => WEIGHT_UNITS,
            Category::Temperature => return None,
        };
        table.iter().find(|(u, _)| *u == unit).map(|(_, f)| *f)
    }
}

/// Converts `value` between two units of `category`.
pub fn convert_value(category: Category, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    for unit in [from, to] {
        if !category.has_unit(unit) {
            return Err(ConvertError::UnknownUnit(unit.to_string()));
        }
    }

    if category == Category::Temperature {
        let celsius = match from {
            "F" => (value - 32.0) * (5.0 / 9.0),
            "K" => value - 273.15,
            _ => value,
        };
        return Ok(match to {
            "F" => celsius * (9.0 / 5.0) + 32.0,
            "K" => celsius + 273.15,
            _ => celsius,
        });
    }

    // Both lookups succeed: units were checked above.
    let from_factor = category.factor(from).unwrap_or(1.0);
    let to_factor = category.factor(to).unwrap_or(1.0);
    Ok(value * from_factor / to_factor)
}

/// Formats a converted value for display.
///
/// Temperatures get two decimals. Other results below 0.001 or above 10000
/// use exponent notation with four fraction digits; the rest get up to four
/// fraction digits with thousands separators.
pub fn format_result(category: Category, value: f64) -> String {
    if category == Category::Temperature {
        return format!("{:.2}", value);
    }
    if value < 0.001 || value > 10000.0 {
        return format_exponential(value);
    }
    format_grouped(value)
}

fn format_exponential(value: f64) -> String {
    let formatted = format!("{:.4e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}

fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.4}", value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac)
    }
}

/// Parses a decimal amount as typed.
pub fn parse_amount(input: &str) -> Result<f64, ConvertError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConvertError::InvalidAmount(input.to_string()))
}

/// One-shot conversion with the category inferred from the units.
pub fn convert(amount: &str, from: &str, to: &str) -> Result<String, ConvertError> {
    let category = Category::of_unit(from).ok_or_else(|| ConvertError::UnknownUnit(from.to_string()))?;
    if !category.has_unit(to) {
        return Err(match Category::of_unit(to) {
            Some(_) => ConvertError::CategoryMismatch {
                from: from.to_string(),
                to: to.to_string(),
            },
            None => ConvertError::UnknownUnit(to.to_string()),
        });
    }
    let value = parse_amount(amount)?;
    Ok(format_result(category, convert_value(category, value, from, to)?))
}

// ============================================================================
// UnitConverter
// ============================================================================

/// Converter tab state: selected category, typed amount and unit pair.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitConverter {
    category: Category,
    amount: String,
    from: &'static str,
    to: &'static str,
}

impl Default for UnitConverter {
    fn default() -> Self {
        let (from, to) = Category::Length.default_units();
        Self {
            category: Category::Length,
            amount: "1".to_string(),
            from,
            to,
        }
    }
}

impl UnitConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches category and resets the unit pair to its defaults.
    pub fn set_category(&mut self, category: Category) {
        let (from, to) = category.default_units();
        self.category = category;
        self.from = from;
        self.to = to;
    }

    pub fn set_amount(&mut self, amount: &str) {
        self.amount = amount.to_string();
    }

    pub fn set_from(&mut self, unit: &str) -> Result<(), ConvertError> {
        self.from = self.lookup(unit)?;
        Ok(())
    }

    pub fn set_to(&mut self, unit: &str) -> Result<(), ConvertError> {
        self.to = self.lookup(unit)?;
        Ok(())
    }

    fn lookup(&self, unit: &str) -> Result<&'static str, ConvertError> {
        self.category
            .units()
            .into_iter()
            .find(|u| *u == unit)
            .ok_or_else(|| ConvertError::UnknownUnit(unit.to_string()))
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn units(&self) -> (&'static str, &'static str) {
        (self.from, self.to)
    }

    /// Formatted result, or `---` when the amount is not a number.
    pub fn result(&self) -> String {
        parse_amount(&self.amount)
            .and_then(|value| convert_value(self.category, value, self.from, self.to))
            .map(|value| format_result(self.category, value))
            .unwrap_or_else(|_| "---".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod convert_value_tests {
        use super::*;

        fn close(a: f64, b: f64) -> bool {
            (a - b).abs() < 1e-9
        }

        #[test]
        fn test_metre_to_feet() {
            let v = convert_value(Category::Length, 1.0, "m", "ft").unwrap();
            assert!(close(v, 1.0 / 0.3048));
        }

        #[test]
        fn test_same_unit_is_identity() {
            let v = convert_value(Category::Weight, 3.5, "kg", "kg").unwrap();
            assert!(close(v, 3.5));
        }

        #[test]
        fn test_temperature() {
            assert!(close(convert_value(Category::Temperature, 100.0, "C", "F").unwrap(), 212.0));
            assert!(close(convert_value(Category::Temperature, 32.0, "F", "C").unwrap(), 0.0));
            assert!(close(convert_value(Category::Temperature, 0.0, "K", "C").unwrap(), -273.15));
            assert!(close(convert_value(Category::Temperature, 0.0, "C", "K").unwrap(), 273.15));
        }

        #[test]
        fn test_unknown_unit() {
            let err = convert_value(Category::Length, 1.0, "m", "lb").unwrap_err();
            assert_eq!(err, ConvertError::UnknownUnit("lb".to_string()));
        }
    }

    mod format_tests {
        use super::*;

        #[test]
        fn test_temperature_two_decimals() {
            assert_eq!(format_result(Category::Temperature, 212.0), "212.00");
            assert_eq!(format_result(Category::Temperature, -40.4567), "-40.46");
        }

        #[test]
        fn test_up_to_four_fraction_digits() {
            assert_eq!(format_result(Category::Length, 3.280839895), "3.2808");
            assert_eq!(format_result(Category::Length, 2.5), "2.5");
            assert_eq!(format_result(Category::Length, 100.0), "100");
        }

        #[test]
        fn test_thousands_grouping() {
            assert_eq!(format_result(Category::Length, 1609.34), "1,609.34");
            assert_eq!(format_result(Category::Length, 10000.0), "10,000");
        }

        #[test]
        fn test_exponential_for_large_values() {
            assert_eq!(format_result(Category::Length, 12345.678), "1.2346e+4");
        }

        #[test]
        fn test_exponential_for_small_values() {
            assert_eq!(format_result(Category::Weight, 0.0001), "1.0000e-4");
            assert_eq!(format_result(Category::Weight, 0.0), "0.0000e+0");
        }
    }

    mod one_shot_tests {
        use super::*;

        #[test]
        fn test_convert_infers_category() {
            assert_eq!(convert("1", "km", "m").unwrap(), "1,000");
            assert_eq!(convert("100", "C", "F").unwrap(), "212.00");
        }

        #[test]
        fn test_convert_mismatch() {
            let err = convert("1", "kg", "m").unwrap_err();
            assert!(matches!(err, ConvertError::CategoryMismatch { .. }));
        }

        #[test]
        fn test_convert_invalid_amount() {
            let err = convert("abc", "kg", "lb").unwrap_err();
            assert_eq!(err, ConvertError::InvalidAmount("abc".to_string()));
        }

        #[test]
        fn test_convert_unknown_unit() {
            let err = convert("1", "parsec", "m").unwrap_err();
            assert_eq!(err, ConvertError::UnknownUnit("parsec".to_string()));
        }
    }

    mod unit_converter_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let converter = UnitConverter::new();
            assert_eq!(converter.category(), Category::Length);
            assert_eq!(converter.units(), ("m", "ft"));
            assert_eq!(converter.result(), "3.2808");
        }

        #[test]
        fn test_category_change_resets_units() {
            let mut converter = UnitConverter::new();
            converter.set_to("km").unwrap();

            converter.set_category(Category::Weight);
            assert_eq!(converter.units(), ("kg", "lb"));

            converter.set_category(Category::Temperature);
            assert_eq!(converter.units(), ("C", "F"));
        }

        #[test]
        fn test_non_numeric_amount() {
            let mut converter = UnitConverter::new();
            converter.set_amount("");
            assert_eq!(converter.result(), "---");
        }

        #[test]
        fn test_unit_outside_category_rejected() {
            let mut converter = UnitConverter::new();
            assert!(converter.set_from("kg").is_err());
            assert_eq!(converter.units(), ("m", "ft"));
        }
    }
}
