//! Display formatting for measurements and quirky amounts
//!
//! Locale-style number grouping, precision trimming, and the pluralization
//! rules used in conversion displays and fun facts.

use crate::models::QuirkyUnit;

/// Group the integer digits of a non-negative integer string in threes
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a number with comma grouping and at most `max_frac` fraction
/// digits, trimming trailing zeros
fn grouped(num: f64, max_frac: usize) -> String {
    let negative = num < 0.0;
    let rounded = format!("{:.*}", max_frac, num.abs());

    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    let mut out = String::new();
    if negative && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Format a number with comma grouping for display ("31,536,000")
///
/// Fraction digits are capped at 3, trailing zeros trimmed.
pub fn format_number(num: f64) -> String {
    grouped(num, 3)
}

/// Format a number to a fixed precision with appropriate rounding
///
/// Whole numbers print without a fraction, very small magnitudes switch to
/// scientific notation, everything else rounds to `precision` digits with
/// trailing zeros trimmed.
pub fn format_precision(num: f64, precision: usize) -> String {
    if num.fract() == 0.0 && num.abs() < 1e15 {
        return format!("{}", num as i64);
    }

    if num.abs() < 0.01 && num != 0.0 {
        return format!("{:.*e}", precision, num);
    }

    let fixed = format!("{:.*}", precision, num);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Format a standardized measurement with its unit, pluralizing the handful
/// of unit spellings that need it
pub fn format_measurement(value: f64, unit: &str) -> String {
    let formatted = format_precision(value, 2);

    if value != 1.0 {
        let plural = match unit {
            "foot" => Some("feet"),
            "inch" => Some("inches"),
            "mile" => Some("miles"),
            "pound" | "lb" => Some("pounds"),
            "gallon" => Some("gallons"),
            "year" => Some("years"),
            "day" => Some("days"),
            "hour" => Some("hours"),
            "minute" => Some("minutes"),
            "second" => Some("seconds"),
            _ => None,
        };
        if let Some(plural) = plural {
            return format!("{} {}", formatted, plural);
        }
    }

    format!("{} {}", formatted, unit)
}

/// Format a quirky amount with the unit's name, singular only for exactly 1
///
/// Plural amounts are grouped with at most one fraction digit
/// ("333.3 House Cats").
pub fn format_quirky_amount(amount: f64, unit: &QuirkyUnit) -> String {
    if amount == 1.0 {
        format!("1 {}", unit.name)
    } else {
        format!("{} {}", grouped(amount, 1), unit.name_plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::MeasurementCategory;

    fn cat() -> QuirkyUnit {
        QuirkyUnit {
            id: 1,
            name: "House Cat".to_string(),
            name_plural: "House Cats".to_string(),
            value: 4.5,
            unit: "kg".to_string(),
            category: MeasurementCategory::Weight,
            icon: "🐈".to_string(),
            description: None,
            fun_fact: None,
        }
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(1500.0), "1,500");
        assert_eq!(format_number(31_536_000.0), "31,536,000");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1234.5678), "1,234.568");
    }

    #[test]
    fn test_format_precision() {
        assert_eq!(format_precision(1500.0, 2), "1500");
        assert_eq!(format_precision(2.5, 2), "2.5");
        assert_eq!(format_precision(2.504, 2), "2.5");
        assert_eq!(format_precision(0.907184, 2), "0.91");
        // Very small magnitudes switch to scientific notation
        assert_eq!(format_precision(0.0083, 2), "8.30e-3");
        assert_eq!(format_precision(0.0, 2), "0");
    }

    #[test]
    fn test_format_measurement_pluralization() {
        assert_eq!(format_measurement(2.0, "mile"), "2 miles");
        assert_eq!(format_measurement(1.0, "mile"), "1 mile");
        assert_eq!(format_measurement(3.5, "hour"), "3.5 hours");
        assert_eq!(format_measurement(2.0, "lb"), "2 pounds");
        // Base units are left alone
        assert_eq!(format_measurement(1500.0, "kg"), "1500 kg");
    }

    #[test]
    fn test_format_quirky_amount() {
        let unit = cat();
        assert_eq!(format_quirky_amount(1.0, &unit), "1 House Cat");
        let amount = 1500.0 / 4.5;
        assert_eq!(format_quirky_amount(amount, &unit), "333.3 House Cats");
        assert_eq!(format_quirky_amount(18_750.0, &unit), "18,750 House Cats");
        // Slightly off from 1 is still plural
        assert_eq!(format_quirky_amount(1.04, &unit), "1 House Cats");
    }
}
