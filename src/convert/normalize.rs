//! Unit normalization
//!
//! Maps recognized unit aliases (including plurals and abbreviations) to the
//! canonical base unit of their category, applying a fixed linear scale
//! factor. Unrecognized units pass through unchanged so that downstream code
//! can report them instead of failing early.

// ============================================================================
// Weight Conversion Constants (to kilograms)
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Kilograms per gram
pub const KG_PER_G: f64 = 0.001;
/// Kilograms per metric tonne
pub const KG_PER_TONNE: f64 = 1000.0;

// ============================================================================
// Length Conversion Constants (to meters)
// ============================================================================

/// Meters per centimeter
pub const M_PER_CM: f64 = 0.01;
/// Meters per millimeter
pub const M_PER_MM: f64 = 0.001;
/// Meters per kilometer
pub const M_PER_KM: f64 = 1000.0;
/// Meters per inch
pub const M_PER_IN: f64 = 0.0254;
/// Meters per foot
pub const M_PER_FT: f64 = 0.3048;
/// Meters per mile
pub const M_PER_MI: f64 = 1609.34;

// ============================================================================
// Volume Conversion Constants (to liters)
// ============================================================================

/// Liters per milliliter
pub const L_PER_ML: f64 = 0.001;
/// Liters per gallon (US)
pub const L_PER_GAL: f64 = 3.78541;

// ============================================================================
// Time Conversion Constants (to seconds)
// ============================================================================

/// Seconds per minute
pub const S_PER_MIN: f64 = 60.0;
/// Seconds per hour
pub const S_PER_HOUR: f64 = 3600.0;
/// Seconds per day
pub const S_PER_DAY: f64 = 86400.0;
/// Seconds per year (365 days)
pub const S_PER_YEAR: f64 = 31_536_000.0;

// ============================================================================
// Speed Conversion Constants (to kilometers per hour)
// ============================================================================

/// Kilometers per hour per mile per hour
pub const KPH_PER_MPH: f64 = 1.60934;
/// Kilometers per hour per meter per second
pub const KPH_PER_MPS: f64 = 3.6;

/// A value normalized to its category's canonical base unit
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub value: f64,
    pub base_unit: String,
}

/// Get the scale factor and base unit for a recognized unit alias
///
/// Returns None for unrecognized aliases, including the canonical base units
/// themselves (which need no conversion).
pub fn base_factor(unit: &str) -> Option<(f64, &'static str)> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        // Weight
        "lb" | "lbs" | "pound" | "pounds" => Some((KG_PER_LB, "kg")),
        "g" | "gram" | "grams" => Some((KG_PER_G, "kg")),
        "t" | "tonne" | "tonnes" | "ton" | "tons" => Some((KG_PER_TONNE, "kg")),

        // Length
        "cm" | "centimeter" | "centimeters" => Some((M_PER_CM, "m")),
        "mm" | "millimeter" | "millimeters" => Some((M_PER_MM, "m")),
        "km" | "kilometer" | "kilometers" => Some((M_PER_KM, "m")),
        "in" | "inch" | "inches" => Some((M_PER_IN, "m")),
        "ft" | "foot" | "feet" => Some((M_PER_FT, "m")),
        "mi" | "mile" | "miles" => Some((M_PER_MI, "m")),

        // Volume
        "ml" | "milliliter" | "milliliters" => Some((L_PER_ML, "l")),
        "gal" | "gallon" | "gallons" => Some((L_PER_GAL, "l")),

        // Time
        "min" | "minute" | "minutes" => Some((S_PER_MIN, "s")),
        "h" | "hr" | "hour" | "hours" => Some((S_PER_HOUR, "s")),
        "d" | "day" | "days" => Some((S_PER_DAY, "s")),
        "y" | "yr" | "year" | "years" => Some((S_PER_YEAR, "s")),

        // Speed
        "mph" => Some((KPH_PER_MPH, "kph")),
        "m/s" => Some((KPH_PER_MPS, "kph")),

        _ => None,
    }
}

/// Normalize a value in the given unit to its category's canonical base unit
///
/// If the unit alias is not recognized, the value is returned unchanged with
/// the unit passed through verbatim (lowercased). This never fails: unknown
/// units are preserved for downstream error reporting.
pub fn normalize(value: f64, unit: &str) -> Normalized {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match base_factor(trimmed) {
        Some((factor, base_unit)) => Normalized {
            value: value * factor,
            base_unit: base_unit.to_string(),
        },
        None => Normalized {
            value,
            base_unit: trimmed.to_string(),
        },
    }
}
