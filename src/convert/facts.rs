//! Fun fact composition
//!
//! Every successful conversion gets a one-line fun fact. A catalog entry's
//! own fact takes precedence; otherwise a category template is filled in
//! from the conversion.

use crate::models::QuirkyUnit;

use super::category::base_unit_display_name;
use super::category::MeasurementCategory;
use super::format::format_number;

/// Render the standardized value with its friendly unit name
/// ("1,500 kilograms")
fn value_with_unit(standard_value: f64, base_unit: &str) -> String {
    format!(
        "{} {}",
        format_number(standard_value),
        base_unit_display_name(base_unit)
    )
}

fn name_for(amount: f64, unit: &QuirkyUnit) -> &str {
    if amount == 1.0 {
        &unit.name
    } else {
        &unit.name_plural
    }
}

/// Generate a fun fact for a conversion
pub fn generate_fun_fact(
    standard_value: f64,
    base_unit: &str,
    quirky_amount: f64,
    quirky_unit: &QuirkyUnit,
) -> String {
    // A curated fact on the catalog entry always wins
    if let Some(fact) = &quirky_unit.fun_fact {
        return fact.clone();
    }

    let display = value_with_unit(standard_value, base_unit);

    match quirky_unit.category {
        MeasurementCategory::Weight => format!(
            "If you stacked {} {} on top of each other, they would weigh as much as {}!",
            quirky_amount.round(),
            quirky_unit.name_plural,
            display,
        ),
        MeasurementCategory::Length => {
            if quirky_amount > 10.0 {
                format!(
                    "If you laid {} {} end to end, they would stretch for {}!",
                    quirky_amount.round(),
                    quirky_unit.name_plural,
                    display,
                )
            } else {
                format!(
                    "{} is about the same as {:.1} {} stacked on top of each other!",
                    display,
                    quirky_amount,
                    name_for(quirky_amount, quirky_unit),
                )
            }
        }
        MeasurementCategory::Volume => format!(
            "You would need {} {} to hold {} of liquid!",
            quirky_amount.round(),
            quirky_unit.name_plural,
            display,
        ),
        MeasurementCategory::Time => {
            if quirky_unit.name == "Blink of an Eye" {
                format!(
                    "You could blink approximately {} times in {}!",
                    quirky_amount.round(),
                    display,
                )
            } else {
                format!(
                    "{} is equivalent to {:.2} {}!",
                    display,
                    quirky_amount,
                    name_for(quirky_amount, quirky_unit),
                )
            }
        }
        MeasurementCategory::Speed => format!(
            "At {:.1} times the speed of a {}, you could travel {}!",
            quirky_amount, quirky_unit.name, display,
        ),
        _ => format!(
            "That's approximately {:.1} {}!",
            quirky_amount,
            name_for(quirky_amount, quirky_unit),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(
        name: &str,
        plural: &str,
        category: MeasurementCategory,
        fun_fact: Option<&str>,
    ) -> QuirkyUnit {
        QuirkyUnit {
            id: 1,
            name: name.to_string(),
            name_plural: plural.to_string(),
            value: 1.0,
            unit: category.base_unit().to_string(),
            category,
            icon: "✨".to_string(),
            description: None,
            fun_fact: fun_fact.map(str::to_string),
        }
    }

    #[test]
    fn test_catalog_fact_takes_precedence() {
        let u = unit(
            "House Cat",
            "House Cats",
            MeasurementCategory::Weight,
            Some("Cats sleep 70% of their lives!"),
        );
        assert_eq!(
            generate_fun_fact(1500.0, "kg", 333.3, &u),
            "Cats sleep 70% of their lives!"
        );
    }

    #[test]
    fn test_weight_template() {
        let u = unit("House Cat", "House Cats", MeasurementCategory::Weight, None);
        assert_eq!(
            generate_fun_fact(1500.0, "kg", 1500.0 / 4.5, &u),
            "If you stacked 333 House Cats on top of each other, \
             they would weigh as much as 1,500 kilograms!"
        );
    }

    #[test]
    fn test_length_templates_split_at_ten() {
        let u = unit("Banana", "Bananas", MeasurementCategory::Length, None);
        assert_eq!(
            generate_fun_fact(10_000.0, "m", 50_000.0, &u),
            "If you laid 50000 Bananas end to end, they would stretch for 10,000 meters!"
        );
        assert_eq!(
            generate_fun_fact(1.0, "m", 5.0, &u),
            "1 meters is about the same as 5.0 Bananas stacked on top of each other!"
        );
    }

    #[test]
    fn test_volume_template() {
        let u = unit("Bathtub", "Bathtubs", MeasurementCategory::Volume, None);
        assert_eq!(
            generate_fun_fact(1500.0, "l", 10.0, &u),
            "You would need 10 Bathtubs to hold 1,500 liters of liquid!"
        );
    }

    #[test]
    fn test_time_blink_special_case() {
        let blink = unit(
            "Blink of an Eye",
            "Blinks of an Eye",
            MeasurementCategory::Time,
            None,
        );
        assert_eq!(
            generate_fun_fact(60.0, "s", 200.0, &blink),
            "You could blink approximately 200 times in 60 seconds!"
        );

        let mayfly = unit(
            "Mayfly Lifespan",
            "Mayfly Lifespans",
            MeasurementCategory::Time,
            None,
        );
        assert_eq!(
            generate_fun_fact(172_800.0, "s", 2.0, &mayfly),
            "172,800 seconds is equivalent to 2.00 Mayfly Lifespans!"
        );
    }

    #[test]
    fn test_speed_template() {
        let u = unit("Sloth Speed", "Sloth Speeds", MeasurementCategory::Speed, None);
        assert_eq!(
            generate_fun_fact(120.0, "kph", 500.0, &u),
            "At 500.0 times the speed of a Sloth Speed, \
             you could travel 120 kilometers per hour!"
        );
    }

    #[test]
    fn test_generic_fallback() {
        let u = unit("Mystery", "Mysteries", MeasurementCategory::Unknown, None);
        assert_eq!(
            generate_fun_fact(5.0, "widgets", 5.0, &u),
            "That's approximately 5.0 Mysteries!"
        );
    }
}
