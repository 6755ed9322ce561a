//! Default catalog seeding
//!
//! Populates the quirky unit catalog with the built-in reference units.
//! Seeding is skipped when the catalog already has entries, so user
//! additions survive restarts.

use rusqlite::Connection;

use crate::convert::MeasurementCategory;
use crate::models::{QuirkyUnit, QuirkyUnitCreate};

use super::connection::DbResult;

struct SeedUnit {
    name: &'static str,
    name_plural: &'static str,
    value: f64,
    category: MeasurementCategory,
    icon: &'static str,
    description: &'static str,
    fun_fact: &'static str,
}

const DEFAULT_UNITS: &[SeedUnit] = &[
    // Weight
    SeedUnit {
        name: "House Cat",
        name_plural: "House Cats",
        value: 4.5,
        category: MeasurementCategory::Weight,
        icon: "🐈",
        description: "The average domestic housecat",
        fun_fact: "If you stacked house cats on top of each other, 10 would be approximately the height of a standard doorway!",
    },
    SeedUnit {
        name: "Bowling Ball",
        name_plural: "Bowling Balls",
        value: 7.0,
        category: MeasurementCategory::Weight,
        icon: "🎳",
        description: "A standard bowling ball",
        fun_fact: "A professional bowler typically owns 12-16 bowling balls, weighing a total of nearly 200 pounds!",
    },
    SeedUnit {
        name: "African Elephant",
        name_plural: "African Elephants",
        value: 5000.0,
        category: MeasurementCategory::Weight,
        icon: "🐘",
        description: "A fully grown African elephant",
        fun_fact: "Elephants consume around 150-170 kg of food daily, about 3% of their body weight!",
    },
    SeedUnit {
        name: "Blue Whale",
        name_plural: "Blue Whales",
        value: 180_000.0,
        category: MeasurementCategory::Weight,
        icon: "🐋",
        description: "The largest animal ever known to have existed",
        fun_fact: "A blue whale's heart is the size of a small car and weighs about as much as three adult humans!",
    },
    SeedUnit {
        name: "Smartphone",
        name_plural: "Smartphones",
        value: 0.2,
        category: MeasurementCategory::Weight,
        icon: "📱",
        description: "An average modern smartphone",
        fun_fact: "The first mobile phone weighed about 2.2 pounds (1 kg), nearly 5 times more than today's smartphones!",
    },
    SeedUnit {
        name: "Cupcake",
        name_plural: "Cupcakes",
        value: 0.08,
        category: MeasurementCategory::Weight,
        icon: "🧁",
        description: "A standard frosted cupcake",
        fun_fact: "If you ate one cupcake a day for a year, you'd consume about 29 kg of cupcakes!",
    },
    // Length
    SeedUnit {
        name: "Banana",
        name_plural: "Bananas",
        value: 0.2,
        category: MeasurementCategory::Length,
        icon: "🍌",
        description: "An average-sized banana",
        fun_fact: "If you laid all bananas produced worldwide in a year end-to-end, they would circle the Earth about 300 times!",
    },
    SeedUnit {
        name: "Double-Decker Bus",
        name_plural: "Double-Decker Buses",
        value: 11.0,
        category: MeasurementCategory::Length,
        icon: "🚌",
        description: "A typical London double-decker bus",
        fun_fact: "The first London double-decker bus operated in 1923. Today, there are over 1,000 of them roaming London!",
    },
    SeedUnit {
        name: "Giraffe Height",
        name_plural: "Giraffe Heights",
        value: 5.5,
        category: MeasurementCategory::Length,
        icon: "🦒",
        description: "The height of an adult giraffe",
        fun_fact: "A giraffe's neck alone is about 2.4 meters long, which is taller than most humans!",
    },
    SeedUnit {
        name: "Football Field",
        name_plural: "Football Fields",
        value: 100.0,
        category: MeasurementCategory::Length,
        icon: "⚽",
        description: "The length of a standard football (soccer) field",
        fun_fact: "FIFA allows football fields to vary in size, with length ranging from 90m to 120m!",
    },
    // Volume
    SeedUnit {
        name: "Bathtub",
        name_plural: "Bathtubs",
        value: 150.0,
        category: MeasurementCategory::Volume,
        icon: "🛁",
        description: "A standard-sized household bathtub",
        fun_fact: "Taking a bath typically uses twice as much water as a 10-minute shower!",
    },
    SeedUnit {
        name: "Olympic Swimming Pool",
        name_plural: "Olympic Swimming Pools",
        value: 2_500_000.0,
        category: MeasurementCategory::Volume,
        icon: "🏊",
        description: "An Olympic-sized swimming pool",
        fun_fact: "An Olympic swimming pool contains enough water to take over 16,600 baths!",
    },
    // Time
    SeedUnit {
        name: "Blink of an Eye",
        name_plural: "Blinks of an Eye",
        value: 0.3,
        category: MeasurementCategory::Time,
        icon: "👁️",
        description: "The time it takes to blink",
        fun_fact: "Humans blink about 15-20 times per minute, which means we spend about 10% of our waking hours with our eyes closed!",
    },
    SeedUnit {
        name: "Mayfly Lifespan",
        name_plural: "Mayfly Lifespans",
        value: 86_400.0,
        category: MeasurementCategory::Time,
        icon: "🦟",
        description: "The average lifespan of a mayfly (1 day)",
        fun_fact: "Mayflies live only about 24 hours as adults, but can spend up to two years underwater as nymphs before emerging!",
    },
    // Speed
    SeedUnit {
        name: "Sloth Speed",
        name_plural: "Sloth Speeds",
        value: 0.24,
        category: MeasurementCategory::Speed,
        icon: "🦥",
        description: "The top speed of a three-toed sloth",
        fun_fact: "Sloths are so slow that algae can grow on their fur, creating a green camouflage in the forest canopy!",
    },
    SeedUnit {
        name: "Charging Rhino",
        name_plural: "Charging Rhinos",
        value: 50.0,
        category: MeasurementCategory::Speed,
        icon: "🦏",
        description: "The speed of a charging rhinoceros",
        fun_fact: "Despite weighing over two tons, rhinos can outrun most humans and can change direction surprisingly quickly!",
    },
];

/// Seed the default catalog if the quirky_units table is empty
///
/// Returns the number of units inserted (0 when the catalog already has
/// entries).
pub fn seed_default_units(conn: &Connection) -> DbResult<usize> {
    if QuirkyUnit::count(conn)? > 0 {
        return Ok(0);
    }

    for seed in DEFAULT_UNITS {
        QuirkyUnit::create(
            conn,
            &QuirkyUnitCreate {
                name: seed.name.to_string(),
                name_plural: seed.name_plural.to_string(),
                value: seed.value,
                unit: seed.category.base_unit().to_string(),
                category: seed.category,
                icon: seed.icon.to_string(),
                description: Some(seed.description.to_string()),
                fun_fact: Some(seed.fun_fact.to_string()),
            },
        )?;
    }

    Ok(DEFAULT_UNITS.len())
}
