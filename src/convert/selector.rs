//! Quirky unit selection
//!
//! Filters a catalog to candidates of the right category and ranks them by
//! how pleasant the resulting conversion ratio is to read. Results between 1
//! and 1000 are ideal; tiny fractions and enormous counts are penalized.

use crate::models::QuirkyUnit;

use super::category::category_of;

/// Score a conversion ratio; lower is better
///
/// Ratios in [1, 1000] all score 1. Below 1 the penalty grows as the ratio
/// shrinks (with a much steeper penalty below 0.1), above 1000 it grows with
/// the ratio.
fn pleasantness_score(ratio: f64) -> f64 {
    if ratio < 0.1 {
        1_000_000.0 / ratio
    } else if ratio < 1.0 {
        100.0 / ratio
    } else if ratio > 1000.0 {
        ratio / 10.0
    } else {
        1.0
    }
}

/// Select appropriate quirky units for a standardized value
///
/// Returns candidates ranked best-first; the caller takes the first entry as
/// the chosen unit and treats an empty result as "no conversion possible".
///
/// When `target_unit` matches at least one candidate's name (case-insensitive
/// substring against name or plural), the matching subset is returned in
/// catalog order, bypassing the pleasantness ranking entirely.
pub fn select_quirky_units<'a>(
    standard_value: f64,
    base_unit: &str,
    catalog: &'a [QuirkyUnit],
    target_unit: Option<&str>,
) -> Vec<&'a QuirkyUnit> {
    let category = category_of(base_unit);

    let candidates: Vec<&QuirkyUnit> = catalog
        .iter()
        .filter(|unit| unit.category == category)
        .collect();

    if candidates.is_empty() {
        return Vec::new();
    }

    // A requested target unit bypasses scoring when it matches anything
    if let Some(target) = target_unit {
        let target = target.to_lowercase();
        let matches: Vec<&QuirkyUnit> = candidates
            .iter()
            .filter(|unit| {
                unit.name.to_lowercase().contains(&target)
                    || unit.name_plural.to_lowercase().contains(&target)
            })
            .copied()
            .collect();

        if !matches.is_empty() {
            return matches;
        }
    }

    // Rank by pleasantness of the resulting ratio; stable sort keeps
    // catalog order for ties
    let mut scored: Vec<(&QuirkyUnit, f64)> = candidates
        .into_iter()
        .map(|unit| {
            let ratio = standard_value / unit.value;
            (unit, pleasantness_score(ratio))
        })
        .collect();

    scored.sort_by(|a, b| a.1.total_cmp(&b.1));

    scored.into_iter().map(|(unit, _)| unit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::MeasurementCategory;

    fn unit(id: i64, name: &str, plural: &str, value: f64) -> QuirkyUnit {
        QuirkyUnit {
            id,
            name: name.to_string(),
            name_plural: plural.to_string(),
            value,
            unit: "kg".to_string(),
            category: MeasurementCategory::Weight,
            icon: "⚖️".to_string(),
            description: None,
            fun_fact: None,
        }
    }

    fn weight_catalog() -> Vec<QuirkyUnit> {
        vec![
            unit(1, "House Cat", "House Cats", 4.5),
            unit(2, "Blue Whale", "Blue Whales", 180_000.0),
            unit(3, "Cupcake", "Cupcakes", 0.08),
        ]
    }

    #[test]
    fn test_ideal_ratio_ranks_first() {
        let catalog = weight_catalog();
        // 1500 kg: cats -> 333 (ideal), whales -> 0.008 (tiny), cupcakes ->
        // 18750 (huge)
        let ranked = select_quirky_units(1500.0, "kg", &catalog, None);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].name, "House Cat");

        let amount = 1500.0 / ranked[0].value;
        assert!((amount - 333.333).abs() < 0.001);
    }

    #[test]
    fn test_empty_for_unmatched_category() {
        let catalog = weight_catalog();
        // No length entries; no fallback across categories
        assert!(select_quirky_units(10.0, "m", &catalog, None).is_empty());
        // Unknown base unit resolves to no category at all
        assert!(select_quirky_units(10.0, "parsec", &catalog, None).is_empty());
    }

    #[test]
    fn test_score_boundaries_monotonic() {
        // Scores are non-decreasing as the ratio moves away from [1, 1000]
        let ideal_low = pleasantness_score(1.0);
        let ideal_high = pleasantness_score(1000.0);
        assert_eq!(ideal_low, 1.0);
        assert_eq!(ideal_high, 1.0);

        let below = pleasantness_score(0.1);
        let far_below = pleasantness_score(0.099);
        assert!(below > ideal_low);
        assert!(far_below > below);

        let above = pleasantness_score(1000.1);
        assert!(above > ideal_high);
        assert!(pleasantness_score(50_000.0) > above);
    }

    #[test]
    fn test_target_unit_bypasses_scoring() {
        let catalog = weight_catalog();
        // Whales score terribly for 1500 kg, but an explicit target wins
        let ranked = select_quirky_units(1500.0, "kg", &catalog, Some("whale"));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "Blue Whale");
    }

    #[test]
    fn test_target_unit_match_is_case_insensitive_substring() {
        let catalog = weight_catalog();
        let ranked = select_quirky_units(1500.0, "kg", &catalog, Some("CATS"));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "House Cat");
    }

    #[test]
    fn test_unmatched_target_falls_back_to_scoring() {
        let catalog = weight_catalog();
        let ranked = select_quirky_units(1500.0, "kg", &catalog, Some("dragons"));
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].name, "House Cat");
    }

    #[test]
    fn test_matching_target_subset_keeps_catalog_order() {
        let mut catalog = weight_catalog();
        catalog.push(unit(4, "Fat Cat", "Fat Cats", 9.0));
        let ranked = select_quirky_units(5.0, "kg", &catalog, Some("cat"));
        // Both cat entries match; returned in catalog order, unsorted by
        // score even though 5 kg is a better fit for House Cat
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "House Cat");
        assert_eq!(ranked[1].name, "Fat Cat");
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let catalog = vec![
            unit(1, "Bowling Ball", "Bowling Balls", 7.0),
            unit(2, "House Cat", "House Cats", 4.5),
        ];
        // 100 kg gives ratios 14.3 and 22.2, both ideal (score 1)
        let ranked = select_quirky_units(100.0, "kg", &catalog, None);
        assert_eq!(ranked[0].name, "Bowling Ball");
        assert_eq!(ranked[1].name, "House Cat");
    }
}
