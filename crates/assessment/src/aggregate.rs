//! Per-category aggregation of collected ratings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::levels::SkillLevel;
use crate::questions::SkillCategory;
use crate::thresholds::{classify_score, focus_band, Focus};

/// Score assumed when nothing was answered at all.
const FALLBACK_OVERALL: f64 = 3.0;

/// Aggregated result for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaScore {
    /// Mean of the category's ratings, full precision.
    pub average: f64,
    /// Level the average classifies into.
    pub level: SkillLevel,
    /// The ratings that produced the average, in collection order.
    pub ratings: Vec<f64>,
}

/// Complete analysis of one answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreAnalysis {
    /// Per-category scores, keyed in catalog order.
    pub skill_levels: BTreeMap<SkillCategory, AreaScore>,
    /// Mean of the category averages.
    pub overall_score: f64,
    /// Level of the overall score.
    pub overall_level: SkillLevel,
    /// Categories averaging at or above the strength threshold.
    pub strength_areas: Vec<SkillCategory>,
    /// Categories averaging below the improvement threshold.
    pub improvement_areas: Vec<SkillCategory>,
    /// Everything in between.
    pub priority_areas: Vec<SkillCategory>,
}

impl ScoreAnalysis {
    fn empty() -> Self {
        ScoreAnalysis {
            skill_levels: BTreeMap::new(),
            overall_score: FALLBACK_OVERALL,
            overall_level: classify_score(FALLBACK_OVERALL),
            strength_areas: Vec::new(),
            improvement_areas: Vec::new(),
            priority_areas: Vec::new(),
        }
    }
}

/// Analyze per-category ratings into levels and focus areas.
///
/// Categories with no ratings are skipped with a warning. An entirely
/// empty input yields the neutral fallback: overall 3.0, intermediate,
/// no focus areas.
///
/// The same input always produces the same analysis, so a stored answer
/// set can be re-analyzed at any time and compared against earlier runs.
#[must_use]
pub fn analyze_scores(responses: &BTreeMap<SkillCategory, Vec<f64>>) -> ScoreAnalysis {
    let mut analysis = ScoreAnalysis::empty();

    for (&category, ratings) in responses {
        if ratings.is_empty() {
            warn!(category = %category, "no ratings for category, skipping");
            continue;
        }
        let average = ratings.iter().sum::<f64>() / ratings.len() as f64;
        let level = classify_score(average);
        debug!(category = %category, average, level = %level, "scored category");

        match focus_band(average) {
            Focus::Strength => analysis.strength_areas.push(category),
            Focus::Improvement => analysis.improvement_areas.push(category),
            Focus::Priority => analysis.priority_areas.push(category),
        }
        analysis.skill_levels.insert(
            category,
            AreaScore {
                average,
                level,
                ratings: ratings.clone(),
            },
        );
    }

    if analysis.skill_levels.is_empty() {
        return analysis;
    }

    let total: f64 = analysis
        .skill_levels
        .values()
        .map(|area| area.average)
        .sum();
    analysis.overall_score = total / analysis.skill_levels.len() as f64;
    analysis.overall_level = classify_score(analysis.overall_score);
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(pairs: &[(SkillCategory, &[f64])]) -> BTreeMap<SkillCategory, Vec<f64>> {
        pairs
            .iter()
            .map(|(category, ratings)| (*category, ratings.to_vec()))
            .collect()
    }

    #[test]
    fn test_reference_scenario() {
        let input = responses(&[
            (SkillCategory::AiAssistedEngineering, &[2.0, 1.0]),
            (SkillCategory::EdgeDeployment, &[4.0, 5.0]),
        ]);
        let analysis = analyze_scores(&input);

        let ai = &analysis.skill_levels[&SkillCategory::AiAssistedEngineering];
        assert_eq!(ai.average, 1.5);
        assert_eq!(ai.level, SkillLevel::Beginner);

        let edge = &analysis.skill_levels[&SkillCategory::EdgeDeployment];
        assert_eq!(edge.average, 4.5);
        assert_eq!(edge.level, SkillLevel::Expert);

        assert_eq!(analysis.overall_score, 3.0);
        assert_eq!(analysis.overall_level, SkillLevel::Intermediate);
        assert_eq!(
            analysis.improvement_areas,
            vec![SkillCategory::AiAssistedEngineering]
        );
        assert_eq!(
            analysis.strength_areas,
            vec![SkillCategory::EdgeDeployment]
        );
        assert!(analysis.priority_areas.is_empty());
    }

    #[test]
    fn test_empty_input_falls_back_to_neutral() {
        let analysis = analyze_scores(&BTreeMap::new());
        assert_eq!(analysis.overall_score, 3.0);
        assert_eq!(analysis.overall_level, SkillLevel::Intermediate);
        assert!(analysis.skill_levels.is_empty());
        assert!(analysis.strength_areas.is_empty());
        assert!(analysis.improvement_areas.is_empty());
        assert!(analysis.priority_areas.is_empty());
    }

    #[test]
    fn test_categories_without_ratings_are_skipped() {
        let input = responses(&[
            (SkillCategory::AiAssistedEngineering, &[4.0]),
            (SkillCategory::ProjectPlanning, &[]),
        ]);
        let analysis = analyze_scores(&input);
        assert_eq!(analysis.skill_levels.len(), 1);
        assert!(!analysis
            .skill_levels
            .contains_key(&SkillCategory::ProjectPlanning));
        assert_eq!(analysis.overall_score, 4.0);
    }

    #[test]
    fn test_focus_bands_partition_categories() {
        let input = responses(&[
            (SkillCategory::AiAssistedEngineering, &[1.0, 1.0, 1.0]),
            (SkillCategory::PromptEngineering, &[3.0, 3.0, 3.0]),
            (SkillCategory::EdgeDeployment, &[5.0, 5.0, 5.0]),
        ]);
        let analysis = analyze_scores(&input);
        assert_eq!(
            analysis.improvement_areas,
            vec![SkillCategory::AiAssistedEngineering]
        );
        assert_eq!(
            analysis.priority_areas,
            vec![SkillCategory::PromptEngineering]
        );
        assert_eq!(
            analysis.strength_areas,
            vec![SkillCategory::EdgeDeployment]
        );
    }

    #[test]
    fn test_strength_boundary_sits_at_four() {
        let at = analyze_scores(&responses(&[(SkillCategory::EdgeDeployment, &[4.0])]));
        assert_eq!(at.strength_areas, vec![SkillCategory::EdgeDeployment]);

        let below = analyze_scores(&responses(&[(
            SkillCategory::EdgeDeployment,
            &[4.0, 4.0, 3.9],
        )]));
        assert!(below.strength_areas.is_empty());
        assert_eq!(below.priority_areas, vec![SkillCategory::EdgeDeployment]);
    }

    #[test]
    fn test_improvement_boundary_sits_below_two() {
        let at = analyze_scores(&responses(&[(SkillCategory::ProjectPlanning, &[2.0])]));
        assert!(at.improvement_areas.is_empty());
        assert_eq!(at.priority_areas, vec![SkillCategory::ProjectPlanning]);

        let below = analyze_scores(&responses(&[(
            SkillCategory::ProjectPlanning,
            &[1.0, 2.0, 2.0],
        )]));
        assert_eq!(
            below.improvement_areas,
            vec![SkillCategory::ProjectPlanning]
        );
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let input = responses(&[
            (SkillCategory::AiAssistedEngineering, &[2.0, 3.0, 4.0]),
            (SkillCategory::DataAnalytics, &[5.0, 1.0, 3.0]),
        ]);
        let first = analyze_scores(&input);
        let second = analyze_scores(&input);
        assert_eq!(first, second);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn rating() -> impl Strategy<Value = f64> {
            (1u8..=5).prop_map(f64::from)
        }

        fn rating_sets() -> impl Strategy<Value = BTreeMap<SkillCategory, Vec<f64>>> {
            proptest::collection::vec(proptest::collection::vec(rating(), 1..6), 1..7).prop_map(
                |sets| {
                    sets.into_iter()
                        .zip(SkillCategory::ALL)
                        .map(|(ratings, category)| (category, ratings))
                        .collect()
                },
            )
        }

        proptest! {
            #[test]
            fn overall_stays_on_the_scale(input in rating_sets()) {
                let analysis = analyze_scores(&input);
                prop_assert!(analysis.overall_score >= 1.0);
                prop_assert!(analysis.overall_score <= 5.0);
            }

            #[test]
            fn every_category_lands_in_exactly_one_band(input in rating_sets()) {
                let analysis = analyze_scores(&input);
                let banded = analysis.strength_areas.len()
                    + analysis.improvement_areas.len()
                    + analysis.priority_areas.len();
                prop_assert_eq!(banded, analysis.skill_levels.len());
            }

            #[test]
            fn averages_bound_by_their_ratings(input in rating_sets()) {
                let analysis = analyze_scores(&input);
                for area in analysis.skill_levels.values() {
                    let min = area.ratings.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = area.ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    prop_assert!(area.average >= min && area.average <= max);
                }
            }
        }
    }
}
