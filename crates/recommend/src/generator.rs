//! Recommendation generation from a score analysis.
//!
//! Improvement areas come first and carry high priority; priority areas
//! follow at medium. Strength areas get no items: the learner already
//! performs well there.

use serde::{Deserialize, Serialize};
use tracing::debug;

use skillpath_assessment::{ScoreAnalysis, SkillCategory, SkillLevel};

use crate::catalog::items_for;
use crate::reason::recommendation_reason;

// ===== Time estimates =====

const BEGINNER_ITEM_HOURS: u32 = 4;
const INTERMEDIATE_ITEM_HOURS: u32 = 6;
const ADVANCED_ITEM_HOURS: u32 = 8;
const DEFAULT_ITEM_HOURS: u32 = 5;

/// Study pace assumed when converting total hours into weeks.
pub const HOURS_PER_WEEK: u32 = 10;

/// Estimated hours for one learning item at a given difficulty.
#[must_use]
pub fn estimate_item_time(level: SkillLevel) -> u32 {
    match level {
        SkillLevel::Beginner => BEGINNER_ITEM_HOURS,
        SkillLevel::Intermediate => INTERMEDIATE_ITEM_HOURS,
        SkillLevel::Advanced => ADVANCED_ITEM_HOURS,
        SkillLevel::Expert => DEFAULT_ITEM_HOURS,
    }
}

// ===== Types =====

/// How urgently a recommended item should be tackled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// One recommended learning item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Site-relative document path.
    pub item_path: String,
    /// Category the item strengthens.
    pub skill_area: SkillCategory,
    /// Difficulty tier the item was drawn from.
    pub level: SkillLevel,
    pub priority: Priority,
    /// 1-based position across the whole recommendation list.
    pub order: usize,
    /// Estimated hours of study.
    pub estimated_time: u32,
    pub reason: String,
}

/// A category that needs attention, with or without catalog items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusArea {
    pub area: SkillCategory,
    pub level: SkillLevel,
    pub score: f64,
    pub item_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    pub overall_level: SkillLevel,
    pub total_items: usize,
    pub priority_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatedDuration {
    pub hours: u32,
    pub weeks: u32,
}

/// Full recommendation set for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub summary: RecommendationSummary,
    pub items: Vec<Recommendation>,
    pub focus_areas: Vec<FocusArea>,
    pub estimated_duration: EstimatedDuration,
}

// ===== Generation =====

/// Generate learning recommendations from an analysis.
///
/// Every improvement and priority area contributes a focus entry even
/// when the catalog has nothing for it, so reports can show the gap.
/// Item order runs 1..n across the combined list.
#[must_use]
pub fn generate_recommendations(analysis: &ScoreAnalysis) -> Recommendations {
    let mut items: Vec<Recommendation> = Vec::new();
    let mut focus_areas = Vec::new();

    let focus_order = analysis
        .improvement_areas
        .iter()
        .chain(analysis.priority_areas.iter());
    for &area in focus_order {
        let Some(skill) = analysis.skill_levels.get(&area) else {
            continue;
        };
        let priority = if analysis.improvement_areas.contains(&area) {
            Priority::High
        } else {
            Priority::Medium
        };
        let paths = items_for(skill.level, area);
        debug!(area = %area, level = %skill.level, items = paths.len(), "mapping focus area");

        for &path in paths {
            items.push(Recommendation {
                item_path: path.to_string(),
                skill_area: area,
                level: skill.level,
                priority,
                order: items.len() + 1,
                estimated_time: estimate_item_time(skill.level),
                reason: recommendation_reason(area, skill.level, skill.average),
            });
        }
        focus_areas.push(FocusArea {
            area,
            level: skill.level,
            score: skill.average,
            item_count: paths.len(),
        });
    }

    let hours: u32 = items.iter().map(|item| item.estimated_time).sum();
    let priority_count = items
        .iter()
        .filter(|item| item.priority == Priority::High)
        .count();

    Recommendations {
        summary: RecommendationSummary {
            overall_level: analysis.overall_level,
            total_items: items.len(),
            priority_count,
        },
        items,
        focus_areas,
        estimated_duration: EstimatedDuration {
            hours,
            weeks: hours.div_ceil(HOURS_PER_WEEK),
        },
    }
}
