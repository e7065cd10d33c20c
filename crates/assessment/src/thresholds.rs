//! Central score-threshold table.
//!
//! Every boundary in the workspace lives here; no other module hardcodes a
//! cutoff. Scores sit on a 1-5 scale and a score exactly at a boundary
//! belongs to the higher tier.

use crate::levels::SkillLevel;

/// Minimum average score for the expert tier.
pub const EXPERT_MIN: f64 = 4.5;
/// Minimum average score for the advanced tier.
pub const ADVANCED_MIN: f64 = 4.0;
/// Minimum average score for the intermediate tier.
pub const INTERMEDIATE_MIN: f64 = 2.6;

/// Scores at or above this mark a category as a strength.
pub const STRENGTH_MIN: f64 = 4.0;
/// Scores strictly below this mark a category as an improvement area.
pub const IMPROVEMENT_MAX: f64 = 2.0;
/// Scores strictly below this count as growth categories in the sync payload.
pub const GROWTH_MAX: f64 = 2.6;

/// Classify a 1-5 score into a skill tier.
///
/// Total function: every float maps to a tier (NaN compares false against
/// every band and lands in beginner).
///
/// ```
/// use skillpath_assessment::{classify_score, SkillLevel};
///
/// assert_eq!(classify_score(4.5), SkillLevel::Expert);
/// assert_eq!(classify_score(4.49), SkillLevel::Advanced);
/// assert_eq!(classify_score(3.0), SkillLevel::Intermediate);
/// assert_eq!(classify_score(2.0), SkillLevel::Beginner);
/// ```
#[must_use]
pub fn classify_score(score: f64) -> SkillLevel {
    if score >= EXPERT_MIN {
        SkillLevel::Expert
    } else if score >= ADVANCED_MIN {
        SkillLevel::Advanced
    } else if score >= INTERMEDIATE_MIN {
        SkillLevel::Intermediate
    } else {
        SkillLevel::Beginner
    }
}

/// Coarse three-way split that drives recommendation priority.
///
/// Distinct from the four-tier classification: a category is either a
/// strength (nothing to recommend), an improvement area (high-priority
/// recommendations), or a priority area (medium-priority recommendations).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Strength,
    Improvement,
    Priority,
}

/// Bucket a category average into its recommendation focus.
#[must_use]
pub fn focus_band(score: f64) -> Focus {
    if score >= STRENGTH_MIN {
        Focus::Strength
    } else if score < IMPROVEMENT_MAX {
        Focus::Improvement
    } else {
        Focus::Priority
    }
}
