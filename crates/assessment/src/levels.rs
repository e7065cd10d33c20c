//! Ordinal skill tiers and legacy alias handling.

use serde::{Deserialize, Serialize};

/// Skill tier derived from a 1-5 assessment score.
///
/// Tiers are ordered, so comparisons work as expected:
///
/// ```
/// use skillpath_assessment::SkillLevel;
///
/// assert!(SkillLevel::Beginner < SkillLevel::Expert);
/// ```
///
/// Older releases used a different naming scheme (`novice`, `competent`,
/// `proficient`) and three path names (`foundation-builder`,
/// `skill-developer`, `expert-practitioner`); those are accepted as
/// deserialization aliases and by [`SkillLevel::from_name`] so stored data
/// from old clients keeps loading.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    #[serde(alias = "novice", alias = "foundation", alias = "foundation-builder")]
    Beginner,
    #[serde(alias = "competent", alias = "skill-developer")]
    Intermediate,
    #[serde(alias = "proficient")]
    Advanced,
    #[serde(alias = "expert-practitioner")]
    Expert,
}

impl SkillLevel {
    /// All tiers in ascending order.
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    /// Canonical lowercase name, as used in documents and on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }

    /// Parse a tier name, accepting the legacy aliases.
    #[must_use]
    pub fn from_name(name: &str) -> Option<SkillLevel> {
        match name {
            "beginner" | "novice" | "foundation" | "foundation-builder" => {
                Some(SkillLevel::Beginner)
            }
            "intermediate" | "competent" | "skill-developer" => Some(SkillLevel::Intermediate),
            "advanced" | "proficient" => Some(SkillLevel::Advanced),
            "expert" | "expert-practitioner" => Some(SkillLevel::Expert),
            _ => None,
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
