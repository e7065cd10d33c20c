//! Human-readable explanations for recommended items.

use skillpath_assessment::{SkillCategory, SkillLevel};

/// Explain why a category's items were recommended.
///
/// The score renders with one decimal, matching how it appears in
/// category score summaries.
#[must_use]
pub fn recommendation_reason(area: SkillCategory, level: SkillLevel, score: f64) -> String {
    let name = area.display_name();
    let score = format!("{score:.1}");
    match level {
        SkillLevel::Beginner => format!(
            "Based on your {name} score ({score}/5), starting with foundational concepts will build a strong base."
        ),
        SkillLevel::Intermediate => format!(
            "Your {name} score ({score}/5) shows good fundamentals. These items will advance your skills."
        ),
        SkillLevel::Advanced | SkillLevel::Expert => format!(
            "With your advanced {name} score ({score}/5), these items will help you master expert-level concepts."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_reason_mentions_foundations() {
        let reason = recommendation_reason(
            SkillCategory::AiAssistedEngineering,
            SkillLevel::Beginner,
            1.5,
        );
        assert_eq!(
            reason,
            "Based on your AI-Assisted Engineering score (1.5/5), starting with foundational concepts will build a strong base."
        );
    }

    #[test]
    fn test_intermediate_reason_mentions_fundamentals() {
        let reason =
            recommendation_reason(SkillCategory::ProjectPlanning, SkillLevel::Intermediate, 3.0);
        assert_eq!(
            reason,
            "Your Project Planning score (3.0/5) shows good fundamentals. These items will advance your skills."
        );
    }

    #[test]
    fn test_advanced_and_expert_share_the_mastery_reason() {
        let advanced =
            recommendation_reason(SkillCategory::EdgeDeployment, SkillLevel::Advanced, 4.2);
        assert!(advanced.contains("master expert-level concepts"));

        let expert = recommendation_reason(SkillCategory::EdgeDeployment, SkillLevel::Expert, 4.8);
        assert!(expert.starts_with("With your advanced Edge Deployment score (4.8/5)"));
    }

    #[test]
    fn test_score_renders_with_one_decimal() {
        let reason = recommendation_reason(
            SkillCategory::SystemTroubleshooting,
            SkillLevel::Beginner,
            1.0,
        );
        assert!(reason.contains("(1.0/5)"));
    }
}
