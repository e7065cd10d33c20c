//! Static mapping from skill level and category to learning items.
//!
//! Item paths are site-relative document paths, tiered by difficulty. The
//! catalog covers the four categories with dedicated learning tracks;
//! the remaining categories have no tracked items yet and recommend
//! nothing.

use skillpath_assessment::{SkillCategory, SkillLevel};

const BEGINNER_AI_ASSISTED: &[&str] = &[
    "getting-started/ai-assisted-development-basics",
    "getting-started/prompt-engineering-fundamentals",
    "getting-started/code-generation-basics",
];

const BEGINNER_EDGE: &[&str] = &[
    "getting-started/containerization-basics",
    "getting-started/edge-computing-introduction",
    "getting-started/deployment-fundamentals",
];

const BEGINNER_PLANNING: &[&str] = &[
    "getting-started/technical-planning-basics",
    "getting-started/project-management-fundamentals",
    "getting-started/agile-methodologies",
];

const BEGINNER_TROUBLESHOOTING: &[&str] = &[
    "getting-started/debugging-fundamentals",
    "getting-started/log-analysis-basics",
    "getting-started/problem-solving-methods",
];

const INTERMEDIATE_AI_ASSISTED: &[&str] = &[
    "intermediate/advanced-prompt-engineering",
    "intermediate/ai-code-review-techniques",
    "intermediate/automated-testing-with-ai",
];

const INTERMEDIATE_EDGE: &[&str] = &[
    "intermediate/kubernetes-edge-deployment",
    "intermediate/iot-integration-patterns",
    "intermediate/edge-security-implementation",
];

const INTERMEDIATE_PLANNING: &[&str] = &[
    "intermediate/technical-architecture-planning",
    "intermediate/risk-management-strategies",
    "intermediate/stakeholder-communication",
];

const INTERMEDIATE_TROUBLESHOOTING: &[&str] = &[
    "intermediate/advanced-debugging-techniques",
    "intermediate/performance-optimization",
    "intermediate/incident-response-procedures",
];

const ADVANCED_AI_ASSISTED: &[&str] = &[
    "advanced/ai-architecture-design",
    "advanced/custom-ai-tool-development",
    "advanced/ai-engineering-leadership",
];

const ADVANCED_EDGE: &[&str] = &[
    "advanced/edge-orchestration-platforms",
    "advanced/edge-ai-deployment",
    "advanced/edge-infrastructure-automation",
];

const ADVANCED_PLANNING: &[&str] = &[
    "advanced/enterprise-architecture-planning",
    "advanced/cross-functional-team-leadership",
    "advanced/technical-strategy-development",
];

const ADVANCED_TROUBLESHOOTING: &[&str] = &[
    "advanced/complex-system-analysis",
    "advanced/troubleshooting-methodology-design",
    "advanced/system-reliability-engineering",
];

/// Learning items for a level and category.
///
/// The catalog tops out at the advanced tier; experts keep drawing from
/// it. Categories without a learning track return an empty slice.
#[must_use]
pub fn items_for(level: SkillLevel, category: SkillCategory) -> &'static [&'static str] {
    match level {
        SkillLevel::Beginner => match category {
            SkillCategory::AiAssistedEngineering => BEGINNER_AI_ASSISTED,
            SkillCategory::EdgeDeployment => BEGINNER_EDGE,
            SkillCategory::ProjectPlanning => BEGINNER_PLANNING,
            SkillCategory::SystemTroubleshooting => BEGINNER_TROUBLESHOOTING,
            SkillCategory::PromptEngineering | SkillCategory::DataAnalytics => &[],
        },
        SkillLevel::Intermediate => match category {
            SkillCategory::AiAssistedEngineering => INTERMEDIATE_AI_ASSISTED,
            SkillCategory::EdgeDeployment => INTERMEDIATE_EDGE,
            SkillCategory::ProjectPlanning => INTERMEDIATE_PLANNING,
            SkillCategory::SystemTroubleshooting => INTERMEDIATE_TROUBLESHOOTING,
            SkillCategory::PromptEngineering | SkillCategory::DataAnalytics => &[],
        },
        SkillLevel::Advanced | SkillLevel::Expert => match category {
            SkillCategory::AiAssistedEngineering => ADVANCED_AI_ASSISTED,
            SkillCategory::EdgeDeployment => ADVANCED_EDGE,
            SkillCategory::ProjectPlanning => ADVANCED_PLANNING,
            SkillCategory::SystemTroubleshooting => ADVANCED_TROUBLESHOOTING,
            SkillCategory::PromptEngineering | SkillCategory::DataAnalytics => &[],
        },
    }
}
