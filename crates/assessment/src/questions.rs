//! Static question catalog for the skill assessment.
//!
//! Eighteen questions, six categories, three questions per category. The
//! question number alone determines the category: questions 1-3 belong to
//! the first category, 4-6 to the second, and so on.

use serde::{Deserialize, Serialize};

/// Questions per category in the catalog.
pub const QUESTIONS_PER_CATEGORY: usize = 3;
/// Total questions in the assessment.
pub const TOTAL_QUESTIONS: usize = 18;

/// A skill category covered by the assessment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SkillCategory {
    AiAssistedEngineering,
    PromptEngineering,
    EdgeDeployment,
    SystemTroubleshooting,
    ProjectPlanning,
    DataAnalytics,
}

impl SkillCategory {
    /// All categories in catalog order.
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::AiAssistedEngineering,
        SkillCategory::PromptEngineering,
        SkillCategory::EdgeDeployment,
        SkillCategory::SystemTroubleshooting,
        SkillCategory::ProjectPlanning,
        SkillCategory::DataAnalytics,
    ];

    /// Kebab-case identifier used in documents and on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::AiAssistedEngineering => "ai-assisted-engineering",
            SkillCategory::PromptEngineering => "prompt-engineering",
            SkillCategory::EdgeDeployment => "edge-deployment",
            SkillCategory::SystemTroubleshooting => "system-troubleshooting",
            SkillCategory::ProjectPlanning => "project-planning",
            SkillCategory::DataAnalytics => "data-analytics",
        }
    }

    /// Human-readable category name for reports and reasons.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            SkillCategory::AiAssistedEngineering => "AI-Assisted Engineering",
            SkillCategory::PromptEngineering => "Prompt Engineering",
            SkillCategory::EdgeDeployment => "Edge Deployment",
            SkillCategory::SystemTroubleshooting => "System Troubleshooting",
            SkillCategory::ProjectPlanning => "Project Planning",
            SkillCategory::DataAnalytics => "Data & Analytics Integration",
        }
    }

    /// Parse a kebab-case category identifier.
    #[must_use]
    pub fn from_name(name: &str) -> Option<SkillCategory> {
        SkillCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Identifier, `q1` through `q18`.
    pub id: &'static str,
    /// Prompt shown to the respondent.
    pub prompt: &'static str,
    /// Category the answer counts toward.
    pub category: SkillCategory,
}

/// The full assessment, in presentation order.
pub const QUESTIONS: [Question; TOTAL_QUESTIONS] = [
    Question {
        id: "q1",
        prompt: "How often do you use AI coding assistants?",
        category: SkillCategory::AiAssistedEngineering,
    },
    Question {
        id: "q2",
        prompt: "Are you familiar with prompt engineering for code generation?",
        category: SkillCategory::AiAssistedEngineering,
    },
    Question {
        id: "q3",
        prompt: "Do you know how to debug AI-generated code effectively?",
        category: SkillCategory::AiAssistedEngineering,
    },
    Question {
        id: "q4",
        prompt: "How comfortable are you with designing AI prompts?",
        category: SkillCategory::PromptEngineering,
    },
    Question {
        id: "q5",
        prompt: "Do you understand context optimization techniques?",
        category: SkillCategory::PromptEngineering,
    },
    Question {
        id: "q6",
        prompt: "Have you created complex multi-step prompting workflows?",
        category: SkillCategory::PromptEngineering,
    },
    Question {
        id: "q7",
        prompt: "How experienced are you with containerization technologies?",
        category: SkillCategory::EdgeDeployment,
    },
    Question {
        id: "q8",
        prompt: "Have you deployed applications to edge devices?",
        category: SkillCategory::EdgeDeployment,
    },
    Question {
        id: "q9",
        prompt: "Are you familiar with IoT integration patterns?",
        category: SkillCategory::EdgeDeployment,
    },
    Question {
        id: "q10",
        prompt: "How comfortable are you debugging complex technical issues?",
        category: SkillCategory::SystemTroubleshooting,
    },
    Question {
        id: "q11",
        prompt: "Do you use systematic approaches to troubleshooting?",
        category: SkillCategory::SystemTroubleshooting,
    },
    Question {
        id: "q12",
        prompt: "Can you diagnose and resolve distributed system problems?",
        category: SkillCategory::SystemTroubleshooting,
    },
    Question {
        id: "q13",
        prompt: "How do you typically break down complex technical projects?",
        category: SkillCategory::ProjectPlanning,
    },
    Question {
        id: "q14",
        prompt: "Are you familiar with agile planning methodologies?",
        category: SkillCategory::ProjectPlanning,
    },
    Question {
        id: "q15",
        prompt: "Do you regularly track and adjust project milestones?",
        category: SkillCategory::ProjectPlanning,
    },
    Question {
        id: "q16",
        prompt: "How experienced are you with designing data pipelines and ETL processes?",
        category: SkillCategory::DataAnalytics,
    },
    Question {
        id: "q17",
        prompt: "Are you proficient with analytics tools like KQL, Power BI, and real-time dashboards?",
        category: SkillCategory::DataAnalytics,
    },
    Question {
        id: "q18",
        prompt: "Can you implement edge-to-cloud data integration patterns including Fabric?",
        category: SkillCategory::DataAnalytics,
    },
];

/// Extract the question number from an id like `q7` or `question_7`.
///
/// Any run of digits counts; ids without digits (or with number zero) have
/// no position in the catalog.
#[must_use]
pub fn question_number(id: &str) -> Option<usize> {
    let digits: String = id.chars().filter(char::is_ascii_digit).collect();
    let number = digits.parse::<usize>().ok()?;
    if number == 0 {
        return None;
    }
    Some(number)
}

/// Map a question id to its category by position.
///
/// Numbers past the end of the catalog clamp into the last category, so a
/// client that grows the form keeps producing usable data.
#[must_use]
pub fn category_for_question(id: &str) -> Option<SkillCategory> {
    let number = question_number(id)?;
    let index = (number - 1) / QUESTIONS_PER_CATEGORY;
    let index = index.min(SkillCategory::ALL.len() - 1);
    Some(SkillCategory::ALL[index])
}

/// Catalog prompt for a question number, if the number is in range.
#[must_use]
pub fn prompt_for_question(number: usize) -> Option<&'static str> {
    if number == 0 {
        return None;
    }
    QUESTIONS.get(number - 1).map(|question| question.prompt)
}

/// Label shown for a numeric rating in payloads and reports.
#[must_use]
pub fn rating_label(rating: u8) -> &'static str {
    match rating {
        1 => "Novice - Just beginning to learn",
        2 => "Developing - Basic understanding",
        3 => "Competent - Regular use with confidence",
        4 => "Proficient - Consistent application",
        5 => "Expert - Advanced proficiency",
        _ => "Not rated",
    }
}
