//! Plain-text rendering of assessment results and recommendations.
//!
//! Rendering is separate from scoring and generation so callers can run
//! the pipeline headless and format the outcome wherever it surfaces.

use skillpath_assessment::ScoreAnalysis;

use crate::generator::{Priority, Recommendations};

/// Format an analysis and its recommendations for terminal display.
#[must_use]
pub fn format_assessment_report(
    analysis: &ScoreAnalysis,
    recommendations: &Recommendations,
) -> String {
    let mut out = String::new();
    out.push_str("Skill Assessment Results\n");
    out.push_str("========================\n");
    out.push_str(&format!(
        "Overall: {:.1}/5 ({})\n\n",
        analysis.overall_score, analysis.overall_level
    ));

    if !analysis.skill_levels.is_empty() {
        out.push_str("Category scores:\n");
        for (category, area) in &analysis.skill_levels {
            out.push_str(&format!(
                "  {:<30} {:.1}/5  {}\n",
                category.display_name(),
                area.average,
                area.level
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Strengths:         {}\n",
        join_display(analysis.strength_areas.iter().map(|c| c.display_name()))
    ));
    out.push_str(&format!(
        "Needs improvement: {}\n",
        join_display(analysis.improvement_areas.iter().map(|c| c.display_name()))
    ));
    out.push_str(&format!(
        "Worth attention:   {}\n\n",
        join_display(analysis.priority_areas.iter().map(|c| c.display_name()))
    ));

    if recommendations.items.is_empty() {
        out.push_str("No learning items recommended. Keep doing what you're doing.\n");
        return out;
    }

    out.push_str(&format!(
        "Recommended items ({} total, {} high priority):\n",
        recommendations.summary.total_items, recommendations.summary.priority_count
    ));
    for item in &recommendations.items {
        let marker = match item.priority {
            Priority::High => "*",
            Priority::Medium => " ",
        };
        out.push_str(&format!(
            " {marker}{:>2}. {} ({}h)\n",
            item.order, item.item_path, item.estimated_time
        ));
    }
    out.push_str(&format!(
        "\nEstimated effort: {} hours over {} week(s) at 10h/week\n",
        recommendations.estimated_duration.hours, recommendations.estimated_duration.weeks
    ));
    out
}

fn join_display<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let joined = names.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}
