//! Path document synthesis from a recommendation set.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::document::{
    LearningPath, PathDocument, PathItem, PathMetadata, ITEM_TYPE, PATH_DOC_VERSION,
    PATH_FILE_TYPE, PATH_SOURCE,
};
use crate::generator::{Priority, Recommendations};

/// Build the persistable path document for a recommendation set.
///
/// `assessment_data` is embedded verbatim so the path can always be
/// traced back to the answers that produced it. The caller supplies the
/// clock; identifiers and timestamps all derive from it, so the same
/// inputs synthesize the same document.
#[must_use]
pub fn synthesize_path(
    recommendations: &Recommendations,
    assessment_data: &serde_json::Value,
    now: DateTime<Utc>,
) -> PathDocument {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let millis = now.timestamp_millis();
    let overall = recommendations.summary.overall_level;
    let title = format!("Personalized Learning Path - {overall}");

    let categories: Vec<_> = recommendations
        .focus_areas
        .iter()
        .map(|focus| focus.area)
        .collect();
    let focus_list = categories
        .iter()
        .map(|category| category.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let items = recommendations
        .items
        .iter()
        .map(|item| PathItem {
            id: item.item_path.replace(['/', '-'], "_"),
            item_type: ITEM_TYPE.to_string(),
            title: item_title(&item.item_path),
            category: item.skill_area,
            order: item.order,
            estimated_time: item.estimated_time,
            difficulty: item.level,
            is_required: item.priority == Priority::High,
            path: item.item_path.clone(),
            reason: item.reason.clone(),
        })
        .collect();

    PathDocument {
        metadata: PathMetadata {
            version: PATH_DOC_VERSION.to_string(),
            learning_path_id: format!("assessment-path-{millis}"),
            learning_path_title: title.clone(),
            path_type: overall,
            source: PATH_SOURCE.to_string(),
            file_type: PATH_FILE_TYPE.to_string(),
            session_id: format!("assessment-session-{millis}"),
            last_updated: timestamp.clone(),
            assessment_data: assessment_data.clone(),
        },
        timestamp,
        learning_path: LearningPath {
            title,
            description: format!(
                "Customized learning path based on your skill assessment results. Focus areas: {focus_list}."
            ),
            categories,
            estimated_duration: recommendations.estimated_duration,
            difficulty_level: overall,
            items,
        },
    }
}

fn item_title(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_recommendations;
    use chrono::TimeZone;
    use skillpath_assessment::{analyze_scores, SkillCategory};
    use std::collections::BTreeMap;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 3, 12, 30, 45)
            .single()
            .expect("valid timestamp")
    }

    fn sample_recommendations() -> Recommendations {
        let mut responses = BTreeMap::new();
        responses.insert(SkillCategory::AiAssistedEngineering, vec![2.0, 1.0]);
        responses.insert(SkillCategory::EdgeDeployment, vec![4.0, 5.0]);
        generate_recommendations(&analyze_scores(&responses))
    }

    #[test]
    fn test_document_identity_derives_from_the_clock() {
        let recs = sample_recommendations();
        let doc = synthesize_path(&recs, &serde_json::json!({}), fixed_now());

        let millis = fixed_now().timestamp_millis();
        assert_eq!(
            doc.metadata.learning_path_id,
            format!("assessment-path-{millis}")
        );
        assert_eq!(
            doc.metadata.session_id,
            format!("assessment-session-{millis}")
        );
        assert_eq!(doc.timestamp, "2025-09-03T12:30:45.000Z");
        assert_eq!(doc.metadata.last_updated, doc.timestamp);
    }

    #[test]
    fn test_title_and_difficulty_follow_overall_level() {
        let recs = sample_recommendations();
        let doc = synthesize_path(&recs, &serde_json::json!({}), fixed_now());

        assert_eq!(
            doc.metadata.learning_path_title,
            "Personalized Learning Path - intermediate"
        );
        assert_eq!(doc.learning_path.title, doc.metadata.learning_path_title);
        assert_eq!(doc.metadata.path_type, recs.summary.overall_level);
        assert_eq!(doc.learning_path.difficulty_level, recs.summary.overall_level);
    }

    #[test]
    fn test_description_lists_focus_areas() {
        let recs = sample_recommendations();
        let doc = synthesize_path(&recs, &serde_json::json!({}), fixed_now());

        assert_eq!(
            doc.learning_path.description,
            "Customized learning path based on your skill assessment results. \
             Focus areas: ai-assisted-engineering."
        );
        assert_eq!(
            doc.learning_path.categories,
            vec![SkillCategory::AiAssistedEngineering]
        );
    }

    #[test]
    fn test_items_flatten_paths_into_ids_and_titles() {
        let recs = sample_recommendations();
        let doc = synthesize_path(&recs, &serde_json::json!({}), fixed_now());

        let first = &doc.learning_path.items[0];
        assert_eq!(first.path, "getting-started/ai-assisted-development-basics");
        assert_eq!(first.id, "getting_started_ai_assisted_development_basics");
        assert_eq!(first.title, "ai assisted development basics");
        assert_eq!(first.item_type, "learning-item");
        assert!(first.is_required);
    }

    #[test]
    fn test_assessment_data_is_embedded_verbatim() {
        let recs = sample_recommendations();
        let data = serde_json::json!({"assessment": {"answers": {"q1": 2}}});
        let doc = synthesize_path(&recs, &data, fixed_now());
        assert_eq!(doc.metadata.assessment_data, data);
    }

    #[test]
    fn test_document_serializes_with_wire_field_names() {
        let recs = sample_recommendations();
        let doc = synthesize_path(&recs, &serde_json::json!({}), fixed_now());
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["metadata"]["fileType"], "learning-path-progress");
        assert_eq!(json["metadata"]["source"], "assessment-processor");
        assert!(json["learningPath"]["estimatedDuration"]["weeks"].is_number());
        assert_eq!(json["learningPath"]["items"][0]["type"], "learning-item");
        assert!(json["learningPath"]["items"][0]["isRequired"].is_boolean());
    }
}
