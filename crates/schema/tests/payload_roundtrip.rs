use chrono::{TimeZone, Utc};
use skillpath_assessment::{AnswerMap, RawRating, SkillCategory, SkillLevel};
use skillpath_schema::{
    build_self_assessment, validate, validate_self_assessment, SelfAssessmentPayload,
};

fn sample_answers() -> AnswerMap {
    // Weak on AI topics, strong on edge deployment, middling elsewhere.
    let ratings = [2, 1, 2, 3, 3, 3, 4, 5, 5, 3, 3, 3, 3, 3, 3, 3, 3, 3];
    ratings
        .iter()
        .enumerate()
        .map(|(i, &r)| (format!("q{}", i + 1), RawRating::from(r)))
        .collect()
}

#[test]
fn built_payload_round_trips_through_json() {
    let now = Utc.with_ymd_and_hms(2025, 9, 3, 15, 45, 0).single().unwrap();
    let payload = build_self_assessment(&sample_answers(), now);

    let json = serde_json::to_string_pretty(&payload).unwrap();
    let back: SelfAssessmentPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(back, payload);
}

#[test]
fn built_payload_passes_its_own_validation() {
    let now = Utc.with_ymd_and_hms(2025, 9, 3, 15, 45, 0).single().unwrap();
    let payload = build_self_assessment(&sample_answers(), now);
    let value = serde_json::to_value(&payload).unwrap();

    let report = validate(&value);
    assert!(report.is_valid(), "errors: {}", report.joined());
    let report = validate_self_assessment(&value);
    assert!(report.is_valid(), "errors: {}", report.joined());
}

#[test]
fn results_reflect_the_answer_profile() {
    let now = Utc.with_ymd_and_hms(2025, 9, 3, 15, 45, 0).single().unwrap();
    let payload = build_self_assessment(&sample_answers(), now);
    let results = &payload.assessment.results;

    let ai = &results.category_scores[&SkillCategory::AiAssistedEngineering];
    assert_eq!(ai.score, 1.67);
    assert_eq!(ai.level, SkillLevel::Beginner);
    assert_eq!(ai.total_points, 5);
    assert_eq!(ai.max_points, 15);

    let edge = &results.category_scores[&SkillCategory::EdgeDeployment];
    assert_eq!(edge.score, 4.67);
    assert_eq!(edge.level, SkillLevel::Expert);

    assert_eq!(results.strength_categories, vec![SkillCategory::EdgeDeployment]);
    assert_eq!(
        results.growth_categories,
        vec![SkillCategory::AiAssistedEngineering]
    );
    assert_eq!(results.questions_answered, 18);

    // 55 points over 18 questions.
    assert_eq!(results.overall_score, 3.1);
    assert_eq!(results.overall_level, SkillLevel::Intermediate);
    assert_eq!(results.recommended_path, SkillLevel::Intermediate);
}

#[test]
fn foreign_documents_with_loose_value_shapes_still_build() {
    let raw = serde_json::json!({
        "q1": "4 - Proficient",
        "q2": 3,
        "q3": null,
        "notes": "skip me",
    });
    let answers: AnswerMap = serde_json::from_value(raw).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 9, 3, 15, 45, 0).single().unwrap();
    let payload = build_self_assessment(&answers, now);

    assert_eq!(payload.assessment.questions.len(), 3);
    let responses: Vec<u8> = payload
        .assessment
        .questions
        .iter()
        .map(|q| q.response)
        .collect();
    // The null answer falls back to the neutral rating.
    assert_eq!(responses, vec![4, 3, 3]);
    assert!(validate(&serde_json::to_value(&payload).unwrap()).is_valid());
}
