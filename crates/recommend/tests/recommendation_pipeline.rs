use chrono::{TimeZone, Utc};
use skillpath_assessment::{
    analyze_scores, collect_answer_set, AnswerSet, SkillCategory, SkillLevel,
};
use skillpath_recommend::{
    generate_recommendations, synthesize_path, Priority, Recommendations,
};

fn run_pipeline(answers: serde_json::Value) -> Recommendations {
    let set: AnswerSet = serde_json::from_value(answers).unwrap();
    let responses = collect_answer_set(&set);
    let analysis = analyze_scores(&responses);
    generate_recommendations(&analysis)
}

#[test]
fn mixed_results_produce_a_beginner_track_for_the_weak_area() {
    let recs = run_pipeline(serde_json::json!({
        "ai-assisted-engineering": [2, 1],
        "edge-deployment": [4, 5],
    }));

    assert_eq!(recs.summary.overall_level, SkillLevel::Intermediate);
    assert_eq!(recs.summary.total_items, 3);
    assert_eq!(recs.summary.priority_count, 3);

    for item in &recs.items {
        assert_eq!(item.skill_area, SkillCategory::AiAssistedEngineering);
        assert_eq!(item.level, SkillLevel::Beginner);
        assert_eq!(item.priority, Priority::High);
        assert_eq!(item.estimated_time, 4);
    }

    assert_eq!(recs.focus_areas.len(), 1);
    assert_eq!(recs.focus_areas[0].score, 1.5);
    assert_eq!(recs.estimated_duration.hours, 12);
    assert_eq!(recs.estimated_duration.weeks, 2);
}

#[test]
fn low_scores_only_ever_yield_high_priority_items() {
    let recs = run_pipeline(serde_json::json!({
        "ai-assisted-engineering": [1, 1],
        "project-planning": [1, 2],
        "system-troubleshooting": [2, 1],
    }));

    assert!(!recs.items.is_empty());
    assert!(recs.items.iter().all(|i| i.priority == Priority::High));
    assert_eq!(recs.summary.priority_count, recs.summary.total_items);
}

#[test]
fn strong_scores_yield_no_items_at_all() {
    let recs = run_pipeline(serde_json::json!({
        "ai-assisted-engineering": [4, 5],
        "edge-deployment": [5, 5],
        "project-planning": [4, 4],
    }));

    assert_eq!(recs.summary.total_items, 0);
    assert!(recs.items.is_empty());
    assert!(recs.focus_areas.is_empty());
}

#[test]
fn rerunning_the_pipeline_is_idempotent() {
    let answers = serde_json::json!({
        "ai-assisted-engineering": [2, 1],
        "edge-deployment": [4, 5],
        "data-analytics": [3, 2],
    });
    let first = run_pipeline(answers.clone());
    let second = run_pipeline(answers);
    assert_eq!(first, second);
}

#[test]
fn question_keyed_answers_flow_through_the_same_pipeline() {
    // q1-q3 map to ai-assisted-engineering, q7-q9 to edge-deployment.
    let recs = run_pipeline(serde_json::json!({
        "q1": 2, "q2": 1, "q3": 1,
        "q7": 4, "q8": 5, "q9": 5,
    }));

    assert_eq!(recs.focus_areas.len(), 1);
    assert_eq!(
        recs.focus_areas[0].area,
        SkillCategory::AiAssistedEngineering
    );
    assert_eq!(recs.summary.total_items, 3);
}

#[test]
fn synthesized_document_survives_a_serde_round_trip() {
    let set: AnswerSet = serde_json::from_value(serde_json::json!({
        "ai-assisted-engineering": [2, 1],
        "edge-deployment": [4, 5],
    }))
    .unwrap();
    let analysis = analyze_scores(&collect_answer_set(&set));
    let recs = generate_recommendations(&analysis);

    let now = Utc.with_ymd_and_hms(2025, 9, 3, 8, 0, 0).single().unwrap();
    let assessment_data = serde_json::json!({"overallScore": analysis.overall_score});
    let doc = synthesize_path(&recs, &assessment_data, now);

    let json = serde_json::to_string(&doc).unwrap();
    let back: skillpath_recommend::PathDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
    assert_eq!(back.learning_path.items.len(), 3);
    assert!(back.learning_path.items.iter().all(|i| i.is_required));
}
