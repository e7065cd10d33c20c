//! Payload construction from raw answers.

use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;
use tracing::warn;

use skillpath_assessment::thresholds::{GROWTH_MAX, STRENGTH_MIN};
use skillpath_assessment::{
    category_for_question, classify_score, parse_rating, prompt_for_question, question_number,
    rating_label, AnswerMap, SkillCategory, SkillLevel, QUESTIONS_PER_CATEGORY, TOTAL_QUESTIONS,
};

use crate::payload::{
    AnsweredQuestion, AssessmentBody, AssessmentResults, CategoryScore, PayloadMetadata,
    SelfAssessmentPayload, ASSESSMENT_ID, ASSESSMENT_TYPE, COACH_MODE, DEFAULT_PAGE_URL,
    DEFAULT_USER, PAYLOAD_TITLE, PAYLOAD_TYPE, PAYLOAD_VERSION, SOURCE_UI,
};

/// Build a complete self-assessment payload from raw answers.
///
/// Answers whose id carries no question number are dropped with a
/// warning; everything else is normalised to a whole-number rating.
/// Category scores cover all six categories even when unanswered, and
/// every derived field is computed from the ratings actually included,
/// so the payload is self-consistent. The caller supplies the clock;
/// the same answers and instant always build the same payload.
#[must_use]
pub fn build_self_assessment(answers: &AnswerMap, now: DateTime<Utc>) -> SelfAssessmentPayload {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let millis = now.timestamp_millis();

    let questions = answered_questions(answers, &timestamp);
    let category_scores = score_categories(&questions);

    let responses: Vec<f64> = questions.iter().map(|q| f64::from(q.response)).collect();
    let overall = if responses.is_empty() {
        0.0
    } else {
        responses.iter().sum::<f64>() / responses.len() as f64
    };

    let strength_categories: Vec<SkillCategory> = category_scores
        .iter()
        .filter(|(_, score)| score.score >= STRENGTH_MIN)
        .map(|(&category, _)| category)
        .collect();
    let growth_categories: Vec<SkillCategory> = category_scores
        .iter()
        .filter(|(_, score)| score.score < GROWTH_MAX)
        .map(|(&category, _)| category)
        .collect();

    SelfAssessmentPayload {
        payload_type: PAYLOAD_TYPE.to_string(),
        metadata: PayloadMetadata {
            title: PAYLOAD_TITLE.to_string(),
            version: PAYLOAD_VERSION.to_string(),
            assessment_id: ASSESSMENT_ID.to_string(),
            assessment_title: PAYLOAD_TITLE.to_string(),
            assessment_type: ASSESSMENT_TYPE.to_string(),
            category: SkillCategory::AiAssistedEngineering,
            source: SOURCE_UI.to_string(),
            file_type: PAYLOAD_TYPE.to_string(),
            session_id: format!("assessment-session-{millis}"),
            user_id: DEFAULT_USER.to_string(),
            page_url: DEFAULT_PAGE_URL.to_string(),
            coach_mode: COACH_MODE.to_string(),
            last_updated: timestamp.clone(),
        },
        timestamp,
        assessment: AssessmentBody {
            results: AssessmentResults {
                category_scores,
                overall_score: round1(overall),
                overall_level: classify_score(overall),
                questions_answered: questions.len(),
                total_questions: TOTAL_QUESTIONS,
                strength_categories,
                growth_categories,
                recommended_path: recommended_path_for(overall),
            },
            questions,
        },
    }
}

/// The learning path suggested for an overall score.
///
/// Older clients compute this field with their own cut points (advanced
/// starts strictly above 3.5, intermediate strictly above 2.0); those
/// are kept here so payloads stay comparable across client versions.
#[must_use]
pub fn recommended_path_for(score: f64) -> SkillLevel {
    if score >= 4.5 {
        SkillLevel::Expert
    } else if score > 3.5 {
        SkillLevel::Advanced
    } else if score > 2.0 {
        SkillLevel::Intermediate
    } else {
        SkillLevel::Beginner
    }
}

fn answered_questions(answers: &AnswerMap, timestamp: &str) -> Vec<AnsweredQuestion> {
    let mut numbered: Vec<(usize, &String)> = Vec::with_capacity(answers.len());
    for id in answers.keys() {
        match question_number(id) {
            Some(number) => numbered.push((number, id)),
            None => warn!(id = %id, "dropping answer with no question number"),
        }
    }
    numbered.sort();

    numbered
        .into_iter()
        .filter_map(|(number, id)| {
            let raw = answers.get(id)?;
            let category = category_for_question(id)?;
            let response = parse_rating(raw) as u8;
            Some(AnsweredQuestion {
                id: id.clone(),
                question: prompt_for_question(number)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Question {number}")),
                category,
                response,
                response_text: rating_label(response).to_string(),
                timestamp: timestamp.to_string(),
            })
        })
        .collect()
}

fn score_categories(
    questions: &[AnsweredQuestion],
) -> BTreeMap<SkillCategory, CategoryScore> {
    let mut grouped: BTreeMap<SkillCategory, Vec<u8>> = SkillCategory::ALL
        .into_iter()
        .map(|category| (category, Vec::with_capacity(QUESTIONS_PER_CATEGORY)))
        .collect();
    for question in questions {
        if let Some(ratings) = grouped.get_mut(&question.category) {
            ratings.push(question.response);
        }
    }

    grouped
        .into_iter()
        .map(|(category, ratings)| {
            let total: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
            let average = if ratings.is_empty() {
                0.0
            } else {
                f64::from(total) / ratings.len() as f64
            };
            let score = CategoryScore {
                score: round2(average),
                level: classify_score(average),
                questions_count: ratings.len(),
                total_points: total,
                max_points: ratings.len() as u32 * 5,
            };
            (category, score)
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
