//! Rating collection from raw answer data.
//!
//! Answers arrive as JSON objects keyed either by question id (`q1`..`q18`)
//! or by category name, and the values are whatever the client stored:
//! numbers, numeric strings, labelled strings like `"4 - Proficient"`, or
//! junk. Collection normalises all of that into per-category rating vectors
//! on the 1-5 scale without failing the whole set over one bad entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::questions::{category_for_question, question_number, SkillCategory};

/// Lowest rating on the scale.
pub const MIN_RATING: f64 = 1.0;
/// Highest rating on the scale.
pub const MAX_RATING: f64 = 5.0;
/// Rating assumed when a value cannot be interpreted at all.
pub const NEUTRAL_RATING: f64 = 3.0;

/// A single answer value as it appears in stored or submitted JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRating {
    /// Plain number, the shape current clients send.
    Number(f64),
    /// String value, often `"4"` or `"4 - Proficient"`.
    Text(String),
    /// Anything else; interpreted as unrated.
    Other(serde_json::Value),
}

impl From<f64> for RawRating {
    fn from(value: f64) -> Self {
        RawRating::Number(value)
    }
}

impl From<i32> for RawRating {
    fn from(value: i32) -> Self {
        RawRating::Number(f64::from(value))
    }
}

impl From<&str> for RawRating {
    fn from(value: &str) -> Self {
        RawRating::Text(value.to_string())
    }
}

/// Answers keyed by question id.
pub type AnswerMap = BTreeMap<String, RawRating>;

/// An answer document in either of the shapes clients produce.
///
/// The category-keyed variant must stay first: a question-keyed object
/// would otherwise also match it whenever every value happened to be an
/// array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerSet {
    /// Ratings already grouped by category name.
    ByCategory(BTreeMap<String, Vec<RawRating>>),
    /// One rating per question id.
    ByQuestion(AnswerMap),
}

/// Interpret one raw answer value as a rating.
///
/// Numbers pass through (fractional ratings from averaged imports are
/// kept), strings contribute their first run of digits, and everything
/// else counts as [`NEUTRAL_RATING`]. The result is always clamped to the
/// 1-5 scale.
///
/// # Examples
///
/// ```
/// use skillpath_assessment::{parse_rating, RawRating};
///
/// assert_eq!(parse_rating(&RawRating::Number(4.0)), 4.0);
/// assert_eq!(parse_rating(&RawRating::Text("4 - Proficient".into())), 4.0);
/// assert_eq!(parse_rating(&RawRating::Other(serde_json::Value::Null)), 3.0);
/// ```
#[must_use]
pub fn parse_rating(raw: &RawRating) -> f64 {
    let value = match raw {
        RawRating::Number(n) if n.is_finite() => *n,
        RawRating::Number(_) => NEUTRAL_RATING,
        RawRating::Text(text) => first_digit_run(text).unwrap_or(NEUTRAL_RATING),
        RawRating::Other(_) => NEUTRAL_RATING,
    };
    value.clamp(MIN_RATING, MAX_RATING)
}

fn first_digit_run(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let run: &str = text[start..]
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or("");
    run.parse::<u32>().ok().map(f64::from)
}

/// Group question-keyed answers into per-category rating vectors.
///
/// Entries whose id carries no question number are skipped with a warning.
/// Within each category, ratings appear in question-number order so the
/// same answers always collect identically.
#[must_use]
pub fn collect_responses(answers: &AnswerMap) -> BTreeMap<SkillCategory, Vec<f64>> {
    let mut entries: Vec<(&str, &RawRating, usize)> = Vec::with_capacity(answers.len());
    for (id, raw) in answers {
        match question_number(id) {
            Some(number) => entries.push((id.as_str(), raw, number)),
            None => warn!(id, "skipping answer with no question number"),
        }
    }
    entries.sort_by(|a, b| a.2.cmp(&b.2).then_with(|| a.0.cmp(b.0)));

    let mut grouped: BTreeMap<SkillCategory, Vec<f64>> = BTreeMap::new();
    for (id, raw, _) in entries {
        // question_number succeeded above, so the category lookup cannot miss
        if let Some(category) = category_for_question(id) {
            grouped.entry(category).or_default().push(parse_rating(raw));
        }
    }
    grouped
}

/// Group answers from either document shape into per-category ratings.
///
/// Category-keyed input with an unrecognised category name drops that
/// category with a warning rather than failing the set.
#[must_use]
pub fn collect_answer_set(answers: &AnswerSet) -> BTreeMap<SkillCategory, Vec<f64>> {
    match answers {
        AnswerSet::ByQuestion(map) => collect_responses(map),
        AnswerSet::ByCategory(map) => {
            let mut grouped = BTreeMap::new();
            for (name, raw_ratings) in map {
                let Some(category) = SkillCategory::from_name(name) else {
                    warn!(category = %name, "skipping ratings for unknown category");
                    continue;
                };
                let ratings: Vec<f64> = raw_ratings.iter().map(parse_rating).collect();
                grouped.insert(category, ratings);
            }
            grouped
        }
    }
}
