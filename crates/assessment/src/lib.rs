//! Skill assessment scoring for skillpath.
//!
//! This crate owns the pure half of the assessment pipeline:
//!
//! - A static catalog of eighteen questions across six skill categories
//! - Rating collection from raw answer maps, tolerant of the loose value
//!   shapes older clients produce
//! - Per-category aggregation into averages and skill levels
//! - The single threshold table every other crate classifies against
//!
//! Everything here is deterministic: the same answers always produce the
//! same analysis, so results can be recomputed and compared freely.

pub mod aggregate;
pub mod collect;
pub mod levels;
pub mod questions;
pub mod thresholds;

pub use aggregate::{analyze_scores, AreaScore, ScoreAnalysis};
pub use collect::{
    collect_answer_set, collect_responses, parse_rating, AnswerMap, AnswerSet, RawRating,
    MAX_RATING, MIN_RATING, NEUTRAL_RATING,
};
pub use levels::SkillLevel;
pub use questions::{
    category_for_question, prompt_for_question, question_number, rating_label, Question,
    SkillCategory, QUESTIONS, QUESTIONS_PER_CATEGORY, TOTAL_QUESTIONS,
};
pub use thresholds::{classify_score, focus_band, Focus};
