//! Learning path recommendations for skillpath.
//!
//! Takes a [`skillpath_assessment::ScoreAnalysis`] and produces:
//!
//! - Prioritized learning item recommendations drawn from a static
//!   catalog, tiered by the learner's level in each weak category
//! - A persistable learning path document in the shared camelCase
//!   document format
//! - A plain-text report for terminal display
//!
//! Generation is pure and clock-free; only [`synthesize_path`] takes a
//! timestamp, and the caller supplies it.

pub mod catalog;
pub mod document;
pub mod generator;
pub mod reason;
pub mod report;
pub mod synthesize;

pub use catalog::items_for;
pub use document::{LearningPath, PathDocument, PathItem, PathMetadata};
pub use generator::{
    estimate_item_time, generate_recommendations, EstimatedDuration, FocusArea, Priority,
    Recommendation, RecommendationSummary, Recommendations, HOURS_PER_WEEK,
};
pub use reason::recommendation_reason;
pub use report::format_assessment_report;
pub use synthesize::synthesize_path;
