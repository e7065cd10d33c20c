//! Self-assessment payload schema for skillpath.
//!
//! Defines the typed wire format shared with the progress server,
//! builds payloads from raw answers, and validates documents before
//! they leave the machine. Validation messages match the server's
//! legacy expectations exactly.

pub mod builder;
pub mod payload;
pub mod validate;

pub use builder::{build_self_assessment, recommended_path_for};
pub use payload::{
    AnsweredQuestion, AssessmentBody, AssessmentResults, CategoryScore, PayloadMetadata,
    SelfAssessmentPayload, ASSESSMENT_ID, PAYLOAD_TYPE, PAYLOAD_VERSION,
};
pub use validate::{
    validate, validate_payload, validate_self_assessment, ValidationReport, VALID_SOURCES,
};
