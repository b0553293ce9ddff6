//! Voice application handlers.
//!
//! Command handlers (`RecordSample`, `RecordRejection`, `RecordPreference`)
//! take the user's write lock around every load-modify-save. Query handlers
//! never lock; the instruction and transform queries never fail.

mod get_generation_instructions;
mod get_voice_summary;
mod record_preference;
mod record_rejection;
mod record_sample;
mod transform_text;

pub use get_generation_instructions::{
    GenerationInstructions, GetGenerationInstructionsHandler, GetGenerationInstructionsQuery,
};
pub use get_voice_summary::{GetVoiceSummaryHandler, GetVoiceSummaryQuery};
pub use record_preference::{
    RecordPreferenceCommand, RecordPreferenceHandler, RecordPreferenceResult, VoicePreference,
};
pub use record_rejection::{RecordRejectionCommand, RecordRejectionHandler};
pub use record_sample::{RecordSampleCommand, RecordSampleHandler, RecordSampleResult};
pub use transform_text::{
    TransformPreviewResult, TransformTextHandler, TransformTextQuery, TransformTextResult,
};
