//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Command handlers
    RecordPreferenceCommand, RecordPreferenceHandler, RecordPreferenceResult, VoicePreference,
    RecordRejectionCommand, RecordRejectionHandler,
    RecordSampleCommand, RecordSampleHandler, RecordSampleResult,
    // Query handlers
    GenerationInstructions, GetGenerationInstructionsHandler, GetGenerationInstructionsQuery,
    GetVoiceSummaryHandler, GetVoiceSummaryQuery,
    TransformPreviewResult, TransformTextHandler, TransformTextQuery, TransformTextResult,
};
