//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `voice` - Voice metrics, the profile aggregate, trust gate, and its consumers

pub mod foundation;
pub mod voice;
