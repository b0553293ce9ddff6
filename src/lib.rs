//! Voiceprint - Personal writing-voice fingerprinting engine
//!
//! This crate learns a bounded statistical model of one person's writing from
//! their samples, gates its use behind a confidence score, and exposes it to
//! downstream generation as prompt instructions and post-hoc text rewrites.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
