//! Core types and trait definitions for the Stoa assessment service.
//!
//! This crate is deliberately free of HTTP and runtime dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod catalog;
pub mod evaluate;
pub mod relay;
pub mod report;
pub mod sequencer;
pub mod session;
pub mod store;
