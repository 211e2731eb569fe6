//! Core domain types for gather.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Both the pipeline in `gather-core` and the scenario harness build on them.

mod outcome;
mod payload;

pub use outcome::{Outcome, SourceError};
pub use payload::{Payload, PayloadError};
