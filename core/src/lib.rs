//! Core pipeline logic for gather.
//!
//! Every source is invoked up front, all of them are awaited to a terminal
//! outcome, and only then are fulfilled payloads filtered and folded into the
//! result:
//!
//! ```text
//! Vec<Source> -> settle_all() -> Vec<Outcome> -> collect_valid() -> Vec<Payload>
//!                (join_all)                      (is_valid + aggregate)
//! ```

mod aggregate;
mod pipeline;
mod settle;
pub mod source;
mod validate;

pub use aggregate::aggregate;
pub use pipeline::{collect_valid, process_sources};
pub use settle::settle_all;
pub use source::{Source, SourceFuture, reject, reject_after, resolve, resolve_after};
pub use validate::is_valid;

pub use gather_types::{Outcome, Payload, PayloadError, SourceError};
