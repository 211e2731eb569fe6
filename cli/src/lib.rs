//! Scenario harness for the gather pipeline.
//!
//! Each [`Scenario`] pairs a list of mock sources with the payloads the
//! pipeline is expected to return. Running one yields a [`ScenarioReport`]
//! whose `Display` form is the line the binary prints.

pub mod logging;
mod report;
mod scenario;

pub use report::{ScenarioReport, Verdict};
pub use scenario::{Scenario, builtin_scenarios, record, run_scenario};
