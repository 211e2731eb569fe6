//! Built-in scenarios and the runner that isolates them from each other.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use serde_json::{Map, Value};

use gather_core::{Payload, Source, process_sources, reject, resolve};

use crate::report::{ScenarioReport, Verdict};

const SOURCE_FAILED: &str = "Source failed";

/// A named run of the pipeline with the payloads it should produce.
#[derive(Debug)]
pub struct Scenario {
    pub name: String,
    pub sources: Vec<Source>,
    pub expected: Vec<Payload>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, sources: Vec<Source>, expected: Vec<Payload>) -> Self {
        Self {
            name: name.into(),
            sources,
            expected,
        }
    }
}

/// Build a `{"id": .., "valid": ..}` payload.
#[must_use]
pub fn record(id: u64, valid: bool) -> Payload {
    let mut fields = Map::new();
    fields.insert("id".to_string(), Value::from(id));
    fields.insert("valid".to_string(), Value::Bool(valid));
    Payload::from(fields)
}

/// The three scenarios the binary runs, freshly built so every source is
/// invoked at most once.
#[must_use]
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "All sources succeed, mixed validation",
            vec![
                resolve(record(1, true)),
                resolve(record(2, false)),
                resolve(record(3, true)),
            ],
            vec![record(1, true), record(3, true)],
        ),
        Scenario::new(
            "One source fails, others succeed",
            vec![
                resolve(record(1, true)),
                reject(SOURCE_FAILED),
                resolve(record(3, true)),
            ],
            vec![record(1, true), record(3, true)],
        ),
        Scenario::new("All sources fail", vec![reject(SOURCE_FAILED)], Vec::new()),
    ]
}

/// Run one scenario to a report.
///
/// A panic anywhere in the scenario is caught and reported as
/// [`Verdict::Errored`] so later scenarios still run.
pub async fn run_scenario(scenario: Scenario) -> ScenarioReport {
    let Scenario {
        name,
        sources,
        expected,
    } = scenario;

    let run = AssertUnwindSafe(async move {
        let actual = process_sources(sources).await;
        same_serialized(&actual, &expected)
    })
    .catch_unwind();

    let verdict = match run.await {
        Ok(Ok(true)) => Verdict::Passed,
        Ok(Ok(false)) => Verdict::Failed,
        Ok(Err(err)) => Verdict::Errored(err.to_string()),
        Err(panic_payload) => Verdict::Errored(panic_payload_to_string(&panic_payload)),
    };

    tracing::debug!(scenario = %name, ?verdict, "Scenario finished");
    ScenarioReport::new(name, verdict)
}

/// Compare two payload sequences by their serialized JSON, field order included.
fn same_serialized(actual: &[Payload], expected: &[Payload]) -> serde_json::Result<bool> {
    Ok(serde_json::to_string(actual)? == serde_json::to_string(expected)?)
}

fn panic_payload_to_string(payload: &Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
