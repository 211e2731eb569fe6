//! Scenario harness reporting

use insta::assert_snapshot;

use gather::{Scenario, Verdict, builtin_scenarios, record, run_scenario};
use gather_core::{reject, resolve};

use crate::common::exploding_source;

#[tokio::test]
async fn builtin_scenarios_all_pass() {
    let mut lines = Vec::new();
    for scenario in builtin_scenarios() {
        lines.push(run_scenario(scenario).await.to_string());
    }

    assert_snapshot!(lines.join("\n"), @r#"
    Test "All sources succeed, mixed validation": PASSED
    Test "One source fails, others succeed": PASSED
    Test "All sources fail": PASSED
    "#);
}

#[tokio::test]
async fn wrong_expectation_reports_failed() {
    let scenario = Scenario::new(
        "Expects the invalid record",
        vec![resolve(record(1, true)), resolve(record(2, false))],
        vec![record(1, true), record(2, false)],
    );

    let report = run_scenario(scenario).await;

    assert_eq!(report.verdict(), &Verdict::Failed);
    assert_eq!(report.to_string(), r#"Test "Expects the invalid record": FAILED"#);
}

#[tokio::test]
async fn panicking_source_is_reported_and_isolated() {
    let crashing = Scenario::new(
        "Source panics",
        vec![resolve(record(1, true)), exploding_source()],
        vec![record(1, true)],
    );
    let following = Scenario::new(
        "Runs after the crash",
        vec![reject("Source failed"), resolve(record(4, true))],
        vec![record(4, true)],
    );

    let crashed = run_scenario(crashing).await;
    let next = run_scenario(following).await;

    assert_eq!(
        crashed.verdict(),
        &Verdict::Errored("source exploded".to_string())
    );
    assert_eq!(
        crashed.to_string(),
        r#"Test "Source panics" threw an unexpected error: source exploded"#
    );
    assert_eq!(next.verdict(), &Verdict::Passed);
}

#[tokio::test]
async fn empty_scenario_passes() {
    let report = run_scenario(Scenario::new("No sources", Vec::new(), Vec::new())).await;
    assert_eq!(report.name(), "No sources");
    assert_eq!(report.verdict(), &Verdict::Passed);
}
