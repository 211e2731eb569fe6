//! Fan-out/fan-in over sources.

use futures_util::future::join_all;

use gather_types::Outcome;

use crate::source::Source;

/// Invoke every source, then wait for all of them to settle.
///
/// All sources are invoked before any is polled, and the join waits for every
/// one regardless of how the others finish. Outcomes come back in input order,
/// not completion order.
pub async fn settle_all(sources: Vec<Source>) -> Vec<Outcome> {
    let pending: Vec<_> = sources.into_iter().map(Source::invoke).collect();
    tracing::debug!(sources = pending.len(), "Invoked sources, awaiting settlement");

    let settled = join_all(pending).await;

    settled
        .into_iter()
        .enumerate()
        .map(|(index, result)| {
            let outcome = Outcome::from(result);
            match &outcome {
                Outcome::Fulfilled(_) => {
                    tracing::debug!(index, status = outcome.status(), "Source settled");
                }
                Outcome::Rejected(err) => {
                    tracing::debug!(
                        index,
                        status = outcome.status(),
                        error = %err,
                        "Source settled"
                    );
                }
            }
            outcome
        })
        .collect()
}
