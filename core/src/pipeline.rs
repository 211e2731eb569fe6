//! The settle-then-filter-then-concatenate runner.

use gather_types::{Outcome, Payload};

use crate::aggregate::aggregate;
use crate::settle::settle_all;
use crate::source::Source;
use crate::validate::is_valid;

/// Run every source to completion and return the accepted payloads.
///
/// A rejected or invalid source never affects the others; it is skipped in
/// place and the survivors keep their input order.
pub async fn process_sources(sources: Vec<Source>) -> Vec<Payload> {
    let outcomes = settle_all(sources).await;
    collect_valid(outcomes)
}

/// Keep fulfilled outcomes whose payload passes [`is_valid`], in order.
#[must_use]
pub fn collect_valid(outcomes: Vec<Outcome>) -> Vec<Payload> {
    let settled = outcomes.len();

    let accepted = outcomes
        .into_iter()
        .filter_map(Outcome::into_payload)
        .filter(|payload| {
            let keep = is_valid(payload);
            if !keep {
                tracing::trace!(%payload, "Dropping invalid payload");
            }
            keep
        })
        .fold(Vec::new(), aggregate);

    tracing::debug!(settled, accepted = accepted.len(), "Collected valid payloads");
    accepted
}
