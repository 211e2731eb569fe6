//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::future::Ready;
use std::time::Duration;

use gather_core::{Payload, Source, SourceError, reject, reject_after, resolve, resolve_after};

/// What a generated source settles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Valid,
    Invalid,
    Rejected,
}

pub const KINDS: [Kind; 3] = [Kind::Valid, Kind::Invalid, Kind::Rejected];

/// Build a source for `kind`, tagged with `id`.
///
/// `delay_ms` of zero settles immediately; anything else goes through the
/// timer so completion order can be made to differ from input order.
pub fn source_for(kind: Kind, id: u64, delay_ms: u64) -> Source {
    let payload = gather::record(id, kind == Kind::Valid);
    let delay = Duration::from_millis(delay_ms);
    match (kind, delay_ms) {
        (Kind::Rejected, 0) => reject(format!("source {id} failed")),
        (Kind::Rejected, _) => reject_after(delay, format!("source {id} failed")),
        (_, 0) => resolve(payload),
        (_, _) => resolve_after(delay, payload),
    }
}

/// Every sequence of `len` kinds, in lexicographic order.
pub fn all_mixes(len: usize) -> Vec<Vec<Kind>> {
    (0..len).fold(vec![Vec::new()], |mixes, _| {
        mixes
            .into_iter()
            .flat_map(|prefix| {
                KINDS.iter().map(move |kind| {
                    let mut next = prefix.clone();
                    next.push(*kind);
                    next
                })
            })
            .collect()
    })
}

/// A source that panics as soon as it is invoked.
pub fn exploding_source() -> Source {
    Source::new(|| -> Ready<Result<Payload, SourceError>> { panic!("source exploded") })
}

