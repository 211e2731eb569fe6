//! Data sources: zero-argument operations that produce one deferred outcome.
//!
//! A [`Source`] wraps an `FnOnce`, so invoking it consumes it and a source can
//! never run twice. The free constructors build the in-memory mocks used by
//! the scenario harness and the tests.

use std::fmt;
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::{self, BoxFuture};
use tokio::time::sleep;

use gather_types::{Payload, SourceError};

/// The deferred result a source produces once invoked.
pub type SourceFuture = BoxFuture<'static, Result<Payload, SourceError>>;

/// A zero-argument operation producing a single deferred outcome.
pub struct Source {
    invoke: Box<dyn FnOnce() -> SourceFuture + Send>,
}

impl Source {
    pub fn new<F, Fut>(operation: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Payload, SourceError>> + Send + 'static,
    {
        Self {
            invoke: Box::new(move || operation().boxed()),
        }
    }

    /// Starts the operation and hands back its pending outcome.
    #[must_use]
    pub fn invoke(self) -> SourceFuture {
        (self.invoke)()
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source").finish_non_exhaustive()
    }
}

/// A source that resolves immediately with `payload`.
#[must_use]
pub fn resolve(payload: Payload) -> Source {
    Source::new(move || future::ready(Ok(payload)))
}

/// A source that rejects immediately with `message`.
#[must_use]
pub fn reject(message: impl Into<String>) -> Source {
    let err = SourceError::new(message);
    Source::new(move || future::ready(Err(err)))
}

/// A source that resolves with `payload` after `delay`.
#[must_use]
pub fn resolve_after(delay: Duration, payload: Payload) -> Source {
    Source::new(move || async move {
        sleep(delay).await;
        Ok(payload)
    })
}

/// A source that rejects with `message` after `delay`.
#[must_use]
pub fn reject_after(delay: Duration, message: impl Into<String>) -> Source {
    let err = SourceError::new(message);
    Source::new(move || async move {
        sleep(delay).await;
        Err(err)
    })
}
