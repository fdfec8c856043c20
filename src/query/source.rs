//! Filter sources
//!
//! The control never filters anything itself. Hosts inject a [`FilterItems`]
//! implementation and every query is resolved through it. Synchronous and
//! asynchronous sources look identical to the search worker: both hand back
//! a boxed future, the synchronous one already completed.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use tokio_util::sync::CancellationToken;

use super::worker::types::FilterError;
use crate::item::Item;

pub type FilterFuture = BoxFuture<'static, Result<Vec<Item>, FilterError>>;

/// Resolves a query into a result set
///
/// `cancel` fires when the operation is superseded or the control is torn
/// down. Honoring it is optional: stale completions are discarded either way.
pub trait FilterItems: Send + Sync {
    fn filter_items(&self, query: &str, cancel: CancellationToken) -> FilterFuture;
}

/// Source backed by a synchronous closure
pub struct FilterFn<F>(F);

impl<F> FilterItems for FilterFn<F>
where
    F: Fn(&str, &CancellationToken) -> Result<Vec<Item>, FilterError> + Send + Sync,
{
    fn filter_items(&self, query: &str, cancel: CancellationToken) -> FilterFuture {
        future::ready((self.0)(query, &cancel)).boxed()
    }
}

/// Wrap a synchronous filter function
pub fn from_fn<F>(f: F) -> FilterFn<F>
where
    F: Fn(&str, &CancellationToken) -> Result<Vec<Item>, FilterError> + Send + Sync,
{
    FilterFn(f)
}

/// Source backed by a closure returning a future
pub struct AsyncFilterFn<F>(F);

impl<F, Fut> FilterItems for AsyncFilterFn<F>
where
    F: Fn(String, CancellationToken) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<Item>, FilterError>> + Send + 'static,
{
    fn filter_items(&self, query: &str, cancel: CancellationToken) -> FilterFuture {
        (self.0)(query.to_string(), cancel).boxed()
    }
}

/// Wrap an asynchronous filter function
pub fn from_async_fn<F, Fut>(f: F) -> AsyncFilterFn<F>
where
    F: Fn(String, CancellationToken) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<Item>, FilterError>> + Send + 'static,
{
    AsyncFilterFn(f)
}

/// In-memory source with fzf-style matching on item labels
pub struct StaticItems {
    items: Vec<Item>,
    latency: Duration,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for StaticItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticItems")
            .field("items", &self.items.len())
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl StaticItems {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            latency: Duration::ZERO,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Delay every response, simulating a remote source
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Items whose label matches every whitespace-separated term, best first
    pub fn matching(&self, query: &str) -> Vec<Item> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return self.items.clone();
        }

        let mut scored: Vec<(usize, i64)> = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| {
                let mut total_score: i64 = 0;
                for term in &terms {
                    total_score += self.matcher.fuzzy_match(&item.label, term)?;
                }
                Some((idx, total_score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored
            .into_iter()
            .map(|(idx, _)| self.items[idx].clone())
            .collect()
    }
}

impl FilterItems for StaticItems {
    fn filter_items(&self, query: &str, cancel: CancellationToken) -> FilterFuture {
        let results = self.matching(query);
        let latency = self.latency;

        if latency.is_zero() {
            return future::ready(Ok(results)).boxed();
        }

        async move {
            tokio::select! {
                _ = cancel.cancelled() => Err(FilterError::Cancelled),
                _ = tokio::time::sleep(latency) => Ok(results),
            }
        }
        .boxed()
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
