//! Parallel inventory collector
//!
//! Fans work units out across a bounded number of concurrent fetches and
//! joins the results. Units are submitted in the order given; completion
//! order is unspecified, so callers must treat the result set as unordered
//! until they sort it for presentation.

use std::future::Future;

use futures::stream::{self, StreamExt};
use log::{debug, error};

use crate::error::Result;

/// One compartment's full instance-name list (sweep flow).
///
/// The sweep fetch is lenient: a compartment that fails to list still yields
/// a record with an empty name list, so record count always equals unit
/// count for that flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompartmentInstances {
    pub compartment_id: String,
    pub instance_names: Vec<String>,
}

/// One resolved instance (search flow).
///
/// The search fetch coerces mid-unit failures into the `Unknown` sentinel
/// fields instead of dropping the record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InstanceDetail {
    pub compartment: String,
    pub display_name: String,
    pub shape: String,
}

impl InstanceDetail {
    /// Sentinel value for fields that could not be resolved
    pub const UNKNOWN: &'static str = "Unknown";

    /// Record for a unit whose resolution failed entirely
    pub fn unknown(compartment_id: &str) -> Self {
        Self {
            compartment: compartment_id.to_string(),
            display_name: Self::UNKNOWN.to_string(),
            shape: Self::UNKNOWN.to_string(),
        }
    }
}

/// Fan `units` out across at most `max_workers` concurrent `fetch` calls and
/// collect the results.
///
/// Each unit is attempted exactly once: no retry, no pacing, no timeout, no
/// cancellation. The call blocks until every dispatched unit has resolved;
/// the bounded stream lives only for the duration of the call, so the
/// concurrency budget is released on every exit path. A unit whose fetch
/// returns `Err` is logged at ERROR and contributes nothing to the result
/// set; per-flow leniency (empty lists, sentinel records) belongs inside the
/// fetch closures.
pub async fn collect<U, T, F, Fut>(units: Vec<U>, max_workers: usize, fetch: F) -> Vec<T>
where
    U: std::fmt::Display,
    F: Fn(U) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let total = units.len();
    debug!(
        "Dispatching {} work units across at most {} workers",
        total, max_workers
    );

    let results: Vec<Result<T>> = stream::iter(units.into_iter().map(|unit| {
        let label = unit.to_string();
        let fut = fetch(unit);
        async move {
            let result = fut.await;
            if let Err(ref err) = result {
                error!("Error processing work unit {}: {}", label, err);
            }
            result
        }
    }))
    .buffer_unordered(max_workers.max(1))
    .collect()
    .await;

    let records: Vec<T> = results.into_iter().flatten().collect();
    debug!("Collected {} records from {} work units", records.len(), total);
    records
}
