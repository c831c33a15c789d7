//! Fallback suggestion ranking.
//!
//! When a boosted search comes back empty, the backend's fuzzy suggester is
//! consulted once per configured distance metric, concurrently. Terms are
//! then ranked by frequency voting: a term proposed by two metrics beats a
//! term proposed by one. A bounded top-k structure keeps the best three,
//! preferring earlier-arriving terms on ties.

use ahash::AHashMap;
use futures::future;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::backend::{DistanceMetric, SearchBackend};
use crate::error::{GazetteError, Result};

/// Configuration for a suggestion round.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    /// Distance metrics to consult, in voting order.
    pub metrics: Vec<DistanceMetric>,
    /// Accuracy threshold passed to the backend suggester.
    pub accuracy: f32,
    /// Candidate terms requested per metric.
    pub page_size: usize,
    /// Maximum number of ranked suggestions to emit.
    pub max_suggestions: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            metrics: DistanceMetric::ALL.to_vec(),
            accuracy: 0.2,
            page_size: 3,
            max_suggestions: 3,
        }
    }
}

/// A suggested term with the number of metrics that proposed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionCandidate {
    /// The suggested term.
    pub term: String,
    /// How many distance metrics proposed this term.
    pub frequency: u32,
}

/// Bounded min-structure over suggestion candidates.
///
/// Inserts freely while under capacity; once full, a newcomer evicts the
/// current minimum only if its frequency is strictly greater, so on ties
/// the earlier-arriving occupant stays. Capacity is small enough that a
/// linear scan beats a heap.
#[derive(Debug)]
struct BoundedTopK {
    capacity: usize,
    entries: Vec<SuggestionCandidate>,
}

impl BoundedTopK {
    fn new(capacity: usize) -> Self {
        BoundedTopK {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    fn offer(&mut self, candidate: SuggestionCandidate) {
        if self.entries.len() < self.capacity {
            self.entries.push(candidate);
            return;
        }

        if self.entries.is_empty() {
            return;
        }

        // Scan with <= so among equal-frequency occupants the latest
        // arrival is the eviction victim and earlier arrivals survive.
        let mut min_index = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.frequency <= self.entries[min_index].frequency {
                min_index = i;
            }
        }

        if candidate.frequency > self.entries[min_index].frequency {
            // Remove-then-push keeps the surviving entries in arrival
            // order; the stable sort in into_ranked relies on that.
            self.entries.remove(min_index);
            self.entries.push(candidate);
        }
    }

    /// Drain into a list sorted by descending frequency; the sort is
    /// stable, so equal frequencies keep arrival order.
    fn into_ranked(mut self) -> Vec<SuggestionCandidate> {
        self.entries
            .sort_by(|a, b| b.frequency.cmp(&a.frequency));
        self.entries
    }
}

/// Run one suggestion round for `term` against `field`.
///
/// All metric lookups are issued concurrently and merged only after every
/// one has completed. Cancellation is all-or-nothing: if the token fires
/// mid-flight, no partial suggestion list is returned.
pub async fn rank_suggestions<B: SearchBackend>(
    backend: &B,
    field: &str,
    term: &str,
    config: &SuggestionConfig,
    cancel: &CancellationToken,
) -> Result<Vec<SuggestionCandidate>> {
    let lookups = config
        .metrics
        .iter()
        .map(|&metric| backend.suggest(field, term, metric, config.accuracy, config.page_size));

    // Biased so an already-cancelled request never starts the lookups.
    let per_metric = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(term, "suggestion round cancelled");
            return Err(GazetteError::cancelled("suggestion lookup cancelled"));
        }
        results = future::try_join_all(lookups) => results?,
    };

    // Frequency voting across metrics, preserving first-arrival order for
    // the tie-break below.
    let mut arrival: Vec<String> = Vec::new();
    let mut frequencies: AHashMap<String, u32> = AHashMap::new();
    for terms in &per_metric {
        for suggested in terms {
            match frequencies.get_mut(suggested) {
                Some(count) => *count += 1,
                None => {
                    frequencies.insert(suggested.clone(), 1);
                    arrival.push(suggested.clone());
                }
            }
        }
    }
    trace!(term, candidates = arrival.len(), "suggestion votes tallied");

    let mut top = BoundedTopK::new(config.max_suggestions);
    for suggested in arrival {
        let frequency = frequencies[&suggested];
        top.offer(SuggestionCandidate {
            term: suggested,
            frequency,
        });
    }

    Ok(top.into_ranked())
}
