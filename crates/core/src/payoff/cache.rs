//! Caching for payoff simulation results.
//!
//! Simulations are pure functions of their request, so results are
//! cached under a hash of the request parameters.

use std::hash::{Hash, Hasher};
use std::time::Duration;

use moka::sync::Cache;

use super::engine::simulate;
use super::error::PayoffError;
use super::types::{PayoffPlan, PayoffRequest};

/// A simulation result plus whether it came from the cache.
#[derive(Debug, Clone)]
pub struct CachedPlan {
    /// The simulation outcome.
    pub plan: PayoffPlan,
    /// True when the result was served from cache.
    pub cached: bool,
}

/// Bounded, TTL-evicting cache over [`simulate`].
pub struct PayoffCache {
    cache: Cache<u64, PayoffPlan>,
}

impl PayoffCache {
    /// Creates a cache with the given capacity and time-to-live.
    #[must_use]
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Runs a simulation, serving a cached result when the same
    /// parameters were simulated recently.
    ///
    /// # Errors
    ///
    /// Returns `PayoffError` when the request fails validation; invalid
    /// requests are never cached.
    pub fn run(&self, request: &PayoffRequest) -> Result<CachedPlan, PayoffError> {
        let key = hash_request(request);
        if let Some(plan) = self.cache.get(&key) {
            return Ok(CachedPlan { plan, cached: true });
        }

        let plan = simulate(request)?;
        self.cache.insert(key, plan.clone());
        Ok(CachedPlan {
            plan,
            cached: false,
        })
    }

    /// Number of cached results (approximate, per moka semantics).
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// True when the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn hash_request(request: &PayoffRequest) -> u64 {
    let mut hasher = std::hash::DefaultHasher::new();
    request.hash(&mut hasher);
    hasher.finish()
}
