// src/fetch.rs
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use crate::backend::DataService;
use crate::errors::{ErrorKind, PartyError};
use crate::models::FetchResult;

/// Freshness window for cached reads, in seconds.
pub const CACHE_TTL_SECS: i64 = 300;

pub fn cache_ttl() -> Duration {
    Duration::seconds(CACHE_TTL_SECS)
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    result: FetchResult,
    expires_at: DateTime<Utc>,
}

/// Time-bounded cache of read results, keyed by action name.
pub struct FetchCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: HashMap<String, CacheEntry>,
}

impl FetchCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached result for `action` if it has not expired yet.
    pub fn get(&mut self, action: &str) -> Option<FetchResult> {
        let now = self.clock.now();
        self.entries.retain(|_, e| e.expires_at > now);
        self.entries.get(action).map(|e| e.result.clone())
    }

    pub fn insert(&mut self, action: &str, result: FetchResult) {
        let expires_at = self.clock.now() + self.ttl;
        self.entries
            .insert(action.to_string(), CacheEntry { result, expires_at });
    }

    /// Drops every entry regardless of expiry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reads `action` from the backend through `cache`.
///
/// Failures are returned as [`FetchResult::Error`] and cached like any other
/// result, so a broken backend is not retried until the entry expires.
pub async fn fetch(cache: &mut FetchCache, service: &dyn DataService, action: &str) -> FetchResult {
    if let Some(hit) = cache.get(action) {
        log::debug!("cache hit for action={}", action);
        return hit;
    }

    let result = match service.get(action).await {
        Ok(envelope) if envelope.is_success() => FetchResult::Success {
            data: envelope.data,
        },
        Ok(envelope) => {
            let message = envelope.error_message();
            log::warn!("⚠️  backend refused action={}: {}", action, message);
            FetchResult::Error { message }
        }
        Err(e) => {
            log::warn!("⚠️  fetching action={} failed: {}", action, e);
            FetchResult::Error {
                message: describe_read_failure(&e),
            }
        }
    };

    cache.insert(action, result.clone());
    result
}

fn describe_read_failure(e: &PartyError) -> String {
    match e.kind() {
        ErrorKind::MalformedResponse => {
            "The API response is not valid JSON (check the backend deployment).".to_string()
        }
        _ => format!("API communication error (check network/permissions): {}", e),
    }
}
