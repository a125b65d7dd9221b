// src/api/state.rs
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::backend::{DataService, RemoteDataService};
use crate::config::AppConfig;
use crate::fetch::{Clock, FetchCache, SystemClock, cache_ttl};

struct SessionSlot {
    cache: Arc<Mutex<FetchCache>>,
    last_seen: DateTime<Utc>,
}

/// One fetch cache per browser session, so that one visitor's submission
/// only invalidates their own view.
pub struct SessionCaches {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    sessions: RwLock<HashMap<Uuid, SessionSlot>>,
}

impl SessionCaches {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cache for `id`, creating a session under a freshly minted
    /// id when `id` is unknown or absent. Sessions idle for longer than the
    /// TTL are dropped whenever a new one is created.
    pub async fn checkout(&self, id: Option<Uuid>) -> (Uuid, Arc<Mutex<FetchCache>>) {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;

        if let Some(id) = id {
            if let Some(slot) = sessions.get_mut(&id) {
                slot.last_seen = now;
                return (id, slot.cache.clone());
            }
        }

        let ttl = self.ttl;
        sessions.retain(|_, slot| now - slot.last_seen <= ttl);

        let id = Uuid::new_v4();
        let cache = Arc::new(Mutex::new(FetchCache::new(self.ttl, self.clock.clone())));
        sessions.insert(
            id,
            SessionSlot {
                cache: cache.clone(),
                last_seen: now,
            },
        );
        log::debug!("new session {} ({} active)", id, sessions.len());
        (id, cache)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub service: Arc<dyn DataService>,
    pub sessions: Arc<SessionCaches>,
}

impl AppState {
    /// State talking to the configured backend over HTTP.
    pub fn new(config: AppConfig) -> Self {
        let service = RemoteDataService::new(Client::new(), config.api_url.clone());
        Self::with_service(config, Arc::new(service), Arc::new(SystemClock))
    }

    pub fn with_service(
        config: AppConfig,
        service: Arc<dyn DataService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            service,
            sessions: Arc::new(SessionCaches::new(cache_ttl(), clock)),
        }
    }
}
