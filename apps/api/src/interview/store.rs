//! In-memory session store. Sessions live until deleted or left idle past the TTL.
//!
//! Expired sessions are swept on `create`, `get` and `len`; nothing runs in the background.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::interview::session::Session;

/// Handle to one session. Holding the lock serializes actions on that session.
pub type SessionHandle = Arc<Mutex<Session>>;

struct Entry {
    handle: SessionHandle,
    last_seen: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    /// Registers a fresh session and returns a snapshot of it.
    pub async fn create(&self) -> Session {
        let session = Session::new();
        let snapshot = session.clone();
        let now = Instant::now();

        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now);
        sessions.insert(
            session.id,
            Entry {
                handle: Arc::new(Mutex::new(session)),
                last_seen: now,
            },
        );
        info!(session_id = %snapshot.id, "Session created");
        snapshot
    }

    /// Returns the session and marks it as active.
    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now);
        sessions.get_mut(&id).map(|entry| {
            entry.last_seen = now;
            entry.handle.clone()
        })
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!(session_id = %id, "Session ended");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, Instant::now());
        sessions.len()
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, Entry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle_ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {evicted} idle sessions");
        }
    }
}
