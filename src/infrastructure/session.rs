//! Session management for visitors of the page
//!
//! Sessions live in memory only. Each one sits behind its own lock, and a
//! handler holds that lock for the whole action so concurrent actions on the
//! same session run one after another. Sessions left idle longer than the
//! configured TTL are evicted by a periodic sweep.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::domain::entities::EcoSession;
use crate::domain::value_objects::SessionId;

/// How often idle sessions are swept
pub const EVICTION_SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// Shared, lockable handle to one session
pub type SessionHandle = Arc<Mutex<EcoSession>>;

/// Keeps every active [`EcoSession`] by id
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<SessionId, SessionHandle>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty session and return a copy of it
    pub fn create_session(&mut self) -> EcoSession {
        let session = EcoSession::new();
        self.sessions
            .insert(session.id, Arc::new(Mutex::new(session.clone())));
        tracing::info!(session_id = %session.id, active = self.sessions.len(), "Session created");
        session
    }

    pub fn get_session(&self, id: SessionId) -> Option<SessionHandle> {
        self.sessions.get(&id).cloned()
    }

    /// Drop sessions not updated within `ttl` of `now`. Sessions with an
    /// action in flight are kept. Returns how many were removed.
    pub fn evict_idle(&mut self, ttl: Duration, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|id, handle| match handle.try_lock() {
            Err(_) => true,
            Ok(session) => {
                let keep = now - session.updated_at < ttl;
                if !keep {
                    tracing::debug!(
                        session_id = %id,
                        age_minutes = (now - session.created_at).num_minutes(),
                        "Evicting idle session"
                    );
                }
                keep
            }
        });

        let evicted = before - self.sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, active = self.sessions.len(), "Idle sessions evicted");
        }
        evicted
    }
}
