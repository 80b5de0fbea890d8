//! In-memory session store.
//!
//! A session not used for longer than the idle TTL is discarded on its next
//! lookup or by the next `purge_expired` sweep.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

use crate::permissions::Session;

struct StoredSession {
    session: Session,
    last_seen: Instant,
}

impl StoredSession {
    fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.duration_since(self.last_seen) > ttl
    }
}

/// Thread-safe map of active sessions keyed by session id.
pub struct SessionStore {
    sessions: DashMap<Uuid, StoredSession>,
    ttl: Duration,
}

impl SessionStore {
    /// Create an empty store with the given idle TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Store a new session, replacing any with the same id.
    pub fn insert(&self, session: Session) {
        self.sessions.insert(
            session.id,
            StoredSession {
                session,
                last_seen: Instant::now(),
            },
        );
    }

    /// Look up a live session and mark it as used.
    pub fn get(&self, id: Uuid) -> Option<Session> {
        let now = Instant::now();
        let mut entry = self.sessions.get_mut(&id)?;
        if entry.is_expired(self.ttl, now) {
            drop(entry);
            self.sessions.remove(&id);
            tracing::debug!(session_id = %id, "Session expired");
            return None;
        }
        entry.last_seen = now;
        Some(entry.session.clone())
    }

    /// Replace an existing session, e.g. after a context switch.
    ///
    /// Returns `false` if the session is no longer live.
    pub fn replace(&self, session: Session) -> bool {
        let now = Instant::now();
        let Some(mut entry) = self.sessions.get_mut(&session.id) else {
            return false;
        };
        if entry.is_expired(self.ttl, now) {
            drop(entry);
            self.sessions.remove(&session.id);
            return false;
        }
        entry.session = session;
        entry.last_seen = now;
        true
    }

    /// Remove a session, returning it if it was present.
    pub fn remove(&self, id: Uuid) -> Option<Session> {
        self.sessions.remove(&id).map(|(_, stored)| stored.session)
    }

    /// Drop every expired session. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions
            .retain(|_, stored| !stored.is_expired(self.ttl, now));
        before.saturating_sub(self.sessions.len())
    }

    /// Number of stored sessions, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
