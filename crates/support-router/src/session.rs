//! Session management for router users
//!
//! A session wraps one `SessionState` with activity bookkeeping. Storage is
//! in-memory only; state never survives a process restart.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use support_core::{Error, Result, SessionState};

/// One user's chat session
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub session_id: String,
    pub state: SessionState,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl Session {
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            state: SessionState::new(),
            created_at: now,
            last_active: now,
        }
    }

    pub fn update_activity(&mut self) {
        self.last_active = Utc::now();
    }

    pub fn is_expired(&self, max_age_seconds: i64) -> bool {
        let max_age = chrono::Duration::seconds(max_age_seconds);
        Utc::now() - self.last_active > max_age
    }
}

/// Storage backend for sessions
pub trait SessionStore: Send + Sync {
    fn get(&self, session_id: &str) -> Option<Session>;
    fn set(&mut self, session_id: &str, session: Session) -> Result<()>;
    fn delete(&mut self, session_id: &str) -> bool;
    fn cleanup_expired(&mut self, max_age_seconds: i64) -> usize;
    fn active_sessions(&self) -> Vec<Session>;
}

/// In-memory session storage
pub struct InMemoryStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemoryStore {
    fn get(&self, session_id: &str) -> Option<Session> {
        self.sessions.read().ok()?.get(session_id).cloned()
    }

    fn set(&mut self, session_id: &str, session: Session) -> Result<()> {
        self.sessions
            .write()
            .map_err(|e| Error::Session(format!("lock error: {e}")))?
            .insert(session_id.to_string(), session);
        Ok(())
    }

    fn delete(&mut self, session_id: &str) -> bool {
        self.sessions
            .write()
            .ok()
            .and_then(|mut sessions| sessions.remove(session_id))
            .is_some()
    }

    fn cleanup_expired(&mut self, max_age_seconds: i64) -> usize {
        let mut sessions = match self.sessions.write() {
            Ok(s) => s,
            Err(_) => return 0,
        };

        let initial_count = sessions.len();
        sessions.retain(|_, session| !session.is_expired(max_age_seconds));
        initial_count - sessions.len()
    }

    fn active_sessions(&self) -> Vec<Session> {
        self.sessions
            .read()
            .ok()
            .map(|sessions| sessions.values().cloned().collect())
            .unwrap_or_default()
    }
}

/// Session manager with TTL-based expiry
pub struct SessionManager {
    storage: Box<dyn SessionStore>,
    session_ttl: i64,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            storage: Box::new(InMemoryStore::new()),
            session_ttl: 3600,
        }
    }

    pub fn with_storage(storage: Box<dyn SessionStore>) -> Self {
        Self {
            storage,
            session_ttl: 3600,
        }
    }

    pub fn with_ttl(mut self, ttl_seconds: i64) -> Self {
        self.session_ttl = ttl_seconds;
        self
    }

    /// Fetch an active session or start a fresh one
    ///
    /// An expired session is replaced; its slot values do not leak into the
    /// replacement.
    pub fn get_or_create(&mut self, session_id: &str) -> Result<Session> {
        if let Some(mut session) = self.storage.get(session_id) {
            if !session.is_expired(self.session_ttl) {
                session.update_activity();
                self.storage.set(session_id, session.clone())?;
                return Ok(session);
            }
        }

        let session = Session::new(session_id);
        self.storage.set(session_id, session.clone())?;
        Ok(session)
    }

    pub fn get(&self, session_id: &str) -> Option<Session> {
        self.storage.get(session_id)
    }

    pub fn update(&mut self, session_id: &str, mut session: Session) -> Result<()> {
        session.update_activity();
        self.storage.set(session_id, session)
    }

    pub fn delete(&mut self, session_id: &str) -> bool {
        self.storage.delete(session_id)
    }

    pub fn cleanup_expired(&mut self) -> usize {
        self.storage.cleanup_expired(self.session_ttl)
    }

    pub fn active_count(&self) -> usize {
        self.storage.active_sessions().len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_round_trip() {
        let mut manager = SessionManager::new();

        let mut session = manager.get_or_create("user-1").expect("create");
        assert!(session.state.customer_name.is_none());

        session.state.customer_name = Some("John Smith".to_string());
        manager.update("user-1", session).expect("update");

        let fetched = manager.get_or_create("user-1").expect("fetch");
        assert_eq!(fetched.state.customer_name.as_deref(), Some("John Smith"));
        assert_eq!(manager.active_count(), 1);
    }

    #[test]
    fn test_expired_session_is_replaced() {
        let mut session = Session::new("user-1");
        session.state.customer_name = Some("John Smith".to_string());
        session.last_active = Utc::now() - chrono::Duration::seconds(10);

        let mut store = InMemoryStore::new();
        store.set("user-1", session).expect("set");
        let mut manager = SessionManager::with_storage(Box::new(store)).with_ttl(1);

        let fresh = manager.get_or_create("user-1").expect("recreate");
        assert!(fresh.state.customer_name.is_none());
    }

    #[test]
    fn test_cleanup_expired() {
        let mut store = InMemoryStore::new();
        let mut stale = Session::new("stale");
        stale.last_active = Utc::now() - chrono::Duration::seconds(7200);
        store.set("stale", stale).expect("set");
        store.set("live", Session::new("live")).expect("set");

        let mut manager = SessionManager::with_storage(Box::new(store)).with_ttl(3600);
        assert_eq!(manager.cleanup_expired(), 1);
        assert_eq!(manager.active_count(), 1);
    }

    #[test]
    fn test_delete() {
        let mut manager = SessionManager::new();
        manager.get_or_create("user-1").expect("create");
        assert!(manager.delete("user-1"));
        assert!(!manager.delete("user-1"));
    }
}
