use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{SessionError, SessionResult};
use crate::id::SessionId;
use crate::session::BillSession;

/// Session storage boundary.
///
/// All implementations must satisfy these invariants:
/// - `get` hands out a cloned snapshot; mutating it never affects the store.
/// - `put` replaces the stored session wholesale (last write wins).
/// - Concurrent reads are always safe.
/// - Nothing persists: dropping the store drops every session.
///
/// Callers that read-modify-write a session (get, mutate, put) must serialize
/// those cycles per logical session themselves; the store offers no
/// cross-call transaction.
pub trait SessionStore: Send + Sync {
    /// Create, register, and return a fresh session.
    fn create(&self) -> SessionResult<BillSession>;

    /// Cloned snapshot of a session.
    fn get(&self, id: &SessionId) -> SessionResult<BillSession>;

    /// Replace a session wholesale. The session must already exist.
    fn put(&self, session: BillSession) -> SessionResult<()>;

    /// Remove a session. Removing an unknown id is an error.
    fn remove(&self, id: &SessionId) -> SessionResult<()>;

    /// Ids of all live sessions, oldest first.
    fn list(&self) -> SessionResult<Vec<SessionId>>;

    /// Number of live sessions.
    fn count(&self) -> SessionResult<usize>;
}

/// In-memory, HashMap-based session store.
///
/// Sessions are held behind a `RwLock` and cloned on every read/write edge,
/// so concurrent readers never observe a torn session.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, BillSession>>,
    capacity: Option<usize>,
}

impl InMemorySessionStore {
    /// Create a new unbounded store.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            capacity: None,
        }
    }

    /// Create a store that refuses new sessions beyond `limit` live ones.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            capacity: Some(limit),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self) -> SessionResult<BillSession> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| SessionError::LockPoisoned)?;

        if let Some(limit) = self.capacity {
            if sessions.len() >= limit {
                return Err(SessionError::AtCapacity(limit));
            }
        }

        let session = BillSession::new();
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    fn get(&self, id: &SessionId) -> SessionResult<BillSession> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| SessionError::LockPoisoned)?;

        sessions
            .get(id)
            .cloned()
            .ok_or(SessionError::NotFound(*id))
    }

    fn put(&self, session: BillSession) -> SessionResult<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| SessionError::LockPoisoned)?;

        if !sessions.contains_key(&session.id) {
            return Err(SessionError::NotFound(session.id));
        }
        sessions.insert(session.id, session);
        Ok(())
    }

    fn remove(&self, id: &SessionId) -> SessionResult<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| SessionError::LockPoisoned)?;

        sessions
            .remove(id)
            .map(|_| ())
            .ok_or(SessionError::NotFound(*id))
    }

    fn list(&self) -> SessionResult<Vec<SessionId>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| SessionError::LockPoisoned)?;

        let mut entries: Vec<(SessionId, chrono::DateTime<chrono::Utc>)> = sessions
            .values()
            .map(|session| (session.id, session.created_at))
            .collect();
        entries.sort_by_key(|(id, created_at)| (*created_at, *id));
        Ok(entries.into_iter().map(|(id, _)| id).collect())
    }

    fn count(&self) -> SessionResult<usize> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| SessionError::LockPoisoned)?;
        Ok(sessions.len())
    }
}

impl std::fmt::Debug for InMemorySessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.count().unwrap_or(0);
        f.debug_struct("InMemorySessionStore")
            .field("session_count", &count)
            .field("capacity", &self.capacity)
            .finish()
    }
}
