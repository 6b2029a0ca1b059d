//! In-memory session storage

use crate::config::HttpDefaults;
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use shelf_core::SessionLog;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Opaque session identifier carried in the session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Handle to one session's log.
///
/// Appends must happen while holding `log`'s lock so that concurrent
/// requests on the same session are applied one at a time.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub log: Arc<Mutex<SessionLog>>,
}

/// A stored session and when it was last used
#[derive(Debug)]
struct SessionEntry {
    log: Arc<Mutex<SessionLog>>,
    last_seen: RwLock<Instant>,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(SessionLog::new())),
            last_seen: RwLock::new(Instant::now()),
        }
    }

    fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(*self.last_seen.read())
    }

    fn touch(&self) {
        *self.last_seen.write() = Instant::now();
    }
}

/// Live sessions, keyed by id. Nothing outlives the process.
///
/// A session unused for longer than the idle timeout is gone, and when
/// the store is full the least recently used session makes room for a new
/// one.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<SessionId, SessionEntry>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(
            Duration::from_secs(HttpDefaults::SESSION_IDLE_TIMEOUT_SECS),
            HttpDefaults::MAX_SESSIONS,
        )
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that expires sessions idle longer than `idle_timeout` and
    /// holds at most `max_sessions` (at least one)
    pub fn with_limits(idle_timeout: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Start a session with an empty log, dropping stale sessions first
    pub fn create(&self) -> Session {
        self.sweep();
        while self.sessions.len() >= self.max_sessions {
            if !self.evict_least_recent() {
                break;
            }
        }

        let id = SessionId::new();
        let entry = SessionEntry::new();
        let log = Arc::clone(&entry.log);
        self.sessions.insert(id, entry);
        tracing::debug!(session = %id, live = self.sessions.len(), "session started");
        Session { id, log }
    }

    /// The live session for `id`, marking it as used. An expired session
    /// is removed and reported as unknown.
    pub fn get(&self, id: SessionId) -> Option<Session> {
        let now = Instant::now();
        match self.sessions.get(&id) {
            Some(entry) if entry.idle_for(now) <= self.idle_timeout => {
                entry.touch();
                return Some(Session {
                    id,
                    log: Arc::clone(&entry.log),
                });
            }
            Some(_) => {}
            None => return None,
        }

        self.sessions
            .remove_if(&id, |_, entry| entry.idle_for(now) > self.idle_timeout);
        tracing::debug!(session = %id, "session expired");
        None
    }

    /// Copy of a session's current log
    pub fn snapshot(&self, id: SessionId) -> Option<SessionLog> {
        self.get(id).map(|session| session.log.lock().clone())
    }

    /// Drop every session idle past the timeout, returning how many went
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| entry.idle_for(now) <= self.idle_timeout);
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            tracing::debug!(removed, "expired sessions swept");
        }
        removed
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn evict_least_recent(&self) -> bool {
        let oldest = self
            .sessions
            .iter()
            .max_by_key(|entry| entry.value().idle_for(Instant::now()))
            .map(|entry| *entry.key());

        match oldest {
            Some(id) => {
                self.sessions.remove(&id);
                tracing::debug!(session = %id, "session evicted, store full");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{RawSubmission, Registry};

    fn valid_book() -> RawSubmission {
        RawSubmission::from_form([
            ("title", "Emma"),
            ("author", "Austen"),
            ("year", "1815"),
            ("pages", "474"),
        ])
    }

    #[test]
    fn test_session_id_round_trips_through_text() {
        let id = SessionId::new();
        assert_eq!(id.to_string().parse::<SessionId>().unwrap(), id);
        assert!("session-1".parse::<SessionId>().is_err());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let registry = Registry::new();
        let first = store.create();
        let second = store.create();

        assert!(registry.submit("physical", &valid_book(), &mut first.log.lock()));

        assert_eq!(store.snapshot(first.id).unwrap().len(), 1);
        assert!(store.snapshot(second.id).unwrap().is_empty());
        assert!(store.snapshot(SessionId::new()).is_none());
    }

    #[test]
    fn test_handles_share_one_log() {
        let store = SessionStore::new();
        let registry = Registry::new();
        let session = store.create();
        let again = store.get(session.id).unwrap();

        assert!(registry.submit("physical", &valid_book(), &mut session.log.lock()));
        assert_eq!(again.log.lock().len(), 1);
    }

    #[test]
    fn test_concurrent_appends_are_all_kept() {
        let store = Arc::new(SessionStore::new());
        let registry = Arc::new(Registry::new());
        let session = store.create();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let log = Arc::clone(&session.log);
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        assert!(registry.submit("physical", &valid_book(), &mut log.lock()));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.snapshot(session.id).unwrap().len(), 200);
    }

    #[test]
    fn test_idle_sessions_expire() {
        let store = SessionStore::with_limits(Duration::from_millis(20), 100);
        let stale = store.create();
        std::thread::sleep(Duration::from_millis(50));

        assert!(store.get(stale.id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_sweeps_stale_sessions() {
        let store = SessionStore::with_limits(Duration::from_millis(20), 1_000);
        for _ in 0..50 {
            store.create();
        }
        assert_eq!(store.len(), 50);
        std::thread::sleep(Duration::from_millis(50));

        let fresh = store.create();
        assert_eq!(store.len(), 1);
        assert!(store.get(fresh.id).is_some());
    }

    #[test]
    fn test_full_store_evicts_least_recently_used() {
        let store = SessionStore::with_limits(Duration::from_secs(60), 2);
        let first = store.create();
        std::thread::sleep(Duration::from_millis(5));
        let second = store.create();
        std::thread::sleep(Duration::from_millis(5));

        // Using the first session makes the second the oldest
        assert!(store.get(first.id).is_some());
        let third = store.create();

        assert_eq!(store.len(), 2);
        assert!(store.get(first.id).is_some());
        assert!(store.get(second.id).is_none());
        assert!(store.get(third.id).is_some());
    }

    #[test]
    fn test_store_never_exceeds_cap() {
        let store = SessionStore::with_limits(Duration::from_secs(60), 10);
        for _ in 0..500 {
            store.create();
        }
        assert_eq!(store.len(), 10);
    }
}
