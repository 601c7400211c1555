use rand::Rng;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use super::state::DashboardSession;
use crate::models::issue::Report;

/// In-memory registry of live dashboard sessions, keyed by a random hex id.
///
/// Every access happens under one lock; handlers never hold it across an await.
/// At most `max_sessions` are live; starting one more drops the least recently used.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, DashboardSession>>,
    max_sessions: usize,
}

pub const DEFAULT_MAX_SESSIONS: usize = 1000;

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(max_sessions: usize) -> Self {
        SessionStore {
            sessions: Mutex::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, DashboardSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a freshly seeded session and return its id.
    pub fn start(&self) -> String {
        let id = generate_session_id();
        let mut sessions = self.lock();
        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, s)| s.last_seen())
                .map(|(id, _)| id.clone())
            else {
                break;
            };
            sessions.remove(&oldest);
            log::warn!("Session limit ({}) reached, dropped least recently used session", self.max_sessions);
        }
        sessions.insert(id.clone(), DashboardSession::seeded());
        id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Run `f` against the session, marking it active. `None` if the id is unknown.
    pub fn with_session<R>(&self, id: &str, f: impl FnOnce(&mut DashboardSession) -> R) -> Option<R> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(id)?;
        session.touch();
        Some(f(session))
    }

    /// Hand a finished reports load to its session. Returns false when the
    /// session ended while the load was in flight; the result is then dropped.
    /// Does not count as operator activity.
    pub fn deliver_load(&self, id: &str, result: Option<Vec<Report>>) -> bool {
        match self.lock().get_mut(id) {
            Some(session) => {
                session.apply_load(result);
                true
            }
            None => false,
        }
    }

    pub fn end(&self, id: &str) -> bool {
        self.lock().remove(id).is_some()
    }

    /// Drop sessions idle for longer than `max_idle`. Returns how many were removed.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        self.evict_idle_at(Instant::now(), max_idle)
    }

    fn evict_idle_at(&self, now: Instant, max_idle: Duration) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, s| now.saturating_duration_since(s.last_seen()) <= max_idle);
        before - sessions.len()
    }
}

/// Random 32-byte hex session id.
fn generate_session_id() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.start();
        let b = store.start();
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);

        store
            .with_session(&a, |s| {
                s.commit_assignment(crate::models::assignment::AssignmentSelection {
                    issue_id: Some("ISS-009".into()),
                    department: Some("Electricity Department".into()),
                })
            })
            .unwrap()
            .unwrap();

        assert_eq!(store.with_session(&a, |s| s.unassigned.len()), Some(3));
        assert_eq!(store.with_session(&b, |s| s.unassigned.len()), Some(4));
    }

    #[test]
    fn full_store_drops_least_recently_used() {
        let store = SessionStore::with_capacity(2);
        let a = store.start();
        let b = store.start();
        store.with_session(&a, |s| s.touch_at(Instant::now() + Duration::from_secs(5)));

        let c = store.start();
        assert_eq!(store.len(), 2);
        assert!(store.contains(&a));
        assert!(!store.contains(&b));
        assert!(store.contains(&c));
    }

    #[test]
    fn load_for_ended_session_is_discarded() {
        let store = SessionStore::new();
        let id = store.start();
        assert!(store.end(&id));
        assert!(!store.end(&id));
        assert!(!store.deliver_load(&id, Some(Vec::new())));
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_id_yields_none() {
        let store = SessionStore::new();
        assert!(store.with_session("missing", |_| ()).is_none());
    }

    #[test]
    fn evicts_only_idle_sessions() {
        let store = SessionStore::new();
        let id = store.start();
        assert_eq!(store.evict_idle(Duration::from_secs(60)), 0);
        assert!(store.contains(&id));

        let later = Instant::now() + Duration::from_secs(120);
        assert_eq!(store.evict_idle_at(later, Duration::from_secs(60)), 1);
        assert!(!store.contains(&id));
    }
}
