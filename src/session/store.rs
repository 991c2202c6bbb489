// src/session/store.rs
use crate::domain::{generate_trend_data, Dashboard};
use crate::errors::ServerError;
use crate::session::token::{generate_token_default, hash_token};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;
use std::sync::Mutex;

pub const SESSION_COOKIE: &str = "session";
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24;
/// Upper bound on live sessions; the least recently seen is evicted first.
pub const MAX_SESSIONS: usize = 10_000;

struct SessionEntry {
    dashboard: Dashboard,
    last_seen: i64,
}

/// Outcome of resolving a request's cookie.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSession {
    pub token: String,
    /// True when a new session was started and the cookie must be set.
    pub is_new: bool,
}

/// In-memory dashboard sessions keyed by the SHA-256 of the cookie token.
pub struct SessionStore {
    sessions: Mutex<HashMap<[u8; 32], SessionEntry>>,
    trend_seed: Option<u64>,
    ttl_secs: i64,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(trend_seed: Option<u64>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            trend_seed,
            ttl_secs: SESSION_TTL_SECS,
            max_sessions: MAX_SESSIONS,
        }
    }

    #[cfg(test)]
    pub fn with_ttl(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    #[cfg(test)]
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions.max(1);
        self
    }

    /// Returns the caller's live session, or starts a new one.
    pub fn resolve(&self, raw_token: Option<&str>, now: i64) -> Result<ResolvedSession, ServerError> {
        let mut sessions = self.lock()?;

        if let Some(token) = raw_token {
            if let Some(entry) = sessions.get_mut(&hash_token(token)) {
                if now - entry.last_seen <= self.ttl_secs {
                    entry.last_seen = now;
                    return Ok(ResolvedSession {
                        token: token.to_string(),
                        is_new: false,
                    });
                }
            }
        }

        let before = sessions.len();
        sessions.retain(|_, e| now - e.last_seen <= self.ttl_secs);
        let pruned = before - sessions.len();
        if pruned > 0 {
            tracing::debug!(pruned, "expired sessions removed");
        }

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, e)| e.last_seen)
                .map(|(key, _)| *key);
            match oldest {
                Some(key) => {
                    sessions.remove(&key);
                    tracing::debug!("session cap reached, evicted least recently seen");
                }
                None => break,
            }
        }

        let token = generate_token_default();
        sessions.insert(
            hash_token(&token),
            SessionEntry {
                dashboard: Dashboard::new(self.new_trends()),
                last_seen: now,
            },
        );
        tracing::info!(active = sessions.len(), "dashboard session started");

        Ok(ResolvedSession { token, is_new: true })
    }

    /// Runs `f` against the session's dashboard while holding the lock.
    pub fn with_dashboard<F, T>(&self, raw_token: &str, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Dashboard) -> Result<T, ServerError>,
    {
        let mut sessions = self.lock()?;
        let entry = sessions
            .get_mut(&hash_token(raw_token))
            .ok_or_else(|| ServerError::BadRequest("unknown session".into()))?;
        f(&mut entry.dashboard)
    }

    /// Drops a session, e.g. one started by a request that then failed.
    pub fn discard(&self, raw_token: &str) -> Result<(), ServerError> {
        self.lock()?.remove(&hash_token(raw_token));
        Ok(())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().map(|s| s.len()).unwrap_or(0)
    }

    fn new_trends(&self) -> Vec<crate::domain::TrendPoint> {
        match self.trend_seed {
            Some(seed) => generate_trend_data(&mut StdRng::seed_from_u64(seed)),
            None => generate_trend_data(&mut rand::thread_rng()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<[u8; 32], SessionEntry>>, ServerError> {
        self.sessions.lock().map_err(|_| {
            tracing::error!("session lock poisoned");
            ServerError::InternalError
        })
    }
}
