//! In-memory session table.

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::error::AuthError;

use super::model::{Role, Session, SessionToken};

/// Token-keyed session table.
///
/// Every read-modify-write on a single token runs inside one `entry()` call,
/// which holds the shard's write lock for its whole duration.
#[derive(Debug, Default)]
pub struct SessionTable {
    entries: DashMap<SessionToken, Session>,
}

impl SessionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Inserts the session unless its token is already taken.
    ///
    /// Returns `false` on a token collision; the existing entry is untouched.
    pub fn insert_new(&self, session: Session) -> bool {
        match self.entries.entry(session.token.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(session);
                true
            }
        }
    }

    /// Looks up `token` and applies the expiry and role policy atomically.
    ///
    /// An expired entry is removed before [`AuthError::ExpiredToken`] is
    /// returned. A role mismatch leaves the entry in place.
    pub fn resolve(
        &self,
        token: &SessionToken,
        now: DateTime<Utc>,
        ttl: TimeDelta,
        required_role: Option<&Role>,
    ) -> Result<Session, AuthError> {
        match self.entries.entry(token.clone()) {
            Entry::Vacant(_) => Err(AuthError::InvalidToken),
            Entry::Occupied(occupied) => {
                if occupied.get().is_expired_at(now, ttl) {
                    occupied.remove();
                    return Err(AuthError::ExpiredToken);
                }

                match required_role {
                    Some(role) if occupied.get().role != *role => {
                        Err(AuthError::InsufficientRole)
                    }
                    _ => Ok(occupied.get().clone()),
                }
            }
        }
    }

    /// Removes the entry for `token`, returning it if it was present.
    pub fn remove(&self, token: &SessionToken) -> Option<Session> {
        self.entries.remove(token).map(|(_, session)| session)
    }

    /// Number of stored entries, including expired ones not yet observed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
