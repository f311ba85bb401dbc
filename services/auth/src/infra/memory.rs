use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use chrono::{DateTime, Utc};

use crate::domain::repository::LoginSessionStore;
use crate::domain::types::{CodeCheck, LoginSession, OneTimeCode};
use crate::error::AuthServiceError;

#[derive(Debug, Default)]
struct Maps {
    sessions: HashMap<String, LoginSession>,
    codes: HashMap<String, OneTimeCode>,
}

/// Process-local login session store. Clones share the same maps.
///
/// One lock guards both maps, so every trait operation is atomic with
/// respect to the others. Nothing is evicted unless a caller deletes it or
/// [`LoginSessionStore::purge_expired`] runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoginSessionStore {
    maps: Arc<RwLock<Maps>>,
}

impl InMemoryLoginSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Maps>, AuthServiceError> {
        self.maps
            .read()
            .map_err(|_| AuthServiceError::Internal(anyhow!("login session store lock poisoned")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Maps>, AuthServiceError> {
        self.maps
            .write()
            .map_err(|_| AuthServiceError::Internal(anyhow!("login session store lock poisoned")))
    }

    /// Number of stored sessions.
    pub fn len(&self) -> Result<usize, AuthServiceError> {
        Ok(self.read()?.sessions.len())
    }

    pub fn is_empty(&self) -> Result<bool, AuthServiceError> {
        Ok(self.len()? == 0)
    }
}

impl LoginSessionStore for InMemoryLoginSessionStore {
    async fn put(
        &self,
        session: &LoginSession,
        code: OneTimeCode,
    ) -> Result<(), AuthServiceError> {
        let mut maps = self.write()?;
        maps.sessions
            .insert(session.session_id.clone(), session.clone());
        maps.codes.insert(session.session_id.clone(), code);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<LoginSession>, AuthServiceError> {
        Ok(self.read()?.sessions.get(session_id).cloned())
    }

    async fn get_code(&self, session_id: &str) -> Result<Option<OneTimeCode>, AuthServiceError> {
        Ok(self.read()?.codes.get(session_id).copied())
    }

    async fn consume_code(
        &self,
        session_id: &str,
        presented: u32,
    ) -> Result<CodeCheck, AuthServiceError> {
        let mut maps = self.write()?;
        let stored = maps.codes.get(session_id).copied();
        let check = match stored {
            None => CodeCheck::Missing,
            Some(code) if code.value != presented => CodeCheck::Mismatch,
            Some(_) => {
                maps.codes.remove(session_id);
                CodeCheck::Consumed
            }
        };
        Ok(check)
    }

    async fn delete(&self, session_id: &str) -> Result<(), AuthServiceError> {
        let mut maps = self.write()?;
        maps.sessions.remove(session_id);
        maps.codes.remove(session_id);
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, AuthServiceError> {
        let mut maps = self.write()?;
        let expired: Vec<String> = maps
            .sessions
            .values()
            .filter(|s| s.is_expired(now))
            .map(|s| s.session_id.clone())
            .collect();
        for id in &expired {
            maps.sessions.remove(id);
            maps.codes.remove(id);
        }
        Ok(expired.len())
    }
}
