use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{NewUser, User};
use crate::domain::ports::{Clock, CredentialHasher, StoreError, UserStore};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at_epoch(seconds: i64) -> Self {
        Self(Utc.timestamp_opt(seconds, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub insert: bool,
    pub find: bool,
}

// In-memory user table keyed by email; enforces the same uniqueness as the database.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    users: Arc<Mutex<HashMap<String, User>>>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_user(&self, email: &str, password_hash: &str) -> User {
        let mut guard = self.users.lock().expect("users mutex poisoned");
        let user = User {
            id: guard.len() as i64 + 1,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        };
        guard.insert(user.email.clone(), user.clone());
        user
    }

    pub(crate) fn get_test_user(&self, email: &str) -> Option<User> {
        let guard = self.users.lock().expect("users mutex poisoned");
        guard.get(email).cloned()
    }
}

#[async_trait]
impl UserStore for RecordingStore {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        if self.failures.insert {
            return Err(StoreError::Backend("insert failed".to_string()));
        }

        let mut guard = self.users.lock().expect("users mutex poisoned");
        if guard.contains_key(&user.email) {
            return Err(StoreError::Conflict);
        }
        let stored = User {
            id: guard.len() as i64 + 1,
            email: user.email,
            password_hash: user.password_hash,
            created_at: user.created_at,
        };
        guard.insert(stored.email.clone(), stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        if self.failures.find {
            return Err(StoreError::Backend("find failed".to_string()));
        }

        let guard = self.users.lock().expect("users mutex poisoned");
        Ok(guard.get(email).cloned())
    }
}

// Reversible stand-in for argon2 so tests stay fast. Hashes that do not carry
// the prefix are treated as unparseable.
#[derive(Clone, Copy)]
pub(crate) struct PlainHasher;

#[async_trait]
impl CredentialHasher for PlainHasher {
    async fn hash(&self, password: &str) -> Result<String, String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, String> {
        hash.strip_prefix("plain:")
            .map(|stored| stored == password)
            .ok_or_else(|| "unparseable hash".to_string())
    }
}
