//! In-memory subject store
//!
//! Provides subject lookup without a database for unit and integration
//! tests. Counts lookups so tests can assert the gate resolves each
//! request at most once, and can inject backend failures on demand.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::store::{LookupError, SubjectStore};
use crate::types::Subject;

/// Subject store backed by a shared in-memory map
#[derive(Clone, Default)]
pub struct MemorySubjectStore {
    subjects: Arc<Mutex<HashMap<i64, Subject>>>,
    lookups: Arc<AtomicUsize>,
    fail_backend: Arc<AtomicBool>,
}

impl MemorySubjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a subject, replacing any existing entry with the same id
    pub fn insert(&self, subject: Subject) {
        self.subjects.lock().unwrap().insert(subject.id, subject);
    }

    /// Insert a minimal subject built from an id and email
    pub fn insert_with_email(&self, id: i64, email: &str) -> Subject {
        let now = Utc::now();
        let subject = Subject {
            id,
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.insert(subject.clone());
        subject
    }

    /// Remove a subject, simulating deletion after token issuance
    pub fn remove(&self, id: i64) {
        self.subjects.lock().unwrap().remove(&id);
    }

    /// Number of `find_by_id` calls observed
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Make subsequent lookups fail with a backend error
    pub fn set_backend_failure(&self, fail: bool) {
        self.fail_backend.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SubjectStore for MemorySubjectStore {
    async fn find_by_id(&self, id: i64) -> Result<Subject, LookupError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if self.fail_backend.load(Ordering::SeqCst) {
            return Err(LookupError::Backend(anyhow::anyhow!(
                "injected store failure"
            )));
        }

        self.subjects
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(LookupError::NotFound(id))
    }
}
