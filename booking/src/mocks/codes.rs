//! Mock access-code store for testing.

use crate::error::{BookingError, Result};
use crate::model::{AccessCode, CodeId};
use crate::providers::AccessCodeStore;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock access-code store.
///
/// Uses in-memory storage; `consume` performs the compare-and-swap under
/// one lock, matching the PostgreSQL store's semantics.
#[derive(Debug, Clone, Default)]
pub struct MockAccessCodeStore {
    codes: Arc<Mutex<HashMap<CodeId, AccessCode>>>,
}

impl MockAccessCodeStore {
    /// Create a new mock access-code store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            codes: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of stored codes.
    ///
    /// # Errors
    ///
    /// Returns error if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self
            .codes
            .lock()
            .map_err(|_| BookingError::Database("mutex poisoned".to_string()))?
            .len())
    }

    /// Whether the store is empty.
    ///
    /// # Errors
    ///
    /// Returns error if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl AccessCodeStore for MockAccessCodeStore {
    fn create(&self, code: String) -> impl Future<Output = Result<AccessCode>> + Send {
        let codes = Arc::clone(&self.codes);

        async move {
            let access_code = AccessCode {
                id: CodeId::new(),
                code,
                is_used: false,
                created_at: Utc::now(),
                used_at: None,
            };

            codes
                .lock()
                .map_err(|_| BookingError::Database("mutex poisoned".to_string()))?
                .insert(access_code.id, access_code.clone());

            Ok(access_code)
        }
    }

    fn find_by_code(&self, code: &str) -> impl Future<Output = Result<Option<AccessCode>>> + Send {
        let codes = Arc::clone(&self.codes);
        let code = code.to_string();

        async move {
            let guard = codes
                .lock()
                .map_err(|_| BookingError::Database("mutex poisoned".to_string()))?;
            Ok(guard.values().find(|c| c.code == code).cloned())
        }
    }

    fn find_by_id(&self, id: CodeId) -> impl Future<Output = Result<Option<AccessCode>>> + Send {
        let codes = Arc::clone(&self.codes);

        async move {
            let guard = codes
                .lock()
                .map_err(|_| BookingError::Database("mutex poisoned".to_string()))?;
            Ok(guard.get(&id).cloned())
        }
    }

    fn consume(
        &self,
        id: CodeId,
        used_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<bool>> + Send {
        let codes = Arc::clone(&self.codes);

        async move {
            let mut guard = codes
                .lock()
                .map_err(|_| BookingError::Database("mutex poisoned".to_string()))?;

            match guard.get_mut(&id) {
                Some(code) if !code.is_used => {
                    code.is_used = true;
                    code.used_at = Some(used_at);
                    Ok(true)
                }
                _ => Ok(false),
            }
        }
    }
}
