//! Access-code store trait.

use crate::error::Result;
use crate::model::{AccessCode, CodeId};
use chrono::{DateTime, Utc};
use std::future::Future;

/// Persistent store for access codes.
///
/// Codes are created unused, looked up by code string (validation) or by
/// identifier (booking creation), and consumed at most once.
pub trait AccessCodeStore: Send + Sync {
    /// Persist a new, unused access code.
    ///
    /// # Errors
    ///
    /// Returns error if the store rejects the insert (including a unique
    /// collision on the code string).
    fn create(&self, code: String) -> impl Future<Output = Result<AccessCode>> + Send;

    /// Look up a code by its code string (already uppercase-normalized).
    ///
    /// # Errors
    ///
    /// Returns error on store failure; an unknown code is `Ok(None)`.
    fn find_by_code(&self, code: &str)
    -> impl Future<Output = Result<Option<AccessCode>>> + Send;

    /// Look up a code by its opaque identifier.
    ///
    /// # Errors
    ///
    /// Returns error on store failure; an unknown id is `Ok(None)`.
    fn find_by_id(&self, id: CodeId) -> impl Future<Output = Result<Option<AccessCode>>> + Send;

    /// Atomically consume the code: flip `is_used` false→true and stamp
    /// `used_at`, in a single conditional update.
    ///
    /// Returns `true` if this caller won the swap, `false` if the code was
    /// already used (or consumed concurrently). The store itself rejects
    /// the losing writer; callers must not check-then-set around this.
    ///
    /// # Errors
    ///
    /// Returns error on store failure only — losing the swap is not an
    /// error at this layer.
    fn consume(
        &self,
        id: CodeId,
        used_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<bool>> + Send;
}
