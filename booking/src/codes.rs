//! Access-code issuance and validation.

use crate::environment::Environment;
use crate::error::{BookingError, Result};
use crate::model::{AccessCode, CodeId};
use crate::providers::{AccessCodeStore, BookingStore, EmailProvider};
use crate::utils;

/// Mint a new single-use access code.
///
/// The caller-supplied key is compared against the configured admin secret
/// in constant time. On match, an 8-character uppercase-hex code is drawn
/// from the OS random source and persisted unused. Codes have no expiry
/// and no rate limit; they stay valid until consumed.
///
/// # Errors
///
/// - `Configuration` if no admin secret is configured.
/// - `Unauthorized` if the presented key does not match.
/// - `Database` if the store rejects the insert.
pub async fn issue_code<C, B, E>(
    env: &Environment<C, B, E>,
    presented_key: &str,
) -> Result<AccessCode>
where
    C: AccessCodeStore + Clone,
    B: BookingStore + Clone,
    E: EmailProvider + Clone,
{
    let Some(expected) = env.secrets.admin_key.as_deref() else {
        tracing::error!("admin key requested but ADMIN_SECRET_KEY is not configured");
        return Err(BookingError::Configuration(
            "admin secret is not configured".to_string(),
        ));
    };

    if !constant_time_eq::constant_time_eq(presented_key.as_bytes(), expected.as_bytes()) {
        tracing::warn!("access-code issuance rejected: bad admin key");
        return Err(BookingError::Unauthorized);
    }

    let code = utils::generate_access_code();
    let access_code = env.codes.create(code).await?;

    tracing::info!(code_id = %access_code.id.0, "access code issued");
    Ok(access_code)
}

/// Validate a submitted code string.
///
/// The code is uppercase-normalized before lookup. Validation has no side
/// effect: it never marks anything used, so validating the same code twice
/// without an intervening booking succeeds twice.
///
/// # Errors
///
/// - `CodeInvalid` if no record matches.
/// - `CodeAlreadyUsed` if the code was consumed.
/// - `Database` on store failure.
pub async fn validate_code<C, B, E>(env: &Environment<C, B, E>, submitted: &str) -> Result<CodeId>
where
    C: AccessCodeStore + Clone,
    B: BookingStore + Clone,
    E: EmailProvider + Clone,
{
    let normalized = utils::normalize_code(submitted);

    let Some(access_code) = env.codes.find_by_code(&normalized).await? else {
        return Err(BookingError::CodeInvalid);
    };

    if access_code.is_used {
        return Err(BookingError::CodeAlreadyUsed);
    }

    Ok(access_code.id)
}
