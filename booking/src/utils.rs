//! Utility functions for code generation and input normalization.

/// Generate a new access-code string.
///
/// Draws 4 bytes from the operating system's cryptographically secure
/// random source and hex-encodes them uppercase, yielding 8 characters in
/// `[0-9A-F]`.
///
/// # Examples
///
/// ```
/// use tutoria_booking::utils::generate_access_code;
///
/// let code = generate_access_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
/// ```
#[must_use]
pub fn generate_access_code() -> String {
    use rand::RngCore;

    let mut bytes = [0u8; 4];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

/// Normalize a submitted code for lookup: trim and uppercase.
///
/// # Examples
///
/// ```
/// use tutoria_booking::utils::normalize_code;
///
/// assert_eq!(normalize_code("  a1b2c3d4 "), "A1B2C3D4");
/// ```
#[must_use]
pub fn normalize_code(submitted: &str) -> String {
    submitted.trim().to_uppercase()
}

/// Validate email address format.
///
/// Basic structural validation: exactly one `@`, non-empty local and
/// domain parts, a dotted domain, and a plausible character set. For full
/// RFC 5322 compliance consider the `email_address` crate.
///
/// # Examples
///
/// ```
/// use tutoria_booking::utils::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(is_valid_email("user+tag@subdomain.example.com"));
/// assert!(!is_valid_email("invalid"));
/// assert!(!is_valid_email("@example.com"));
/// assert!(!is_valid_email("user@"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 3 || email.len() > 255 {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    if !domain.contains('.') {
        return false;
    }

    let valid_local_chars =
        |c: char| c.is_alphanumeric() || c == '.' || c == '-' || c == '+' || c == '_';
    let valid_domain_chars = |c: char| c.is_alphanumeric() || c == '.' || c == '-';

    if !local.chars().all(valid_local_chars) {
        return false;
    }
    if !domain.chars().all(valid_domain_chars) {
        return false;
    }

    // Domain parts between dots must be non-empty
    domain.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_codes_are_uppercase_hex() {
        for _ in 0..32 {
            let code = generate_access_code();
            assert_eq!(code.len(), 8);
            assert!(code.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
        }
    }

    #[test]
    fn test_generated_codes_vary() {
        let codes: std::collections::HashSet<String> =
            (0..16).map(|_| generate_access_code()).collect();
        // 16 draws from a 2^32 space colliding down to one value would mean
        // a broken random source.
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("a1b2c3d4"), "A1B2C3D4");
        assert_eq!(normalize_code(" A1B2C3D4\n"), "A1B2C3D4");
        assert_eq!(normalize_code(""), "");
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user-name@example.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
    }
}
