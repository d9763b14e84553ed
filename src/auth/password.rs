//! Password hashing utilities

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::config::AdminConfig;

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}

/// Check a login attempt against the configured admin account.
///
/// A configured bcrypt hash takes precedence; the plaintext `password`
/// field is the household-setup fallback.
pub fn check_admin_credentials(admin: &AdminConfig, username: &str, password: &str) -> bool {
    if username != admin.username {
        return false;
    }
    match &admin.password_hash {
        Some(hash) => verify_password(password, hash).unwrap_or(false),
        None => password == admin.password,
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminConfig {
        AdminConfig {
            username: "admin".to_string(),
            password: "secret".to_string(),
            password_hash: None,
        }
    }

    #[test]
    fn plaintext_fallback_matches() {
        let cfg = admin();
        assert!(check_admin_credentials(&cfg, "admin", "secret"));
        assert!(!check_admin_credentials(&cfg, "admin", "wrong"));
        assert!(!check_admin_credentials(&cfg, "other", "secret"));
    }

    #[test]
    fn hash_takes_precedence_over_plaintext() {
        let mut cfg = admin();
        cfg.password_hash = Some(hash_password("hashed-pw").unwrap());
        assert!(check_admin_credentials(&cfg, "admin", "hashed-pw"));
        // the plaintext field is ignored once a hash is set
        assert!(!check_admin_credentials(&cfg, "admin", "secret"));
    }
}
