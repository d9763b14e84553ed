//! Authentication module
//!
//! JWT bearer authentication for the single household admin account.

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{create_token, verify_token, JwtConfig, TokenClaims};
pub use middleware::{auth_middleware, AuthState, AuthenticatedUser};
pub use password::{check_admin_credentials, hash_password, verify_password};
