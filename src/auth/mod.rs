//! Admin authentication
//!
//! Access is decided once, up front: [`login`] checks the supplied
//! credentials against the configured pair and hands back an
//! [`AuthContext`] that mutating commands take as an explicit argument.
//! There is no ambient "is authenticated" state anywhere in the crate.

use anyhow::{bail, Result};

use crate::config::AdminConfig;

/// Caller-supplied login credentials
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Proof of a successful login, required by every operation that mutates
/// content
#[derive(Debug, Clone)]
pub struct AuthContext {
    email: String,
}

impl AuthContext {
    /// The authenticated admin's email
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Check credentials against the configured admin pair
pub fn login(config: &AdminConfig, credentials: &Credentials) -> Result<AuthContext> {
    if credentials.email == config.email && credentials.password == config.password {
        tracing::info!(email = %credentials.email, "admin login");
        Ok(AuthContext {
            email: credentials.email.clone(),
        })
    } else {
        tracing::warn!(email = %credentials.email, "rejected admin login");
        bail!("invalid email or password");
    }
}
