//! # Identity
//!
//! The authentication collaborator. The session only talks to it through
//! [`IdentityProvider`]; [`InMemoryIdentity`] is the in-process provider used by
//! the demo binary and the tests.

pub mod memory;

pub use memory::InMemoryIdentity;

use crate::model::UserId;
use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;
use tokio::sync::watch;

/// Shortest password a provider accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// The signed-in account as the identity provider knows it.
///
/// This is not the profile: `is_admin` and the stored name live in the user
/// collection under the same uid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub uid: UserId,
    pub email: String,
    pub display_name: Option<String>,
}

/// Errors reported by an identity provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("password must be at least {min} characters")]
    WeakPassword { min: usize },

    #[error("email already in use: {0}")]
    EmailInUse(String),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("identity provider unavailable")]
    Unavailable,
}

/// Sign-in, sign-up, sign-out and the current-session feed.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: SecretString) -> Result<AuthUser, IdentityError>;

    /// Creates an account and signs it in.
    async fn sign_up(
        &self,
        email: &str,
        password: SecretString,
        display_name: &str,
    ) -> Result<AuthUser, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Receiver that sees every session change; `None` while signed out.
    fn session(&self) -> watch::Receiver<Option<AuthUser>>;
}

/// Checks the shape of an email: one `@` with text on both sides.
pub fn check_email(email: &str) -> Result<(), IdentityError> {
    let invalid = || IdentityError::InvalidEmail(email.to_string());
    let (local, domain) = email.trim().split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    Ok(())
}
