//! In-process identity provider.
//!
//! Accounts live in a map keyed by the lowercased email. Passwords are kept as
//! [`SecretString`] so they never show up in `Debug` output or logs.

use super::{check_email, AuthUser, IdentityError, IdentityProvider, MIN_PASSWORD_LEN};
use crate::model::UserId;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use tokio::sync::{watch, Mutex};
use tracing::{info, instrument, warn};

struct Account {
    user: AuthUser,
    password: SecretString,
}

pub struct InMemoryIdentity {
    accounts: Mutex<HashMap<String, Account>>,
    session: watch::Sender<Option<AuthUser>>,
    next_uid: AtomicU32,
    available: AtomicBool,
}

impl Default for InMemoryIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        let (session, _) = watch::channel(None);
        Self {
            accounts: Mutex::new(HashMap::new()),
            session,
            next_uid: AtomicU32::new(1),
            available: AtomicBool::new(true),
        }
    }

    /// Simulates an outage: while unavailable every call fails with
    /// [`IdentityError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), IdentityError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(IdentityError::Unavailable)
        }
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl IdentityProvider for InMemoryIdentity {
    #[instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: SecretString) -> Result<AuthUser, IdentityError> {
        self.ensure_available()?;
        let accounts = self.accounts.lock().await;
        let account = accounts
            .get(&normalize(email))
            .filter(|account| account.password.expose_secret() == password.expose_secret())
            .ok_or_else(|| {
                warn!("Rejected credentials");
                IdentityError::InvalidCredentials
            })?;

        info!(uid = %account.user.uid, "Signed in");
        self.session.send_replace(Some(account.user.clone()));
        Ok(account.user.clone())
    }

    #[instrument(skip(self, password))]
    async fn sign_up(
        &self,
        email: &str,
        password: SecretString,
        display_name: &str,
    ) -> Result<AuthUser, IdentityError> {
        self.ensure_available()?;
        check_email(email)?;
        if password.expose_secret().chars().count() < MIN_PASSWORD_LEN {
            return Err(IdentityError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }

        let key = normalize(email);
        let mut accounts = self.accounts.lock().await;
        if accounts.contains_key(&key) {
            return Err(IdentityError::EmailInUse(email.to_string()));
        }

        let uid = self.next_uid.fetch_add(1, Ordering::SeqCst);
        let user = AuthUser {
            uid: UserId(format!("uid_{}", uid)),
            email: email.trim().to_string(),
            display_name: Some(display_name.trim())
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        };
        accounts.insert(
            key,
            Account {
                user: user.clone(),
                password,
            },
        );

        info!(uid = %user.uid, accounts = accounts.len(), "Signed up");
        self.session.send_replace(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.ensure_available()?;
        if let Some(user) = self.session.send_replace(None) {
            info!(uid = %user.uid, "Signed out");
        }
        Ok(())
    }

    fn session(&self) -> watch::Receiver<Option<AuthUser>> {
        self.session.subscribe()
    }
}
