//! Local, simulated account session.
//!
//! Credentials are only shape-checked. Tokens are random and verified by
//! nothing; this exists so a session can be started and ended, and so that
//! signing out wipes the user's in-memory selections and bookmarks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthError;
use crate::saved::SavedRecipes;
use crate::selection::SelectionStore;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Default)]
pub struct AccountSession {
    current: Option<Session>,
}

fn start_session(email: &str, name: String) -> Session {
    Session {
        user: User {
            id: format!("user_{}", Uuid::new_v4().simple()),
            email: email.to_string(),
            name,
            created_at: Utc::now(),
        },
        token: format!("token_{}", Uuid::new_v4().simple()),
    }
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    if email.is_empty() {
        return Err(AuthError::MissingFields("Email is required"));
    }
    if !email.contains('@') {
        return Err(AuthError::InvalidEmail);
    }
    Ok(())
}

fn check_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

impl AccountSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_up(&mut self, email: &str, password: &str, name: &str) -> Result<&Session, AuthError> {
        let (email, name) = (email.trim(), name.trim());
        if email.is_empty() || password.is_empty() || name.is_empty() {
            return Err(AuthError::MissingFields("All fields are required"));
        }
        check_password(password)?;
        validate_email(email)?;

        tracing::debug!(email = email, "Signed up");
        Ok(self.current.insert(start_session(email, name.to_string())))
    }

    /// Sign in. The display name defaults to the part of the email before `@`.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<&Session, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields("Email and password are required"));
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        tracing::debug!(email = email, "Signed in");
        Ok(self.current.insert(start_session(email, name)))
    }

    /// End the session and wipe everything the user built up in it.
    pub fn sign_out(&mut self, selection: &mut SelectionStore, saved: &mut SavedRecipes) {
        if let Some(session) = self.current.take() {
            tracing::debug!(user_id = %session.user.id, "Signed out");
        }
        selection.clear();
        saved.clear();
    }

    /// Change the signed-in user's name and/or email. `None` leaves a field as is.
    pub fn update_profile(
        &mut self,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<&User, AuthError> {
        let session = self.current.as_mut().ok_or(AuthError::NotSignedIn)?;

        let name = name.map(str::trim);
        if name.is_some_and(str::is_empty) {
            return Err(AuthError::MissingFields("Name is required"));
        }
        let email = email.map(str::trim);
        if let Some(email) = email {
            validate_email(email)?;
        }

        let user = &mut session.user;
        if let Some(name) = name {
            user.name = name.to_string();
        }
        if let Some(email) = email {
            user.email = email.to_string();
        }
        tracing::debug!(user_id = %user.id, "Updated profile");
        Ok(user)
    }

    /// Validate a password-reset request. Nothing is sent.
    pub fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        validate_email(email.trim())?;
        tracing::debug!(email = email.trim(), "Password reset requested");
        Ok(())
    }

    /// Validate a password reset. The token is not checked against anything.
    pub fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError> {
        if token.trim().is_empty() || new_password.is_empty() {
            return Err(AuthError::MissingFields("Token and new password are required"));
        }
        check_password(new_password)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
