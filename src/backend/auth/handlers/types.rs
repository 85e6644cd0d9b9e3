/**
 * Authentication Handler Types
 *
 * Request schemas (raw bodies and their validated forms) and response
 * types for the register, login, and me handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::password::{MAX_PASSWORD_BYTES, MIN_PASSWORD_LENGTH};
use crate::backend::auth::users::{normalize_email, Identity, Role, User};
use crate::backend::validation::{required_secret, required_text, Validate};
use crate::shared::SharedError;

fn check_password_length(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at most {} bytes", MAX_PASSWORD_BYTES),
        ));
    }
    Ok(())
}

/// Registration request body
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Email address, used as the login key
    #[serde(default)]
    pub email: Option<String>,
    /// Password (hashed before storage)
    #[serde(default)]
    pub password: Option<String>,
}

/// A checked registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    /// Normalised (trimmed, lowercased)
    pub email: String,
    pub password: String,
}

impl Validate for RegisterRequest {
    type Valid = Registration;

    fn validate(self) -> Result<Registration, SharedError> {
        let missing = || SharedError::validation("name", "Please provide name, email and password");

        let name = required_text(self.name).ok_or_else(missing)?;
        let email = required_text(self.email).ok_or_else(missing)?;
        let password = required_secret(self.password).ok_or_else(missing)?;

        if !email.contains('@') {
            return Err(SharedError::validation("email", "Please provide a valid email"));
        }
        check_password_length(&password)?;

        Ok(Registration {
            name,
            email: normalize_email(&email),
            password,
        })
    }
}

/// Login request body
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Checked login credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    type Valid = Credentials;

    fn validate(self) -> Result<Credentials, SharedError> {
        let missing = || SharedError::validation("email", "Please provide email and password");

        Ok(Credentials {
            email: required_text(self.email).ok_or_else(missing)?,
            password: required_secret(self.password).ok_or_else(missing)?,
        })
    }
}

/// Profile update request body
///
/// Only the caller's own name and password can change here.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// A checked profile update; at least one field is set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub password: Option<String>,
}

impl Validate for UpdateProfileRequest {
    type Valid = ProfileUpdate;

    fn validate(self) -> Result<ProfileUpdate, SharedError> {
        if self.name.is_none() && self.password.is_none() {
            return Err(SharedError::validation(
                "name",
                "Please provide a name or password to update",
            ));
        }

        let name = match self.name {
            Some(raw) => Some(
                required_text(Some(raw))
                    .ok_or_else(|| SharedError::validation("name", "Name cannot be empty"))?,
            ),
            None => None,
        };
        if let Some(password) = &self.password {
            check_password_length(password)?;
        }

        Ok(ProfileUpdate {
            name,
            password: self.password,
        })
    }
}

/// Auth response
///
/// Returned by register and login: the session token and the user.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    /// Bearer token
    pub token: String,
    /// User information (without credentials)
    pub user: UserResponse,
}

/// `{"user": ...}` wrapper returned by the me endpoints
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Identity> for UserResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
            role: identity.role,
            created_at: identity.created_at,
            updated_at: identity.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Identity::from(user).into()
    }
}
