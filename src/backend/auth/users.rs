/**
 * User Model and Database Operations
 *
 * The credential store. Emails are normalised (trimmed, lowercased)
 * before every write and lookup, and the `users.email` column is
 * `UNIQUE COLLATE NOCASE`, so the store itself is the arbiter of email
 * uniqueness even under concurrent registrations.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use uuid::Uuid;

/// Identity role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular user
    #[default]
    User,
    /// Administrator; only assignable outside the HTTP API
    Admin,
}

impl Role {
    /// Storage and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `role` column held a value outside the known set
#[derive(Debug, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(String);

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(value)),
        }
    }
}

/// Full user row, including the password hash
///
/// Only the login path reads this; everything else works with
/// [`Identity`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Login email, lowercased
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Role
    #[sqlx(try_from = "String")]
    pub role: Role,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// A user without credentials
///
/// This is what the identity middleware attaches to requests.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Canonical form of an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Whether a store error is a uniqueness violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Create a new user with the default role
///
/// Fails with a unique-violation database error if the email is taken.
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, name, email, password_hash, role, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(normalize_email(email))
    .bind(password_hash)
    .bind(Role::default().as_str())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get user by email, including the password hash
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(normalize_email(email))
    .fetch_optional(pool)
    .await
}

/// Get an identity by ID, without the password hash
pub async fn get_identity_by_id(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<Identity>, sqlx::Error> {
    sqlx::query_as::<_, Identity>(
        r#"
        SELECT id, name, email, role, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Update a user's own name and/or password hash
///
/// `None` leaves a column unchanged. Returns `None` if the user no
/// longer exists.
pub async fn update_profile(
    pool: &SqlitePool,
    id: Uuid,
    name: Option<&str>,
    password_hash: Option<&str>,
) -> Result<Option<Identity>, sqlx::Error> {
    sqlx::query_as::<_, Identity>(
        r#"
        UPDATE users
        SET name = COALESCE(?, name),
            password_hash = COALESCE(?, password_hash),
            updated_at = ?
        WHERE id = ?
        RETURNING id, name, email, role, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(password_hash)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}
