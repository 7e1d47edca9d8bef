//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use sqlx::PgPool;

use crate::domain::entity::{
    session::Session,
    user::{NewUser, User},
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    activation_status::ActivationStatus, email::Email, person_name::PersonName,
    session_token::SessionToken, user_id::UserId, user_password::UserPassword,
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Column list matching [`UserRow`]
pub const USER_COLUMNS: &str = "id, name, email, password_hash, role, image_url, is_active, \
     activation_status, created_at, updated_at, deleted_at";

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let sql = format!(
            r#"
            INSERT INTO users (
                name,
                email,
                password_hash,
                role,
                image_url,
                is_active,
                activation_status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {USER_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(user.name.as_str())
            .bind(user.email.as_str())
            .bind(user.password.as_str())
            .bind(user.role.code())
            .bind(&user.image_url)
            .bind(user.is_active)
            .bind(user.activation_status.code())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                // Concurrent signup won the race on the partial unique index
                if is_unique_violation(&e) {
                    AuthError::AlreadyExists
                } else {
                    AuthError::Database(e)
                }
            })?;

        row.into_user()
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL");

        sqlx::query_as::<_, UserRow>(&sql)
            .bind(user_id.get())
            .fetch_optional(&self.pool)
            .await?
            .map(UserRow::into_user)
            .transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let sql =
            format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1 AND deleted_at IS NULL");

        sqlx::query_as::<_, UserRow>(&sql)
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await?
            .map(UserRow::into_user)
            .transpose()
    }

    async fn find_by_role(&self, role: UserRole) -> AuthResult<Vec<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = $1 AND deleted_at IS NULL ORDER BY id"
        );

        sqlx::query_as::<_, UserRow>(&sql)
            .bind(role.code())
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(UserRow::into_user)
            .collect()
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn insert(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                user_id,
                session_token,
                expires_at,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.user_id.get())
        .bind(session.session_token.as_str())
        .bind(session.expires_at)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_token(&self, token: &SessionToken) -> AuthResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                user_id,
                session_token,
                expires_at,
                created_at,
                deleted_at
            FROM sessions
            WHERE session_token = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn delete(&self, token: &SessionToken) -> AuthResult<()> {
        sqlx::query(
            "UPDATE sessions SET deleted_at = now() WHERE session_token = $1 AND deleted_at IS NULL",
        )
        .bind(token.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AuthResult<u64> {
        let purged = sqlx::query(
            "UPDATE sessions SET deleted_at = $1 WHERE deleted_at IS NULL AND expires_at <= $1",
        )
        .bind(now)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(purged)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

/// A `users` row; also used by other contexts that `RETURNING` users
#[derive(sqlx::FromRow)]
pub struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    image_url: Option<String>,
    is_active: bool,
    activation_status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl UserRow {
    pub fn into_user(self) -> AuthResult<User> {
        let role = UserRole::from_code(&self.role)
            .ok_or_else(|| AuthError::Internal(format!("Invalid role: {}", self.role)))?;
        let activation_status = ActivationStatus::from_code(&self.activation_status)
            .ok_or_else(|| {
                AuthError::Internal(format!(
                    "Invalid activation status: {}",
                    self.activation_status
                ))
            })?;

        Ok(User {
            id: UserId::from_raw(self.id),
            name: PersonName::from_db(self.name),
            email: Email::from_db(self.email),
            password: UserPassword::from_db(self.password_hash),
            role,
            is_active: self.is_active,
            activation_status,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    user_id: i64,
    session_token: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            user_id: UserId::from_raw(self.user_id),
            session_token: SessionToken::from_raw(self.session_token),
            expires_at: self.expires_at,
            created_at: self.created_at,
            deleted_at: self.deleted_at,
        }
    }
}
