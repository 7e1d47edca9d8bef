//! PostgreSQL Member Repository

use auth::domain::entity::user::User;
use auth::domain::value_object::{
    activation_status::{ActivationDecision, ActivationStatus},
    user_id::UserId,
    user_role::UserRole,
};
use auth::infra::postgres::{USER_COLUMNS, UserRow};
use sqlx::PgPool;

use crate::domain::repository::MemberRepository;
use crate::error::{AdminError, AdminResult};

/// PostgreSQL-backed member repository over the shared `users` table
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_users(rows: Vec<UserRow>) -> AdminResult<Vec<User>> {
    rows.into_iter()
        .map(|row| row.into_user().map_err(AdminError::from))
        .collect()
}

impl MemberRepository for PgMemberRepository {
    async fn list_active(&self) -> AdminResult<Vec<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE deleted_at IS NULL AND is_active = true ORDER BY id"
        );

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        into_users(rows)
    }

    async fn list_pending_team_leads(&self) -> AdminResult<Vec<User>> {
        let sql = format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE role = $1
              AND activation_status = $2
              AND deleted_at IS NULL
            ORDER BY created_at DESC, id DESC
            "#
        );

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .bind(UserRole::TeamLead.code())
            .bind(ActivationStatus::Pending.code())
            .fetch_all(&self.pool)
            .await?;

        into_users(rows)
    }

    async fn resolve_team_lead_request(
        &self,
        member_id: UserId,
        decision: ActivationDecision,
    ) -> AdminResult<Option<User>> {
        // The WHERE clause is the guard: a concurrent decision sees zero rows
        let sql = format!(
            r#"
            UPDATE users
            SET is_active = $1,
                activation_status = $2,
                updated_at = now()
            WHERE id = $3
              AND role = $4
              AND activation_status = $5
              AND deleted_at IS NULL
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, UserRow>(&sql)
            .bind(decision.is_active())
            .bind(decision.status().code())
            .bind(member_id.get())
            .bind(UserRole::TeamLead.code())
            .bind(ActivationStatus::Pending.code())
            .fetch_optional(&self.pool)
            .await?
            .map(|row| row.into_user().map_err(AdminError::from))
            .transpose()
    }

    async fn update_role(&self, member_id: UserId, role: UserRole) -> AdminResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE users
            SET role = $1, updated_at = now()
            WHERE id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(role.code())
        .bind(member_id.get())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn soft_delete(&self, member_id: UserId) -> AdminResult<bool> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query(
            r#"
            UPDATE users
            SET deleted_at = now(), updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(member_id.get())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            "UPDATE sessions SET deleted_at = now() WHERE user_id = $1 AND deleted_at IS NULL",
        )
        .bind(member_id.get())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
