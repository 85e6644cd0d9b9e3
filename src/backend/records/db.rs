/**
 * Record Store Operations
 *
 * Every query is scoped by owner. Update and delete are single
 * statements matching both `id` and `user_id`, so a record owned by
 * someone else is indistinguishable from one that does not exist.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Record row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Record {
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List an owner's records, newest first
pub async fn list_records(pool: &SqlitePool, owner: Uuid) -> Result<Vec<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"
        SELECT id, user_id, title, description, created_at, updated_at
        FROM records
        WHERE user_id = ?
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .bind(owner)
    .fetch_all(pool)
    .await
}

/// Create a record owned by `owner`
pub async fn create_record(
    pool: &SqlitePool,
    owner: Uuid,
    title: &str,
    description: &str,
) -> Result<Record, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Record>(
        r#"
        INSERT INTO records (id, user_id, title, description, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, user_id, title, description, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(owner)
    .bind(title)
    .bind(description)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Fetch one record if `owner` owns it
pub async fn get_owned_record(
    pool: &SqlitePool,
    id: Uuid,
    owner: Uuid,
) -> Result<Option<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"
        SELECT id, user_id, title, description, created_at, updated_at
        FROM records
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await
}

/// Replace title and description if `owner` owns the record
///
/// Returns `None` when nothing matched.
pub async fn update_owned_record(
    pool: &SqlitePool,
    id: Uuid,
    owner: Uuid,
    title: &str,
    description: &str,
) -> Result<Option<Record>, sqlx::Error> {
    sqlx::query_as::<_, Record>(
        r#"
        UPDATE records
        SET title = ?, description = ?, updated_at = ?
        WHERE id = ? AND user_id = ?
        RETURNING id, user_id, title, description, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(Utc::now())
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await
}

/// Delete a record if `owner` owns it
///
/// Returns whether a row was removed.
pub async fn delete_owned_record(
    pool: &SqlitePool,
    id: Uuid,
    owner: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM records WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::create_user;
    use crate::backend::test_support::memory_pool;
    use pretty_assertions::assert_eq;

    async fn two_owners(pool: &SqlitePool) -> (Uuid, Uuid) {
        let a = create_user(pool, "A", "a@x.com", "hash").await.unwrap();
        let b = create_user(pool, "B", "b@x.com", "hash").await.unwrap();
        (a.id, b.id)
    }

    #[tokio::test]
    async fn test_create_and_list_are_owner_scoped() {
        let pool = memory_pool().await;
        let (a, b) = two_owners(&pool).await;

        let created = create_record(&pool, a, "t", "d").await.unwrap();

        assert_eq!(list_records(&pool, a).await.unwrap(), vec![created]);
        assert!(list_records(&pool, b).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let pool = memory_pool().await;
        let (a, _) = two_owners(&pool).await;

        let first = create_record(&pool, a, "first", "d").await.unwrap();
        let second = create_record(&pool, a, "second", "d").await.unwrap();
        let third = create_record(&pool, a, "third", "d").await.unwrap();

        let ids: Vec<Uuid> = list_records(&pool, a).await.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[tokio::test]
    async fn test_foreign_record_is_invisible() {
        let pool = memory_pool().await;
        let (a, b) = two_owners(&pool).await;
        let record = create_record(&pool, a, "t", "d").await.unwrap();

        assert!(get_owned_record(&pool, record.id, b).await.unwrap().is_none());
        assert!(update_owned_record(&pool, record.id, b, "x", "y").await.unwrap().is_none());
        assert!(!delete_owned_record(&pool, record.id, b).await.unwrap());

        let untouched = get_owned_record(&pool, record.id, a).await.unwrap().unwrap();
        assert_eq!(untouched, record);
    }

    #[tokio::test]
    async fn test_update_and_delete_by_owner() {
        let pool = memory_pool().await;
        let (a, _) = two_owners(&pool).await;
        let record = create_record(&pool, a, "t", "d").await.unwrap();

        let updated = update_owned_record(&pool, record.id, a, "t2", "d2")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "t2");
        assert_eq!(updated.created_at, record.created_at);
        assert!(updated.updated_at >= record.updated_at);

        assert!(delete_owned_record(&pool, record.id, a).await.unwrap());
        assert!(!delete_owned_record(&pool, record.id, a).await.unwrap());
    }

    #[tokio::test]
    async fn test_records_cascade_with_owner() {
        let pool = memory_pool().await;
        let (a, _) = two_owners(&pool).await;
        create_record(&pool, a, "t", "d").await.unwrap();

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(a)
            .execute(&pool)
            .await
            .unwrap();

        assert!(list_records(&pool, a).await.unwrap().is_empty());
    }
}
