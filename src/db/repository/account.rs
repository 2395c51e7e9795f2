//! Account Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Account, AccountCreate};
use sqlx::SqlitePool;

const ACCOUNT_SELECT: &str = "SELECT id, username, email, hash_pass, created_at FROM account";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Account>> {
    let sql = format!("{ACCOUNT_SELECT} WHERE id = ?");
    let account = sqlx::query_as::<_, Account>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(account)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<Account>> {
    let sql = format!("{ACCOUNT_SELECT} WHERE username = ? LIMIT 1");
    let account = sqlx::query_as::<_, Account>(&sql)
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(account)
}

/// Create a new account with a hashed credential.
///
/// The pre-check gives a friendly message; the unique index on username
/// is the backstop for concurrent registrations.
pub async fn create(pool: &SqlitePool, data: AccountCreate) -> RepoResult<Account> {
    if find_by_username(pool, &data.username).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Username '{}' already exists",
            data.username
        )));
    }

    let hash_pass = Account::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;

    let now = crate::utils::time::now_millis();
    let account = sqlx::query_as::<_, Account>(
        "INSERT INTO account (username, email, hash_pass, created_at) VALUES (?, ?, ?, ?) \
         RETURNING id, username, email, hash_pass, created_at",
    )
    .bind(&data.username)
    .bind(&data.email)
    .bind(&hash_pass)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Username '{}' already exists", data.username))
        }
        other => other,
    })?;
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool() -> SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    fn newuser() -> AccountCreate {
        AccountCreate {
            username: "newuser".into(),
            email: "newuser@test.com".into(),
            password: "newpass123".into(),
        }
    }

    #[tokio::test]
    async fn create_and_find_by_username() {
        let pool = test_pool().await;
        create(&pool, newuser()).await.unwrap();

        let account = find_by_username(&pool, "newuser").await.unwrap().unwrap();
        assert_eq!(account.email, "newuser@test.com");
        // the raw password must never be stored
        assert_ne!(account.hash_pass, "newpass123");
    }

    #[tokio::test]
    async fn duplicate_username_rejected() {
        let pool = test_pool().await;
        create(&pool, newuser()).await.unwrap();

        let err = create(&pool, newuser()).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn password_verification() {
        let pool = test_pool().await;
        create(&pool, newuser()).await.unwrap();

        let account = find_by_username(&pool, "newuser").await.unwrap().unwrap();
        assert!(account.verify_password("newpass123").unwrap());
        assert!(!account.verify_password("wrongpass").unwrap());
    }
}
