//! Menu Item Repository

use super::{RepoError, RepoResult};
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use sqlx::SqlitePool;

const MENU_SELECT: &str =
    "SELECT id, title, price, inventory, created_at, updated_at FROM menu_item";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(MENU_SELECT)
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let sql = format!("{MENU_SELECT} WHERE id = ?");
    let item = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, data: MenuItemCreate) -> RepoResult<MenuItem> {
    let now = crate::utils::time::now_millis();
    let item = sqlx::query_as::<_, MenuItem>(
        "INSERT INTO menu_item (title, price, inventory, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?4) \
         RETURNING id, title, price, inventory, created_at, updated_at",
    )
    .bind(&data.title)
    .bind(data.price.to_string())
    .bind(data.inventory)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(item)
}

pub async fn update(pool: &SqlitePool, id: i64, data: MenuItemUpdate) -> RepoResult<MenuItem> {
    let now = crate::utils::time::now_millis();
    let rows = sqlx::query(
        "UPDATE menu_item SET title = COALESCE(?1, title), price = COALESCE(?2, price), \
         inventory = COALESCE(?3, inventory), updated_at = ?4 WHERE id = ?5",
    )
    .bind(data.title)
    .bind(data.price.map(|p| p.to_string()))
    .bind(data.inventory)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    async fn test_pool() -> SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    fn price(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn create_then_retrieve_is_identical() {
        let pool = test_pool().await;
        let created = create(
            &pool,
            MenuItemCreate {
                title: "IceCream".into(),
                price: price("80.00"),
                inventory: 100,
            },
        )
        .await
        .unwrap();

        let fetched = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "IceCream");
        assert_eq!(fetched.price, price("80.00"));
        assert_eq!(fetched.inventory, 100);
    }

    #[tokio::test]
    async fn update_price_is_reflected() {
        let pool = test_pool().await;
        let created = create(
            &pool,
            MenuItemCreate {
                title: "IceCream".into(),
                price: price("80.00"),
                inventory: 100,
            },
        )
        .await
        .unwrap();

        let updated = update(
            &pool,
            created.id,
            MenuItemUpdate {
                title: None,
                price: Some(price("90.00")),
                inventory: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.price, price("90.00"));
        // untouched fields survive a partial update
        assert_eq!(updated.title, "IceCream");
        assert_eq!(updated.inventory, 100);

        let fetched = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched.price, price("90.00"));
    }

    #[tokio::test]
    async fn delete_then_retrieve_is_gone() {
        let pool = test_pool().await;
        let created = create(
            &pool,
            MenuItemCreate {
                title: "Pizza".into(),
                price: price("120.00"),
                inventory: 50,
            },
        )
        .await
        .unwrap();

        assert!(delete(&pool, created.id).await.unwrap());
        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());

        let err = delete(&pool, created.id).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let pool = test_pool().await;
        let err = update(
            &pool,
            9999,
            MenuItemUpdate {
                title: Some("Ghost".into()),
                price: None,
                inventory: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
