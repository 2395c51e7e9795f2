//! Menu API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::db::repository::menu_item;
use crate::utils::validation::{MAX_TITLE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Currency amounts: non-negative, at most 2 fractional digits
fn validate_price(price: Decimal) -> AppResult<()> {
    if price.is_sign_negative() {
        return Err(AppError::validation(format!(
            "price must be non-negative, got {price}"
        )));
    }
    if price.scale() > 2 {
        return Err(AppError::validation(format!(
            "price must have at most 2 decimal places, got {price}"
        )));
    }
    Ok(())
}

fn validate_inventory(inventory: i64) -> AppResult<()> {
    if inventory < 0 {
        return Err(AppError::validation(format!(
            "inventory must be non-negative, got {inventory}"
        )));
    }
    Ok(())
}

/// GET /api/menu - list all menu items
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu_item::find_all(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/menu/:id - fetch a single menu item
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let item = menu_item::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {id} not found")))?;
    Ok(Json(item))
}

/// POST /api/menu - create a menu item
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    validate_required_text(&payload.title, "title", MAX_TITLE_LEN)?;
    validate_price(payload.price)?;
    validate_inventory(payload.inventory)?;

    let item = menu_item::create(&state.pool, payload).await?;

    tracing::info!(
        item_id = item.id,
        title = %item.title,
        operator = %current_user.username,
        "Menu item created"
    );

    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/menu/:id - update a menu item (partial)
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    validate_optional_text(&payload.title, "title", MAX_TITLE_LEN)?;
    if let Some(price) = payload.price {
        validate_price(price)?;
    }
    if let Some(inventory) = payload.inventory {
        validate_inventory(inventory)?;
    }

    let item = menu_item::update(&state.pool, id, payload).await?;

    tracing::info!(
        item_id = item.id,
        operator = %current_user.username,
        "Menu item updated"
    );

    Ok(Json(item))
}

/// DELETE /api/menu/:id - delete a menu item
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = menu_item::delete(&state.pool, id).await?;

    tracing::info!(
        item_id = id,
        operator = %current_user.username,
        "Menu item deleted"
    );

    Ok(Json(result))
}
