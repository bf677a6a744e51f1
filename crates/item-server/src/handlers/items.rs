//! Item handlers

use crate::error::ApiResult;
use crate::extractors::{AppJson, AppPath, AppQuery};
use crate::AppState;
use axum::{extract::State, Json};
use item_core::{Item, ItemCreate, Pagination};

pub async fn create(
    State(state): State<AppState>,
    AppJson(req): AppJson<ItemCreate>,
) -> ApiResult<Json<Item>> {
    let item = state.items.create_item(&req).await?;
    Ok(Json(item))
}

pub async fn get(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<Json<Item>> {
    let item = state.items.get_item(id).await?;
    Ok(Json(item))
}

pub async fn list(
    State(state): State<AppState>,
    AppQuery(page): AppQuery<Pagination>,
) -> ApiResult<Json<Vec<Item>>> {
    let page = page.clamped();
    let items = state.items.list_items(page.skip, page.limit).await?;
    Ok(Json(items))
}

pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<ItemCreate>,
) -> ApiResult<Json<Item>> {
    let item = state.items.update_item(id, &req).await?;
    Ok(Json(item))
}

pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> ApiResult<Json<Item>> {
    let item = state.items.delete_item(id).await?;
    Ok(Json(item))
}
