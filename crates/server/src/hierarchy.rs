//! Categories and subcategories API endpoints.

use api_types::category::{CategoryView, SubcategoryView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn map_category(category: engine::Category) -> CategoryView {
    CategoryView {
        name: category.name,
        parent_type: category.parent_type,
    }
}

fn map_subcategory(subcategory: engine::Subcategory) -> SubcategoryView {
    SubcategoryView {
        name: subcategory.name,
        parent_category: subcategory.parent_category,
    }
}

pub async fn list_categories(
    State(state): State<ServerState>,
) -> Result<Json<Vec<CategoryView>>, ServerError> {
    let categories = state
        .engine
        .list_all_categories()
        .await?
        .into_iter()
        .map(map_category)
        .collect();
    Ok(Json(categories))
}

pub async fn create_category(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryView>,
) -> Result<(StatusCode, Json<CategoryView>), ServerError> {
    let category = state
        .engine
        .create_category(&payload.name, &payload.parent_type)
        .await?;
    Ok((StatusCode::CREATED, Json(map_category(category))))
}

pub async fn delete_category(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_category(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_subcategories(
    State(state): State<ServerState>,
) -> Result<Json<Vec<SubcategoryView>>, ServerError> {
    let subcategories = state
        .engine
        .list_all_subcategories()
        .await?
        .into_iter()
        .map(map_subcategory)
        .collect();
    Ok(Json(subcategories))
}

pub async fn create_subcategory(
    State(state): State<ServerState>,
    Json(payload): Json<SubcategoryView>,
) -> Result<(StatusCode, Json<SubcategoryView>), ServerError> {
    let subcategory = state
        .engine
        .create_subcategory(&payload.name, &payload.parent_category)
        .await?;
    Ok((StatusCode::CREATED, Json(map_subcategory(subcategory))))
}

pub async fn delete_subcategory(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_subcategory(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
