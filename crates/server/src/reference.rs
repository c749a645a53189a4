//! Statuses and types API endpoints.

use api_types::reference::{StatusView, WriteTypeView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

pub async fn list_statuses(
    State(state): State<ServerState>,
) -> Result<Json<Vec<StatusView>>, ServerError> {
    let statuses = state
        .engine
        .list_statuses()
        .await?
        .into_iter()
        .map(|status| StatusView { status })
        .collect();
    Ok(Json(statuses))
}

pub async fn create_status(
    State(state): State<ServerState>,
    Json(payload): Json<StatusView>,
) -> Result<(StatusCode, Json<StatusView>), ServerError> {
    let status = state.engine.create_status(&payload.status).await?;
    Ok((StatusCode::CREATED, Json(StatusView { status })))
}

pub async fn delete_status(
    State(state): State<ServerState>,
    Path(status): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_status(&status).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_types(
    State(state): State<ServerState>,
) -> Result<Json<Vec<WriteTypeView>>, ServerError> {
    let types = state
        .engine
        .list_types()
        .await?
        .into_iter()
        .map(|write_type| WriteTypeView { write_type })
        .collect();
    Ok(Json(types))
}

pub async fn create_type(
    State(state): State<ServerState>,
    Json(payload): Json<WriteTypeView>,
) -> Result<(StatusCode, Json<WriteTypeView>), ServerError> {
    let write_type = state.engine.create_type(&payload.write_type).await?;
    Ok((StatusCode::CREATED, Json(WriteTypeView { write_type })))
}

pub async fn delete_type(
    State(state): State<ServerState>,
    Path(write_type): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_type(&write_type).await?;
    Ok(StatusCode::NO_CONTENT)
}
