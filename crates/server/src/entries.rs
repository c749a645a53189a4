//! Entries API endpoints
use api_types::entry::{EntryFields, EntryView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{Amount, EngineError, EntryInput, Field, ValidationErrors};
use serde_json::Value;
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

fn map_entry(entry: engine::Entry) -> EntryView {
    EntryView {
        id: entry.id,
        date: entry.date,
        status: entry.status,
        write_type: entry.write_type,
        category: entry.category,
        subcategory: entry.subcategory,
        amount: entry.amount.to_decimal(),
        comment: entry.comment,
    }
}

/// Accepts a decimal string or a JSON number; absent means zero.
fn parse_amount(value: &Value) -> Result<Amount, EngineError> {
    match value {
        Value::Null => Ok(Amount::ZERO),
        Value::String(raw) => raw.parse(),
        Value::Number(number) => number.to_string().parse(),
        other => Err(EngineError::InvalidAmount(format!(
            "invalid amount '{other}'"
        ))),
    }
}

/// A malformed or out-of-precision amount is reported like any other field
/// error.
fn entry_input(payload: EntryFields) -> Result<EntryInput, ServerError> {
    let amount = parse_amount(&payload.amount).map_err(|err| {
        let mut errors = ValidationErrors::new();
        errors.push(Field::Amount, err.to_string());
        EngineError::Validation(errors)
    })?;

    let mut input = EntryInput::new(
        payload.status,
        payload.write_type,
        payload.category,
        payload.subcategory,
    )
    .amount(amount);
    input.date = payload.date;
    input.comment = payload.comment;
    Ok(input)
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<EntryView>>, ServerError> {
    let entries = state
        .engine
        .list_entries()
        .await?
        .into_iter()
        .map(map_entry)
        .collect();
    Ok(Json(entries))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EntryView>, ServerError> {
    let entry = state.engine.entry(id).await?;
    Ok(Json(map_entry(entry)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EntryFields>,
) -> Result<(StatusCode, Json<EntryView>), ServerError> {
    let entry = state.engine.create_entry(entry_input(payload)?).await?;
    Ok((StatusCode::CREATED, Json(map_entry(entry))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EntryFields>,
) -> Result<Json<EntryView>, ServerError> {
    let entry = state.engine.update_entry(id, entry_input(payload)?).await?;
    Ok(Json(map_entry(entry)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_entry(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
