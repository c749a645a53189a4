use std::collections::BTreeMap;

use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener};

mod entries;
mod form;
mod hierarchy;
mod lookup;
mod reference;
mod server;

pub mod types {
    pub mod lookup {
        pub use api_types::lookup::{CategoriesQuery, NameView, SubcategoriesQuery};
    }

    pub mod reference {
        pub use api_types::reference::{StatusView, WriteTypeView};
    }

    pub mod category {
        pub use api_types::category::{CategoryView, SubcategoryView};
    }

    pub mod entry {
        pub use api_types::entry::{EntryFields, EntryView};
    }
}

pub enum ServerError {
    Engine(EngineError),
}

/// JSON body of every non-2xx response.
#[derive(Serialize)]
struct Error {
    error: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    fields: BTreeMap<&'static str, String>,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::Validation(_)
        | EngineError::InvalidName(_)
        | EngineError::InvalidAmount(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn body_for_engine_error(err: EngineError) -> Error {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            Error {
                error: "internal server error".to_string(),
                fields: BTreeMap::new(),
            }
        }
        EngineError::Validation(errors) => {
            let mut fields: BTreeMap<&'static str, String> = BTreeMap::new();
            for field_error in errors.iter() {
                fields
                    .entry(field_error.field.as_str())
                    .and_modify(|message| {
                        message.push_str("; ");
                        message.push_str(&field_error.message);
                    })
                    .or_insert_with(|| field_error.message.clone());
            }
            Error {
                error: "validation failed".to_string(),
                fields,
            }
        }
        other => Error {
            error: other.to_string(),
            fields: BTreeMap::new(),
        },
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), body_for_engine_error(err)),
        };

        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
