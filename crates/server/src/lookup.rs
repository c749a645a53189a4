//! Cascading lookups feeding the dependent selects of the entry form.
//!
//! Both endpoints answer with a bare JSON array; a missing, empty or unknown
//! key is an empty array, never an error. The query string is read as raw
//! pairs so a repeated key resolves to its last value instead of a 400.

use api_types::lookup::{CategoriesQuery, NameView, SubcategoriesQuery};
use axum::{
    Json,
    extract::{Query, State},
};

use crate::{ServerError, server::ServerState};

pub async fn categories(
    State(state): State<ServerState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<NameView>>, ServerError> {
    let query = CategoriesQuery::from_pairs(&pairs);
    let rows = state
        .engine
        .list_categories(query.write_type_id.as_deref())
        .await?
        .into_iter()
        .map(|category| NameView {
            name: category.name,
        })
        .collect();

    Ok(Json(rows))
}

pub async fn subcategories(
    State(state): State<ServerState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<NameView>>, ServerError> {
    let query = SubcategoriesQuery::from_pairs(&pairs);
    let rows = state
        .engine
        .list_subcategories(query.category_id.as_deref())
        .await?
        .into_iter()
        .map(|subcategory| NameView {
            name: subcategory.name,
        })
        .collect();

    Ok(Json(rows))
}
