use axum::{
    Router,
    routing::{delete, get},
};

use std::sync::Arc;

use crate::{entries, form, hierarchy, lookup, reference};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

impl ServerState {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/get-categories/", get(lookup::categories))
        .route("/get-subcategories/", get(lookup::subcategories))
        .route(
            "/statuses",
            get(reference::list_statuses).post(reference::create_status),
        )
        .route("/statuses/{status}", delete(reference::delete_status))
        .route(
            "/types",
            get(reference::list_types).post(reference::create_type),
        )
        .route("/types/{write_type}", delete(reference::delete_type))
        .route(
            "/categories",
            get(hierarchy::list_categories).post(hierarchy::create_category),
        )
        .route("/categories/{name}", delete(hierarchy::delete_category))
        .route(
            "/subcategories",
            get(hierarchy::list_subcategories).post(hierarchy::create_subcategory),
        )
        .route(
            "/subcategories/{name}",
            delete(hierarchy::delete_subcategory),
        )
        .route("/entries", get(entries::list).post(entries::create))
        .route(
            "/entries/{id}",
            get(entries::get)
                .put(entries::update)
                .delete(entries::delete),
        )
        .route("/admin/entries/new", get(form::entry_form))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(engine))).await
}
