use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use sea_orm::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

use engine::Engine;
use migration::MigratorTrait;
use server::{ServerState, router};

async fn app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db).build().await.unwrap();

    engine.create_status("Done").await.unwrap();
    engine.create_type("Income").await.unwrap();
    engine.create_type("Expense").await.unwrap();
    engine.create_category("Salary", "Income").await.unwrap();
    engine.create_subcategory("Bonus", "Salary").await.unwrap();

    router(ServerState::new(engine))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn get_categories_returns_names_for_type() {
    let app = app().await;

    let (status, body) = send(&app, get("/get-categories/?write_type_id=Income")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "name": "Salary" }]));

    let (status, body) = send(&app, get("/get-categories/?write_type_id=Expense")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn lookups_without_key_return_empty_array() {
    let app = app().await;

    for uri in [
        "/get-categories/",
        "/get-categories/?write_type_id=",
        "/get-categories/?write_type_id=Nope",
        "/get-subcategories/",
        "/get-subcategories/?category_id=",
        "/get-subcategories/?category_id=Nope",
    ] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn get_subcategories_returns_names_for_category() {
    let app = app().await;

    let (status, body) = send(&app, get("/get-subcategories/?category_id=Salary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "name": "Bonus" }]));
}

#[tokio::test]
async fn repeated_lookup_keys_use_the_last_value() {
    let app = app().await;

    let (status, body) = send(
        &app,
        get("/get-categories/?write_type_id=Income&write_type_id=Income"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "name": "Salary" }]));

    let (status, body) = send(
        &app,
        get("/get-categories/?write_type_id=Income&write_type_id=Expense"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(
        &app,
        get("/get-subcategories/?category_id=Nope&category_id=Salary&other=1"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "name": "Bonus" }]));
}

#[tokio::test]
async fn create_entry_round_trip() {
    let app = app().await;

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/entries",
            json!({
                "date": "2026-03-01",
                "status": "Done",
                "write_type": "Income",
                "category": "Salary",
                "subcategory": "Bonus",
                "amount": "100.000",
                "comment": "bonus"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["amount"], json!("100.000"));
    assert_eq!(created["date"], json!("2026-03-01"));

    let id = created["id"].as_str().unwrap().to_string();
    let (status, fetched) = send(&app, get(&format!("/entries/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = send(&app, get("/entries")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn inconsistent_entry_is_rejected_with_field_errors() {
    let app = app().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/entries",
            json!({
                "status": "Done",
                "write_type": "Expense",
                "category": "Salary",
                "subcategory": "Bonus"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["fields"]["category"].is_string());
    assert!(body["fields"].get("subcategory").is_none());

    let (_, listed) = send(&app, get("/entries")).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn out_of_precision_amount_is_a_field_error() {
    let app = app().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/entries",
            json!({
                "status": "Done",
                "write_type": "Income",
                "category": "Salary",
                "subcategory": "Bonus",
                "amount": "1000"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["fields"]["amount"].is_string());
}

#[tokio::test]
async fn amount_beyond_decimal_range_is_a_field_error() {
    let app = app().await;

    for amount in [json!(1e40), json!("1234567890123456789012345678901234")] {
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/entries",
                json!({
                    "status": "Done",
                    "write_type": "Income",
                    "category": "Salary",
                    "subcategory": "Bonus",
                    "amount": amount
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{amount}");
        assert!(body["fields"]["amount"].is_string(), "{amount}");
    }

    let (_, listed) = send(&app, get("/entries")).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn deleting_type_cascades_through_lookups() {
    let app = app().await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/types/Income")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, get("/get-categories/?write_type_id=Income")).await;
    assert_eq!(body, json!([]));
    let (_, body) = send(&app, get("/get-subcategories/?category_id=Salary")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn hierarchy_management_endpoints() {
    let app = app().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/categories",
            json!({ "name": "Housing", "parent_type": "Expense" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "name": "Housing", "parent_type": "Expense" }));

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/categories",
            json!({ "name": "Housing", "parent_type": "Expense" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/subcategories",
            json!({ "name": "Rent", "parent_category": "Nope" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/categories")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "name": "Housing", "parent_type": "Expense" },
            { "name": "Salary", "parent_type": "Income" }
        ])
    );
}

#[tokio::test]
async fn entry_form_is_served() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(get("/admin/entries/new"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/get-categories/?write_type_id="));
}
