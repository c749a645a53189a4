//! Entry form with cascading type → category → subcategory selects.
//!
//! The page only fetches choices and posts JSON; every check happens in the
//! engine and comes back as per-field errors.

use axum::response::Html;

static ENTRY_FORM: &str = include_str!("form.html");

pub async fn entry_form() -> Html<&'static str> {
    Html(ENTRY_FORM)
}
