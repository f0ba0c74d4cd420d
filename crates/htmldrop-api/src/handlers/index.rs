//! Serves the embedded upload page.

use axum::response::Html;

static INDEX_HTML: &str = include_str!("../../static/index.html");

/// `GET /` - the drag-and-drop upload page.
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
