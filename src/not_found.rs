//! Route handlers for requests to unknown routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{Error, html::error_view};

/// Responds with 404 and a JSON error body.
pub async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}

/// Responds with 404 and an HTML error page.
pub async fn get_404_not_found_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Not Found",
            "404",
            "Something's missing.",
            "Sorry, we can't find that page.",
        ),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode};
    use scraper::Html;

    use super::{get_404_not_found, get_404_not_found_page};

    #[tokio::test]
    async fn api_not_found_is_json() {
        let response = get_404_not_found().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn page_not_found_is_html() {
        let response = get_404_not_found_page().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let document = Html::parse_document(&String::from_utf8_lossy(&body));
        assert!(document.errors.is_empty(), "{:?}", document.errors);
    }
}
