//! Cross-origin resource sharing for the REST API.

use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::Error;

/// Create a CORS layer that lets exactly `allowed_origin` call the REST API
/// from a browser, e.g. "http://localhost:4200".
///
/// # Errors
/// Returns [Error::InvalidOrigin] if `allowed_origin` is empty or is not a
/// valid header value.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, Error> {
    let allowed_origin = allowed_origin.trim();

    if allowed_origin.is_empty() {
        return Err(Error::InvalidOrigin(allowed_origin.to_owned()));
    }

    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|_| Error::InvalidOrigin(allowed_origin.to_owned()))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]))
}
