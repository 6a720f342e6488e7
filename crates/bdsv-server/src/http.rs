//! HTTP surface: the single lookup endpoint and its response shapes.
//!
//! Every failure mode is the same 404 "not found" body, so responses
//! leak nothing about why a lookup failed or what the catalog holds.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::sync::Arc;

use bdsv_core::catalog::Catalog;
use bdsv_core::resolver;

const NOT_FOUND_BODY: &str = "not found";

/// Builds the router over a shared immutable catalog. Handlers take no
/// locks; the catalog never changes after startup.
pub fn router(catalog: Catalog) -> Router {
    Router::new()
        .route("/{os}/{version}", get(lookup))
        .fallback(not_found)
        .with_state(Arc::new(catalog))
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}

/// `?redirect` or `?r` with any value, or no value at all, selects the
/// redirect shape. Presence is what counts, not truthiness.
fn redirect_requested(query: &HashMap<String, String>) -> bool {
    query.contains_key("redirect") || query.contains_key("r")
}

async fn lookup(
    State(catalog): State<Arc<Catalog>>,
    Path((os, version)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let url = match resolver::resolve(&catalog, &os, &version) {
        Ok(url) => url,
        Err(err) => {
            tracing::debug!(%os, %version, "lookup failed: {err}");
            return not_found().await;
        }
    };
    tracing::debug!(%os, %version, url, "resolved");

    if redirect_requested(&query) {
        (StatusCode::FOUND, [(header::LOCATION, url.to_string())]).into_response()
    } else {
        (StatusCode::OK, url.to_string()).into_response()
    }
}
