use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Datelike, Utc};
use serde::Serialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::debug;

use annum_catalog::aggregate;
use annum_core::types::ContentType;

use crate::extra::{self, ExtraArgs};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/manifest.json", get(manifest))
        .route("/catalog/{kind}/{id}", get(catalog))
        .route("/catalog/{kind}/{id}/{*extra}", get(catalog_with_extra))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 200 with the fixed header set every addon response carries. The 404
/// fallback stays bare.
fn json_ok<T: Serialize>(body: &T) -> Response {
    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "*"),
        ],
        Json(body),
    )
        .into_response()
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

async fn manifest(State(state): State<AppState>) -> Response {
    json_ok(state.manifest.as_ref())
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CatalogBody {
    metas: Vec<Value>,
}

async fn catalog(State(state): State<AppState>, Path((kind, id)): Path<(String, String)>) -> Response {
    serve_catalog(&state, &kind, &id, ExtraArgs::default()).await
}

async fn catalog_with_extra(
    State(state): State<AppState>,
    Path((kind, id, extra)): Path<(String, String, String)>,
) -> Response {
    serve_catalog(&state, &kind, &id, extra::parse_extra(&extra)).await
}

async fn serve_catalog(state: &AppState, kind: &str, id: &str, args: ExtraArgs) -> Response {
    let Some(content_type) = ContentType::parse(kind) else {
        return not_found().await;
    };

    let year = args
        .year
        .unwrap_or_else(|| Utc::now().year().to_string());
    if let Some(skip) = args.skip {
        // skip appears in client paths, but pagination always starts at zero
        debug!(skip, "ignoring caller-supplied skip");
    }

    let result = aggregate::best_by_year(state.source.as_ref(), content_type, &year).await;
    debug!(
        %content_type,
        id,
        year = %year,
        metas = result.metas.len(),
        pages = result.pages_fetched,
        "serving catalog"
    );

    json_ok(&CatalogBody {
        metas: result.metas,
    })
}
