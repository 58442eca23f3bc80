//! API route definitions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use super::state::AppState;
use crate::catalog::{categories, upload, CatalogError};
use crate::filter::{matching, FilterQuery};
use crate::harness::{run_test, ParamMap};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/endpoints", get(list_endpoints))
        .route("/endpoints/import", post(import_endpoints))
        .route("/endpoints/{id}", get(show_endpoint))
        .route("/categories", get(list_categories))
        .route("/invoke", post(invoke))
        .route("/history", get(list_history))
}

async fn health() -> Json<Value> {
    Json(json!({
        "data": {
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION")
        },
        "meta": {
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    search: Option<String>,
    category: Option<String>,
}

async fn list_endpoints(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Value> {
    let all = state.catalog.get_all();
    let hits = matching(
        &all,
        &FilterQuery {
            search: query.search,
            category: query.category,
        },
    );
    let total = hits.len();
    Json(json!({ "data": hits, "meta": { "total": total, "catalog_size": all.len() } }))
}

async fn show_endpoint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.catalog.get_by_id(&id) {
        Ok(endpoint) => Ok(Json(json!({ "data": endpoint }))),
        Err(e @ CatalogError::NotFound { .. }) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "data": null, "meta": { "error": e.to_string() } })),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "data": null, "meta": { "error": e.to_string() } })),
        )),
    }
}

async fn list_categories(State(state): State<AppState>) -> Json<Value> {
    let all = state.catalog.get_all();
    let data: Vec<Value> = categories::defaults()
        .into_iter()
        .map(|def| {
            let count = categories::count_for_category(&def.id, &all);
            json!({
                "id": def.id,
                "name": def.name,
                "icon": def.icon,
                "description": def.description,
                "subcategories": def.subcategories,
                "endpoint_count": count
            })
        })
        .collect();
    let total = data.len();
    Json(json!({ "data": data, "meta": { "total": total } }))
}

/// Accepts the same array-of-descriptors payload as a file upload. A
/// non-array body rejects the whole request; invalid elements inside an
/// array are dropped while the rest are appended.
async fn import_endpoints(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let candidates = upload::parse(&body).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "data": null, "meta": { "error": e.to_string() } })),
        )
    })?;
    let outcome = state.catalog.merge(candidates);
    Ok(Json(json!({
        "data": outcome,
        "meta": { "catalog_size": state.catalog.len() }
    })))
}

#[derive(Debug, Deserialize)]
struct InvokeRequest {
    endpoint_id: String,
    #[serde(default)]
    parameters: ParamMap,
}

/// Run one test invocation. The response is always an `InvocationResult`;
/// failures (missing parameters, transport errors) arrive with
/// `success = false` rather than an error status.
async fn invoke(
    State(state): State<AppState>,
    Json(request): Json<InvokeRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let endpoint = state.catalog.get_by_id(&request.endpoint_id).map_err(|e| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "data": null, "meta": { "error": e.to_string() } })),
        )
    })?;

    let result = run_test(
        state.invoker.as_ref(),
        &endpoint,
        request.parameters,
        &state.history,
    )
    .await;
    Ok(Json(json!({ "data": result })))
}

async fn list_history(State(state): State<AppState>) -> Json<Value> {
    let entries = state.history.list();
    let total = entries.len();
    Json(json!({ "data": entries, "meta": { "total": total } }))
}
