use crate::handlers::upload_handler;
use crate::models::upload::UploadEnvelope;
use crate::route::AppState;
use axum::{
    Json, Router,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

pub const UPLOAD_PATH_PREFIX: &str = "/upload_file";
pub const INVALID_ROUTE_MESSAGE: &str = "Invalid route. Use POST /upload_file to upload files.";

/// Every path is dispatched here so `/upload_file` matches as a prefix.
pub fn router() -> Router<AppState> {
    Router::new().fallback(dispatch)
}

async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    if is_upload_request(request.method(), request.uri().path()) {
        return upload_handler::upload_file(State(state), request).await;
    }

    tracing::debug!("no route for {} {}", request.method(), request.uri().path());
    invalid_route()
}

pub fn is_upload_request(method: &Method, path: &str) -> bool {
    method == Method::POST && path.starts_with(UPLOAD_PATH_PREFIX)
}

fn invalid_route() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(UploadEnvelope::failure(INVALID_ROUTE_MESSAGE)),
    )
        .into_response()
}
