use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, Method, StatusCode},
    routing::get,
    Json, Router,
};
use server_api::{create_user, delete_user, get_user, list_users, update_user, ApiContext};
use shared::{
    domain::{UserId, UserRecord},
    error::{ApiError, ErrorCode},
    protocol::{users_route, UserPayload, USER_DELETED, USER_UPDATED},
};
use storage::Storage;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::{load_settings, prepare_database_url};

const MAX_BODY_BYTES: usize = 64 * 1024;

type HttpError = (StatusCode, Json<ApiError>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    let database_url = prepare_database_url(&settings.database_url)?;
    let storage = Storage::new(&database_url).await.map_err(|error| {
        error!(
            %database_url,
            %error,
            "failed to open SQLite database; verify parent directory exists and permissions are correct"
        );
        error
    })?;
    let api = ApiContext {
        storage,
        backend_name: settings.backend_name.clone(),
    };

    let app = build_router(Arc::new(AppState { api }));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, backend = %settings.backend_name, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let backend = state.api.backend_name.clone();
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/healthz", get(healthz))
        .route(
            &users_route(&backend),
            get(http_list_users).post(http_create_user),
        )
        .route(
            &format!("{}/:user_id", users_route(&backend)),
            get(http_get_user)
                .put(http_update_user)
                .delete(http_delete_user),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors)
        .with_state(state)
}

fn http_error(err: ApiError) -> HttpError {
    let status = match err.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!(message = %err.message, "request failed");
    }
    (status, Json(err))
}

fn user_id_from_path(path: Result<Path<i64>, PathRejection>) -> Result<UserId, HttpError> {
    path.map(|Path(id)| UserId(id)).map_err(|rejection| {
        http_error(ApiError::new(
            ErrorCode::Validation,
            format!("invalid user id: {}", rejection.body_text()),
        ))
    })
}

fn payload_from_body(
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<UserPayload, HttpError> {
    body.map(|Json(payload)| payload).map_err(|rejection| {
        http_error(ApiError::new(
            ErrorCode::Validation,
            format!("invalid user body: {}", rejection.body_text()),
        ))
    })
}

async fn healthz(State(state): State<Arc<AppState>>) -> Result<&'static str, StatusCode> {
    state.api.storage.health_check().await.map_err(|error| {
        error!(%error, "health check failed");
        StatusCode::SERVICE_UNAVAILABLE
    })?;
    Ok("ok")
}

async fn http_list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserRecord>>, HttpError> {
    list_users(&state.api).await.map(Json).map_err(http_error)
}

async fn http_get_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserRecord>, HttpError> {
    let user_id = user_id_from_path(path)?;
    get_user(&state.api, user_id)
        .await
        .map(Json)
        .map_err(http_error)
}

async fn http_create_user(
    State(state): State<Arc<AppState>>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<UserRecord>, HttpError> {
    let payload = payload_from_body(body)?;
    create_user(&state.api, &payload)
        .await
        .map(Json)
        .map_err(http_error)
}

async fn http_update_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> Result<&'static str, HttpError> {
    let user_id = user_id_from_path(path)?;
    let payload = payload_from_body(body)?;
    update_user(&state.api, user_id, &payload)
        .await
        .map_err(http_error)?;
    Ok(USER_UPDATED)
}

async fn http_delete_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<&'static str, HttpError> {
    let user_id = user_id_from_path(path)?;
    delete_user(&state.api, user_id)
        .await
        .map_err(http_error)?;
    Ok(USER_DELETED)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
