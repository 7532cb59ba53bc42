mod error;
mod middleware;

use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::{Json, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;

use crate::core::{Clock, LoanParams, LoanRequest, LoanResult, Program, compute};
use crate::store::Store;

pub use error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<Store>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

#[derive(Debug, Deserialize)]
struct ExecuteRequest {
    object_cost: i64,
    initial_payment: i64,
    months: NonZeroU32,
    #[serde(default)]
    program: Program,
}

impl From<ExecuteRequest> for LoanRequest {
    fn from(value: ExecuteRequest) -> Self {
        LoanRequest {
            params: LoanParams {
                object_cost: value.object_cost,
                initial_payment: value.initial_payment,
                months: value.months.get(),
            },
            program: value.program,
        }
    }
}

#[derive(Debug, Serialize)]
struct ExecuteResponse<'a> {
    result: &'a LoanResult,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/execute",
            post(execute_handler).fallback(|| async { ApiError::PostOnly }),
        )
        .route(
            "/cache",
            get(cache_handler).fallback(|| async { ApiError::GetOnly }),
        )
        .fallback(|| async { ApiError::NotFound })
        .layer(axum::middleware::from_fn(middleware::request_info))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

pub async fn run_http_server(port: u16, state: AppState) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "mortgage HTTP API listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutting down server");
}

async fn execute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExecuteRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "failed to decode execute request body");
        ApiError::InvalidBody
    })?;

    let request = LoanRequest::from(payload);
    let result = compute(&request, state.clock.today()).map_err(|err| {
        tracing::debug!(error = %err, "execute request rejected");
        ApiError::from(err)
    })?;

    let id = state.store.insert(result.clone());
    tracing::debug!(id, "stored calculation result");

    Ok(json_response(StatusCode::OK, ExecuteResponse { result: &result }))
}

async fn cache_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    if !state.store.has_data() {
        return Err(ApiError::EmptyCache);
    }
    Ok(json_response(StatusCode::OK, state.store.list_all()))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
