use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use code_exec::CodeExecutionService;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tio_client::MystbinClient;
use tracing::{info, warn};

pub mod config;

pub const HELP_TEXT: &str = "\
/<NAME> <CODE> - Execute code in <NAME> language

Options, placed before the code:
--stats - keep the run statistics in the output
--wrapped - wrap the code in a main function

Lines starting with these words are not sent as code:
input <TEXT> - a line of standard input
compiler-flags <FLAGS> - flags passed to the compiler
command-line-options <OPTIONS> - options passed to the interpreter
arguments <ARGS> - arguments passed to the program
";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Server error: {0}")]
    ServerError(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServerError::Upstream(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            ServerError::ServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RunRequest {
    /// Language token as typed, e.g. `py` or `` `cpp` ``
    pub language: String,
    /// Everything after the language token
    pub code: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RunLinkRequest {
    pub language: String,
    /// hastebin or gist link holding the code
    pub link: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RunResponse {
    pub output: String,
}

#[derive(Clone)]
pub struct AppState {
    service: CodeExecutionService,
    links: Arc<MystbinClient>,
}

pub fn create_app(service: CodeExecutionService, links: Arc<MystbinClient>) -> Router {
    let state = AppState { service, links };

    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(health_check))
        .route("/help", get(help))
        .route("/languages", get(languages))
        .route("/run", post(run))
        .route("/run-link", post(run_link))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    info!("Starting code execution server on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::ServerError(e.to_string()))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::ServerError(e.to_string()))?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn help() -> &'static str {
    HELP_TEXT
}

async fn languages(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .service
            .catalog()
            .command_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// Diagnostics such as an unknown language are regular output; only a
/// request without a language is refused.
async fn run(
    State(state): State<AppState>,
    Json(payload): Json<RunRequest>,
) -> Result<Json<RunResponse>, ServerError> {
    if payload.language.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "language must not be empty".to_string(),
        ));
    }

    let output = state.service.run(&payload.language, &payload.code).await;
    Ok(Json(RunResponse { output }))
}

/// Runs the code stored behind a paste link.
async fn run_link(
    State(state): State<AppState>,
    Json(payload): Json<RunLinkRequest>,
) -> Result<Json<RunResponse>, ServerError> {
    if payload.language.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "language must not be empty".to_string(),
        ));
    }

    let code = state
        .links
        .fetch_raw(&payload.link)
        .await
        .map_err(|e| match e {
            tio_client::Error::UnauthorizedLink(message) => ServerError::InvalidRequest(message),
            other => {
                warn!("Failed to fetch {}: {}", payload.link, other);
                ServerError::Upstream(other.to_string())
            }
        })?;

    let output = state.service.run(&payload.language, &code).await;
    Ok(Json(RunResponse { output }))
}
