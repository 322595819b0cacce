//! HTTP front end: `POST /solve` answers a maze description with its solution.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use mazer_core::{Cell, Markers};
use mazer_paths::Heuristic;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::solve::{Solved, solve_text};

/// Body of `POST /solve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub maze_content: String,
}

/// A solved maze, as sent to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolvedBody {
    pub success: bool,
    pub explored: usize,
    pub solution: Vec<Cell>,
    pub walls: Vec<Vec<bool>>,
    pub start: Cell,
    pub goal: Cell,
    pub height: usize,
    pub width: usize,
}

/// A failed request; `error` is the human-readable cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedBody {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SolveResponse {
    Solved(SolvedBody),
    Failed(FailedBody),
}

impl SolveResponse {
    pub fn failed(error: impl ToString) -> Self {
        Self::Failed(FailedBody {
            success: false,
            error: error.to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

impl From<Solved> for SolveResponse {
    fn from(s: Solved) -> Self {
        Self::Solved(SolvedBody {
            success: true,
            explored: s.result.explored,
            solution: s.result.cells,
            walls: s.maze.walls(),
            start: s.maze.start(),
            goal: s.maze.goal(),
            height: s.maze.height(),
            width: s.maze.width(),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub heuristic: Heuristic,
    pub markers: Markers,
}

impl From<&ServerConfig> for AppState {
    fn from(config: &ServerConfig) -> Self {
        Self {
            heuristic: config.heuristic,
            markers: config.markers,
        }
    }
}

/// Build the router with CORS and request tracing enabled.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/solve", post(solve))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let app = router(AppState::from(&config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("mazer listening on http://{}", listener.local_addr()?);
    tracing::info!("heuristic: {}", config.heuristic);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("mazer stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn health() -> &'static str {
    "OK"
}

pub(crate) async fn solve(
    State(state): State<AppState>,
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> (StatusCode, Json<SolveResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("rejected solve request: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(SolveResponse::failed(rejection.body_text())),
            );
        }
    };

    // Each request parses its own maze and owns its own search.
    let AppState { heuristic, markers } = state;
    let outcome = tokio::task::spawn_blocking(move || {
        solve_text(&request.maze_content, &markers, heuristic)
    })
    .await;

    match outcome {
        Ok(Ok(solved)) => {
            tracing::debug!(
                "solved {}x{} maze: {} steps, {} explored",
                solved.maze.height(),
                solved.maze.width(),
                solved.result.len(),
                solved.result.explored
            );
            (StatusCode::OK, Json(solved.into()))
        }
        Ok(Err(e)) => {
            tracing::debug!("solve failed: {}", e);
            (StatusCode::OK, Json(SolveResponse::failed(e)))
        }
        Err(e) => {
            tracing::error!("solver task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SolveResponse::failed("internal error")),
            )
        }
    }
}
