//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::game::ResetOutcome;
use crate::network::MTR_ALIASES;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/map", get(map_fragment))
        .route("/api/progress", get(progress))
        .route("/api/guess", post(guess))
        .route("/api/reset", post(reset))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The game page.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let game = state.game.lock().await;
    let template = IndexTemplate {
        map: MapView::build(&game, &state.geometry),
        progress: ProgressView::from_game(&game),
    };
    render(&template)
}

/// About page.
async fn about_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let game = state.game.lock().await;
    let template = AboutTemplate {
        station_count: game.tracker().total(),
        alias_count: MTR_ALIASES.len(),
    };
    render(&template)
}

/// The map fragment, re-fetched after each discovery and reset.
async fn map_fragment(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let game = state.game.lock().await;
    let template = MapTemplate {
        map: MapView::build(&game, &state.geometry),
    };
    render(&template)
}

/// Current progress.
async fn progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    let game = state.game.lock().await;
    Json(ProgressResponse::from_game(&game))
}

/// Handle the input field's text, sent on every keystroke and on enter.
async fn guess(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GuessResponse>, AppError> {
    let req: GuessRequest = parse_json(&body)?;

    let mut game = state.game.lock().await;
    let outcome = game.submit(&req.text);
    debug!(?outcome, "guess");

    Ok(Json(GuessResponse::from_outcome(outcome, &game)))
}

/// Clear progress, asking for confirmation first when there is a lot of it.
async fn reset(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProgressResponse>, AppError> {
    let req: ResetRequest = if body.is_empty() {
        ResetRequest::default()
    } else {
        parse_json(&body)?
    };

    let mut game = state.game.lock().await;
    match game.request_reset(req.confirmed) {
        ResetOutcome::Reset => Ok(Json(ProgressResponse::from_game(&game))),
        ResetOutcome::NeedsConfirmation => Err(AppError::ConfirmationRequired {
            found: game.tracker().found(),
        }),
    }
}

/// Parse a JSON body, logging it on failure.
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(body = %String::from_utf8_lossy(body), "JSON parse error: {e}");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    ConfirmationRequired { found: usize },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message, confirmation_required) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone(), false),
            AppError::ConfirmationRequired { found } => (
                StatusCode::CONFLICT,
                format!("reset would discard {found} stations; confirm first"),
                true,
            ),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone(), false)
            }
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            debug!(%status, "{message}");
        }

        let body = Json(ErrorResponse {
            error: message,
            confirmation_required,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::network::MapGeometry;

    fn state() -> AppState {
        AppState::new(Game::default(), MapGeometry::mtr())
    }

    fn body(json: &str) -> Bytes {
        Bytes::from(json.to_string())
    }

    async fn submit(state: &AppState, text: &str) -> GuessResponse {
        let json = serde_json::json!({ "text": text }).to_string();
        guess(State(state.clone()), body(&json)).await.unwrap().0
    }

    #[tokio::test]
    async fn guess_discovers_station() {
        let state = state();

        let resp = submit(&state, " Central ").await;

        assert_eq!(resp.outcome, GuessStatus::Discovered);
        assert!(resp.clear_input);
        assert_eq!(resp.station.as_ref().map(|s| s.name.as_str()), Some("Central"));
        assert_eq!(resp.progress.found, 1);
        assert_eq!(resp.progress.percentage, 1.0);
    }

    #[tokio::test]
    async fn repeat_and_unknown_guesses_leave_input() {
        let state = state();
        submit(&state, "central").await;

        let again = submit(&state, "CENTRAL").await;
        assert_eq!(again.outcome, GuessStatus::AlreadyFound);
        assert!(!again.clear_input);
        assert!(again.tone.is_none());

        let unknown = submit(&state, "xx").await;
        assert_eq!(unknown.outcome, GuessStatus::NotFound);
        assert!(!unknown.clear_input);
        assert_eq!(unknown.progress.found, 1);
    }

    #[tokio::test]
    async fn malformed_guess_is_bad_request() {
        let err = guess(State(state()), body("not json")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn reset_with_little_progress() {
        let state = state();
        submit(&state, "central").await;

        let resp = reset(State(state.clone()), Bytes::new()).await.unwrap().0;
        assert_eq!(resp.found, 0);
        assert_eq!(resp.percentage_text, "0.0%");
    }

    #[tokio::test]
    async fn reset_with_progress_needs_confirmation() {
        let state = state();
        for name in ["central", "admiralty", "wan chai", "tin hau", "jordan", "lok fu"] {
            submit(&state, name).await;
        }

        let err = reset(State(state.clone()), body(r#"{"confirmed": false}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ConfirmationRequired { found: 6 }));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
        assert_eq!(state.game.lock().await.tracker().found(), 6);

        let resp = reset(State(state.clone()), body(r#"{"confirmed": true}"#))
            .await
            .unwrap()
            .0;
        assert_eq!(resp.found, 0);
    }

    #[tokio::test]
    async fn map_fragment_reflects_discoveries() {
        let state = state();
        let before = map_fragment(State(state.clone())).await.unwrap().0;
        assert!(!before.contains("Jordan"));

        submit(&state, "jordan").await;

        let after = map_fragment(State(state.clone())).await.unwrap().0;
        assert!(after.contains("Jordan"));
    }

    #[tokio::test]
    async fn progress_endpoint() {
        let state = state();
        submit(&state, "tst").await;

        let resp = progress(State(state)).await.0;
        assert_eq!(resp.count_text, "1/98 stations found");
        assert!(!resp.complete);
        assert!(!resp.needs_reset_confirmation);
    }

    #[tokio::test]
    async fn pages_render() {
        let state = state();
        let index = index_page(State(state.clone())).await.unwrap().0;
        assert!(index.contains("id=\"input\""));

        let about = about_page(State(state)).await.unwrap().0;
        assert!(about.contains("98 stations"));
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state(), "static");
    }
}
