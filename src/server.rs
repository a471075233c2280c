use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::INDEX_FILE;
use crate::pinyin::PhoneticSource;
use crate::romanize::{NameRequest, NameResult, romanize};

#[derive(Debug, Clone)]
pub struct AppState {
    pub source: Arc<dyn PhoneticSource>,
    /// Directory containing the landing page
    pub static_dir: PathBuf,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PingReply {
    pub ok: bool,
    pub msg: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PinyinReply {
    Converted {
        ok: bool,
        #[serde(flatten)]
        result: NameResult,
    },
    Rejected {
        ok: bool,
        error: String,
    },
}

/// Bind the listening socket, `host` may be a name such as "localhost"
pub async fn bind(host: &str, port: u16) -> io::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((host, port)).await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/ping", get(ping))
        .route("/api/pinyin", post(convert_name))
        .with_state(state)
}

pub async fn ping() -> Json<PingReply> {
    Json(PingReply {
        ok: true,
        msg: "pong".to_owned(),
    })
}

/// Read the request body as loosely as possible: anything that is not a JSON
/// object counts as an empty object, fields of the wrong type count as missing.
pub fn parse_request_body(body: &[u8]) -> NameRequest {
    let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    let field = |key: &str| value.get(key).and_then(Value::as_str);
    NameRequest::from_options(
        field("name").unwrap_or_default(),
        field("tone"),
        field("case"),
        field("sep"),
        field("mode"),
    )
}

pub fn handle_pinyin_body(
    body: &[u8],
    source: &dyn PhoneticSource,
) -> (StatusCode, PinyinReply) {
    match romanize(&parse_request_body(body), source) {
        Ok(result) => (StatusCode::OK, PinyinReply::Converted { ok: true, result }),
        Err(err) => {
            info!(error = %err, "rejected pinyin request");
            (
                StatusCode::BAD_REQUEST,
                PinyinReply::Rejected {
                    ok: false,
                    error: err.to_string(),
                },
            )
        }
    }
}

pub async fn convert_name(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<PinyinReply>) {
    debug!(len = body.len(), "pinyin request");
    let (status, reply) = handle_pinyin_body(&body, state.source.as_ref());
    (status, Json(reply))
}

pub async fn home(State(state): State<AppState>) -> Response {
    let path = state.static_dir.join(INDEX_FILE);
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "landing page not available");
            (StatusCode::NOT_FOUND, format!("{INDEX_FILE} not found")).into_response()
        }
    }
}
