use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{Bytes, to_bytes};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};

use name_pinyin::config;
use name_pinyin::pinyin::PinyinTable;
use name_pinyin::server::{self, AppState};

fn state(static_dir: PathBuf) -> AppState {
    AppState {
        source: Arc::new(PinyinTable),
        static_dir,
    }
}

fn crate_state() -> AppState {
    state(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(config::DEFAULT_STATIC_DIR))
}

async fn post_pinyin(body: &str) -> (StatusCode, Value) {
    let (status, reply) =
        server::convert_name(State(crate_state()), Bytes::from(body.to_owned())).await;
    let value = serde_json::to_value(&reply.0).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_ping() {
    let reply = server::ping().await;
    assert_eq!(serde_json::to_value(&reply.0).unwrap(), json!({"ok": true, "msg": "pong"}));
}

#[tokio::test]
async fn test_pinyin_default_options() {
    let (status, value) = post_pinyin(r#"{"name": "单文"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        value,
        json!({
            "ok": true,
            "input": "单文",
            "surname": "单",
            "given": "文",
            "tokens": ["shan", "wen"],
            "result": "Shan Wen",
        })
    );
}

#[tokio::test]
async fn test_pinyin_compound_surname_initials() {
    let (status, value) =
        post_pinyin(r#"{"name": "欧阳锋", "mode": "initials", "case": "upper"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["surname"], "欧阳");
    assert_eq!(value["given"], "锋");
    assert_eq!(value["result"], "OYF");
}

#[tokio::test]
async fn test_pinyin_numeric_tones() {
    let (status, value) = post_pinyin(r#"{"name": "李雷", "tone": "num", "sep": "-"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["tokens"], json!(["li3", "lei2"]));
    assert_eq!(value["result"], "Li3-Lei2");
}

#[tokio::test]
async fn test_pinyin_name_required() {
    for body in [
        r#"{"name": "  "}"#,
        r#"{"name": ""}"#,
        r#"{"name": null}"#,
        r#"{"tone": "num"}"#,
        "{}",
        "",
        "name=李雷",
    ] {
        let (status, value) = post_pinyin(body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(value, json!({"ok": false, "error": "name is required"}), "body: {body}");
    }
}

#[tokio::test]
async fn test_home_page() {
    let response = server::home(State(crate_state())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("/api/pinyin"));
}

#[tokio::test]
async fn test_home_page_missing() {
    let response = server::home(State(state(PathBuf::from("does/not/exist"))))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bind_host_name() {
    let listener = server::bind("localhost", 0).await.unwrap();
    assert!(listener.local_addr().unwrap().ip().is_loopback());
}

#[test]
fn test_router_builds() {
    let _router = server::router(crate_state());
}
