//! HTTP API tests for the echo chat endpoint.
//!
//! The SSE body is finite (the sender closes after the `complete`
//! event), so the full streamed body can be read and decoded frame by
//! frame.

use actix_web::{test, web, App};
use echo_core::ChatEvent;
use echo_server::server::api_config;
use echo_server::state::AppState;
use serde_json::json;

fn decode_sse_frames(body: &[u8]) -> Vec<ChatEvent> {
    let body = std::str::from_utf8(body).expect("SSE body must be UTF-8");
    body.split("\n\n")
        .filter(|frame| !frame.is_empty())
        .map(|frame| {
            let payload = frame
                .strip_prefix("data: ")
                .unwrap_or_else(|| panic!("unexpected SSE frame: {frame:?}"));
            serde_json::from_str(payload).expect("SSE payload must be a ChatEvent")
        })
        .collect()
}

async fn post_chat(payload: serde_json::Value) -> Vec<ChatEvent> {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::default()))
            .configure(api_config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/chat")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("text/event-stream")
    );

    let body = test::read_body(resp).await;
    decode_sse_frames(&body)
}

#[actix_web::test]
async fn chat_streams_every_prefix_then_completes() {
    let events = post_chat(json!({ "message": "hi" })).await;

    let full = "Your message is: hi";
    assert_eq!(events.len(), full.chars().count() + 1);

    let mut previous_len = 0;
    for event in &events[..events.len() - 1] {
        let ChatEvent::Partial { content } = event else {
            panic!("expected partial event, got {event:?}");
        };
        assert_eq!(content.chars().count(), previous_len + 1);
        assert!(full.starts_with(content.as_str()));
        previous_len += 1;
    }

    let ChatEvent::Complete { content } = events.last().unwrap() else {
        panic!("stream must end with a complete event");
    };
    assert_eq!(content, full);
}

#[actix_web::test]
async fn empty_message_still_streams_the_literal_prefix() {
    let events = post_chat(json!({ "message": "" })).await;

    let full = "Your message is: ";
    assert_eq!(events.len(), full.chars().count() + 1);
    assert!(matches!(
        events.last().unwrap(),
        ChatEvent::Complete { content } if content == full
    ));
}

#[actix_web::test]
async fn history_is_accepted_and_ignored() {
    let with_history = post_chat(json!({
        "message": "hi",
        "history": [
            { "message": "earlier", "response": "Your message is: earlier" },
            { "message": "another", "response": "Your message is: another" }
        ]
    }))
    .await;
    let without_history = post_chat(json!({ "message": "hi" })).await;

    let contents = |events: &[ChatEvent]| -> Vec<String> {
        events
            .iter()
            .map(|event| match event {
                ChatEvent::Partial { content } | ChatEvent::Complete { content } => {
                    content.clone()
                }
                ChatEvent::Error { message } => panic!("unexpected error event: {message}"),
            })
            .collect()
    };

    assert_eq!(contents(&with_history), contents(&without_history));
}

#[actix_web::test]
async fn health_endpoint_reports_ok() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::default()))
            .configure(api_config),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
