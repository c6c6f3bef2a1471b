use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use echo_core::{ChatEvent, Exchange};
use futures::StreamExt;
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::state::{spawn_sse_sender, AppState};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<Exchange>,
}

/// Streaming chat endpoint.
///
/// Invokes the injected responder once and relays its growing prefixes
/// as SSE `partial` events, closing with a `complete` event carrying the
/// full response text. Each request is independent; a client disconnect
/// just drops the channel.
pub async fn handler(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    let ChatRequest { message, history } = req.into_inner();
    log::info!(
        "Chat message received ({} chars, {} history entries)",
        message.chars().count(),
        history.len()
    );

    // Create SSE stream
    let (sse_tx, mut sse_rx) = mpsc::channel::<actix_web::web::Bytes>(100);

    // Create chat event channel
    let (event_tx, event_rx) = mpsc::channel::<ChatEvent>(100);

    // Start SSE sender
    let _sse_handle = spawn_sse_sender(event_rx, sse_tx);

    // Produce the response in the background
    let responder = state.responder.clone();
    tokio::spawn(async move {
        let mut stream = match responder.respond(&message, &history).await {
            Ok(stream) => stream,
            Err(e) => {
                log::error!("Responder error: {}", e);
                let _ = event_tx
                    .send(ChatEvent::Error {
                        message: e.to_string(),
                    })
                    .await;
                return;
            }
        };

        let mut final_text = String::new();
        while let Some(item) = stream.next().await {
            match item {
                Ok(prefix) => {
                    final_text = prefix.clone();
                    if event_tx
                        .send(ChatEvent::Partial { content: prefix })
                        .await
                        .is_err()
                    {
                        // Client went away; nothing to clean up.
                        return;
                    }
                }
                Err(e) => {
                    log::error!("Response stream error: {}", e);
                    let _ = event_tx
                        .send(ChatEvent::Error {
                            message: e.to_string(),
                        })
                        .await;
                    return;
                }
            }
        }

        log::debug!("Response complete ({} chars)", final_text.chars().count());
        let _ = event_tx
            .send(ChatEvent::Complete {
                content: final_text,
            })
            .await;
    });

    // Return SSE response
    HttpResponse::Ok()
        .append_header((header::CONTENT_TYPE, "text/event-stream"))
        .append_header((header::CACHE_CONTROL, "no-cache"))
        .append_header((header::CONNECTION, "keep-alive"))
        .streaming(async_stream::stream! {
            while let Some(item) = sse_rx.recv().await {
                yield Ok::<_, actix_web::Error>(item);
            }
        })
}
