use echo_core::{ChatEvent, ChatResponder, EchoResponder};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Shared server state: the injected responder and nothing else.
///
/// Each request invokes the responder independently; there is no session
/// store and no mutable state shared between invocations.
pub struct AppState {
    pub responder: Arc<dyn ChatResponder>,
}

impl AppState {
    pub fn new(responder: Arc<dyn ChatResponder>) -> Self {
        Self { responder }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(EchoResponder))
    }
}

/// Start SSE stream sender
pub fn spawn_sse_sender(
    mut rx: mpsc::Receiver<ChatEvent>,
    tx: mpsc::Sender<actix_web::web::Bytes>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let event_json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(_) => continue,
            };

            let sse_data = format!("data: {}\n\n", event_json);
            let bytes = actix_web::web::Bytes::from(sse_data);

            if tx.send(bytes).await.is_err() {
                break;
            }

            // If Complete or Error event, end stream
            match &event {
                ChatEvent::Complete { .. } | ChatEvent::Error { .. } => {
                    break;
                }
                _ => {}
            }
        }
    })
}
