use crate::echo::prefix_sequence;
use crate::error::ChatError;
use crate::message::Exchange;
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

pub type Result<T> = std::result::Result<T, ChatError>;

pub type ResponseStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Produces a streamed response to a chat message.
///
/// The host holds a responder behind `Arc<dyn ChatResponder>` and invokes
/// it once per incoming message. Implementations must not share mutable
/// state between invocations.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    /// Stream a response to `message`.
    ///
    /// `history` carries prior exchanges for responders that want
    /// conversational context; it may be empty.
    async fn respond(&self, message: &str, history: &[Exchange]) -> Result<ResponseStream>;
}

/// Echoes the message back one character at a time.
///
/// Stateless and history-blind: the same message always produces the
/// same sequence of growing prefixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoResponder;

#[async_trait]
impl ChatResponder for EchoResponder {
    async fn respond(&self, message: &str, _history: &[Exchange]) -> Result<ResponseStream> {
        let prefixes = prefix_sequence(message).map(Ok);
        Ok(Box::pin(tokio_stream::iter(prefixes)))
    }
}
