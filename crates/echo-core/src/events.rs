use serde::{Deserialize, Serialize};

/// Events streamed to a chat client while a response is produced.
///
/// `Complete` and `Error` terminate a stream; consumers may stop reading
/// after either.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// A growing prefix of the response text.
    Partial { content: String },

    /// The full response text, emitted once after the last prefix.
    Complete { content: String },

    Error { message: String },
}
