pub mod echo;
pub mod error;
pub mod events;
pub mod message;
pub mod responder;

pub use echo::{prefix_sequence, render_response, Prefixes, RESPONSE_PREFIX};
pub use error::ChatError;
pub use events::ChatEvent;
pub use message::{Exchange, Message, Role};
pub use responder::{ChatResponder, EchoResponder, ResponseStream};
