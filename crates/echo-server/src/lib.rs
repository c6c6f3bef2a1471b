pub mod handlers;
pub mod logging;
pub mod server;
pub mod state;

pub use server::{run_server, run_server_with_responder};
pub use state::AppState;
