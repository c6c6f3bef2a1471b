use clap::Parser;
use std::io;

mod handlers;
mod logging;
mod server;
mod state;

use logging::init_logging;
use server::run_server;

#[derive(Parser, Debug, Clone)]
#[command(name = "echo-server")]
#[command(about = "Echo Bot HTTP Server")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value = "7860")]
    port: u16,

    /// Log level (overrides debug flag)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging
    if cli.log_level.is_some() {
        // If RUST_LOG is set, use it
        env_logger::init();
    } else {
        init_logging(cli.debug);
    }

    log::info!("Starting Echo Bot server on {}:{}", cli.host, cli.port);
    if cli.debug {
        log::debug!("Debug mode enabled");
    }

    run_server(&cli.host, cli.port).await
}
