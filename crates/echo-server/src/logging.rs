use env_logger::Builder;
use log::LevelFilter;

/// Initialize logging for the server binary.
///
/// Defaults to `info`; `debug` mode lowers our own crates to `debug`
/// while keeping actix internals at `info`.
pub fn init_logging(debug: bool) {
    let mut builder = Builder::new();

    if debug {
        builder
            .filter_level(LevelFilter::Info)
            .filter_module("echo_server", LevelFilter::Debug)
            .filter_module("echo_core", LevelFilter::Debug);
    } else {
        builder.filter_level(LevelFilter::Info);
    }

    builder.init();
}
