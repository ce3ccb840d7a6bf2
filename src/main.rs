use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let port = parse_port_arg()?;
    let cfg = config::Config::load(port)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

/// Parse the optional positional port argument.
///
/// No argument means the default port applies. A value that does not parse
/// as a port is a startup fault, not something to fall back from.
fn parse_port_arg() -> Result<Option<u16>, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<u16>()
            .map(Some)
            .map_err(|e| format!("invalid port argument '{raw}': {e}").into()),
    }
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_listener(addr)?;
    let state = Arc::new(config::AppState::new(cfg)?);

    logger::log_server_start(state.config.server.port);

    server::run(listener, state).await
}
