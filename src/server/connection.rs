// Connection handling module
// Drives one HTTP/1.1 connection per spawned task.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler;
use crate::http::cors;
use crate::logger;

/// Serve one accepted connection on its own task.
///
/// Every handler result passes through `cors::apply` here, the single point
/// where responses are finalized before hitting the socket.
pub fn spawn(stream: tokio::net::TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move {
                    handler::handle_request(req, peer_addr, state)
                        .await
                        .map(cors::apply)
                }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
