//! HTTP server module.
//!
//! Plain HTTP only: the service sits behind load-testing harnesses and
//! reverse proxies, so TLS termination is out of scope. The server includes
//! graceful shutdown on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
