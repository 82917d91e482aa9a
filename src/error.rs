use std::{io, net::SocketAddr};

use thiserror::Error;

/// Errors surfaced by the crate. The `Ping` handler itself never fails;
/// everything here belongs to startup or to the transport.
#[derive(Debug, Error)]
pub enum Error {
    /// `PORT` was set to something that does not parse as a port number.
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
    /// The listening socket could not be bound, e.g. the port is taken.
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
    /// A call made through [`crate::client`] came back with a gRPC status.
    #[error("rpc failed: {0}")]
    Rpc(#[from] tonic::Status),
}
