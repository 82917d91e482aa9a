//! gRPC echo service speaking the `aiswa.IOService` contract.
//!
//! The server answers every `Ping` with the request message prefixed by
//! `"pong:"`. Calls carry no state across one another and the handler has no
//! failure modes of its own; startup is the only place errors are fatal.
//!
//! The binary (`server`) binds `0.0.0.0` on the port given by the `PORT`
//! environment variable (default 50051). The library surface exists so tests
//! and sibling processes can embed the server or dial it: see [`IoServer`]
//! and [`client::ping`].

pub mod client;
pub mod config;
pub mod controllers;
pub mod error;
pub mod server;

/// Generated bindings for the `aiswa` protobuf package.
pub mod aiswa {
    tonic::include_proto!("aiswa");
}

pub use config::Config;
pub use error::Error;
pub use server::IoServer;
