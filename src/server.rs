//! Listener ownership and the serve loop.
//!
//! The listening socket is bound once at startup and owned by [`IoServer`];
//! dropping the value on any exit path closes the socket. Binding and
//! serving are separate steps so callers (tests in particular) can bind an
//! ephemeral port and read the address back before the loop starts.

use std::{future::Future, net::SocketAddr};

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::info;

use crate::{
    aiswa::io_service_server::IoServiceServer, config::Config, controllers::ping::PingService,
    error::Error,
};

/// The bound, not-yet-serving `IOService` socket.
#[derive(Debug)]
pub struct IoServer {
    listener: TcpListener,
}

impl IoServer {
    /// Binds on all interfaces at the configured port.
    ///
    /// A port that is already taken (or otherwise unbindable) is a fatal
    /// startup error; the returned [`Error::Bind`] names the address.
    pub async fn bind(config: &Config) -> Result<Self, Error> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        Ok(Self { listener })
    }

    /// The address actually bound. With `port: 0` this is where the
    /// OS-assigned port shows up.
    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves `IOService` until the process is externally terminated.
    pub async fn serve(self) -> Result<(), Error> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Serves `IOService` until `signal` resolves, then returns, releasing
    /// the socket. The production binary never signals; this entry point is
    /// for embedders and tests.
    pub async fn serve_with_shutdown(
        self,
        signal: impl Future<Output = ()>,
    ) -> Result<(), Error> {
        let addr = self.local_addr()?;
        info!(port = addr.port(), "IOService running");

        Server::builder()
            .add_service(IoServiceServer::new(PingService::default()))
            .serve_with_incoming_shutdown(TcpListenerStream::new(self.listener), signal)
            .await?;

        Ok(())
    }
}
