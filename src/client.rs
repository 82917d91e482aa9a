//! Caller-side helper for `IOService`, the counterpart of the server in
//! this crate. The channel is plaintext, same as the server's binding.

use crate::{
    aiswa::{io_service_client::IoServiceClient, PingRequest},
    error::Error,
};

/// Sends one `Ping` to `host:port` and returns the echoed message
/// (`"pong:"` followed by `message`).
pub async fn ping(message: impl Into<String>, host: &str, port: u16) -> Result<String, Error> {
    let mut client = IoServiceClient::connect(format!("http://{}:{}", host, port)).await?;
    let response = client
        .ping(PingRequest {
            message: message.into(),
        })
        .await?;
    Ok(response.into_inner().message)
}
