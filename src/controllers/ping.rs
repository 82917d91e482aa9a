use super::{Request, Response, Status};

use crate::aiswa::{io_service_server::IoService, PingRequest, PingResponse};

/// Handler for `IOService`. Stateless; every call is answered from its own
/// request alone.
#[derive(Debug, Default)]
pub struct PingService {}

#[tonic::async_trait]
impl IoService for PingService {
    async fn ping(
        &self,
        request: Request<PingRequest>,
    ) -> Result<Response<PingResponse>, Status> {
        let reply = PingResponse {
            message: format!("pong:{}", request.into_inner().message),
        };

        Ok(Response::new(reply))
    }
}
