//! Server-side handlers for the operations of `aiswa.IOService`.

pub mod ping;

use tonic::{Request, Response, Status};
