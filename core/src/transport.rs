//! The seam between the I/O-free core and the host that owns the network.
//!
//! A transport only moves bytes: it returns any response the server sends,
//! 4xx and 5xx included, and reserves `Err` for exchanges that produced no
//! response at all. Status interpretation stays in `TodoClient::parse_*`.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
///
/// `Sync` is required because bulk delete shares the transport across its
/// worker threads.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}
