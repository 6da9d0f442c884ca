//! HTTP middleware components

pub mod request_id;
pub mod security_headers;

pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
pub use security_headers::{DEFAULT_CSP, SecurityHeadersLayer};
