//! HTTP client core for the Brandkit admin portal.
//!
//! Every resource store's network call funnels through [`ApiClient`]: the
//! request interceptor injects the bearer token, the transport issues the
//! call, and the response interceptor classifies the result into a uniform
//! [`ApiOutcome`], tearing the session down on 401. This is the only
//! cross-cutting policy in the system, so auth injection and session-expiry
//! handling stay centralized and uniform.

pub mod auth;
pub mod http;
pub mod interceptor;
pub mod request;
pub mod response;
pub mod transport;

pub use auth::{AuthApi, LoginRequest, PublicKeyResponse, TokenResponse};
pub use http::ApiClient;
pub use request::{FilePart, Method, MultipartPayload, RequestBody, RequestDescriptor};
pub use response::{ApiOutcome, ReceivedResponse, TRANSPORT_FAILURE_STATUS};
pub use transport::{HttpTransport, ReqwestTransport, TransportError};
