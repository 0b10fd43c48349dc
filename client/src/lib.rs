//! Synchronous client for the todo HTTP API.
//!
//! # Overview
//! [`TodoApi`] builds requests and parses responses as plain data; a
//! [`Transport`] executes the round-trip. The split keeps every status and
//! body decision deterministic and testable without a server, while
//! [`UreqTransport`] does real blocking HTTP for the binaries.
//!
//! # Contract
//! Four operations against `<base_url>/todos`, every success a 200: create
//! (POST, body `{"title": ...}`), list (GET), partial update (PUT), delete
//! (DELETE, answered with a JSON confirmation document). Any other status
//! surfaces as [`ApiError::UnexpectedStatus`] with the raw body attached.

pub mod api;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::TodoApi;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, TransportError, UreqTransport};
pub use types::{NewTodo, Todo, TodoPatch};
