//! HTTP exchange described as plain data.
//!
//! The client never touches the network itself: [`crate::TodoApi`] builds
//! `HttpRequest` values and interprets `HttpResponse` values, while a
//! [`crate::Transport`] executes the round-trip in between. Keeping the
//! exchange as data is what lets the smoke run execute against scripted
//! responses instead of sockets.

/// HTTP method of a built request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A request built by `TodoApi::build_*`, not yet executed.
///
/// Bodies are always JSON documents; transports send them with an
/// `application/json` content type.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Full URL including the base path, e.g. `http://localhost:8001/api/todos`.
    pub url: String,
    pub body: Option<String>,
}

/// The observable result of executing an [`HttpRequest`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
