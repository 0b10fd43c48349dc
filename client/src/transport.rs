//! Executing built requests over the network.
//!
//! `Transport` is the seam between the pure build/parse layer and real I/O:
//! the binaries plug in [`UreqTransport`], tests plug in scripted
//! responses. Connection-phase failures get their own variant because a
//! run reports "server not reachable" differently from any other breakage.

use std::fmt;
use std::io;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes an [`HttpRequest`] and produces the raw [`HttpResponse`].
pub trait Transport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Failures below the HTTP layer, before any status code was obtained.
#[derive(Debug)]
pub enum TransportError {
    /// The server could not be reached at all: connection refused, host
    /// not resolvable, or the connection never got established.
    Unreachable(String),

    /// Any other transport-level failure (interrupted body read, bad URL).
    Failed(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Unreachable(msg) => write!(f, "server unreachable: {msg}"),
            TransportError::Failed(msg) => write!(f, "transport failed: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Blocking transport over a ureq agent.
///
/// The agent hands 4xx/5xx responses back as data instead of errors;
/// interpreting status codes belongs to `TodoApi::parse_*`. Request bodies
/// are sent as `application/json`, the only content type this API speaks.
/// No timeouts are configured beyond ureq's defaults.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&request.url).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&request.url).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.url).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&request.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&request.url).send_empty(),
        };

        let mut response = result.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::Failed(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Split connection-phase failures from everything else.
fn classify(err: ureq::Error) -> TransportError {
    let unreachable = matches!(
        &err,
        ureq::Error::ConnectionFailed | ureq::Error::HostNotFound
    ) || matches!(&err, ureq::Error::Io(io) if is_connect_kind(io.kind()));

    if unreachable {
        TransportError::Unreachable(err.to_string())
    } else {
        TransportError::Failed(err.to_string())
    }
}

fn is_connect_kind(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
    )
}
