//! Request builder and response parser for the todo API.
//!
//! `TodoApi` is stateless; it holds only the base URL. Every operation is a
//! `build_*` / `parse_*` pair with the round-trip left to a
//! [`crate::Transport`], so status and body handling stay deterministic and
//! testable without a server.
//!
//! The contract is uniform: every successful operation answers 200.
//! Creation returns the stored todo (id assigned, `completed` false),
//! update returns the record after the patch, and deletion returns a small
//! confirmation document whose schema the server owns.

use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo, TodoPatch};

/// Stateless builder/parser for one todo API base URL.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    /// `base_url` should include the API prefix, e.g.
    /// `http://localhost:8001/api`. A trailing slash is tolerated.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/todos", self.base_url),
            body: Some(body),
        })
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/todos", self.base_url),
            body: None,
        }
    }

    pub fn build_update_todo(&self, id: Uuid, patch: &TodoPatch) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(patch).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/todos/{id}", self.base_url),
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/todos/{id}", self.base_url),
            body: None,
        }
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        expect_ok(&response)?;
        decode(&response.body)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        expect_ok(&response)?;
        decode(&response.body)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        expect_ok(&response)?;
        decode(&response.body)
    }

    /// The confirmation body's schema belongs to the server; it is handed
    /// back as raw JSON for display.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        expect_ok(&response)?;
        decode(&response.body)
    }
}

/// 200 across the board; anything else is a step failure carrying the raw
/// status and body.
fn expect_ok(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        Ok(())
    } else {
        Err(ApiError::UnexpectedStatus {
            status: response.status,
            body: response.body.clone(),
        })
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
