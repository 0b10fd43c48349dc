//! Wire types for the todo API.
//!
//! Defined against the server's JSON contract rather than shared with the
//! mock crate, so integration tests catch schema drift between the two.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A todo item as the server returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

/// Creation payload. The body carries only the title; the server assigns
/// the id and starts every todo uncompleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
}

/// Partial update payload. `None` fields are omitted from the JSON and the
/// server leaves them unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Patch that only flips the completion flag.
    pub fn completed(value: bool) -> Self {
        Self {
            title: None,
            completed: Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_serializes_to_a_bare_title_document() {
        let input = NewTodo {
            title: "Test todo item".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Test todo item" }));
    }

    #[test]
    fn completion_patch_omits_the_title_field() {
        let patch = TodoPatch::completed(true);
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"completed":true}"#);
    }

    #[test]
    fn empty_patch_serializes_to_an_empty_document() {
        let json = serde_json::to_string(&TodoPatch::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: Uuid::nil(),
            title: "Roundtrip".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }
}
