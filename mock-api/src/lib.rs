use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct NewTodo {
    pub title: String,
}

#[derive(Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Todos in insertion order, so listings read back stably.
pub type Store = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    let store: Store = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(store)
}

pub async fn serve(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(store): State<Store>) -> Json<Vec<Todo>> {
    Json(store.read().await.clone())
}

async fn create_todo(State(store): State<Store>, Json(input): Json<NewTodo>) -> Json<Todo> {
    let todo = Todo {
        id: Uuid::new_v4(),
        title: input.title,
        completed: false,
    };
    store.write().await.push(todo.clone());
    Json(todo)
}

async fn update_todo(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = store.write().await;
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = patch.title {
        todo.title = title;
    }
    if let Some(completed) = patch.completed {
        todo.completed = completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut todos = store.write().await;
    let position = todos
        .iter()
        .position(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    todos.remove(position);
    Ok(Json(json!({ "message": "Todo deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_wire_field_names() {
        let todo = Todo {
            id: Uuid::nil(),
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn new_todo_requires_a_title() {
        let result: Result<NewTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn patch_accepts_an_empty_document() {
        let patch: TodoPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.title.is_none());
        assert!(patch.completed.is_none());
    }

    #[test]
    fn patch_accepts_partial_fields() {
        let patch: TodoPatch = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert!(patch.title.is_none());
        assert_eq!(patch.completed, Some(true));
    }
}
