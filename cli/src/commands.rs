//! Subcommand execution and plain-text rendering.

use todo_client::{NewTodo, Todo, TodoApi, TodoPatch, Transport};
use uuid::Uuid;

use crate::error::CliError;
use crate::Command;

/// Executes one subcommand and returns the text to print.
pub(crate) fn run<T: Transport>(
    command: Command,
    api: &TodoApi,
    transport: &mut T,
) -> Result<String, CliError> {
    match command {
        Command::List => {
            let response = transport.execute(&api.build_list_todos())?;
            let todos = api.parse_list_todos(response)?;
            Ok(render_list(&todos))
        }
        Command::Add { title } => {
            if title.trim().is_empty() {
                return Err(CliError::EmptyTitle);
            }
            let request = api.build_create_todo(&NewTodo { title })?;
            let response = transport.execute(&request)?;
            let todo = api.parse_create_todo(response)?;
            Ok(render_todo(&todo))
        }
        Command::Done { id } => set_completed(api, transport, id, true),
        Command::Undone { id } => set_completed(api, transport, id, false),
        Command::Rm { id } => {
            let response = transport.execute(&api.build_delete_todo(id))?;
            let confirmation = api.parse_delete_todo(response)?;
            Ok(render_confirmation(&confirmation))
        }
    }
}

fn set_completed<T: Transport>(
    api: &TodoApi,
    transport: &mut T,
    id: Uuid,
    completed: bool,
) -> Result<String, CliError> {
    let request = api.build_update_todo(id, &TodoPatch::completed(completed))?;
    let response = transport.execute(&request)?;
    let todo = api.parse_update_todo(response)?;
    Ok(render_todo(&todo))
}

fn render_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos yet.".to_string();
    }
    let completed = todos.iter().filter(|t| t.completed).count();
    let mut lines: Vec<String> = todos.iter().map(render_todo).collect();
    lines.push(format!(
        "Total: {}  Completed: {}  Remaining: {}",
        todos.len(),
        completed,
        todos.len() - completed
    ));
    lines.join("\n")
}

fn render_todo(todo: &Todo) -> String {
    let mark = if todo.completed { "x" } else { " " };
    format!("[{mark}] {}  ({})", todo.title, todo.id)
}

/// Shows the server's `message` field when the confirmation carries one,
/// the raw JSON otherwise. The schema belongs to the server.
fn render_confirmation(confirmation: &serde_json::Value) -> String {
    match confirmation.get("message").and_then(|m| m.as_str()) {
        Some(message) => message.to_string(),
        None => confirmation.to_string(),
    }
}
