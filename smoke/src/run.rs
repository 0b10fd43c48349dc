//! The sequential check procedure.
//!
//! Seven steps against a live todo API, in strict order, each blocking on
//! its response: create, list, mark completed, create a second item, list,
//! delete the second item, list. A failed creation skips every remaining
//! step; failed list/update/delete steps are reported and the run moves on.
//! The report goes to an injected sink so tests capture it verbatim.

use std::io::{self, Write};

use todo_client::{ApiError, NewTodo, Todo, TodoApi, TodoPatch, Transport, TransportError};

const FIRST_TITLE: &str = "Test todo item";
const SECOND_TITLE: &str = "Second test todo";

/// Runs the full check sequence against `api`, writing the report to `out`.
///
/// Returns `Err` only when writing the report itself fails. A connection
/// failure stops the run with a single cannot-connect line; any other
/// unexpected error stops it with a generic line. Every other path,
/// including a creation failure that skipped the remaining steps, ends
/// with the completion trailer.
pub fn run_checks<T: Transport, W: Write>(
    api: &TodoApi,
    transport: &mut T,
    out: &mut W,
) -> io::Result<()> {
    match run_steps(api, transport, out) {
        Ok(()) => writeln!(out, "\n🎉 All tests completed!"),
        Err(StepError::Io(e)) => Err(e),
        Err(StepError::Transport(TransportError::Unreachable(_))) => writeln!(
            out,
            "❌ Could not connect to the API at {}. Make sure the server is running.",
            api.base_url()
        ),
        Err(StepError::Transport(e)) => writeln!(out, "❌ An error occurred: {e}"),
        Err(StepError::Api(e)) => writeln!(out, "❌ An error occurred: {e}"),
    }
}

/// Anything that cuts the step sequence short. Non-200 statuses are not
/// errors at this level; each step reports them inline.
#[derive(Debug)]
enum StepError {
    Io(io::Error),
    Transport(TransportError),
    Api(ApiError),
}

impl From<io::Error> for StepError {
    fn from(e: io::Error) -> Self {
        StepError::Io(e)
    }
}

impl From<TransportError> for StepError {
    fn from(e: TransportError) -> Self {
        StepError::Transport(e)
    }
}

impl From<ApiError> for StepError {
    fn from(e: ApiError) -> Self {
        StepError::Api(e)
    }
}

fn run_steps<T: Transport, W: Write>(
    api: &TodoApi,
    transport: &mut T,
    out: &mut W,
) -> Result<(), StepError> {
    writeln!(out, "Testing Todo API endpoints...")?;

    writeln!(out, "\n1. Creating a new todo...")?;
    let Some(first) = create_step(api, transport, out, FIRST_TITLE, "Todo created", "create todo")?
    else {
        return Ok(());
    };

    writeln!(out, "\n2. Getting all todos...")?;
    list_step(api, transport, out)?;

    writeln!(out, "\n3. Updating todo (mark as completed)...")?;
    update_step(api, transport, out, &first)?;

    writeln!(out, "\n4. Creating another todo...")?;
    let Some(second) = create_step(
        api,
        transport,
        out,
        SECOND_TITLE,
        "Second todo created",
        "create second todo",
    )?
    else {
        return Ok(());
    };

    writeln!(out, "\n5. Getting all todos after updates...")?;
    list_step(api, transport, out)?;

    writeln!(out, "\n6. Deleting todo with ID: {}...", second.id)?;
    delete_step(api, transport, out, &second)?;

    writeln!(out, "\n7. Getting all todos after deletion...")?;
    list_step(api, transport, out)?;

    Ok(())
}

/// Fatal step: `None` means the creation failed and the caller must skip
/// everything that would have used the new todo.
fn create_step<T: Transport, W: Write>(
    api: &TodoApi,
    transport: &mut T,
    out: &mut W,
    title: &str,
    ok_label: &str,
    fail_label: &str,
) -> Result<Option<Todo>, StepError> {
    let input = NewTodo {
        title: title.to_string(),
    };
    let request = api.build_create_todo(&input)?;
    let response = transport.execute(&request)?;
    match api.parse_create_todo(response) {
        Ok(todo) => {
            writeln!(out, "✅ {ok_label}: {}", todo_line(&todo))?;
            Ok(Some(todo))
        }
        Err(ApiError::UnexpectedStatus { status, body }) => {
            writeln!(out, "❌ Failed to {fail_label}: {status} - {body}")?;
            Ok(None)
        }
        Err(other) => Err(other.into()),
    }
}

fn list_step<T: Transport, W: Write>(
    api: &TodoApi,
    transport: &mut T,
    out: &mut W,
) -> Result<(), StepError> {
    let response = transport.execute(&api.build_list_todos())?;
    match api.parse_list_todos(response) {
        Ok(todos) => {
            writeln!(out, "✅ Retrieved {} todos", todos.len())?;
            for todo in &todos {
                writeln!(out, "   - {} (completed: {})", todo.title, todo.completed)?;
            }
            Ok(())
        }
        Err(ApiError::UnexpectedStatus { status, body }) => {
            writeln!(out, "❌ Failed to get todos: {status} - {body}")?;
            Ok(())
        }
        Err(other) => Err(other.into()),
    }
}

fn update_step<T: Transport, W: Write>(
    api: &TodoApi,
    transport: &mut T,
    out: &mut W,
    todo: &Todo,
) -> Result<(), StepError> {
    let request = api.build_update_todo(todo.id, &TodoPatch::completed(true))?;
    let response = transport.execute(&request)?;
    match api.parse_update_todo(response) {
        Ok(updated) => writeln!(out, "✅ Todo updated: {}", todo_line(&updated))?,
        Err(ApiError::UnexpectedStatus { status, body }) => {
            writeln!(out, "❌ Failed to update todo: {status} - {body}")?;
        }
        Err(other) => return Err(other.into()),
    }
    Ok(())
}

fn delete_step<T: Transport, W: Write>(
    api: &TodoApi,
    transport: &mut T,
    out: &mut W,
    todo: &Todo,
) -> Result<(), StepError> {
    let response = transport.execute(&api.build_delete_todo(todo.id))?;
    match api.parse_delete_todo(response) {
        Ok(confirmation) => writeln!(out, "✅ Todo deleted: {confirmation}")?,
        Err(ApiError::UnexpectedStatus { status, body }) => {
            writeln!(out, "❌ Failed to delete todo: {status} - {body}")?;
        }
        Err(other) => return Err(other.into()),
    }
    Ok(())
}

fn todo_line(todo: &Todo) -> String {
    format!(
        "{{id: {}, title: {:?}, completed: {}}}",
        todo.id, todo.title, todo.completed
    )
}
