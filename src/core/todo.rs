//! Checklist operations.

use crate::entities::{Todo, next_record_id};
use crate::errors::{Error, Result};
use chrono::{NaiveDate, Utc};

/// Creates a checklist item. The task text is required non-empty.
pub fn add_todo(todos: &mut Vec<Todo>, task: &str, due_date: Option<NaiveDate>) -> Result<Todo> {
    if task.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Todo task cannot be empty".to_string(),
        });
    }

    let todo = Todo {
        id: next_record_id(),
        task: task.trim().to_string(),
        due_date,
        completed: false,
        created_at: Some(Utc::now()),
    };
    todos.push(todo.clone());
    Ok(todo)
}

/// Flips the completed flag. Both directions are free transitions.
pub fn toggle_todo(todos: &mut [Todo], id: i64) -> Result<Todo> {
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(Error::TodoNotFound { id })?;
    todo.completed = !todo.completed;
    Ok(todo.clone())
}

/// Removes a checklist item outright, returning it.
pub fn delete_todo(todos: &mut Vec<Todo>, id: i64) -> Result<Todo> {
    let index = todos
        .iter()
        .position(|t| t.id == id)
        .ok_or(Error::TodoNotFound { id })?;
    Ok(todos.remove(index))
}
