//! Subcommands - one store operation each (`show` uses two)
//!
//! Store work happens inside `execute`, which returns an `Output`; printing
//! is kept separate so the connection is closed before anything renders.

use std::fmt::Write as _;

use clap::Subcommand;
use serde::Serialize;
use todolists_store::{List, ListId, ListStore, StoreError, Todo, TodoId};

use crate::title::{parse_title, Title};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show all lists, sorted by title
    Lists,
    /// Show one list and its todos
    Show {
        /// List ID
        id: ListId,
    },
    /// Create a new list
    CreateList {
        /// List title (1-100 characters)
        #[arg(value_parser = parse_title)]
        title: Title,
    },
    /// Rename a list
    RenameList {
        /// List ID
        id: ListId,
        /// New title (1-100 characters)
        #[arg(value_parser = parse_title)]
        title: Title,
    },
    /// Delete a list along with its todos
    DeleteList {
        /// List ID
        id: ListId,
    },
    /// Add a todo to a list
    AddTodo {
        /// List ID
        list_id: ListId,
        /// Todo title (1-100 characters)
        #[arg(value_parser = parse_title)]
        title: Title,
    },
    /// Delete a todo from a list
    DeleteTodo {
        /// List ID
        list_id: ListId,
        /// Todo ID
        todo_id: TodoId,
    },
    /// Mark a todo as done
    Check {
        /// List ID
        list_id: ListId,
        /// Todo ID
        todo_id: TodoId,
    },
    /// Mark a todo as not done
    Uncheck {
        /// List ID
        list_id: ListId,
        /// Todo ID
        todo_id: TodoId,
    },
    /// Mark every todo in a list as done
    CompleteAll {
        /// List ID
        list_id: ListId,
    },
    /// Show the todos of a list
    Todos {
        /// List ID
        list_id: ListId,
    },
}

/// Result of a command, ready to print.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
    Lists(Vec<List>),
    Detail { list: List, todos: Vec<Todo> },
    Todos(Vec<Todo>),
    Message { message: String },
    ListNotFound { missing_list: ListId },
}

impl Output {
    fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

/// Run a command against an open store.
pub async fn execute(store: &mut ListStore, command: Command) -> Result<Output, StoreError> {
    let output = match command {
        Command::Lists => Output::Lists(store.all_lists().await?),
        Command::Show { id } => match store.find_list(id).await? {
            Some(list) => {
                let todos = store.find_todos_for_list(id).await?;
                Output::Detail { list, todos }
            }
            None => Output::ListNotFound { missing_list: id },
        },
        Command::CreateList { title } => {
            store.create_list(title.as_str()).await?;
            Output::message(format!("created list '{}'", title.as_str()))
        }
        Command::RenameList { id, title } => {
            store.rename_list(id, title.as_str()).await?;
            Output::message(format!("renamed list {} to '{}'", id, title.as_str()))
        }
        Command::DeleteList { id } => {
            store.delete_list(id).await?;
            Output::message(format!("deleted list {}", id))
        }
        Command::AddTodo { list_id, title } => {
            store.create_todo(list_id, title.as_str()).await?;
            Output::message(format!("added '{}' to list {}", title.as_str(), list_id))
        }
        Command::DeleteTodo { list_id, todo_id } => {
            store.delete_todo(list_id, todo_id).await?;
            Output::message(format!("deleted todo {} from list {}", todo_id, list_id))
        }
        Command::Check { list_id, todo_id } => {
            store.set_todo_status(list_id, todo_id, true).await?;
            Output::message(format!("checked todo {}", todo_id))
        }
        Command::Uncheck { list_id, todo_id } => {
            store.set_todo_status(list_id, todo_id, false).await?;
            Output::message(format!("unchecked todo {}", todo_id))
        }
        Command::CompleteAll { list_id } => {
            store.mark_all_todos_complete(list_id).await?;
            Output::message(format!("completed all todos in list {}", list_id))
        }
        Command::Todos { list_id } => Output::Todos(store.find_todos_for_list(list_id).await?),
    };

    Ok(output)
}

/// Plain-text rendering.
pub fn render_text(output: &Output) -> String {
    match output {
        Output::Lists(lists) if lists.is_empty() => "no lists yet".to_owned(),
        Output::Lists(lists) => lists.iter().map(list_line).collect::<Vec<_>>().join("\n"),
        Output::Detail { list, todos } => {
            let mut out = list_line(list);
            for todo in todos {
                let _ = write!(out, "\n  {}", todo_line(todo));
            }
            out
        }
        Output::Todos(todos) => todos.iter().map(todo_line).collect::<Vec<_>>().join("\n"),
        Output::Message { message } => message.clone(),
        Output::ListNotFound { missing_list } => format!("list {} not found", missing_list),
    }
}

fn list_line(list: &List) -> String {
    let marker = if list.is_complete() { "x" } else { " " };
    format!(
        "[{}] {:>4}  {}  ({}/{} remaining)",
        marker, list.id, list.title, list.todos_remaining_count, list.todos_count
    )
}

fn todo_line(todo: &Todo) -> String {
    let marker = if todo.done { "x" } else { " " };
    format!("[{}] {:>4}  {}", marker, todo.id, todo.title)
}
