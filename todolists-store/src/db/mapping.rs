//! Row-to-record mapping
//!
//! Each query has a fixed column shape; the helpers below are the only
//! places that decode a column into a Rust value.

use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::models::{List, Todo};

/// Decode an integer column as `i64`.
///
/// Serial ids come back as INT4 while aggregates such as `COUNT` are INT8,
/// so a type mismatch on the wide read falls back to the narrow one.
pub(crate) fn int_column(row: &PgRow, name: &str) -> Result<i64, sqlx::Error> {
    match row.try_get::<i64, _>(name) {
        Err(sqlx::Error::ColumnDecode { .. }) => row.try_get::<i32, _>(name).map(i64::from),
        other => other,
    }
}

/// Decode a boolean column; anything but the canonical `true` is false.
pub(crate) fn bool_column(row: &PgRow, name: &str) -> Result<bool, sqlx::Error> {
    row.try_get::<Option<bool>, _>(name).map(is_canonical_true)
}

pub(crate) fn is_canonical_true(value: Option<bool>) -> bool {
    value == Some(true)
}

/// Shape: `id, title, todos_count, todos_remaining_count`.
pub(crate) fn list_from_row(row: &PgRow) -> Result<List, sqlx::Error> {
    Ok(List {
        id: int_column(row, "id")?,
        title: row.try_get("title")?,
        todos_count: int_column(row, "todos_count")?,
        todos_remaining_count: int_column(row, "todos_remaining_count")?,
    })
}

/// Shape: `id, title, done, todolist_id`.
pub(crate) fn todo_from_row(row: &PgRow) -> Result<Todo, sqlx::Error> {
    Ok(Todo {
        id: int_column(row, "id")?,
        title: row.try_get("title")?,
        done: bool_column(row, "done")?,
        list_id: int_column(row, "todolist_id")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_true_is_canonical_true() {
        assert!(is_canonical_true(Some(true)));
        assert!(!is_canonical_true(Some(false)));
        assert!(!is_canonical_true(None));
    }
}
