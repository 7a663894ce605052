//! Records returned by the store
//!
//! Plain data: nothing here holds a connection or outlives the call that
//! produced it.

use serde::Serialize;

pub type ListId = i64;
pub type TodoId = i64;

/// A todo list with counts derived from its todos at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    pub todos_count: i64,
    pub todos_remaining_count: i64,
}

impl List {
    /// A list is complete when it has todos and none of them remain.
    pub fn is_complete(&self) -> bool {
        self.todos_count > 0 && self.todos_remaining_count == 0
    }
}

/// A single task within a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
    pub list_id: ListId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(todos_count: i64, todos_remaining_count: i64) -> List {
        List {
            id: 1,
            title: "Groceries".into(),
            todos_count,
            todos_remaining_count,
        }
    }

    #[test]
    fn empty_list_is_not_complete() {
        assert!(!list(0, 0).is_complete());
    }

    #[test]
    fn list_with_remaining_todos_is_not_complete() {
        assert!(!list(3, 1).is_complete());
        assert!(list(3, 0).is_complete());
    }
}
