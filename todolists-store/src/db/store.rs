//! ListStore - lists and todos over a single connection
//!
//! Every operation:
//! - builds one parameterized statement (two for `delete_list`)
//! - logs it, then runs it on the store's connection
//! - maps rows through `mapping` into plain records
//!
//! Missing ids are not errors: reads return `None`/empty, writes touch
//! nothing.

use sqlx::postgres::{PgConnection, PgRow};
use sqlx::Connection;

use super::mapping::{list_from_row, todo_from_row};
use super::statement::Statement;
use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::models::{List, ListId, Todo, TodoId};

/// Data access for todo lists. Owns exactly one connection.
pub struct ListStore {
    conn: PgConnection,
}

impl ListStore {
    /// Open a connection for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a config error for an unparsable url, or the database error
    /// if the connection fails.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = config.connect_options()?;
        tracing::debug!("connecting to {}", config);
        let conn = PgConnection::connect_with(&options).await?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap a connection opened elsewhere.
    pub fn from_connection(conn: PgConnection) -> Self {
        Self { conn }
    }

    /// Release the connection. Consumes the store, so this happens once.
    pub async fn close(self) -> Result<()> {
        tracing::debug!("closing database connection");
        self.conn.close().await?;
        Ok(())
    }

    /// Get a single list with its todo counts.
    pub async fn find_list(&mut self, id: ListId) -> Result<Option<List>> {
        let statement = Statement::new(
            r#"
            SELECT todolists.id,
                   todolists.title,
                   COUNT(todos.id) AS todos_count,
                   COUNT(NULLIF(todos.done, true)) AS todos_remaining_count
            FROM todolists
            LEFT JOIN todos ON todos.todolist_id = todolists.id
            WHERE todolists.id = $1
            GROUP BY todolists.id
            ORDER BY todolists.title
            "#,
        )
        .bind(id);

        let row = self.fetch_optional(&statement).await?;
        Ok(row.as_ref().map(list_from_row).transpose()?)
    }

    /// All lists with todo counts, ordered by title.
    pub async fn all_lists(&mut self) -> Result<Vec<List>> {
        let statement = Statement::new(
            r#"
            SELECT todolists.id,
                   todolists.title,
                   COUNT(todos.id) AS todos_count,
                   COUNT(NULLIF(todos.done, true)) AS todos_remaining_count
            FROM todolists
            LEFT JOIN todos ON todos.todolist_id = todolists.id
            GROUP BY todolists.id
            ORDER BY todolists.title
            "#,
        );

        let rows = self.fetch_all(&statement).await?;
        Ok(rows.iter().map(list_from_row).collect::<Result<Vec<_>, sqlx::Error>>()?)
    }

    pub async fn create_list(&mut self, title: &str) -> Result<()> {
        let statement = Statement::new("INSERT INTO todolists (title) VALUES ($1)").bind(title);
        self.execute(&statement).await
    }

    /// Delete a list and its todos.
    ///
    /// Todos go first since nothing cascades in the schema. Both deletes
    /// share one transaction.
    pub async fn delete_list(&mut self, id: ListId) -> Result<()> {
        let statements = [
            Statement::new("DELETE FROM todos WHERE todolist_id = $1").bind(id),
            Statement::new("DELETE FROM todolists WHERE id = $1").bind(id),
        ];

        let mut tx = self.conn.begin().await?;
        for statement in &statements {
            statement.log();
            statement.query().execute(&mut *tx).await?;
        }
        tx.commit().await?;

        Ok(())
    }

    pub async fn rename_list(&mut self, id: ListId, new_title: &str) -> Result<()> {
        let statement = Statement::new("UPDATE todolists SET title = $1 WHERE id = $2")
            .bind(new_title)
            .bind(id);
        self.execute(&statement).await
    }

    /// Add a todo to a list; it starts out not done.
    pub async fn create_todo(&mut self, list_id: ListId, title: &str) -> Result<()> {
        let statement = Statement::new("INSERT INTO todos (title, todolist_id) VALUES ($1, $2)")
            .bind(title)
            .bind(list_id);
        self.execute(&statement).await
    }

    /// Delete a todo, but only if it belongs to `list_id`.
    pub async fn delete_todo(&mut self, list_id: ListId, todo_id: TodoId) -> Result<()> {
        let statement = Statement::new("DELETE FROM todos WHERE id = $1 AND todolist_id = $2")
            .bind(todo_id)
            .bind(list_id);
        self.execute(&statement).await
    }

    /// Set a todo's `done` flag, scoped to `list_id` like `delete_todo`.
    pub async fn set_todo_status(
        &mut self,
        list_id: ListId,
        todo_id: TodoId,
        done: bool,
    ) -> Result<()> {
        let statement =
            Statement::new("UPDATE todos SET done = $1 WHERE id = $2 AND todolist_id = $3")
                .bind(done)
                .bind(todo_id)
                .bind(list_id);
        self.execute(&statement).await
    }

    pub async fn mark_all_todos_complete(&mut self, list_id: ListId) -> Result<()> {
        let statement =
            Statement::new("UPDATE todos SET done = true WHERE todolist_id = $1").bind(list_id);
        self.execute(&statement).await
    }

    /// Todos of one list, in whatever order the engine returns them.
    pub async fn find_todos_for_list(&mut self, list_id: ListId) -> Result<Vec<Todo>> {
        let statement =
            Statement::new("SELECT id, title, done, todolist_id FROM todos WHERE todolist_id = $1")
                .bind(list_id);

        let rows = self.fetch_all(&statement).await?;
        Ok(rows.iter().map(todo_from_row).collect::<Result<Vec<_>, sqlx::Error>>()?)
    }

    async fn execute(&mut self, statement: &Statement) -> Result<()> {
        statement.log();
        statement.query().execute(&mut self.conn).await?;
        Ok(())
    }

    async fn fetch_all(&mut self, statement: &Statement) -> Result<Vec<PgRow>> {
        statement.log();
        Ok(statement.query().fetch_all(&mut self.conn).await?)
    }

    async fn fetch_optional(&mut self, statement: &Statement) -> Result<Option<PgRow>> {
        statement.log();
        Ok(statement.query().fetch_optional(&mut self.conn).await?)
    }
}

impl std::fmt::Debug for ListStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListStore").finish_non_exhaustive()
    }
}

