//! Parameterized statements with logging
//!
//! A statement is a SQL template with `$n` placeholders plus the ordered
//! values bound to them. It is logged as `"<sql>: [<params>]"` before it
//! is handed to sqlx.

use std::fmt;

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

/// A single bound value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Param {
    Int(i64),
    Text(String),
    Bool(bool),
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// SQL template and its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Statement {
    sql: &'static str,
    params: Vec<Param>,
}

impl Statement {
    pub(crate) fn new(sql: &'static str) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }

    /// Append the value for the next placeholder.
    pub(crate) fn bind(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Emit the statement and its parameters to the log.
    pub(crate) fn log(&self) {
        tracing::info!("{}", self);
    }

    /// Build the sqlx query with every parameter bound in order.
    pub(crate) fn query(&self) -> Query<'_, Postgres, PgArguments> {
        self.params
            .iter()
            .fold(sqlx::query(self.sql), |query, param| match param {
                Param::Int(v) => query.bind(*v),
                Param::Text(v) => query.bind(v.as_str()),
                Param::Bool(v) => query.bind(*v),
            })
    }
}

/// One-line rendering: whitespace in the template is collapsed.
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = self.sql.split_whitespace();
        if let Some(first) = words.next() {
            f.write_str(first)?;
            for word in words {
                write!(f, " {word}")?;
            }
        }

        f.write_str(": [")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_template_and_params_on_one_line() {
        let statement = Statement::new(
            r#"
            UPDATE todos SET done = $1
            WHERE id = $2 AND todolist_id = $3
            "#,
        )
        .bind(true)
        .bind(7_i64)
        .bind(3_i64);

        assert_eq!(
            statement.to_string(),
            "UPDATE todos SET done = $1 WHERE id = $2 AND todolist_id = $3: [true, 7, 3]"
        );
    }

    #[test]
    fn text_params_are_quoted() {
        let statement =
            Statement::new("INSERT INTO todolists (title) VALUES ($1)").bind("Groceries \"weekly\"");

        assert_eq!(
            statement.to_string(),
            r#"INSERT INTO todolists (title) VALUES ($1): ["Groceries \"weekly\""]"#
        );
    }

    #[test]
    fn statement_without_params_renders_empty_list() {
        let statement = Statement::new("SELECT 1");
        assert_eq!(statement.to_string(), "SELECT 1: []");
    }

    #[test]
    fn params_keep_binding_order() {
        let statement = Statement::new("INSERT INTO todos (title, todolist_id) VALUES ($1, $2)")
            .bind(String::from("Buy milk"))
            .bind(4_i64);

        assert_eq!(
            statement.params,
            vec![Param::Text("Buy milk".into()), Param::Int(4)]
        );
    }
}
