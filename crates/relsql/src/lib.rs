//! # relsql
//!
//! A composable builder for relational SQL statements.
//!
//! ## Features
//!
//! - **Typed expressions**: columns, aliases, comparisons, arithmetic, aggregates and AND/OR groups
//! - **Automatic qualification**: columns render as `table.column` (or `alias.column`) as soon as a
//!   statement touches more than one table or an aliased one
//! - **Explicit precedence**: nested boolean groups and operations are always parenthesized
//! - **Persistent builders**: every builder call returns a new statement, so a base query can be
//!   reused for several variants
//! - **Placeholder sessions**: `?`, `:1`, `:name`, `%s` and `%(name)s` conventions
//! - **Schema config**: tables and indexes declared in TOML, with bootstrap/teardown DDL
//!
//! ## Example
//!
//! ```
//! use relsql::prelude::*;
//!
//! let users = Table::parse("users", ["id INTEGER PRIMARY KEY", "name TEXT"]).unwrap();
//! let posts = Table::parse("posts", ["id INTEGER PRIMARY KEY", "user_id INTEGER", "title TEXT"]).unwrap();
//!
//! let mut params = Params::new(ParamStyle::Named);
//! let sql = posts
//!     .select_columns([posts.col("title").unwrap(), users.col("name").unwrap()])
//!     .inner_join(&users)
//!     .on(posts.column("user_id").unwrap().eq(users.column("id").unwrap()))
//!     .unwrap()
//!     .and_where(users.column("id").unwrap().eq(params.bind("user_id").unwrap()))
//!     .to_sql();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT\n    posts.title, users.name\nFROM\n    posts\n\
//!      INNER JOIN\n    users\nON\n    posts.user_id = users.id\n\
//!      WHERE\n    users.id = :user_id"
//! );
//! assert_eq!(params.names(), ["user_id".to_string()]);
//! ```

pub mod config;
pub mod error;
pub mod expr;
pub mod param;
pub mod prelude;
pub mod schema;
pub mod stmt;

pub use config::{Schema, SchemaConfig};
pub use error::{SqlError, SqlResult};
pub use expr::{
    Aggregate, Alias, Condition, ConditionList, Expr, ExprExt, ExprList, Field, Operation, and, or,
};
pub use param::{ParamStyle, Params, Placeholder};
pub use schema::{Column, Columns, Index, Table, TableRef};
pub use stmt::{
    Delete, Grouped, Insert, Joinable, Ordered, RowsFiltered, Select, Statement, Update, render,
};
