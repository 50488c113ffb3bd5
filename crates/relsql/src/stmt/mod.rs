//! Statement builders.
//!
//! Every builder is a persistent value: methods take `&self` and return a
//! modified copy, so a partially built statement can serve as the common
//! prefix of several variants.
//!
//! ```
//! use relsql::prelude::*;
//!
//! let users = Table::parse("users", ["id INTEGER", "name TEXT"]).unwrap();
//! let id = users.column("id").unwrap();
//!
//! let base = users.select_columns([users.col("name").unwrap()]);
//! let one = base.and_where(id.clone().eq(1));
//! let two = base.and_where(id.eq(2));
//!
//! assert!(one.to_sql().ends_with("id = 1"));
//! assert!(two.to_sql().ends_with("id = 2"));
//! assert!(!base.to_sql().contains("WHERE"));
//! ```

mod clause;
mod ddl;
mod delete;
mod insert;
mod select;
mod update;

pub use clause::{
    Filter, Grouped, Grouping, Join, JoinKind, Joinable, Joins, Nulls, Order, OrderBy, Ordered,
    Ordering, RowsFiltered,
};
pub use ddl::{AlterAction, AlterTable, CreateIndex, CreateTable, DropIndex, DropTable};
pub use delete::Delete;
pub use insert::Insert;
pub use select::Select;
pub use update::Update;

use crate::expr::Scope;
use crate::schema::{Relation, TableRef};
use std::fmt;

/// Indentation of clause bodies.
pub(crate) const INDENT: &str = "    ";

/// The statement kinds this crate builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    CreateTable,
    DropTable,
    AlterTable,
    CreateIndex,
    DropIndex,
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::CreateTable => "create_table",
            StatementKind::DropTable => "drop_table",
            StatementKind::AlterTable => "alter_table",
            StatementKind::CreateIndex => "create_index",
            StatementKind::DropIndex => "drop_index",
            StatementKind::Select => "select",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A renderable statement.
///
/// Rendering is a pure function of the builder state: the qualification
/// scope is computed once from [`touched`](Statement::touched) and threaded
/// through every clause.
pub trait Statement {
    fn kind(&self) -> StatementKind;

    /// The table or index acted upon.
    fn target(&self) -> Relation;

    /// Table references that take part in qualification.
    ///
    /// Statements whose column positions are always unqualified (DDL,
    /// INSERT) return nothing.
    fn touched(&self) -> Vec<&TableRef> {
        Vec::new()
    }

    /// Statement lines, in clause order.
    fn render_lines(&self, scope: &Scope) -> Vec<String>;

    /// The qualification scope for one render.
    fn scope(&self) -> Scope {
        Scope::for_relations(self.touched().into_iter().map(|t| (t.name(), t.alias())))
    }

    /// Render the statement text.
    fn to_sql(&self) -> String {
        let scope = self.scope();
        let lines = self.render_lines(&scope);
        let sql = lines.join("\n");

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "relsql.sql",
            kind = %self.kind(),
            target_name = self.target().name(),
            qualified = scope.is_qualified(),
            lines = lines.len(),
            sql = %sql,
            "rendered statement"
        );

        sql
    }
}

/// Render a statement.
pub fn render(statement: &impl Statement) -> String {
    statement.to_sql()
}

macro_rules! impl_statement_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::stmt::Statement::to_sql(self))
                }
            }
        )*
    };
}

impl_statement_display!(
    CreateTable,
    DropTable,
    AlterTable,
    CreateIndex,
    DropIndex,
    Select,
    Insert,
    Update,
    Delete,
);

#[cfg(test)]
mod tests;
