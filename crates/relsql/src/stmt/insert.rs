//! INSERT builder.

use super::{INDENT, Statement, StatementKind};
use crate::expr::{Expr, ExprList, Field, IntoField, Scope};
use crate::schema::{Relation, Table};

/// `INSERT [OR REPLACE] INTO table [(cols)] [VALUES (vals)]`
///
/// Column and value lists are kept separately; an empty list omits its
/// clause instead of failing.
#[derive(Debug, Clone)]
pub struct Insert {
    table: Table,
    columns: Vec<Field>,
    values: ExprList,
    replace: bool,
}

impl Insert {
    pub fn new(table: &Table) -> Self {
        Self {
            table: table.clone(),
            columns: Vec::new(),
            values: ExprList::new(),
            replace: false,
        }
    }

    /// Build from `(column, value)` pairs, expanded into the two lists in
    /// the given order.
    pub fn from_pairs<I, C, V>(table: &Table, pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, V)>,
        C: IntoField,
        V: Into<Expr>,
    {
        let mut insert = Self::new(table);
        for (column, value) in pairs {
            insert.columns.push(column.into_field());
            insert.values.push(value);
        }
        insert
    }

    /// Append target columns.
    pub fn columns<I, C>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoField,
    {
        let mut next = self.clone();
        next.columns
            .extend(columns.into_iter().map(IntoField::into_field));
        next
    }

    /// Append values.
    pub fn values<I, E>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        let mut next = self.clone();
        next.values.extend(values);
        next
    }

    /// Append one column together with its value.
    pub fn set(&self, column: impl IntoField, value: impl Into<Expr>) -> Self {
        let mut next = self.clone();
        next.columns.push(column.into_field());
        next.values.push(value);
        next
    }

    /// Render `INSERT OR REPLACE`.
    pub fn or_replace(&self) -> Self {
        let mut next = self.clone();
        next.replace = true;
        next
    }

    pub fn is_replace(&self) -> bool {
        self.replace
    }
}

impl Statement for Insert {
    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn target(&self) -> Relation {
        Relation::Table(self.table.clone())
    }

    fn render_lines(&self, scope: &Scope) -> Vec<String> {
        let verb = if self.replace { "INSERT OR REPLACE" } else { "INSERT" };
        let mut lines = Vec::new();

        if self.columns.is_empty() {
            lines.push(format!("{verb} INTO {}", self.table.name()));
        } else {
            let names: Vec<&str> = self.columns.iter().map(Field::name).collect();
            lines.push(format!("{verb} INTO {} (", self.table.name()));
            lines.push(format!("{INDENT}{}", names.join(", ")));
            lines.push(")".to_string());
        }

        if !self.values.is_empty() {
            lines.push("VALUES (".to_string());
            lines.push(format!("{INDENT}{}", self.values.render(scope.referencing())));
            lines.push(")".to_string());
        }
        lines
    }
}
