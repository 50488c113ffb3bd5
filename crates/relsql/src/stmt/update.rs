//! UPDATE builder.

use super::clause::{Filter, RowsFiltered};
use super::{INDENT, Statement, StatementKind};
use crate::expr::{Expr, Field, IntoField, Scope};
use crate::schema::{Relation, Table, TableRef};

/// `UPDATE table SET col = val, ... [WHERE...]`
///
/// Assignments keep insertion order. Setting the same column twice keeps
/// both assignments.
#[derive(Debug, Clone)]
pub struct Update {
    table: TableRef,
    assignments: Vec<(Field, Expr)>,
    filter: Filter,
}

impl Update {
    pub fn new(table: &Table) -> Self {
        Self {
            table: table.into(),
            assignments: Vec::new(),
            filter: Filter::default(),
        }
    }

    pub fn from_pairs<I, C, V>(table: &Table, pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, V)>,
        C: IntoField,
        V: Into<Expr>,
    {
        let mut update = Self::new(table);
        update.assignments.extend(
            pairs
                .into_iter()
                .map(|(column, value)| (column.into_field(), value.into())),
        );
        update
    }

    /// Append `column = value`.
    pub fn set(&self, column: impl IntoField, value: impl Into<Expr>) -> Self {
        let mut next = self.clone();
        next.assignments.push((column.into_field(), value.into()));
        next
    }

    pub fn assignments(&self) -> &[(Field, Expr)] {
        &self.assignments
    }
}

impl RowsFiltered for Update {
    fn filter_mut(&mut self) -> &mut Filter {
        &mut self.filter
    }
}

impl Statement for Update {
    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn target(&self) -> Relation {
        Relation::Table(self.table.table().clone())
    }

    fn touched(&self) -> Vec<&TableRef> {
        vec![&self.table]
    }

    fn render_lines(&self, scope: &Scope) -> Vec<String> {
        let mut lines = vec![
            "UPDATE".to_string(),
            format!("{INDENT}{}", self.table.name()),
            "SET".to_string(),
        ];

        let last = self.assignments.len().saturating_sub(1);
        for (i, (column, value)) in self.assignments.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            lines.push(format!(
                "{INDENT}{} = {}{sep}",
                column.name(),
                value.render(scope.referencing())
            ));
        }

        self.filter.render_into("WHERE", scope, &mut lines);
        lines
    }
}
