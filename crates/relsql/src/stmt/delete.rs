use super::clause::{Filter, RowsFiltered};
use super::{INDENT, Statement, StatementKind};
use crate::expr::Scope;
use crate::schema::{Relation, Table, TableRef};

/// `DELETE FROM table [WHERE...]`
#[derive(Debug, Clone)]
pub struct Delete {
    table: TableRef,
    filter: Filter,
}

impl Delete {
    pub fn new(table: &Table) -> Self {
        Self {
            table: table.into(),
            filter: Filter::default(),
        }
    }
}

impl RowsFiltered for Delete {
    fn filter_mut(&mut self) -> &mut Filter {
        &mut self.filter
    }
}

impl Statement for Delete {
    fn kind(&self) -> StatementKind {
        StatementKind::Delete
    }

    fn target(&self) -> Relation {
        Relation::Table(self.table.table().clone())
    }

    fn touched(&self) -> Vec<&TableRef> {
        vec![&self.table]
    }

    fn render_lines(&self, scope: &Scope) -> Vec<String> {
        let mut lines = vec![
            "DELETE FROM".to_string(),
            format!("{INDENT}{}", self.table.name()),
        ];
        self.filter.render_into("WHERE", scope, &mut lines);
        lines
    }
}
