//! SELECT builder.

use super::clause::{Filter, Grouped, Grouping, Joinable, Joins, Ordered, Ordering, RowsFiltered};
use super::{INDENT, Statement, StatementKind};
use crate::expr::{Expr, ExprList, Scope};
use crate::schema::{Relation, TableRef};

/// `SELECT [DISTINCT] cols FROM table [JOIN...] [WHERE...] [GROUP BY...]
/// [HAVING...] [ORDER BY...]`
#[derive(Debug, Clone)]
pub struct Select {
    from: TableRef,
    columns: ExprList,
    distinct: bool,
    joins: Joins,
    filter: Filter,
    grouping: Grouping,
    ordering: Ordering,
}

impl Select {
    /// `SELECT * FROM table`
    pub fn new(from: impl Into<TableRef>) -> Self {
        Self {
            from: from.into(),
            columns: [Expr::All].into_iter().collect(),
            distinct: false,
            joins: Joins::default(),
            filter: Filter::default(),
            grouping: Grouping::default(),
            ordering: Ordering::default(),
        }
    }

    /// Replace the projected columns. An empty list falls back to `*`.
    pub fn columns<I, E>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        let mut next = self.clone();
        next.columns = columns.into_iter().collect();
        if next.columns.is_empty() {
            next.columns.push(Expr::All);
        }
        next
    }

    /// Append one projected column, replacing a lone `*`.
    pub fn column(&self, column: impl Into<Expr>) -> Self {
        let mut next = self.clone();
        if next.columns.is_all() {
            next.columns = ExprList::new();
        }
        next.columns.push(column);
        next
    }

    pub fn distinct(&self) -> Self {
        let mut next = self.clone();
        next.distinct = true;
        next
    }

    pub fn from_table(&self) -> &TableRef {
        &self.from
    }

    pub fn projection(&self) -> &ExprList {
        &self.columns
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }
}

impl Joinable for Select {
    fn joins_mut(&mut self) -> &mut Joins {
        &mut self.joins
    }
}

impl RowsFiltered for Select {
    fn filter_mut(&mut self) -> &mut Filter {
        &mut self.filter
    }
}

impl Grouped for Select {
    fn grouping_mut(&mut self) -> &mut Grouping {
        &mut self.grouping
    }
}

impl Ordered for Select {
    fn ordering_mut(&mut self) -> &mut Ordering {
        &mut self.ordering
    }
}

impl Statement for Select {
    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn target(&self) -> Relation {
        Relation::Table(self.from.table().clone())
    }

    fn touched(&self) -> Vec<&TableRef> {
        std::iter::once(&self.from)
            .chain(self.joins.iter().map(|j| j.table()))
            .collect()
    }

    fn render_lines(&self, scope: &Scope) -> Vec<String> {
        let mut lines = vec![
            if self.distinct { "SELECT DISTINCT" } else { "SELECT" }.to_string(),
            format!("{INDENT}{}", self.columns.render(scope.declaring())),
            "FROM".to_string(),
            format!("{INDENT}{}", self.from.render()),
        ];
        self.joins.render_into(scope, &mut lines);
        self.filter.render_into("WHERE", scope, &mut lines);
        self.grouping.render_into(scope, &mut lines);
        self.ordering.render_into(scope, &mut lines);
        lines
    }
}
