//! Clause components shared by the statement kinds.
//!
//! Each component owns the state of one clause and renders its own lines.
//! Statements hold the components they support and call them in grammar
//! order: JOIN, WHERE, GROUP BY, HAVING, ORDER BY.

use super::INDENT;
use crate::error::{SqlError, SqlResult};
use crate::expr::{ConditionList, Expr, ExprList, Field, IntoField, Predicate, Scope};
use crate::schema::TableRef;

fn indented(sql: String) -> String {
    format!("{INDENT}{sql}")
}

/// Join kinds. A join without a kind renders as plain `JOIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Natural,
    Inner,
    Left,
    Right,
    Full,
    LeftOuter,
    RightOuter,
    FullOuter,
    Cross,
}

impl JoinKind {
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Natural => "NATURAL",
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Full => "FULL",
            JoinKind::LeftOuter => "LEFT OUTER",
            JoinKind::RightOuter => "RIGHT OUTER",
            JoinKind::FullOuter => "FULL OUTER",
            JoinKind::Cross => "CROSS",
        }
    }
}

/// One joined relation with its optional ON conditions and USING columns.
#[derive(Debug, Clone)]
pub struct Join {
    table: TableRef,
    kind: Option<JoinKind>,
    on: ConditionList,
    using: Vec<Field>,
}

impl Join {
    pub fn new(table: impl Into<TableRef>, kind: Option<JoinKind>) -> Self {
        Self {
            table: table.into(),
            kind,
            on: ConditionList::default(),
            using: Vec::new(),
        }
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    pub fn kind(&self) -> Option<JoinKind> {
        self.kind
    }

    fn render_into(&self, scope: &Scope, lines: &mut Vec<String>) {
        match self.kind {
            Some(kind) => lines.push(format!("{} JOIN", kind.keyword())),
            None => lines.push("JOIN".to_string()),
        }
        lines.push(indented(self.table.render()));

        if !self.on.is_empty() {
            lines.push("ON".to_string());
            lines.push(indented(self.on.render(scope.referencing())));
        }
        if !self.using.is_empty() {
            // USING names columns present in both relations, never qualified
            let names: Vec<&str> = self.using.iter().map(Field::name).collect();
            lines.push("USING (".to_string());
            lines.push(indented(names.join(", ")));
            lines.push(")".to_string());
        }
    }
}

/// The ordered join list of a statement.
#[derive(Debug, Clone, Default)]
pub struct Joins {
    joins: Vec<Join>,
}

impl Joins {
    pub fn push(&mut self, join: Join) {
        self.joins.push(join);
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Join> {
        self.joins.iter()
    }

    fn last_mut(&mut self, operation: &str) -> SqlResult<&mut Join> {
        self.joins
            .last_mut()
            .ok_or_else(|| SqlError::misuse(format!("{operation} called before any join")))
    }

    pub(crate) fn render_into(&self, scope: &Scope, lines: &mut Vec<String>) {
        for join in &self.joins {
            join.render_into(scope, lines);
        }
    }
}

/// A keyword-introduced condition clause (WHERE or HAVING).
#[derive(Debug, Clone, Default)]
pub struct Filter {
    conditions: ConditionList,
}

impl Filter {
    pub fn push(&mut self, predicate: impl Into<Predicate>) {
        self.conditions.push(predicate);
    }

    pub fn conditions(&self) -> &ConditionList {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub(crate) fn render_into(&self, keyword: &str, scope: &Scope, lines: &mut Vec<String>) {
        if self.conditions.is_empty() {
            return;
        }
        lines.push(keyword.to_string());
        lines.push(indented(self.conditions.render(scope.referencing())));
    }
}

/// GROUP BY columns and the HAVING filter layered on top of them.
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    by: ExprList,
    having: Filter,
}

impl Grouping {
    pub fn columns(&self) -> &ExprList {
        &self.by
    }

    pub fn having(&self) -> &Filter {
        &self.having
    }

    pub(crate) fn render_into(&self, scope: &Scope, lines: &mut Vec<String>) {
        if !self.by.is_empty() {
            lines.push("GROUP BY".to_string());
            lines.push(indented(self.by.render(scope.referencing())));
        }
        self.having.render_into("HAVING", scope, lines);
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn keyword(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Placement of NULLs in an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nulls {
    First,
    Last,
}

impl Nulls {
    pub fn keyword(self) -> &'static str {
        match self {
            Nulls::First => "FIRST",
            Nulls::Last => "LAST",
        }
    }
}

/// One ORDER BY entry: `col[, col...] [ASC|DESC] [NULLS FIRST|LAST]`.
#[derive(Debug, Clone)]
pub struct OrderBy {
    columns: ExprList,
    order: Option<Order>,
    nulls: Option<Nulls>,
}

impl OrderBy {
    pub fn new<I, E>(columns: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Self {
            columns: columns.into_iter().collect(),
            order: None,
            nulls: None,
        }
    }

    pub fn asc(mut self) -> Self {
        self.order = Some(Order::Asc);
        self
    }

    pub fn desc(mut self) -> Self {
        self.order = Some(Order::Desc);
        self
    }

    pub fn nulls(mut self, nulls: Nulls) -> Self {
        self.nulls = Some(nulls);
        self
    }

    fn render(&self, scope: &Scope) -> String {
        let mut sql = self.columns.render(scope.referencing());
        if let Some(order) = self.order {
            sql.push(' ');
            sql.push_str(order.keyword());
        }
        if let Some(nulls) = self.nulls {
            sql.push_str(" NULLS ");
            sql.push_str(nulls.keyword());
        }
        sql
    }
}

/// The ORDER BY entries of a statement.
#[derive(Debug, Clone, Default)]
pub struct Ordering {
    entries: Vec<OrderBy>,
}

impl Ordering {
    pub fn push(&mut self, entry: OrderBy) {
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn render_into(&self, scope: &Scope, lines: &mut Vec<String>) {
        if self.entries.is_empty() {
            return;
        }
        lines.push("ORDER BY".to_string());
        let last = self.entries.len() - 1;
        for (i, entry) in self.entries.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            lines.push(format!("{INDENT}{}{sep}", entry.render(scope)));
        }
    }
}

/// Statements with a join list.
///
/// Every method returns a modified copy and leaves the receiver untouched.
pub trait Joinable: Clone {
    #[doc(hidden)]
    fn joins_mut(&mut self) -> &mut Joins;

    /// Add a join of the given kind (`None` for plain `JOIN`).
    fn join(&self, table: impl Into<TableRef>, kind: Option<JoinKind>) -> Self {
        let mut next = self.clone();
        next.joins_mut().push(Join::new(table, kind));
        next
    }

    fn inner_join(&self, table: impl Into<TableRef>) -> Self {
        self.join(table, Some(JoinKind::Inner))
    }

    fn left_join(&self, table: impl Into<TableRef>) -> Self {
        self.join(table, Some(JoinKind::Left))
    }

    fn right_join(&self, table: impl Into<TableRef>) -> Self {
        self.join(table, Some(JoinKind::Right))
    }

    fn full_join(&self, table: impl Into<TableRef>) -> Self {
        self.join(table, Some(JoinKind::Full))
    }

    fn left_outer_join(&self, table: impl Into<TableRef>) -> Self {
        self.join(table, Some(JoinKind::LeftOuter))
    }

    fn right_outer_join(&self, table: impl Into<TableRef>) -> Self {
        self.join(table, Some(JoinKind::RightOuter))
    }

    fn full_outer_join(&self, table: impl Into<TableRef>) -> Self {
        self.join(table, Some(JoinKind::FullOuter))
    }

    fn cross_join(&self, table: impl Into<TableRef>) -> Self {
        self.join(table, Some(JoinKind::Cross))
    }

    fn natural_join(&self, table: impl Into<TableRef>) -> Self {
        self.join(table, Some(JoinKind::Natural))
    }

    /// Add an ON condition to the most recent join.
    ///
    /// Fails with [`SqlError::Misuse`] when no join has been added yet.
    fn on(&self, condition: impl Into<Predicate>) -> SqlResult<Self> {
        let mut next = self.clone();
        next.joins_mut().last_mut("on")?.on.push(condition);
        Ok(next)
    }

    /// Add USING columns to the most recent join.
    ///
    /// Fails with [`SqlError::Misuse`] when no join has been added yet.
    fn using<I, C>(&self, columns: I) -> SqlResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: IntoField,
    {
        let mut next = self.clone();
        next.joins_mut()
            .last_mut("using")?
            .using
            .extend(columns.into_iter().map(IntoField::into_field));
        Ok(next)
    }
}

/// Statements with a WHERE clause.
pub trait RowsFiltered: Clone {
    #[doc(hidden)]
    fn filter_mut(&mut self) -> &mut Filter;

    /// Append a predicate to WHERE; predicates are combined with AND.
    fn and_where(&self, predicate: impl Into<Predicate>) -> Self {
        let mut next = self.clone();
        next.filter_mut().push(predicate);
        next
    }
}

/// Statements with GROUP BY and HAVING.
pub trait Grouped: Clone {
    #[doc(hidden)]
    fn grouping_mut(&mut self) -> &mut Grouping;

    /// Append GROUP BY columns.
    fn group_by<I, E>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        let mut next = self.clone();
        next.grouping_mut().by.extend(columns);
        next
    }

    /// Append a predicate to HAVING; predicates are combined with AND.
    fn having(&self, predicate: impl Into<Predicate>) -> Self {
        let mut next = self.clone();
        next.grouping_mut().having.push(predicate);
        next
    }
}

/// Statements with ORDER BY.
pub trait Ordered: Clone {
    #[doc(hidden)]
    fn ordering_mut(&mut self) -> &mut Ordering;

    fn order_by(&self, entry: OrderBy) -> Self {
        let mut next = self.clone();
        next.ordering_mut().push(entry);
        next
    }

    fn order_by_asc(&self, column: impl Into<Expr>) -> Self {
        self.order_by(OrderBy::new([column]).asc())
    }

    fn order_by_desc(&self, column: impl Into<Expr>) -> Self {
        self.order_by(OrderBy::new([column]).desc())
    }
}
