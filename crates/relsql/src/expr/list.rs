//! Ordered containers: comma-joined expression lists and AND/OR condition lists.

use super::binary::Condition;
use super::context::RenderCtx;
use super::Expr;
use std::fmt;

/// A comma-separated, append-only list of value expressions.
#[derive(Debug, Clone, Default)]
pub struct ExprList {
    items: Vec<Expr>,
}

impl ExprList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, expr: impl Into<Expr>) {
        self.items.push(expr.into());
    }

    pub fn extend<I, E>(&mut self, exprs: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        self.items.extend(exprs.into_iter().map(Into::into));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.items.iter()
    }

    /// True when the list is exactly the all-columns marker.
    pub fn is_all(&self) -> bool {
        matches!(self.items.as_slice(), [Expr::All])
    }

    pub(crate) fn render(&self, ctx: RenderCtx<'_>) -> String {
        self.items
            .iter()
            .map(|e| e.render(ctx.with_nested(false)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<E: Into<Expr>> FromIterator<E> for ExprList {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ExprList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = super::Scope::new();
        f.write_str(&self.render(scope.declaring()))
    }
}

/// How a condition list joins its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logic {
    And,
    Or,
}

impl Logic {
    pub fn keyword(self) -> &'static str {
        match self {
            Logic::And => " AND ",
            Logic::Or => " OR ",
        }
    }
}

/// A member of a [`ConditionList`].
#[derive(Debug, Clone)]
pub enum Predicate {
    Condition(Condition),
    Group(ConditionList),
}

impl Predicate {
    fn is_empty(&self) -> bool {
        match self {
            Predicate::Condition(_) => false,
            Predicate::Group(list) => list.is_empty(),
        }
    }

    pub(crate) fn render(&self, ctx: RenderCtx<'_>) -> String {
        match self {
            Predicate::Condition(c) => c.render(ctx),
            Predicate::Group(list) => list.render(ctx),
        }
    }
}

impl From<Condition> for Predicate {
    fn from(c: Condition) -> Self {
        Predicate::Condition(c)
    }
}

impl From<ConditionList> for Predicate {
    fn from(list: ConditionList) -> Self {
        Predicate::Group(list)
    }
}

/// An append-only list of predicates joined by AND or OR.
///
/// A list nested inside another list wraps itself in parentheses when it
/// has more than one member, so precedence never depends on the dialect.
#[derive(Debug, Clone)]
pub struct ConditionList {
    logic: Logic,
    members: Vec<Predicate>,
}

impl Default for ConditionList {
    fn default() -> Self {
        Self::new(Logic::And)
    }
}

impl ConditionList {
    pub fn new(logic: Logic) -> Self {
        Self {
            logic,
            members: Vec::new(),
        }
    }

    pub fn logic(&self) -> Logic {
        self.logic
    }

    pub fn push(&mut self, predicate: impl Into<Predicate>) {
        self.members.push(predicate.into());
    }

    /// Append and return self (builder form of [`push`](Self::push)).
    pub fn with(mut self, predicate: impl Into<Predicate>) -> Self {
        self.push(predicate);
        self
    }

    /// Combine under AND. Appends directly when this list is already an AND list.
    pub fn and(self, other: impl Into<Predicate>) -> Self {
        match self.logic {
            Logic::And => self.with(other),
            Logic::Or => ConditionList::new(Logic::And).with(self).with(other),
        }
    }

    /// Combine under OR. Appends directly when this list is already an OR list.
    pub fn or(self, other: impl Into<Predicate>) -> Self {
        match self.logic {
            Logic::Or => self.with(other),
            Logic::And => ConditionList::new(Logic::Or).with(self).with(other),
        }
    }

    /// True when no member contributes any SQL.
    pub fn is_empty(&self) -> bool {
        self.members.iter().all(Predicate::is_empty)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub(crate) fn render(&self, ctx: RenderCtx<'_>) -> String {
        let members: Vec<&Predicate> = self.members.iter().filter(|p| !p.is_empty()).collect();
        match members.as_slice() {
            [] => String::new(),
            [only] => only.render(ctx),
            many => {
                let inner = ctx.operand();
                let sql = many
                    .iter()
                    .map(|p| p.render(inner))
                    .collect::<Vec<_>>()
                    .join(self.logic.keyword());
                if ctx.is_nested() {
                    format!("({sql})")
                } else {
                    sql
                }
            }
        }
    }
}

impl fmt::Display for ConditionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = super::Scope::new();
        f.write_str(&self.render(scope.referencing()))
    }
}

/// Build an AND list from predicates.
pub fn and<I, P>(predicates: I) -> ConditionList
where
    I: IntoIterator<Item = P>,
    P: Into<Predicate>,
{
    predicates
        .into_iter()
        .fold(ConditionList::new(Logic::And), |list, p| list.with(p))
}

/// Build an OR list from predicates.
pub fn or<I, P>(predicates: I) -> ConditionList
where
    I: IntoIterator<Item = P>,
    P: Into<Predicate>,
{
    predicates
        .into_iter()
        .fold(ConditionList::new(Logic::Or), |list, p| list.with(p))
}
