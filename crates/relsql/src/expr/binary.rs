//! Binary expressions: comparisons (`Condition`) and arithmetic/bitwise
//! operations (`Operation`).
//!
//! Both share one rendering algorithm. They are distinct types so that only
//! conditions can be used in WHERE/HAVING/ON and only operations can be
//! used where a value is expected.

use super::context::RenderCtx;
use super::list::{ConditionList, Logic, Predicate};
use super::Expr;
use std::fmt;
use std::sync::Arc;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
        }
    }
}

/// Arithmetic and bitwise operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
            ArithOp::BitAnd => "&",
            ArithOp::BitOr => "|",
            ArithOp::BitXor => "^",
            ArithOp::Shl => "<<",
            ArithOp::Shr => ">>",
        }
    }
}

fn render_binary(left: &Expr, symbol: &str, right: &Expr, ctx: RenderCtx<'_>) -> String {
    format!(
        "{} {} {}",
        left.render(ctx.operand()),
        symbol,
        right.render(ctx.operand())
    )
}

/// A comparison: `left op right`.
#[derive(Debug, Clone)]
pub struct Condition {
    op: CompareOp,
    left: Expr,
    right: Expr,
}

impl Condition {
    pub fn new(op: CompareOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            op,
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    /// Combine with another predicate under AND.
    pub fn and(self, other: impl Into<Predicate>) -> ConditionList {
        ConditionList::new(Logic::And).with(self).with(other)
    }

    /// Combine with another predicate under OR.
    pub fn or(self, other: impl Into<Predicate>) -> ConditionList {
        ConditionList::new(Logic::Or).with(self).with(other)
    }

    /// Comparisons bind tighter than AND/OR and never wrap themselves.
    pub(crate) fn render(&self, ctx: RenderCtx<'_>) -> String {
        render_binary(&self.left, self.op.symbol(), &self.right, ctx)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = super::Scope::new();
        f.write_str(&self.render(scope.referencing()))
    }
}

/// An arithmetic or bitwise operation: `left op right`.
#[derive(Debug, Clone)]
pub struct Operation {
    op: ArithOp,
    left: Expr,
    right: Expr,
}

impl Operation {
    pub fn new(op: ArithOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            op,
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn op(&self) -> ArithOp {
        self.op
    }

    pub(crate) fn render(&self, ctx: RenderCtx<'_>) -> String {
        let sql = render_binary(&self.left, self.op.symbol(), &self.right, ctx);
        if ctx.is_nested() {
            format!("({sql})")
        } else {
            sql
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = super::Scope::new();
        f.write_str(&self.render(scope.referencing()))
    }
}

impl From<Operation> for Expr {
    fn from(op: Operation) -> Self {
        Expr::Operation(Box::new(op))
    }
}

/// A value expression introduced under a short name.
///
/// Renders `target AS name` where it is declared (SELECT list, FROM/JOIN)
/// and just `name` everywhere else.
#[derive(Debug, Clone)]
pub struct Alias {
    target: Expr,
    name: Arc<str>,
}

impl Alias {
    pub fn new(target: impl Into<Expr>, name: impl Into<Arc<str>>) -> Self {
        Self {
            target: target.into(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &Expr {
        &self.target
    }

    pub(crate) fn render(&self, ctx: RenderCtx<'_>) -> String {
        if ctx.declares() {
            format!("{} AS {}", self.target.render(ctx.reference()), self.name)
        } else {
            self.name.to_string()
        }
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = super::Scope::new();
        f.write_str(&self.render(scope.declaring()))
    }
}

impl From<Alias> for Expr {
    fn from(alias: Alias) -> Self {
        Expr::Alias(Box::new(alias))
    }
}
