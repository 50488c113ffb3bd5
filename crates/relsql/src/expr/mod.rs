//! Expression node model.
//!
//! Every piece of SQL text is produced by one of these nodes:
//!
//! - [`Field`]: a column reference, qualified as `owner.name` when the render
//!   scope asks for it
//! - [`Alias`]: `expr AS name` where declared, `name` everywhere else
//! - [`Operation`] / [`Condition`]: arithmetic and comparison expressions
//! - [`ExprList`] / [`ConditionList`]: comma lists and AND/OR groups
//! - [`Aggregate`]: `COUNT(*)`, `SUM(DISTINCT x)`, ...
//!
//! # Example
//! ```
//! use relsql::expr::{or, ExprExt, Field};
//!
//! let age = Field::new("age");
//! let role = Field::new("role");
//! let cond = or([role.clone().eq("admin"), role.eq("owner")]).and((age + 1).gt(18));
//! assert_eq!(cond.to_string(), "(role = 'admin' OR role = 'owner') AND (age + 1) > 18");
//! ```

mod aggregate;
mod binary;
mod context;
mod field;
mod list;
mod value;

pub use aggregate::{Aggregate, avg, count, count_all, max, min, sum};
pub use binary::{Alias, ArithOp, CompareOp, Condition, Operation};
pub use context::{RenderCtx, Scope};
pub use field::{Field, IntoField};
pub use list::{ConditionList, ExprList, Logic, Predicate, and, or};
pub use value::Value;

use std::fmt;
use std::sync::Arc;

/// A value-position expression.
///
/// This is a closed set: literal values and raw fragments are resolved to a
/// variant when the node is built, never at render time.
#[derive(Debug, Clone)]
pub enum Expr {
    /// The all-columns marker `*`.
    All,
    Field(Field),
    Alias(Box<Alias>),
    Operation(Box<Operation>),
    Aggregate(Box<Aggregate>),
    /// A literal, rendered as SQL literal text.
    Value(Value),
    /// A raw fragment rendered verbatim (placeholders, function calls, ...).
    Raw(String),
}

impl Expr {
    /// Render this expression in the given context.
    pub fn render(&self, ctx: RenderCtx<'_>) -> String {
        match self {
            Expr::All => "*".to_string(),
            Expr::Field(field) => field.render(ctx),
            Expr::Alias(alias) => alias.render(ctx),
            Expr::Operation(op) => op.render(ctx),
            Expr::Aggregate(agg) => agg.render(ctx),
            Expr::Value(v) => v.render(),
            Expr::Raw(sql) => sql.clone(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = Scope::new();
        f.write_str(&self.render(scope.declaring()))
    }
}

/// The all-columns marker `*`.
pub fn all() -> Expr {
    Expr::All
}

/// A raw SQL fragment, inserted verbatim.
pub fn raw(sql: impl Into<String>) -> Expr {
    Expr::Raw(sql.into())
}

/// A literal value.
pub fn lit(value: impl Into<Value>) -> Expr {
    Expr::Value(value.into())
}

/// Builder methods shared by all value-expression nodes.
///
/// Comparisons return a [`Condition`] (usable in WHERE/HAVING/ON); aliasing
/// returns an [`Alias`] (usable in SELECT lists). Arithmetic and bitwise
/// operations are available through the `std::ops` operators.
pub trait ExprExt: Into<Expr> + Sized {
    /// `self = rhs`
    fn eq(self, rhs: impl Into<Expr>) -> Condition {
        Condition::new(CompareOp::Eq, self, rhs)
    }

    /// `self <> rhs`
    fn ne(self, rhs: impl Into<Expr>) -> Condition {
        Condition::new(CompareOp::Ne, self, rhs)
    }

    /// `self < rhs`
    fn lt(self, rhs: impl Into<Expr>) -> Condition {
        Condition::new(CompareOp::Lt, self, rhs)
    }

    /// `self <= rhs`
    fn lte(self, rhs: impl Into<Expr>) -> Condition {
        Condition::new(CompareOp::Lte, self, rhs)
    }

    /// `self > rhs`
    fn gt(self, rhs: impl Into<Expr>) -> Condition {
        Condition::new(CompareOp::Gt, self, rhs)
    }

    /// `self >= rhs`
    fn gte(self, rhs: impl Into<Expr>) -> Condition {
        Condition::new(CompareOp::Gte, self, rhs)
    }

    /// Introduce this expression under a short name.
    fn alias(self, name: impl Into<Arc<str>>) -> Alias {
        Alias::new(self, name)
    }
}

macro_rules! impl_binop {
    ($ty:ty, $($trait:ident :: $method:ident => $op:expr),* $(,)?) => {
        $(
            impl<R: Into<Expr>> std::ops::$trait<R> for $ty {
                type Output = Operation;

                fn $method(self, rhs: R) -> Operation {
                    Operation::new($op, self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_expr_node {
    ($($ty:ty),*) => {
        $(
            impl ExprExt for $ty {}

            impl_binop!($ty,
                Add::add => ArithOp::Add,
                Sub::sub => ArithOp::Sub,
                Mul::mul => ArithOp::Mul,
                Div::div => ArithOp::Div,
                Rem::rem => ArithOp::Rem,
                BitAnd::bitand => ArithOp::BitAnd,
                BitOr::bitor => ArithOp::BitOr,
                BitXor::bitxor => ArithOp::BitXor,
                Shl::shl => ArithOp::Shl,
                Shr::shr => ArithOp::Shr,
            );
        )*
    };
}

impl_expr_node!(Expr, Field, Operation, Aggregate);

impl ExprExt for Alias {}
