use super::context::RenderCtx;
use super::list::ExprList;
use super::Expr;
use std::fmt;
use std::sync::Arc;

/// A named aggregate call: `NAME([DISTINCT ]arg, ...)`.
///
/// With no arguments it aggregates over all columns: `COUNT(*)`.
#[derive(Debug, Clone)]
pub struct Aggregate {
    name: Arc<str>,
    args: ExprList,
    distinct: bool,
}

impl Aggregate {
    pub fn new<I, E>(name: impl Into<Arc<str>>, args: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        let mut args: ExprList = args.into_iter().collect();
        if args.is_empty() {
            args.push(Expr::All);
        }
        Self {
            name: name.into(),
            args,
            distinct: false,
        }
    }

    /// An aggregate over all columns, e.g. `COUNT(*)`.
    pub fn all(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, [Expr::All])
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub(crate) fn render(&self, ctx: RenderCtx<'_>) -> String {
        format!(
            "{}({}{})",
            self.name,
            if self.distinct { "DISTINCT " } else { "" },
            self.args.render(ctx.reference())
        )
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = super::Scope::new();
        f.write_str(&self.render(scope.referencing()))
    }
}

impl From<Aggregate> for Expr {
    fn from(agg: Aggregate) -> Self {
        Expr::Aggregate(Box::new(agg))
    }
}

/// `COUNT(*)`
pub fn count_all() -> Aggregate {
    Aggregate::all("COUNT")
}

/// `COUNT(args...)`
pub fn count<I, E>(args: I) -> Aggregate
where
    I: IntoIterator<Item = E>,
    E: Into<Expr>,
{
    Aggregate::new("COUNT", args)
}

/// `SUM(expr)`
pub fn sum(expr: impl Into<Expr>) -> Aggregate {
    Aggregate::new("SUM", [expr.into()])
}

/// `AVG(expr)`
pub fn avg(expr: impl Into<Expr>) -> Aggregate {
    Aggregate::new("AVG", [expr.into()])
}

/// `MIN(expr)`
pub fn min(expr: impl Into<Expr>) -> Aggregate {
    Aggregate::new("MIN", [expr.into()])
}

/// `MAX(expr)`
pub fn max(expr: impl Into<Expr>) -> Aggregate {
    Aggregate::new("MAX", [expr.into()])
}
