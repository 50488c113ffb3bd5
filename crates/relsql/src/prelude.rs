//! Convenient imports for typical `relsql` usage.
//!
//! ```
//! use relsql::prelude::*;
//! ```
//!
//! Brings the schema types, the builder traits and the expression helpers
//! into scope.

pub use crate::expr::{
    Expr, ExprExt, Field, all, and, avg, count, count_all, lit, max, min, or, raw, sum,
};
pub use crate::param::{ParamStyle, Params};
pub use crate::schema::{Column, Columns, Index, Table, TableRef};
pub use crate::stmt::{
    Delete, Grouped, Insert, JoinKind, Joinable, Nulls, OrderBy, Ordered, RowsFiltered, Select,
    Statement, Update, render,
};
pub use crate::{SqlError, SqlResult};
