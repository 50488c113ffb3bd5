use super::context::RenderCtx;
use super::Expr;
use std::fmt;
use std::sync::Arc;

/// A column reference, optionally owned by a relation.
///
/// The owner is stored by name and never changes after construction.
/// It is only used to compute the qualified form `owner.name`.
#[derive(Debug, Clone)]
pub struct Field {
    name: Arc<str>,
    owner: Option<Arc<str>>,
}

impl Field {
    /// An unowned field; always renders as its bare name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            owner: None,
        }
    }

    /// A field owned by `owner` (a table name or another qualifying parent).
    pub fn qualified(owner: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            owner: Some(owner.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// `owner.name` ignoring any render scope, or the bare name when unowned.
    pub fn qualified_name(&self) -> String {
        match &self.owner {
            Some(owner) => format!("{owner}.{}", self.name),
            None => self.name.to_string(),
        }
    }

    pub(crate) fn render(&self, ctx: RenderCtx<'_>) -> String {
        let scope = ctx.scope();
        match &self.owner {
            Some(owner) if scope.is_qualified() => {
                format!("{}.{}", scope.resolve(owner), self.name)
            }
            _ => self.name.to_string(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Conversion into a [`Field`] for positions that only accept column names
/// (INSERT column lists, SET targets, USING, index and constraint columns).
pub trait IntoField {
    fn into_field(self) -> Field;
}

impl IntoField for Field {
    fn into_field(self) -> Field {
        self
    }
}

impl IntoField for &Field {
    fn into_field(self) -> Field {
        self.clone()
    }
}

impl IntoField for &str {
    fn into_field(self) -> Field {
        Field::new(self)
    }
}

impl IntoField for String {
    fn into_field(self) -> Field {
        Field::new(self)
    }
}

impl From<Field> for Expr {
    fn from(field: Field) -> Self {
        Expr::Field(field)
    }
}

impl From<&Field> for Expr {
    fn from(field: &Field) -> Self {
        Expr::Field(field.clone())
    }
}
