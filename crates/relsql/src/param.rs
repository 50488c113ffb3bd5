//! Bind-parameter placeholder sessions.
//!
//! A [`Params`] session turns logical variable names into placeholder text
//! for one of five driver conventions and remembers what it handed out, so
//! the caller can assemble the matching value list or map afterwards.
//!
//! A session is scoped to one statement render (or one unit of work).
//! Numbered styles restart from `:1` in every new session.
//!
//! # Example
//! ```
//! use relsql::param::{ParamStyle, Params};
//!
//! let mut params = Params::new(ParamStyle::Numeric);
//! assert_eq!(params.next(None).unwrap().as_str(), ":1");
//! assert_eq!(params.next(None).unwrap().as_str(), ":2");
//! assert_eq!(params.count(), 2);
//! ```

use crate::error::{SqlError, SqlResult};
use crate::expr::Expr;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Placeholder convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamStyle {
    /// `?`
    #[default]
    Qmark,
    /// `:1`, `:2`, ...
    Numeric,
    /// `:name`
    Named,
    /// `%s`
    Format,
    /// `%(name)s`
    Pyformat,
}

impl ParamStyle {
    pub const ALL: [ParamStyle; 5] = [
        ParamStyle::Qmark,
        ParamStyle::Numeric,
        ParamStyle::Named,
        ParamStyle::Format,
        ParamStyle::Pyformat,
    ];

    /// The configuration key for this style.
    pub fn key(self) -> &'static str {
        match self {
            ParamStyle::Qmark => "qmark",
            ParamStyle::Numeric => "numeric",
            ParamStyle::Named => "named",
            ParamStyle::Format => "format",
            ParamStyle::Pyformat => "pyformat",
        }
    }

    /// Whether placeholders of this style carry the variable name.
    pub fn is_named(self) -> bool {
        matches!(self, ParamStyle::Named | ParamStyle::Pyformat)
    }
}

impl FromStr for ParamStyle {
    type Err = SqlError;

    fn from_str(key: &str) -> SqlResult<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.key() == key)
            .ok_or_else(|| SqlError::UnsupportedStyle(key.to_string()))
    }
}

impl fmt::Display for ParamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Opaque placeholder text issued by a [`Params`] session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder(String);

impl Placeholder {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Placeholder> for Expr {
    fn from(p: Placeholder) -> Self {
        Expr::Raw(p.0)
    }
}

/// A stateful placeholder provider.
///
/// Every call increments the running count; named calls also record the
/// name (first-seen order, no duplicates). Passing the same name twice to a
/// named style yields the same placeholder text both times while the count
/// still goes up by two; reconciling that with the values submitted to the
/// driver is up to the caller.
///
/// Not meant to be shared between concurrent renders; `next` takes
/// `&mut self`.
#[derive(Debug, Clone)]
pub struct Params {
    style: ParamStyle,
    count: usize,
    names: Vec<String>,
}

impl Params {
    pub fn new(style: ParamStyle) -> Self {
        Self {
            style,
            count: 0,
            names: Vec::new(),
        }
    }

    /// Create a session from a configuration key (`qmark`, `numeric`, ...).
    pub fn for_style(key: &str) -> SqlResult<Self> {
        Ok(Self::new(key.parse()?))
    }

    pub fn style(&self) -> ParamStyle {
        self.style
    }

    /// Issue the next placeholder.
    ///
    /// `name` may be `None` for the anonymous styles (`qmark`, `numeric`,
    /// `format`); the named styles require it.
    pub fn next<'a>(&mut self, name: impl Into<Option<&'a str>>) -> SqlResult<Placeholder> {
        let name = name.into();
        let text = match (self.style, name) {
            (ParamStyle::Qmark, _) => "?".to_string(),
            (ParamStyle::Numeric, _) => format!(":{}", self.count + 1),
            (ParamStyle::Format, _) => "%s".to_string(),
            (ParamStyle::Named, Some(name)) => format!(":{name}"),
            (ParamStyle::Pyformat, Some(name)) => format!("%({name})s"),
            (style, None) => {
                return Err(SqlError::misuse(format!(
                    "parameter style '{style}' requires a variable name"
                )));
            }
        };

        self.count += 1;
        if let Some(name) = name {
            if !self.names.iter().any(|n| n == name) {
                self.names.push(name.to_string());
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "relsql.params",
            style = %self.style,
            name = name.unwrap_or("-"),
            count = self.count,
            placeholder = %text,
        );

        Ok(Placeholder(text))
    }

    /// Issue the next placeholder as an expression node.
    pub fn bind<'a>(&mut self, name: impl Into<Option<&'a str>>) -> SqlResult<Expr> {
        self.next(name).map(Expr::from)
    }

    /// Number of placeholders issued so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Distinct names seen so far, in first-seen order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Forget everything issued so far.
    pub fn reset(&mut self) {
        self.count = 0;
        self.names.clear();
    }
}
