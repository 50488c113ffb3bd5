//! Render-time state shared by every node of one statement.

use std::collections::{HashMap, HashSet};

/// Qualification decision for one statement render.
///
/// A scope is computed once per render from the relations a statement
/// touches and then threaded read-only through every node.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    qualify: bool,
    /// real relation name -> alias used in this statement
    aliases: HashMap<String, String>,
}

impl Scope {
    /// An unqualified scope with no aliases.
    pub fn new() -> Self {
        Self::default()
    }

    /// A scope that forces `owner.name` rendering.
    pub fn qualified() -> Self {
        Self {
            qualify: true,
            aliases: HashMap::new(),
        }
    }

    /// Build the scope for a set of touched relations.
    ///
    /// Each item is `(real_name, alias)`. Qualification is forced when more
    /// than one distinct relation is touched or when any of them is aliased.
    /// If the same relation appears under several aliases the last one wins;
    /// keeping alias names unambiguous is up to the caller.
    pub fn for_relations<'a>(relations: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) -> Self {
        let mut distinct = HashSet::new();
        let mut aliases = HashMap::new();
        for (name, alias) in relations {
            distinct.insert(name);
            if let Some(alias) = alias {
                aliases.insert(name.to_string(), alias.to_string());
            }
        }
        Self {
            qualify: distinct.len() > 1 || !aliases.is_empty(),
            aliases,
        }
    }

    /// Register an alias for a relation. Forces qualification.
    pub fn with_alias(mut self, relation: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.insert(relation.into(), alias.into());
        self.qualify = true;
        self
    }

    /// Whether column references render with their owner prefix.
    pub fn is_qualified(&self) -> bool {
        self.qualify
    }

    /// The alias a relation is known by in this scope, if any.
    pub fn alias_for(&self, relation: &str) -> Option<&str> {
        self.aliases.get(relation).map(String::as_str)
    }

    /// Resolve the name to prefix a column of `relation` with.
    ///
    /// Falls back to the real name when the relation has no alias.
    pub fn resolve<'a>(&'a self, relation: &'a str) -> &'a str {
        self.alias_for(relation).unwrap_or(relation)
    }

    /// Context for a top-level declaration position (SELECT list, FROM).
    pub fn declaring(&self) -> RenderCtx<'_> {
        RenderCtx {
            scope: self,
            declare: true,
            nested: false,
        }
    }

    /// Context for a top-level reference position (WHERE, GROUP BY, ...).
    pub fn referencing(&self) -> RenderCtx<'_> {
        RenderCtx {
            scope: self,
            declare: false,
            nested: false,
        }
    }
}

/// Per-position render flags.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx<'a> {
    scope: &'a Scope,
    declare: bool,
    nested: bool,
}

impl<'a> RenderCtx<'a> {
    pub fn scope(&self) -> &'a Scope {
        self.scope
    }

    /// Aliases render as `expr AS name` here instead of just `name`.
    pub fn declares(&self) -> bool {
        self.declare
    }

    /// The caller wants composite nodes to wrap themselves in parentheses.
    pub fn is_nested(&self) -> bool {
        self.nested
    }

    /// Same scope, reference position, not nested.
    pub fn reference(self) -> Self {
        Self {
            declare: false,
            nested: false,
            ..self
        }
    }

    /// Same scope, reference position, nested inside a composite.
    pub fn operand(self) -> Self {
        Self {
            declare: false,
            nested: true,
            ..self
        }
    }

    pub(crate) fn with_nested(self, nested: bool) -> Self {
        Self { nested, ..self }
    }
}
