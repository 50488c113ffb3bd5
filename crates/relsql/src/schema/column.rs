use crate::error::{SqlError, SqlResult};
use crate::expr::{Expr, ExprExt, Field, IntoField};
use std::str::FromStr;
use std::sync::Arc;

/// A column definition: `name [data-type [constraints...]]`.
///
/// The owning table is recorded once, when the column set is attached to a
/// table, and never changes afterwards. Columns are values: adding a column
/// taken from one table to a new [`Columns`] set stores a detached copy, and
/// the original keeps its owner.
#[derive(Debug, Clone)]
pub struct Column {
    name: Arc<str>,
    data_type: Option<String>,
    constraints: Option<String>,
    owner: Option<Arc<str>>,
}

impl Column {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            data_type: None,
            constraints: None,
            owner: None,
        }
    }

    pub fn with_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    /// Free-form constraint text, e.g. `NOT NULL DEFAULT 0`.
    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    /// Parse a whitespace-delimited definition.
    ///
    /// The first word is the name, the second the data type, and everything
    /// after that is kept verbatim as one constraint string.
    ///
    /// ```
    /// use relsql::schema::Column;
    ///
    /// let col = Column::parse("id INTEGER PRIMARY KEY AUTOINCREMENT").unwrap();
    /// assert_eq!(col.name(), "id");
    /// assert_eq!(col.data_type(), Some("INTEGER"));
    /// assert_eq!(col.constraints(), Some("PRIMARY KEY AUTOINCREMENT"));
    /// ```
    pub fn parse(definition: &str) -> SqlResult<Self> {
        let (name, rest) = split_word(definition.trim());
        if name.is_empty() {
            return Err(SqlError::InvalidColumn(definition.to_string()));
        }
        let (data_type, constraints) = split_word(rest);

        let mut column = Column::new(name);
        if !data_type.is_empty() {
            column.data_type = Some(data_type.to_string());
        }
        if !constraints.is_empty() {
            column.constraints = Some(constraints.to_string());
        }
        Ok(column)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> Option<&str> {
        self.data_type.as_deref()
    }

    pub fn constraints(&self) -> Option<&str> {
        self.constraints.as_deref()
    }

    /// The table this column was attached to, if any.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Definition text used in CREATE TABLE / ADD COLUMN.
    pub fn definition(&self) -> String {
        let mut parts = vec![self.name.as_ref()];
        if let Some(data_type) = &self.data_type {
            parts.push(data_type.as_str());
        }
        if let Some(constraints) = &self.constraints {
            parts.push(constraints.as_str());
        }
        parts.join(" ")
    }

    /// A reference to this column, owned by its table when attached.
    pub fn field(&self) -> Field {
        match &self.owner {
            Some(owner) => Field::qualified(owner.clone(), self.name.clone()),
            None => Field::new(self.name.clone()),
        }
    }

    pub(crate) fn attach(&mut self, owner: &Arc<str>) {
        self.owner = Some(owner.clone());
    }
}

/// Split off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim_start()),
        None => (s, ""),
    }
}

impl FromStr for Column {
    type Err = SqlError;

    fn from_str(s: &str) -> SqlResult<Self> {
        Column::parse(s)
    }
}

impl From<&Column> for Expr {
    fn from(column: &Column) -> Self {
        Expr::Field(column.field())
    }
}

impl From<Column> for Expr {
    fn from(column: Column) -> Self {
        Expr::Field(column.field())
    }
}

impl IntoField for &Column {
    fn into_field(self) -> Field {
        self.field()
    }
}

impl ExprExt for Column {}

/// An ordered, name-addressable set of columns.
#[derive(Debug, Clone, Default)]
pub struct Columns {
    columns: Vec<Column>,
}

impl Columns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every definition with [`Column::parse`].
    pub fn parse<I, S>(definitions: I) -> SqlResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        definitions
            .into_iter()
            .map(|d| Column::parse(d.as_ref()))
            .collect()
    }

    /// Add a column. A column with the same name replaces the earlier one
    /// in place.
    pub fn with(mut self, column: Column) -> Self {
        self.push(column);
        self
    }

    pub fn push(&mut self, mut column: Column) {
        column.owner = None;
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    /// Look a column up by name.
    pub fn get(&self, name: &str) -> SqlResult<&Column> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| SqlError::lookup("column", name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub(crate) fn attach(&mut self, owner: &Arc<str>) {
        for column in &mut self.columns {
            column.attach(owner);
        }
    }
}

impl FromIterator<Column> for Columns {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        let mut columns = Columns::new();
        for column in iter {
            columns.push(column);
        }
        columns
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_only() {
        let col = Column::parse("name").unwrap();
        assert_eq!(col.name(), "name");
        assert_eq!(col.data_type(), None);
        assert_eq!(col.constraints(), None);
        assert_eq!(col.definition(), "name");
    }

    #[test]
    fn test_parse_keeps_constraint_text() {
        let col = Column::parse("  price   REAL NOT NULL  DEFAULT 0 ").unwrap();
        assert_eq!(col.name(), "price");
        assert_eq!(col.data_type(), Some("REAL"));
        assert_eq!(col.constraints(), Some("NOT NULL  DEFAULT 0"));
        assert_eq!(col.definition(), "price REAL NOT NULL  DEFAULT 0");
    }

    #[test]
    fn test_parse_empty_fails() {
        let err = Column::parse("   ").unwrap_err();
        assert!(matches!(err, SqlError::InvalidColumn(_)));
    }

    #[test]
    fn test_columns_lookup() {
        let columns = Columns::parse(["id INTEGER", "name TEXT"]).unwrap();
        assert_eq!(columns.names(), ["id", "name"]);
        assert_eq!(columns.get("name").unwrap().data_type(), Some("TEXT"));

        let err = columns.get("email").unwrap_err();
        assert!(err.is_lookup());
        assert_eq!(err.to_string(), "Unknown column: email");
    }

    #[test]
    fn test_duplicate_name_replaces_in_place() {
        let columns = Columns::new()
            .with(Column::new("id"))
            .with(Column::new("name"))
            .with(Column::new("id").with_type("INTEGER"));
        assert_eq!(columns.names(), ["id", "name"]);
        assert_eq!(columns.get("id").unwrap().data_type(), Some("INTEGER"));
    }

    #[test]
    fn test_push_detaches_copy() {
        let mut owned = Column::new("id");
        owned.attach(&Arc::from("users"));
        let columns = Columns::new().with(owned.clone());
        assert_eq!(owned.owner(), Some("users"));
        assert_eq!(columns.get("id").unwrap().owner(), None);
    }

    #[test]
    fn test_unattached_field_is_bare() {
        let col = Column::new("id");
        assert_eq!(col.owner(), None);
        assert_eq!(col.field().qualified_name(), "id");
    }
}
