use super::column::{Column, Columns};
use super::index::Index;
use crate::error::SqlResult;
use crate::expr::{Expr, Field, IntoField};
use crate::stmt::{AlterTable, CreateTable, Delete, DropTable, Insert, Select, Update};
use std::fmt;
use std::sync::Arc;

/// Kind of a table-level constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
}

impl ConstraintKind {
    pub fn keyword(self) -> &'static str {
        match self {
            ConstraintKind::PrimaryKey => "PRIMARY KEY",
            ConstraintKind::Unique => "UNIQUE",
        }
    }
}

/// A table-level constraint over a column list: `UNIQUE (a, b)`.
#[derive(Debug, Clone)]
pub struct TableConstraint {
    kind: ConstraintKind,
    columns: Vec<Field>,
}

impl TableConstraint {
    pub fn new<I, C>(kind: ConstraintKind, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoField,
    {
        Self {
            kind,
            columns: columns.into_iter().map(IntoField::into_field).collect(),
        }
    }

    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    pub fn columns(&self) -> &[Field] {
        &self.columns
    }

    /// Constraint columns always render unqualified.
    pub fn definition(&self) -> String {
        let names: Vec<&str> = self.columns.iter().map(Field::name).collect();
        format!("{} ({})", self.kind.keyword(), names.join(", "))
    }
}

#[derive(Debug, Clone)]
struct TableDef {
    name: Arc<str>,
    columns: Columns,
    constraints: Vec<TableConstraint>,
    options: Vec<String>,
}

/// A table definition.
///
/// Cheap to clone: statements share the definition instead of copying it.
///
/// # Example
/// ```
/// use relsql::prelude::*;
///
/// let users = Table::parse("users", ["id INTEGER PRIMARY KEY", "name TEXT"]).unwrap();
/// let id = users.column("id").unwrap();
/// let sql = users.select().and_where(id.eq(5)).to_sql();
/// assert_eq!(sql, "SELECT\n    *\nFROM\n    users\nWHERE\n    id = 5");
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    def: Arc<TableDef>,
}

impl Table {
    /// Create a table and attach the columns to it.
    pub fn new(name: impl Into<Arc<str>>, mut columns: Columns) -> Self {
        let name = name.into();
        columns.attach(&name);
        Self {
            def: Arc::new(TableDef {
                name,
                columns,
                constraints: Vec::new(),
                options: Vec::new(),
            }),
        }
    }

    /// Create a table from column definition strings.
    pub fn parse<I, S>(name: impl Into<Arc<str>>, definitions: I) -> SqlResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(name, Columns::parse(definitions)?))
    }

    /// Add a table-level `PRIMARY KEY (...)`.
    pub fn primary_key<I, C>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoField,
    {
        self.constraint(TableConstraint::new(ConstraintKind::PrimaryKey, columns))
    }

    /// Add a table-level `UNIQUE (...)`.
    pub fn unique<I, C>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoField,
    {
        self.constraint(TableConstraint::new(ConstraintKind::Unique, columns))
    }

    pub fn constraint(mut self, constraint: TableConstraint) -> Self {
        Arc::make_mut(&mut self.def).constraints.push(constraint);
        self
    }

    /// Add a trailing table option, e.g. `STRICT` or `WITHOUT ROWID`.
    pub fn option(mut self, option: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.def).options.push(option.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn columns(&self) -> &Columns {
        &self.def.columns
    }

    pub fn constraints(&self) -> &[TableConstraint] {
        &self.def.constraints
    }

    pub fn options(&self) -> &[String] {
        &self.def.options
    }

    /// A reference to one of this table's columns.
    pub fn column(&self, name: &str) -> SqlResult<Field> {
        self.def.columns.get(name).map(Column::field)
    }

    /// Like [`column`](Self::column), as a value expression.
    pub fn col(&self, name: &str) -> SqlResult<Expr> {
        self.column(name).map(Expr::Field)
    }

    /// Refer to this table under an alias in a statement.
    pub fn alias(&self, alias: impl Into<Arc<str>>) -> TableRef {
        TableRef {
            table: self.clone(),
            alias: Some(alias.into()),
        }
    }

    /// Whether two handles point to the same definition.
    pub fn same_as(&self, other: &Table) -> bool {
        Arc::ptr_eq(&self.def, &other.def)
    }

    pub fn create(&self) -> CreateTable {
        CreateTable::new(self.clone())
    }

    pub fn drop(&self) -> DropTable {
        DropTable::new(self.clone())
    }

    pub fn rename_to(&self, name: impl Into<String>) -> AlterTable {
        AlterTable::rename_to(self.clone(), name)
    }

    pub fn add_column(&self, column: Column) -> AlterTable {
        AlterTable::add_column(self.clone(), column)
    }

    pub fn drop_column(&self, name: impl Into<String>) -> AlterTable {
        AlterTable::drop_column(self.clone(), name)
    }

    /// Define an index on this table.
    pub fn index<I, C>(&self, name: impl Into<Arc<str>>, columns: I) -> Index
    where
        I: IntoIterator<Item = C>,
        C: IntoField,
    {
        Index::new(name, self, columns)
    }

    /// `SELECT * FROM table`
    pub fn select(&self) -> Select {
        Select::new(self)
    }

    /// `SELECT cols FROM table`
    pub fn select_columns<I, E>(&self, columns: I) -> Select
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Select::new(self).columns(columns)
    }

    pub fn insert(&self) -> Insert {
        Insert::new(self)
    }

    /// INSERT from `(column, value)` pairs, kept in the given order.
    pub fn insert_values<I, C, V>(&self, pairs: I) -> Insert
    where
        I: IntoIterator<Item = (C, V)>,
        C: IntoField,
        V: Into<Expr>,
    {
        Insert::from_pairs(self, pairs)
    }

    pub fn update(&self) -> Update {
        Update::new(self)
    }

    /// UPDATE with `(column, value)` SET pairs, kept in the given order.
    pub fn update_values<I, C, V>(&self, pairs: I) -> Update
    where
        I: IntoIterator<Item = (C, V)>,
        C: IntoField,
        V: Into<Expr>,
    {
        Update::from_pairs(self, pairs)
    }

    pub fn delete(&self) -> Delete {
        Delete::new(self)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A table as it appears in a statement: optionally under an alias.
#[derive(Debug, Clone)]
pub struct TableRef {
    table: Table,
    alias: Option<Arc<str>>,
}

impl TableRef {
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The real table name.
    pub fn name(&self) -> &str {
        self.table.name()
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Declaration form: `users` or `users AS u`.
    pub fn render(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} AS {}", self.name(), alias),
            None => self.name().to_string(),
        }
    }

    /// A column of the underlying table, owned by the alias when there is one.
    ///
    /// Columns taken from two aliases of the same table stay distinct, which
    /// is what a self-join needs.
    pub fn column(&self, name: &str) -> SqlResult<Field> {
        let field = self.table.column(name)?;
        Ok(match &self.alias {
            Some(alias) => Field::qualified(alias.clone(), field.name()),
            None => field,
        })
    }
}

impl From<Table> for TableRef {
    fn from(table: Table) -> Self {
        Self { table, alias: None }
    }
}

impl From<&Table> for TableRef {
    fn from(table: &Table) -> Self {
        Self {
            table: table.clone(),
            alias: None,
        }
    }
}

impl From<&TableRef> for TableRef {
    fn from(table: &TableRef) -> Self {
        table.clone()
    }
}

/// The primary target of a statement.
#[derive(Debug, Clone)]
pub enum Relation {
    Table(Table),
    Index(Index),
}

impl Relation {
    pub fn name(&self) -> &str {
        match self {
            Relation::Table(t) => t.name(),
            Relation::Index(i) => i.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Table {
        Table::parse("users", ["id INTEGER PRIMARY KEY", "name TEXT"]).unwrap()
    }

    #[test]
    fn test_columns_attached_to_table() {
        let users = users();
        for column in users.columns() {
            assert_eq!(column.owner(), Some("users"));
        }
        assert_eq!(users.column("name").unwrap().qualified_name(), "users.name");
    }

    #[test]
    fn test_column_lookup_miss() {
        let err = users().column("email").unwrap_err();
        assert!(err.is_lookup());
    }

    #[test]
    fn test_constraints_and_options() {
        let t = Table::parse("memberships", ["user_id INTEGER", "group_id INTEGER"])
            .unwrap()
            .primary_key(["user_id", "group_id"])
            .unique(["group_id"])
            .option("WITHOUT ROWID");
        let defs: Vec<String> = t.constraints().iter().map(TableConstraint::definition).collect();
        assert_eq!(defs, ["PRIMARY KEY (user_id, group_id)", "UNIQUE (group_id)"]);
        assert_eq!(t.options(), ["WITHOUT ROWID".to_string()]);
    }

    #[test]
    fn test_table_ref_render() {
        let users = users();
        assert_eq!(TableRef::from(&users).render(), "users");
        let aliased = users.alias("u");
        assert_eq!(aliased.render(), "users AS u");
        assert_eq!(aliased.name(), "users");
        assert_eq!(aliased.alias(), Some("u"));
        assert!(aliased.table().same_as(&users));
    }

    #[test]
    fn test_table_ref_column_owned_by_alias() {
        let users = users();
        let a = users.alias("a");
        assert_eq!(a.column("name").unwrap().qualified_name(), "a.name");
        assert_eq!(TableRef::from(&users).column("name").unwrap().qualified_name(), "users.name");
        assert!(a.column("email").unwrap_err().is_lookup());
    }
}
