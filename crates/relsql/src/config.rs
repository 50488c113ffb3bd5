//! Schema configuration loaded from TOML.
//!
//! ```toml
//! param_style = "named"
//!
//! [[tables]]
//! name = "users"
//! columns = ["id INTEGER PRIMARY KEY", "name TEXT NOT NULL"]
//! unique = [["name"]]
//!
//! [[indexes]]
//! name = "users_name_idx"
//! table = "users"
//! columns = ["name"]
//! ```

use crate::error::{SqlError, SqlResult};
use crate::expr::Field;
use crate::param::{ParamStyle, Params};
use crate::schema::{Columns, Index, Table};
use crate::stmt::Statement;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub param_style: ParamStyle,

    #[serde(default)]
    pub tables: Vec<TableConfig>,

    #[serde(default)]
    pub indexes: Vec<IndexConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub primary_key: Vec<String>,
    #[serde(default)]
    pub unique: Vec<Vec<String>>,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    pub name: String,
    pub table: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub unique: bool,
}

impl SchemaConfig {
    pub fn from_toml_str(raw: &str) -> SqlResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SqlResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SqlError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Validate the configuration and build the schema objects.
    pub fn build(&self) -> SqlResult<Schema> {
        let mut tables: Vec<Table> = Vec::with_capacity(self.tables.len());
        for def in &self.tables {
            if tables.iter().any(|t| t.name() == def.name) {
                return Err(SqlError::config(format!("duplicate table: {}", def.name)));
            }
            tables.push(def.build()?);
        }

        let mut indexes: Vec<Index> = Vec::with_capacity(self.indexes.len());
        for def in &self.indexes {
            if indexes.iter().any(|i| i.name() == def.name) {
                return Err(SqlError::config(format!("duplicate index: {}", def.name)));
            }
            if def.columns.is_empty() {
                return Err(SqlError::config(format!("index {} has no columns", def.name)));
            }
            let table = tables
                .iter()
                .find(|t| t.name() == def.table)
                .ok_or_else(|| SqlError::lookup("table", &def.table))?;
            let columns = def
                .columns
                .iter()
                .map(|c| table.column(c))
                .collect::<SqlResult<Vec<_>>>()?;
            let index = table.index(def.name.as_str(), columns);
            indexes.push(if def.unique { index.unique() } else { index });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "relsql.config",
            tables = tables.len(),
            indexes = indexes.len(),
            param_style = %self.param_style,
            "schema built"
        );

        Ok(Schema {
            param_style: self.param_style,
            tables,
            indexes,
        })
    }
}

impl TableConfig {
    fn build(&self) -> SqlResult<Table> {
        let columns = Columns::parse(&self.columns)?;
        if columns.len() != self.columns.len() {
            return Err(SqlError::config(format!(
                "duplicate column definition in table {}",
                self.name
            )));
        }
        let mut table = Table::new(self.name.as_str(), columns);

        if !self.primary_key.is_empty() {
            let pk = lookup_columns(&table, &self.primary_key)?;
            table = table.primary_key(pk);
        }
        for group in &self.unique {
            if group.is_empty() {
                return Err(SqlError::config(format!(
                    "empty unique group in table {}",
                    self.name
                )));
            }
            let cols = lookup_columns(&table, group)?;
            table = table.unique(cols);
        }
        for option in &self.options {
            table = table.option(option.as_str());
        }
        Ok(table)
    }
}

fn lookup_columns(table: &Table, names: &[String]) -> SqlResult<Vec<Field>> {
    names.iter().map(|name| table.column(name)).collect()
}

/// Tables and indexes built from a [`SchemaConfig`].
#[derive(Debug, Clone)]
pub struct Schema {
    param_style: ParamStyle,
    tables: Vec<Table>,
    indexes: Vec<Index>,
}

impl Schema {
    pub fn table(&self, name: &str) -> SqlResult<&Table> {
        self.tables
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| SqlError::lookup("table", name))
    }

    pub fn index(&self, name: &str) -> SqlResult<&Index> {
        self.indexes
            .iter()
            .find(|i| i.name() == name)
            .ok_or_else(|| SqlError::lookup("index", name))
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    pub fn param_style(&self) -> ParamStyle {
        self.param_style
    }

    /// A fresh placeholder session in the configured style.
    pub fn params(&self) -> Params {
        Params::new(self.param_style)
    }

    /// `CREATE ... IF NOT EXISTS` for every table, then every index.
    pub fn bootstrap(&self) -> Vec<String> {
        let tables = self.tables.iter().map(|t| t.create().if_not_exists().to_sql());
        let indexes = self.indexes.iter().map(|i| i.create().if_not_exists().to_sql());
        tables.chain(indexes).collect()
    }

    /// `DROP ... IF EXISTS` for every index, then every table, in reverse
    /// declaration order.
    pub fn teardown(&self) -> Vec<String> {
        let indexes = self.indexes.iter().rev().map(|i| i.drop().if_exists().to_sql());
        let tables = self.tables.iter().rev().map(|t| t.drop().if_exists().to_sql());
        indexes.chain(tables).collect()
    }
}
