//! Schema statements: CREATE/DROP/ALTER TABLE and CREATE/DROP INDEX.
//!
//! Column lists in these statements always render as bare names.

use super::{INDENT, Statement, StatementKind};
use crate::expr::{Field, Scope};
use crate::schema::{Column, Index, Relation, Table, TableConstraint};

/// `CREATE TABLE [IF NOT EXISTS] name (defs...) [options]`
#[derive(Debug, Clone)]
pub struct CreateTable {
    table: Table,
    if_not_exists: bool,
}

impl CreateTable {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            if_not_exists: false,
        }
    }

    pub fn if_not_exists(&self) -> Self {
        Self {
            if_not_exists: true,
            ..self.clone()
        }
    }
}

impl Statement for CreateTable {
    fn kind(&self) -> StatementKind {
        StatementKind::CreateTable
    }

    fn target(&self) -> Relation {
        Relation::Table(self.table.clone())
    }

    fn render_lines(&self, _scope: &Scope) -> Vec<String> {
        let modifier = if self.if_not_exists { "IF NOT EXISTS " } else { "" };
        let mut lines = vec![format!("CREATE TABLE {modifier}{} (", self.table.name())];

        let defs: Vec<String> = self
            .table
            .columns()
            .iter()
            .map(Column::definition)
            .chain(self.table.constraints().iter().map(TableConstraint::definition))
            .collect();
        let last = defs.len().saturating_sub(1);
        for (i, def) in defs.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            lines.push(format!("{INDENT}{def}{sep}"));
        }

        let options = self.table.options();
        if options.is_empty() {
            lines.push(")".to_string());
        } else {
            lines.push(format!(") {}", options.join(", ")));
        }
        lines
    }
}

/// `DROP TABLE [IF EXISTS] name`
#[derive(Debug, Clone)]
pub struct DropTable {
    table: Table,
    if_exists: bool,
}

impl DropTable {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            if_exists: false,
        }
    }

    pub fn if_exists(&self) -> Self {
        Self {
            if_exists: true,
            ..self.clone()
        }
    }
}

impl Statement for DropTable {
    fn kind(&self) -> StatementKind {
        StatementKind::DropTable
    }

    fn target(&self) -> Relation {
        Relation::Table(self.table.clone())
    }

    fn render_lines(&self, _scope: &Scope) -> Vec<String> {
        let modifier = if self.if_exists { "IF EXISTS " } else { "" };
        vec![format!("DROP TABLE {modifier}{}", self.table.name())]
    }
}

/// One ALTER TABLE action.
#[derive(Debug, Clone)]
pub enum AlterAction {
    RenameTo(String),
    AddColumn(Column),
    DropColumn(String),
}

/// `ALTER TABLE name <action>`
#[derive(Debug, Clone)]
pub struct AlterTable {
    table: Table,
    action: AlterAction,
}

impl AlterTable {
    pub fn new(table: Table, action: AlterAction) -> Self {
        Self { table, action }
    }

    pub fn rename_to(table: Table, name: impl Into<String>) -> Self {
        Self::new(table, AlterAction::RenameTo(name.into()))
    }

    pub fn add_column(table: Table, column: Column) -> Self {
        Self::new(table, AlterAction::AddColumn(column))
    }

    pub fn drop_column(table: Table, name: impl Into<String>) -> Self {
        Self::new(table, AlterAction::DropColumn(name.into()))
    }

    pub fn action(&self) -> &AlterAction {
        &self.action
    }
}

impl Statement for AlterTable {
    fn kind(&self) -> StatementKind {
        StatementKind::AlterTable
    }

    fn target(&self) -> Relation {
        Relation::Table(self.table.clone())
    }

    fn render_lines(&self, _scope: &Scope) -> Vec<String> {
        let action = match &self.action {
            AlterAction::RenameTo(name) => format!("RENAME TO {name}"),
            AlterAction::AddColumn(column) => format!("ADD COLUMN {}", column.definition()),
            AlterAction::DropColumn(name) => format!("DROP COLUMN {name}"),
        };
        vec![format!("ALTER TABLE {}", self.table.name()), action]
    }
}

/// `CREATE [UNIQUE] INDEX [IF NOT EXISTS] name ON table (cols)`
#[derive(Debug, Clone)]
pub struct CreateIndex {
    index: Index,
    if_not_exists: bool,
}

impl CreateIndex {
    pub fn new(index: Index) -> Self {
        Self {
            index,
            if_not_exists: false,
        }
    }

    pub fn if_not_exists(&self) -> Self {
        Self {
            if_not_exists: true,
            ..self.clone()
        }
    }
}

impl Statement for CreateIndex {
    fn kind(&self) -> StatementKind {
        StatementKind::CreateIndex
    }

    fn target(&self) -> Relation {
        Relation::Index(self.index.clone())
    }

    fn render_lines(&self, _scope: &Scope) -> Vec<String> {
        let unique = if self.index.is_unique() { "UNIQUE " } else { "" };
        let modifier = if self.if_not_exists { "IF NOT EXISTS " } else { "" };
        let columns: Vec<&str> = self.index.columns().iter().map(Field::name).collect();
        vec![
            format!("CREATE {unique}INDEX {modifier}{}", self.index.name()),
            format!("ON {} (", self.index.table().name()),
            format!("{INDENT}{}", columns.join(", ")),
            ")".to_string(),
        ]
    }
}

/// `DROP INDEX [IF EXISTS] name`
#[derive(Debug, Clone)]
pub struct DropIndex {
    index: Index,
    if_exists: bool,
}

impl DropIndex {
    pub fn new(index: Index) -> Self {
        Self {
            index,
            if_exists: false,
        }
    }

    pub fn if_exists(&self) -> Self {
        Self {
            if_exists: true,
            ..self.clone()
        }
    }
}

impl Statement for DropIndex {
    fn kind(&self) -> StatementKind {
        StatementKind::DropIndex
    }

    fn target(&self) -> Relation {
        Relation::Index(self.index.clone())
    }

    fn render_lines(&self, _scope: &Scope) -> Vec<String> {
        let modifier = if self.if_exists { "IF EXISTS " } else { "" };
        vec![format!("DROP INDEX {modifier}{}", self.index.name())]
    }
}
