use super::table::Table;
use crate::expr::{Field, IntoField};
use crate::stmt::{CreateIndex, DropIndex};
use std::sync::Arc;

#[derive(Debug, Clone)]
struct IndexDef {
    name: Arc<str>,
    table: Table,
    columns: Vec<Field>,
    unique: bool,
}

/// A named index over columns of one table.
#[derive(Debug, Clone)]
pub struct Index {
    def: Arc<IndexDef>,
}

impl Index {
    pub fn new<I, C>(name: impl Into<Arc<str>>, table: &Table, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoField,
    {
        Self {
            def: Arc::new(IndexDef {
                name: name.into(),
                table: table.clone(),
                columns: columns.into_iter().map(IntoField::into_field).collect(),
                unique: false,
            }),
        }
    }

    /// Make this a `UNIQUE` index.
    pub fn unique(mut self) -> Self {
        Arc::make_mut(&mut self.def).unique = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn table(&self) -> &Table {
        &self.def.table
    }

    pub fn columns(&self) -> &[Field] {
        &self.def.columns
    }

    pub fn is_unique(&self) -> bool {
        self.def.unique
    }

    pub fn create(&self) -> CreateIndex {
        CreateIndex::new(self.clone())
    }

    pub fn drop(&self) -> DropIndex {
        DropIndex::new(self.clone())
    }
}
