//! Schema objects: columns, tables and indexes.
//!
//! Tables and indexes are immutable once built and cheap to clone; every
//! statement factory on them returns a fresh builder that shares the
//! definition.

mod column;
mod index;
mod table;

pub use column::{Column, Columns};
pub use index::Index;
pub use table::{ConstraintKind, Relation, Table, TableConstraint, TableRef};
