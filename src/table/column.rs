use std::fmt;
use std::sync::Arc;

use crate::models::{Entity, FieldValue};

type CellFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// One column: an id, a header label, and how to render a cell.
pub struct Column<T> {
    pub id: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    cell: CellFn<T>,
}

impl<T> Column<T> {
    pub fn new(
        id: &'static str,
        header: &'static str,
        cell: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id,
            header,
            sortable: false,
            cell: Arc::new(cell),
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render(&self, row: &T) -> String {
        (self.cell)(row)
    }
}

impl<T: Entity> Column<T> {
    /// The value rows are ordered by: the record field named like the
    /// column, or the rendered cell when no such field exists.
    pub fn sort_value(&self, row: &T) -> FieldValue {
        row.field(self.id)
            .unwrap_or_else(|| FieldValue::Text(self.render(row)))
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header,
            sortable: self.sortable,
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}
