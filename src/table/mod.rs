//! Generic searchable, sortable table.
//!
//! A [`DataTable`] never owns or mutates rows. It renders a filtered then
//! sorted view of whatever slice it is handed and turns add/edit/delete
//! requests into intents the caller acts on.

mod column;
mod query;
mod state;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::models::Entity;

pub use column::Column;
pub use query::{compare_values, matches};
pub use state::{SortOrder, SortState, TableState};

pub const EMPTY_MESSAGE: &str = "No results found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Edit,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Add => "add",
            Action::Edit => "edit",
            Action::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Which row affordances the caller handles. Missing ones are hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Actions {
    pub add: bool,
    pub edit: bool,
    pub delete: bool,
}

impl Actions {
    pub const NONE: Actions = Actions { add: false, edit: false, delete: false };
    pub const ALL: Actions = Actions { add: true, edit: true, delete: true };

    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Add => self.add,
            Action::Edit => self.edit,
            Action::Delete => self.delete,
        }
    }

    /// Whether rows get an actions menu cell.
    pub fn has_row_menu(&self) -> bool {
        self.edit || self.delete
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("column '{0}' is not sortable")]
    NotSortable(&'static str),

    #[error("{table} does not support {action}")]
    ActionUnavailable { action: Action, table: &'static str },

    #[error("no row with id '{0}'")]
    RowNotFound(String),
}

/// An intent raised by the table for its caller to act on.
#[derive(Debug, PartialEq)]
pub enum RowIntent<'a, T> {
    Add,
    Edit(&'a T),
    Delete(&'a T),
}

#[derive(Debug, Clone)]
pub struct DataTable<T> {
    title: &'static str,
    columns: Vec<Column<T>>,
    actions: Actions,
}

impl<T: Entity> DataTable<T> {
    pub fn new(title: &'static str, columns: Vec<Column<T>>) -> Self {
        Self {
            title,
            columns,
            actions: Actions::NONE,
        }
    }

    pub fn with_actions(mut self, actions: Actions) -> Self {
        self.actions = actions;
        self
    }

    fn column(&self, id: &str) -> Result<&Column<T>, TableError> {
        self.columns
            .iter()
            .find(|column| column.id == id)
            .ok_or_else(|| TableError::UnknownColumn(id.to_string()))
    }

    /// Header click.
    pub fn toggle_sort(&self, state: &mut TableState, column_id: &str) -> Result<SortState, TableError> {
        let column = self.column(column_id)?;
        if !column.sortable {
            return Err(TableError::NotSortable(column.id));
        }
        Ok(state.toggle_sort(column.id))
    }

    /// Rows that survive the search, in display order.
    pub fn visible<'a>(&self, rows: &'a [T], state: &TableState) -> Vec<&'a T> {
        let mut visible: Vec<&T> = rows
            .iter()
            .filter(|row| matches(*row, &state.search))
            .collect();

        if let Some(sort) = state.sort {
            if let Ok(column) = self.column(sort.column) {
                query::sort_rows(&mut visible, column, sort.order);
            }
        }
        visible
    }

    pub fn render(&self, rows: &[T], state: &TableState) -> TableView {
        let visible = self.visible(rows, state);

        let headers = self
            .columns
            .iter()
            .map(|column| HeaderView {
                id: column.id,
                label: column.header,
                sortable: column.sortable,
                sorted: state.order_of(column.id),
            })
            .collect();

        let empty = visible.is_empty().then(|| EmptyRow {
            message: EMPTY_MESSAGE,
            colspan: self.columns.len() + usize::from(self.actions.has_row_menu()),
        });

        let body = visible
            .iter()
            .map(|row| RowView {
                id: row.id().to_string(),
                cells: self.columns.iter().map(|column| column.render(row)).collect(),
            })
            .collect();

        TableView {
            title: self.title,
            entry_count: visible.len(),
            entry_label: entry_label(visible.len()),
            search: state.search.clone(),
            actions: self.actions,
            headers,
            rows: body,
            empty,
        }
    }

    fn require(&self, action: Action) -> Result<(), TableError> {
        if self.actions.allows(action) {
            Ok(())
        } else {
            Err(TableError::ActionUnavailable {
                action,
                table: self.title,
            })
        }
    }

    fn row<'a>(&self, rows: &'a [T], id: &str) -> Result<&'a T, TableError> {
        rows.iter()
            .find(|row| row.id() == id)
            .ok_or_else(|| TableError::RowNotFound(id.to_string()))
    }

    pub fn request_add(&self) -> Result<RowIntent<'static, T>, TableError> {
        self.require(Action::Add)?;
        Ok(RowIntent::Add)
    }

    pub fn request_edit<'a>(&self, rows: &'a [T], id: &str) -> Result<RowIntent<'a, T>, TableError> {
        self.require(Action::Edit)?;
        self.row(rows, id).map(RowIntent::Edit)
    }

    pub fn request_delete<'a>(&self, rows: &'a [T], id: &str) -> Result<RowIntent<'a, T>, TableError> {
        self.require(Action::Delete)?;
        self.row(rows, id).map(RowIntent::Delete)
    }
}

fn entry_label(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{count} entries")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderView {
    pub id: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub sorted: Option<SortOrder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyRow {
    pub message: &'static str,
    pub colspan: usize,
}

/// One rendered frame of a table.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub title: &'static str,
    pub entry_count: usize,
    pub entry_label: String,
    pub search: String,
    pub actions: Actions,
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
    pub empty: Option<EmptyRow>,
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::models::{EntityKind, FieldValue, Meta};

    #[derive(Debug, Clone, PartialEq)]
    struct Room {
        meta: Meta,
        name: String,
        seats: u32,
        wing: Option<String>,
    }

    impl Entity for Room {
        const KIND: EntityKind = EntityKind::Section;

        fn meta(&self) -> &Meta {
            &self.meta
        }

        fn meta_mut(&mut self) -> &mut Meta {
            &mut self.meta
        }

        fn fields(&self) -> Vec<(&'static str, FieldValue)> {
            let mut fields = self.meta.fields();
            fields.extend([
                ("name", FieldValue::text(&self.name)),
                ("seats", FieldValue::number(self.seats)),
                ("wing", FieldValue::optional_text(self.wing.as_deref())),
            ]);
            fields
        }

        fn label(&self) -> String {
            self.name.clone()
        }
    }

    fn room(id: &str, name: &str, seats: u32, wing: Option<&str>) -> Room {
        Room {
            meta: Meta::new(id, DateTime::<Utc>::UNIX_EPOCH),
            name: name.to_string(),
            seats,
            wing: wing.map(str::to_string),
        }
    }

    fn rooms() -> Vec<Room> {
        vec![
            room("r1", "Lecture Hall", 120, Some("North")),
            room("r2", "Seminar B", 18, None),
            room("r3", "Lab 4", 30, Some("East")),
        ]
    }

    fn table() -> DataTable<Room> {
        DataTable::new(
            "Rooms",
            vec![
                Column::new("name", "Name", |r: &Room| r.name.clone()).sortable(),
                Column::new("seats", "Seats", |r: &Room| r.seats.to_string()).sortable(),
                Column::new("wing", "Wing", |r: &Room| {
                    r.wing.clone().unwrap_or_else(|| "TBA".to_string())
                }),
                Column::new("size", "Size", |r: &Room| {
                    if r.seats > 50 { "large" } else { "small" }.to_string()
                })
                .sortable(),
            ],
        )
    }

    fn ids(rows: &[&Room]) -> Vec<String> {
        rows.iter().map(|r| r.meta.id.clone()).collect()
    }

    #[test]
    fn empty_query_keeps_everything_in_input_order() {
        let rows = rooms();
        let visible = table().visible(&rows, &TableState::default());
        assert_eq!(ids(&visible), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn search_is_case_insensitive_over_all_fields() {
        let rows = rooms();
        let mut state = TableState::default();

        state.set_search("seminar");
        assert_eq!(ids(&table().visible(&rows, &state)), vec!["r2"]);

        // wing is searched even though the Wing column renders it
        state.set_search("EAST");
        assert_eq!(ids(&table().visible(&rows, &state)), vec!["r3"]);

        // numbers are searched by their string form
        state.set_search("12");
        assert_eq!(ids(&table().visible(&rows, &state)), vec!["r1"]);

        // ids are fields too
        state.set_search("r2");
        assert_eq!(ids(&table().visible(&rows, &state)), vec!["r2"]);
    }

    #[test]
    fn fallback_labels_are_not_searched() {
        let rows = rooms();
        let mut state = TableState::default();
        state.set_search("TBA");
        assert!(table().visible(&rows, &state).is_empty());
    }

    #[test]
    fn sort_ascending_then_descending() {
        let rows = rooms();
        let table = table();
        let mut state = TableState::default();

        table.toggle_sort(&mut state, "seats").unwrap();
        assert_eq!(ids(&table.visible(&rows, &state)), vec!["r2", "r3", "r1"]);

        table.toggle_sort(&mut state, "seats").unwrap();
        assert_eq!(ids(&table.visible(&rows, &state)), vec!["r1", "r3", "r2"]);

        table.toggle_sort(&mut state, "name").unwrap();
        assert_eq!(ids(&table.visible(&rows, &state)), vec!["r3", "r1", "r2"]);
    }

    #[test]
    fn sort_is_reproducible() {
        let rows = rooms();
        let table = table();
        let mut state = TableState::default();
        table.toggle_sort(&mut state, "name").unwrap();

        let first = ids(&table.visible(&rows, &state));
        let second = ids(&table.visible(&rows, &state));
        assert_eq!(first, second);
    }

    #[test]
    fn column_without_field_sorts_by_cell() {
        let rows = rooms();
        let table = table();
        let mut state = TableState::default();
        table.toggle_sort(&mut state, "size").unwrap();
        assert_eq!(ids(&table.visible(&rows, &state))[0], "r1");
    }

    #[test]
    fn rejects_unsortable_and_unknown_columns() {
        let table = table();
        let mut state = TableState::default();
        assert_eq!(
            table.toggle_sort(&mut state, "wing"),
            Err(TableError::NotSortable("wing"))
        );
        assert_eq!(
            table.toggle_sort(&mut state, "floor"),
            Err(TableError::UnknownColumn("floor".to_string()))
        );
        assert_eq!(state.sort, None);
    }

    #[test]
    fn render_never_mutates_input() {
        let rows = rooms();
        let before = rows.clone();
        let table = table();
        let mut state = TableState::default();
        table.toggle_sort(&mut state, "seats").unwrap();
        state.set_search("a");
        let _ = table.render(&rows, &state);
        assert_eq!(rows, before);
    }

    #[test]
    fn render_shows_counts_and_sort_indicator() {
        let rows = rooms();
        let table = table().with_actions(Actions::ALL);
        let mut state = TableState::default();
        table.toggle_sort(&mut state, "name").unwrap();

        let view = table.render(&rows, &state);
        assert_eq!(view.entry_label, "3 entries");
        assert_eq!(view.headers[0].sorted, Some(SortOrder::Asc));
        assert_eq!(view.headers[1].sorted, None);
        assert_eq!(view.rows[0].cells, vec!["Lab 4", "30", "East", "small"]);
        assert_eq!(view.empty, None);

        state.set_search("hall");
        assert_eq!(table.render(&rows, &state).entry_label, "1 entry");
    }

    #[test]
    fn no_match_renders_placeholder_spanning_columns() {
        let rows = rooms();
        let mut state = TableState::default();
        state.set_search("gymnasium");

        let view = table().render(&rows, &state);
        assert!(view.rows.is_empty());
        assert_eq!(
            view.empty,
            Some(EmptyRow { message: "No results found", colspan: 4 })
        );

        let view = table().with_actions(Actions::ALL).render(&rows, &state);
        assert_eq!(view.empty.map(|e| e.colspan), Some(5));
    }

    #[test]
    fn intents_require_affordances() {
        let rows = rooms();
        let read_only = table();
        assert_eq!(
            read_only.request_add().unwrap_err(),
            TableError::ActionUnavailable { action: Action::Add, table: "Rooms" }
        );
        assert!(read_only.request_delete(&rows, "r1").is_err());

        let editable = table().with_actions(Actions::ALL);
        assert_eq!(editable.request_add().unwrap(), RowIntent::Add);
        assert_eq!(editable.request_edit(&rows, "r2").unwrap(), RowIntent::Edit(&rows[1]));
        assert_eq!(
            editable.request_delete(&rows, "nope").unwrap_err(),
            TableError::RowNotFound("nope".to_string())
        );
    }
}
