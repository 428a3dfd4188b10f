use std::sync::Arc;

use crate::fixtures::Fixtures;
use crate::models::Department;
use crate::notify::Notifier;
use crate::route::Route;
use crate::table::{Actions, Column, DataTable};

use super::{EditablePage, ListPage, PageInfo};

pub const INFO: PageInfo = PageInfo {
    route: Route::Departments,
    heading: "Departments",
    blurb: "Manage your academic departments and their leadership.",
};

pub fn columns(fixtures: &Arc<Fixtures>) -> Vec<Column<Department>> {
    let lookup = Arc::clone(fixtures);
    vec![
        Column::new("name", "Department Name", |row: &Department| row.name.clone()).sortable(),
        Column::new("code", "Code", |row: &Department| row.code.clone()).sortable(),
        Column::new("head_instructor", "Department Head", move |row: &Department| {
            row.head_instructor_id
                .as_deref()
                .and_then(|id| lookup.instructor(id))
                .map_or_else(|| "Not assigned".to_string(), |head| head.name.clone())
        }),
        Column::new("description", "Description", |row: &Department| {
            row.description
                .clone()
                .unwrap_or_else(|| "No description".to_string())
        }),
    ]
}

pub fn page(fixtures: &Arc<Fixtures>, notifier: Arc<dyn Notifier>) -> EditablePage<Department> {
    let table = DataTable::new("Departments", columns(fixtures)).with_actions(Actions::ALL);
    let list = ListPage::new(INFO, fixtures.departments.rows().to_vec(), table);
    EditablePage::new(list, notifier)
}
