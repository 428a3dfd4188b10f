use std::sync::Arc;

use crate::fixtures::Fixtures;
use crate::models::Instructor;
use crate::notify::Notifier;
use crate::route::Route;
use crate::table::{Actions, Column, DataTable};

use super::{EditablePage, ListPage, PageInfo};

pub const INFO: PageInfo = PageInfo {
    route: Route::Instructors,
    heading: "Instructors",
    blurb: "Manage your instructors and their department assignments.",
};

pub fn columns(fixtures: &Arc<Fixtures>) -> Vec<Column<Instructor>> {
    let lookup = Arc::clone(fixtures);
    vec![
        Column::new("name", "Name", |row: &Instructor| row.name.clone()).sortable(),
        Column::new("email", "Email", |row: &Instructor| row.email.clone()).sortable(),
        Column::new("phone", "Phone", |row: &Instructor| {
            row.phone.clone().unwrap_or_else(|| "N/A".to_string())
        }),
        Column::new("department", "Department", move |row: &Instructor| {
            lookup
                .department(&row.department_id)
                .map_or_else(|| "Unknown".to_string(), |dept| dept.name.clone())
        })
        .sortable(),
        Column::new("title", "Title", |row: &Instructor| {
            row.title.clone().unwrap_or_else(|| "N/A".to_string())
        }),
    ]
}

pub fn page(fixtures: &Arc<Fixtures>, notifier: Arc<dyn Notifier>) -> EditablePage<Instructor> {
    let table = DataTable::new("Instructors", columns(fixtures)).with_actions(Actions::ALL);
    let list = ListPage::new(INFO, fixtures.instructors.rows().to_vec(), table);
    EditablePage::new(list, notifier)
}
