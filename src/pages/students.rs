use std::sync::Arc;

use crate::fixtures::Fixtures;
use crate::form::DATE_FORMAT;
use crate::models::Student;
use crate::notify::Notifier;
use crate::route::Route;
use crate::table::{Actions, Column, DataTable};

use super::{EditablePage, ListPage, PageInfo};

pub const INFO: PageInfo = PageInfo {
    route: Route::Students,
    heading: "Students",
    blurb: "Manage student records and information.",
};

pub fn columns() -> Vec<Column<Student>> {
    vec![
        Column::new("student_id", "Student ID", |row: &Student| row.student_id.clone()).sortable(),
        Column::new("name", "Name", |row: &Student| row.name.clone()).sortable(),
        Column::new("email", "Email", |row: &Student| row.email.clone()).sortable(),
        Column::new("phone", "Phone", |row: &Student| {
            row.phone.clone().unwrap_or_else(|| "N/A".to_string())
        }),
        Column::new("date_of_birth", "Date of Birth", |row: &Student| {
            row.date_of_birth
                .map_or_else(|| "N/A".to_string(), |d| d.format(DATE_FORMAT).to_string())
        }),
    ]
}

pub fn page(fixtures: &Arc<Fixtures>, notifier: Arc<dyn Notifier>) -> EditablePage<Student> {
    let table = DataTable::new("Students", columns()).with_actions(Actions::ALL);
    let list = ListPage::new(INFO, fixtures.students.rows().to_vec(), table);
    EditablePage::new(list, notifier)
}
