use std::sync::Arc;

use crate::fixtures::Fixtures;
use crate::form::DATE_FORMAT;
use crate::models::{Attendance, capitalize};
use crate::route::Route;
use crate::table::{Column, DataTable};

use super::{ListPage, PageInfo};

pub const INFO: PageInfo = PageInfo {
    route: Route::Attendance,
    heading: "Attendance",
    blurb: "Track student attendance for course sections.",
};

pub fn columns(fixtures: &Arc<Fixtures>) -> Vec<Column<Attendance>> {
    let students = Arc::clone(fixtures);
    let courses = Arc::clone(fixtures);
    vec![
        Column::new("student", "Student", move |row: &Attendance| {
            students
                .enrollment(&row.enrollment_id)
                .and_then(|enrollment| students.student(&enrollment.student_id))
                .map_or_else(|| "Unknown Student".to_string(), |s| s.name.clone())
        })
        .sortable(),
        Column::new("course", "Course", move |row: &Attendance| {
            courses
                .enrollment(&row.enrollment_id)
                .and_then(|enrollment| courses.course_of_section(&enrollment.section_id))
                .map_or_else(|| "Unknown Course".to_string(), |(_, course)| course.code.clone())
        })
        .sortable(),
        Column::new("date", "Date", |row: &Attendance| row.date.format(DATE_FORMAT).to_string())
            .sortable(),
        Column::new("status", "Status", |row: &Attendance| capitalize(row.status.as_str())).sortable(),
        Column::new("notes", "Notes", |row: &Attendance| {
            row.notes.clone().unwrap_or_else(|| "-".to_string())
        }),
    ]
}

pub fn page(fixtures: &Arc<Fixtures>) -> ListPage<Attendance> {
    let table = DataTable::new("Attendance Records", columns(fixtures));
    ListPage::new(INFO, fixtures.attendances.rows().to_vec(), table)
}
