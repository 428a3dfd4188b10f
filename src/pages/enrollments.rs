use std::sync::Arc;

use crate::fixtures::Fixtures;
use crate::form::DATE_FORMAT;
use crate::models::{Enrollment, capitalize};
use crate::route::Route;
use crate::table::{Column, DataTable};

use super::{ListPage, PageInfo, section_course_label};

pub const INFO: PageInfo = PageInfo {
    route: Route::Enrollments,
    heading: "Enrollments",
    blurb: "Manage student enrollments in course sections.",
};

pub fn columns(fixtures: &Arc<Fixtures>) -> Vec<Column<Enrollment>> {
    let students = Arc::clone(fixtures);
    let sections = Arc::clone(fixtures);
    vec![
        Column::new("student", "Student", move |row: &Enrollment| {
            students
                .student(&row.student_id)
                .map_or_else(|| "Unknown Student".to_string(), |s| s.name.clone())
        })
        .sortable(),
        Column::new("course", "Course", move |row: &Enrollment| {
            section_course_label(&sections, &row.section_id)
        })
        .sortable(),
        Column::new("enrollment_date", "Enrollment Date", |row: &Enrollment| {
            row.enrollment_date.format(DATE_FORMAT).to_string()
        })
        .sortable(),
        Column::new("grade", "Grade", |row: &Enrollment| {
            row.grade.clone().unwrap_or_else(|| "Not graded".to_string())
        }),
        Column::new("status", "Status", |row: &Enrollment| capitalize(row.status.as_str())).sortable(),
    ]
}

pub fn page(fixtures: &Arc<Fixtures>) -> ListPage<Enrollment> {
    let table = DataTable::new("Enrollments", columns(fixtures));
    ListPage::new(INFO, fixtures.enrollments.rows().to_vec(), table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageController;
    use crate::pages::test_support::*;

    #[test]
    fn renders_joined_rows() {
        let page = page(&fixtures());
        let view = page.view();
        assert!(!view.editable);
        assert_eq!(view.table.rows[2].cells, vec![
            "Michael Johnson",
            "CS101 (Section 002)",
            "2023-08-12",
            "Not graded",
            "Active",
        ]);
    }

    #[test]
    fn search_reaches_raw_status() {
        let mut page = page(&fixtures());
        page.search("ACTIVE".to_string());
        assert_eq!(page.view().table.entry_count, 3);
        page.search("dropped".to_string());
        assert_eq!(page.view().table.entry_label, "0 entries");
    }

    #[test]
    fn sort_by_student_name() {
        let mut page = page(&fixtures());
        page.toggle_sort("student").unwrap();
        assert_eq!(cells(&page.view().table, 0), vec![
            "Jane Smith",
            "John Doe",
            "Michael Johnson",
        ]);
    }

    #[test]
    fn grade_is_not_sortable() {
        let mut page = page(&fixtures());
        assert!(page.toggle_sort("grade").is_err());
        assert!(page.toggle_sort("ranking").is_err());
    }
}
