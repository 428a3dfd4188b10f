use std::sync::Arc;

use crate::fixtures::Fixtures;
use crate::models::Section;
use crate::notify::Notifier;
use crate::route::Route;
use crate::table::{Actions, Column, DataTable};

use super::{EditablePage, ListPage, PageInfo};

pub const INFO: PageInfo = PageInfo {
    route: Route::Sections,
    heading: "Sections",
    blurb: "Manage course sections and instructor assignments.",
};

pub fn columns(fixtures: &Arc<Fixtures>) -> Vec<Column<Section>> {
    let courses = Arc::clone(fixtures);
    let instructors = Arc::clone(fixtures);
    vec![
        Column::new("course", "Course", move |row: &Section| {
            courses
                .course(&row.course_id)
                .map_or_else(
                    || "Unknown Course".to_string(),
                    |course| format!("{}: {}", course.code, course.name),
                )
        })
        .sortable(),
        Column::new("section_number", "Section", |row: &Section| row.section_number.clone())
            .sortable(),
        Column::new("instructor", "Instructor", move |row: &Section| {
            instructors
                .instructor(&row.instructor_id)
                .map_or_else(|| "Unassigned".to_string(), |i| i.name.clone())
        })
        .sortable(),
        Column::new("semester", "Semester", |row: &Section| {
            format!("{} {}", row.semester, row.year)
        })
        .sortable(),
        Column::new("capacity", "Capacity", |row: &Section| row.max_students.to_string()),
    ]
}

pub fn page(fixtures: &Arc<Fixtures>, notifier: Arc<dyn Notifier>) -> EditablePage<Section> {
    let table = DataTable::new("Course Sections", columns(fixtures)).with_actions(Actions::ALL);
    let list = ListPage::new(INFO, fixtures.sections.rows().to_vec(), table);
    EditablePage::new(list, notifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageController;
    use crate::pages::test_support::*;

    #[test]
    fn renders_joined_labels() {
        let page = page(&fixtures(), center());
        let view = page.view();
        assert_eq!(view.table.title, "Course Sections");
        assert_eq!(view.table.rows[0].cells, vec![
            "CS101: Introduction to Computer Science",
            "001",
            "Dr. Alan Turing",
            "Fall 2023",
            "30",
        ]);
    }

    #[test]
    fn create_with_dangling_references_shows_fallbacks() {
        let mut page = page(&fixtures(), center());
        page.open_create().unwrap();
        page.patch_draft(patch(&[
            ("course_id", "c404"),
            ("instructor_id", "i404"),
            ("max_students", "40"),
            ("semester", "Spring"),
            ("year", "2024"),
            ("section_number", "003"),
        ]))
        .unwrap();
        page.submit(seeded_at()).unwrap();

        let row = &page.view().table.rows[3];
        assert_eq!(row.cells[0], "Unknown Course");
        assert_eq!(row.cells[2], "Unassigned");
        assert_eq!(row.cells[3], "Spring 2024");
        assert_eq!(page.records()[3].max_students, 40);
    }
}
