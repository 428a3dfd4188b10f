use std::sync::Arc;

use crate::fixtures::Fixtures;
use crate::models::Course;
use crate::notify::Notifier;
use crate::route::Route;
use crate::table::{Actions, Column, DataTable};

use super::{EditablePage, ListPage, PageInfo};

pub const INFO: PageInfo = PageInfo {
    route: Route::Courses,
    heading: "Courses",
    blurb: "View and manage the courses offered by departments.",
};

pub fn columns(fixtures: &Arc<Fixtures>) -> Vec<Column<Course>> {
    let lookup = Arc::clone(fixtures);
    vec![
        Column::new("code", "Course Code", |row: &Course| row.code.clone()).sortable(),
        Column::new("name", "Course Name", |row: &Course| row.name.clone()).sortable(),
        Column::new("credits", "Credits", |row: &Course| row.credits.to_string()).sortable(),
        Column::new("department", "Department", move |row: &Course| {
            lookup
                .department(&row.department_id)
                .map_or_else(|| "Unknown".to_string(), |dept| dept.name.clone())
        })
        .sortable(),
        Column::new("description", "Description", |row: &Course| {
            row.description
                .clone()
                .unwrap_or_else(|| "No description".to_string())
        }),
    ]
}

pub fn page(fixtures: &Arc<Fixtures>, notifier: Arc<dyn Notifier>) -> EditablePage<Course> {
    let table = DataTable::new("Courses", columns(fixtures)).with_actions(Actions::ALL);
    let list = ListPage::new(INFO, fixtures.courses.rows().to_vec(), table);
    EditablePage::new(list, notifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ValidationError};
    use crate::pages::PageController;
    use crate::pages::test_support::*;

    #[test]
    fn credits_sort_numerically() {
        let mut page = page(&fixtures(), center());
        page.toggle_sort("credits").unwrap();
        assert_eq!(cells(&page.view().table, 0), vec!["CS101", "CS201", "MATH101"]);

        page.toggle_sort("credits").unwrap();
        assert_eq!(cells(&page.view().table, 2)[2], "3");
    }

    #[test]
    fn non_numeric_credits_are_a_validation_error() {
        let center = center();
        let mut page = page(&fixtures(), center.clone());
        page.open_create().unwrap();
        page.patch_draft(patch(&[
            ("code", "PHYS101"),
            ("name", "Mechanics"),
            ("credits", "four"),
            ("department_id", "d3"),
        ]))
        .unwrap();

        let err = page.submit(seeded_at()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidNumber { field: "credits", .. })
        ));
        assert_eq!(page.len(), 3);
        assert_eq!(center.latest().unwrap().title, "Validation Error");
    }

    #[test]
    fn edit_draft_formats_numbers_as_text() {
        let mut page = page(&fixtures(), center());
        page.open_edit("c2").unwrap();
        assert_eq!(page.form().draft().unwrap().credits, "4");
        let view = page.form_view().unwrap();
        assert_eq!(view["submit_label"], "Update");
        assert_eq!(view["title"], "Edit Course");
    }
}
