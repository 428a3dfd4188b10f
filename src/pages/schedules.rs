use std::sync::Arc;

use crate::fixtures::Fixtures;
use crate::models::{Schedule, capitalize};
use crate::route::Route;
use crate::table::{Column, DataTable};

use super::{ListPage, PageInfo, section_course_label};

pub const INFO: PageInfo = PageInfo {
    route: Route::Schedules,
    heading: "Schedules",
    blurb: "Manage and view course section schedules.",
};

fn instructor_label(fixtures: &Fixtures, section_id: &str) -> String {
    let Some(section) = fixtures.section(section_id) else {
        return "Unknown Instructor".to_string();
    };
    fixtures
        .instructor(&section.instructor_id)
        .map_or_else(|| "Unassigned".to_string(), |i| i.name.clone())
}

pub fn columns(fixtures: &Arc<Fixtures>) -> Vec<Column<Schedule>> {
    let courses = Arc::clone(fixtures);
    let instructors = Arc::clone(fixtures);
    vec![
        Column::new("course", "Course", move |row: &Schedule| {
            section_course_label(&courses, &row.section_id)
        })
        .sortable(),
        Column::new("instructor", "Instructor", move |row: &Schedule| {
            instructor_label(&instructors, &row.section_id)
        })
        .sortable(),
        Column::new("day_of_week", "Day", |row: &Schedule| capitalize(row.day_of_week.as_str()))
            .sortable(),
        Column::new("time", "Time", |row: &Schedule| {
            format!("{} - {}", row.start_time, row.end_time)
        }),
        Column::new("location", "Location", |row: &Schedule| {
            row.location.clone().unwrap_or_else(|| "TBA".to_string())
        }),
        Column::new("recurrence", "Recurrence", |row: &Schedule| {
            capitalize(row.recurrence.as_str())
        }),
    ]
}

pub fn page(fixtures: &Arc<Fixtures>) -> ListPage<Schedule> {
    let table = DataTable::new("Class Schedules", columns(fixtures));
    ListPage::new(INFO, fixtures.schedules.rows().to_vec(), table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, Meta, Recurrence};
    use crate::pages::PageController;
    use crate::pages::test_support::*;

    #[test]
    fn renders_schedule_rows() {
        let page = page(&fixtures());
        assert_eq!(page.view().table.rows[0].cells, vec![
            "CS101 (Section 001)",
            "Dr. Alan Turing",
            "Monday",
            "09:00 - 10:30",
            "CS-101",
            "Weekly",
        ]);
    }

    #[test]
    fn dangling_section_falls_back() {
        let fixtures = fixtures();
        let orphan = Schedule {
            meta: Meta::seeded("sc9", seeded_at(), seeded_at()),
            section_id: "s9".to_string(),
            day_of_week: DayOfWeek::Friday,
            start_time: "08:00".to_string(),
            end_time: "09:00".to_string(),
            recurrence: Recurrence::Biweekly,
            location: None,
        };
        let cells: Vec<String> = columns(&fixtures)
            .iter()
            .map(|column| column.render(&orphan))
            .collect();
        assert_eq!(cells, vec![
            "Unknown Course",
            "Unknown Instructor",
            "Friday",
            "08:00 - 09:00",
            "TBA",
            "Biweekly",
        ]);
    }

    #[test]
    fn sort_by_day_then_reverse() {
        let mut page = page(&fixtures());
        page.toggle_sort("day_of_week").unwrap();
        assert_eq!(cells(&page.view().table, 2), vec!["Monday", "Tuesday", "Wednesday"]);
        page.toggle_sort("day_of_week").unwrap();
        assert_eq!(cells(&page.view().table, 2), vec!["Wednesday", "Tuesday", "Monday"]);
    }
}
