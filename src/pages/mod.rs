//! Page modules: one record list per route, wired to a table and, for
//! editable pages, to a modal form.

pub mod attendance;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod instructors;
pub mod schedules;
pub mod sections;
pub mod students;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::AppError;
use crate::fixtures::Fixtures;
use crate::form::{EntityForm, FormTarget};
use crate::models::{Draftable, Entity};
use crate::notify::{Notification, Notifier};
use crate::repository::Repository;
use crate::route::Route;
use crate::table::{DataTable, RowIntent, TableState, TableView};

/// Heading and blurb above a page's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub route: Route,
    pub heading: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    #[serde(flatten)]
    pub info: PageInfo,
    pub editable: bool,
    pub table: TableView,
}

/// Object-safe surface the HTTP layer drives every page through.
///
/// Form operations default to rejecting; read-only pages rely on that.
pub trait PageController: Send {
    fn info(&self) -> PageInfo;

    fn len(&self) -> usize;

    fn view(&self) -> PageView;

    fn search(&mut self, query: String);

    fn toggle_sort(&mut self, column: &str) -> Result<(), AppError>;

    /// Reloads the list from fixtures and clears table and form state.
    fn reset(&mut self);

    fn delete(&mut self, id: &str) -> Result<(), AppError>;

    fn form_view(&self) -> Result<Value, AppError> {
        Err(self.read_only())
    }

    fn open_create(&mut self) -> Result<(), AppError> {
        Err(self.read_only())
    }

    fn open_edit(&mut self, _id: &str) -> Result<(), AppError> {
        Err(self.read_only())
    }

    fn patch_draft(&mut self, _patch: Map<String, Value>) -> Result<(), AppError> {
        Err(self.read_only())
    }

    fn set_loading(&mut self, _loading: bool) -> Result<(), AppError> {
        Err(self.read_only())
    }

    fn submit(&mut self, _now: DateTime<Utc>) -> Result<(), AppError> {
        Err(self.read_only())
    }

    fn cancel(&mut self) -> Result<(), AppError> {
        Err(self.read_only())
    }

    fn read_only(&self) -> AppError {
        AppError::ReadOnly(self.info().heading.to_string())
    }
}

/// A table over a record list, without forms.
pub struct ListPage<E> {
    info: PageInfo,
    seed: Vec<E>,
    records: Repository<E>,
    table: DataTable<E>,
    state: TableState,
}

impl<E: Entity> ListPage<E> {
    pub fn new(info: PageInfo, seed: Vec<E>, table: DataTable<E>) -> Self {
        Self {
            info,
            records: Repository::seeded(seed.clone()),
            seed,
            table,
            state: TableState::default(),
        }
    }

    pub fn records(&self) -> &[E] {
        self.records.all()
    }

    pub fn render(&self) -> TableView {
        self.table.render(self.records.all(), &self.state)
    }
}

impl<E: Entity> PageController for ListPage<E> {
    fn info(&self) -> PageInfo {
        self.info
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn view(&self) -> PageView {
        PageView {
            info: self.info,
            editable: false,
            table: self.render(),
        }
    }

    fn search(&mut self, query: String) {
        self.state.set_search(query);
    }

    fn toggle_sort(&mut self, column: &str) -> Result<(), AppError> {
        let sort = self.table.toggle_sort(&mut self.state, column)?;
        debug!(page = self.info.heading, column = sort.column, order = ?sort.order, "sorted");
        Ok(())
    }

    fn reset(&mut self) {
        self.records.replace_all(self.seed.clone());
        self.state = TableState::default();
    }

    fn delete(&mut self, id: &str) -> Result<(), AppError> {
        self.table.request_delete(self.records.all(), id)?;
        Err(self.read_only())
    }
}

/// A list page with a create/edit form and delete.
pub struct EditablePage<E: Draftable> {
    list: ListPage<E>,
    form: EntityForm<E::Draft>,
    notifier: Arc<dyn Notifier>,
}

impl<E: Draftable> EditablePage<E> {
    pub fn new(list: ListPage<E>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            list,
            form: EntityForm::new(E::KIND),
            notifier,
        }
    }

    pub fn records(&self) -> &[E] {
        self.list.records()
    }

    pub fn form(&self) -> &EntityForm<E::Draft> {
        &self.form
    }
}

impl<E: Draftable> PageController for EditablePage<E> {
    fn info(&self) -> PageInfo {
        self.list.info
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn view(&self) -> PageView {
        PageView {
            editable: true,
            ..self.list.view()
        }
    }

    fn search(&mut self, query: String) {
        self.list.search(query);
    }

    fn toggle_sort(&mut self, column: &str) -> Result<(), AppError> {
        self.list.toggle_sort(column)
    }

    fn reset(&mut self) {
        self.list.reset();
        self.form.cancel();
    }

    fn delete(&mut self, id: &str) -> Result<(), AppError> {
        let RowIntent::Delete(row) = self.list.table.request_delete(self.list.records.all(), id)?
        else {
            return Err(AppError::NotFound);
        };
        let label = row.label();

        self.list.records.remove(id);
        if self.form.target() == Some(&FormTarget::Edit(id.to_string())) {
            self.form.cancel();
        }
        self.notifier.notify(Notification::deleted(E::KIND, &label));
        Ok(())
    }

    fn form_view(&self) -> Result<Value, AppError> {
        Ok(serde_json::to_value(self.form.view())?)
    }

    fn open_create(&mut self) -> Result<(), AppError> {
        self.list.table.request_add()?;
        self.form.open_create();
        Ok(())
    }

    fn open_edit(&mut self, id: &str) -> Result<(), AppError> {
        let RowIntent::Edit(row) = self.list.table.request_edit(self.list.records.all(), id)?
        else {
            return Err(AppError::NotFound);
        };
        let draft = row.to_draft();
        self.form.open_edit(id, draft);
        Ok(())
    }

    fn patch_draft(&mut self, patch: Map<String, Value>) -> Result<(), AppError> {
        Ok(self.form.patch(patch)?)
    }

    fn set_loading(&mut self, loading: bool) -> Result<(), AppError> {
        Ok(self.form.set_loading(loading)?)
    }

    fn submit(&mut self, now: DateTime<Utc>) -> Result<(), AppError> {
        let records = &mut self.list.records;
        let notifier = &self.notifier;

        let notification = self.form.submit(|target, draft| {
            let saved = match target {
                FormTarget::Create => records
                    .insert(draft, now)
                    .map(|record| Notification::created(E::KIND, &record.label())),
                FormTarget::Edit(id) => match records.update(id, draft, now) {
                    Ok(Some(record)) => Ok(Notification::updated(E::KIND, &record.label())),
                    Ok(None) => return Err(AppError::NotFound),
                    Err(err) => Err(err),
                },
            };
            saved.map_err(|err| {
                notifier.notify(Notification::validation_failed(&err));
                AppError::Validation(err)
            })
        })?;

        self.notifier.notify(notification);
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), AppError> {
        self.form.cancel();
        Ok(())
    }
}

/// "CS101 (Section 001)", as enrollments and schedules show a section.
pub(crate) fn section_course_label(fixtures: &Fixtures, section_id: &str) -> String {
    fixtures
        .course_of_section(section_id)
        .map_or_else(
            || "Unknown Course".to_string(),
            |(section, course)| format!("{} (Section {})", course.code, section.section_number),
        )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: usize,
    pub link: &'static str,
}

/// Every page, each owning its own list.
pub struct Pages {
    pages: Vec<Box<dyn PageController>>,
}

/// Dashboard card order.
const STAT_ORDER: [Route; 8] = [
    Route::Instructors,
    Route::Students,
    Route::Courses,
    Route::Departments,
    Route::Sections,
    Route::Schedules,
    Route::Enrollments,
    Route::Attendance,
];

impl Pages {
    pub fn new(fixtures: Arc<Fixtures>, notifier: Arc<dyn Notifier>) -> Self {
        let pages: Vec<Box<dyn PageController>> = vec![
            Box::new(instructors::page(&fixtures, notifier.clone())),
            Box::new(departments::page(&fixtures, notifier.clone())),
            Box::new(courses::page(&fixtures, notifier.clone())),
            Box::new(sections::page(&fixtures, notifier.clone())),
            Box::new(students::page(&fixtures, notifier)),
            Box::new(enrollments::page(&fixtures)),
            Box::new(attendance::page(&fixtures)),
            Box::new(schedules::page(&fixtures)),
        ];
        Self { pages }
    }

    pub fn get(&self, route: Route) -> Result<&dyn PageController, AppError> {
        self.pages
            .iter()
            .find(|page| page.info().route == route)
            .map(|page| page.as_ref())
            .ok_or(AppError::NotFound)
    }

    pub fn get_mut(&mut self, route: Route) -> Result<&mut dyn PageController, AppError> {
        for page in &mut self.pages {
            if page.info().route == route {
                return Ok(page.as_mut());
            }
        }
        Err(AppError::NotFound)
    }

    pub fn stats(&self) -> Vec<StatCard> {
        STAT_ORDER
            .into_iter()
            .filter_map(|route| self.get(route).ok())
            .map(|page| {
                let info = page.info();
                StatCard {
                    title: info.route.label(),
                    value: page.len(),
                    link: info.route.path(),
                }
            })
            .collect()
    }
}
