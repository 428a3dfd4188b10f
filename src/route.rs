use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Dashboard,
    Instructors,
    Departments,
    Courses,
    Sections,
    Students,
    Enrollments,
    Attendance,
    Schedules,
    NotFound,
}

impl Route {
    /// Sidebar order.
    pub const NAVIGATION: [Route; 9] = [
        Route::Dashboard,
        Route::Instructors,
        Route::Departments,
        Route::Courses,
        Route::Sections,
        Route::Students,
        Route::Enrollments,
        Route::Attendance,
        Route::Schedules,
    ];

    pub const PAGES: [Route; 8] = [
        Route::Instructors,
        Route::Departments,
        Route::Courses,
        Route::Sections,
        Route::Students,
        Route::Enrollments,
        Route::Attendance,
        Route::Schedules,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Instructors => "/instructors",
            Route::Departments => "/departments",
            Route::Courses => "/courses",
            Route::Sections => "/sections",
            Route::Students => "/students",
            Route::Enrollments => "/enrollments",
            Route::Attendance => "/attendance",
            Route::Schedules => "/schedules",
            Route::NotFound => "*",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Instructors => "Instructors",
            Route::Departments => "Departments",
            Route::Courses => "Courses",
            Route::Sections => "Sections",
            Route::Students => "Students",
            Route::Enrollments => "Enrollments",
            Route::Attendance => "Attendance",
            Route::Schedules => "Schedules",
            Route::NotFound => "Not Found",
        }
    }

    /// Matches a client path; anything unrecognised is `NotFound`.
    pub fn resolve(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Self::NAVIGATION
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or(Route::NotFound)
    }

    /// Page routes by their last path segment, e.g. `departments`.
    pub fn from_slug(slug: &str) -> Option<Route> {
        Self::PAGES
            .into_iter()
            .find(|route| route.path().trim_start_matches('/') == slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub path: &'static str,
    pub label: &'static str,
}

impl From<Route> for NavItem {
    fn from(route: Route) -> Self {
        Self {
            route,
            path: route.path(),
            label: route.label(),
        }
    }
}

pub fn navigation() -> Vec<NavItem> {
    Route::NAVIGATION.into_iter().map(NavItem::from).collect()
}
