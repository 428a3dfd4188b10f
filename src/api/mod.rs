use axum::Json;
use axum::extract::{Path, Query};
use axum::routing::{delete, post, put};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::AppError;
use crate::notify::Notification;
use crate::pages::{PageView, StatCard};
use crate::route::{NavItem, Route, navigation};
use crate::state::AppState;

#[derive(Deserialize)]
struct NavigationParams {
    path: Option<String>,
}

#[derive(Serialize)]
struct NavigationResponse {
    items: Vec<NavItem>,
    active: Option<Route>,
}

#[derive(Serialize)]
struct DashboardResponse {
    heading: &'static str,
    blurb: &'static str,
    stats: Vec<StatCard>,
}

#[derive(Deserialize)]
struct SearchRequest {
    #[serde(default)]
    query: String,
}

#[derive(Deserialize)]
struct LoadingRequest {
    loading: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/navigation", get(get_navigation))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/notifications", get(list_notifications))
        .route("/api/pages/{page}", get(get_page))
        .route("/api/pages/{page}/search", put(search_page))
        .route("/api/pages/{page}/sort/{column}", post(sort_page))
        .route("/api/pages/{page}/reset", post(reset_page))
        .route("/api/pages/{page}/rows/{id}", delete(delete_row))
        .route(
            "/api/pages/{page}/form",
            get(get_form).post(open_create).patch(patch_form).delete(cancel_form),
        )
        .route("/api/pages/{page}/form/loading", put(set_loading))
        .route("/api/pages/{page}/form/submit", post(submit_form))
        .route("/api/pages/{page}/form/{id}", post(open_edit))
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

fn page_route(slug: &str) -> Result<Route, AppError> {
    Route::from_slug(slug).ok_or(AppError::NotFound)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn get_navigation(Query(params): Query<NavigationParams>) -> Json<NavigationResponse> {
    Json(NavigationResponse {
        items: navigation(),
        active: params.path.as_deref().map(Route::resolve),
    })
}

async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let stats = state.pages.lock().stats();
    Json(DashboardResponse {
        heading: "Dashboard",
        blurb: "Overview of your educational management system.",
        stats,
    })
}

async fn list_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.notifications.recent())
}

async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageView>, AppError> {
    let route = page_route(&slug)?;
    let pages = state.pages.lock();
    Ok(Json(pages.get(route)?.view()))
}

async fn search_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<PageView>, AppError> {
    let route = page_route(&slug)?;
    let mut pages = state.pages.lock();
    let page = pages.get_mut(route)?;
    page.search(req.query);
    Ok(Json(page.view()))
}

async fn sort_page(
    State(state): State<AppState>,
    Path((slug, column)): Path<(String, String)>,
) -> Result<Json<PageView>, AppError> {
    let route = page_route(&slug)?;
    let mut pages = state.pages.lock();
    let page = pages.get_mut(route)?;
    page.toggle_sort(&column)?;
    Ok(Json(page.view()))
}

async fn reset_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageView>, AppError> {
    let route = page_route(&slug)?;
    let mut pages = state.pages.lock();
    let page = pages.get_mut(route)?;
    page.reset();
    info!(page = %slug, "page reset");
    Ok(Json(page.view()))
}

async fn delete_row(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let route = page_route(&slug)?;
    state.pages.lock().get_mut(route)?.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_form(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, AppError> {
    let route = page_route(&slug)?;
    let pages = state.pages.lock();
    Ok(Json(pages.get(route)?.form_view()?))
}

async fn open_create(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, AppError> {
    let route = page_route(&slug)?;
    let mut pages = state.pages.lock();
    let page = pages.get_mut(route)?;
    page.open_create()?;
    Ok(Json(page.form_view()?))
}

async fn open_edit(
    State(state): State<AppState>,
    Path((slug, id)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let route = page_route(&slug)?;
    let mut pages = state.pages.lock();
    let page = pages.get_mut(route)?;
    page.open_edit(&id)?;
    Ok(Json(page.form_view()?))
}

async fn patch_form(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<Map<String, Value>>,
) -> Result<Json<Value>, AppError> {
    let route = page_route(&slug)?;
    let mut pages = state.pages.lock();
    let page = pages.get_mut(route)?;
    page.patch_draft(req)?;
    Ok(Json(page.form_view()?))
}

async fn set_loading(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<LoadingRequest>,
) -> Result<Json<Value>, AppError> {
    let route = page_route(&slug)?;
    let mut pages = state.pages.lock();
    let page = pages.get_mut(route)?;
    page.set_loading(req.loading)?;
    Ok(Json(page.form_view()?))
}

async fn submit_form(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageView>, AppError> {
    let route = page_route(&slug)?;
    let mut pages = state.pages.lock();
    let page = pages.get_mut(route)?;
    page.submit(Utc::now())?;
    Ok(Json(page.view()))
}

async fn cancel_form(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, AppError> {
    let route = page_route(&slug)?;
    let mut pages = state.pages.lock();
    let page = pages.get_mut(route)?;
    page.cancel()?;
    Ok(Json(page.form_view()?))
}
