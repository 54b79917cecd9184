use actix_files::{Files, NamedFile};
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::{error, info};

use crate::error::ViewerError;
use crate::parser::ScheduleEntry;
use crate::schedule::{Direction, MonthCursor};
use crate::source::{load_dataset, DataSource};
use crate::view::{GridRow, ScheduleView, Summary};

/// Entries shared by all requests; replaced as a whole once loading ends
#[derive(Debug, Clone)]
pub enum Dataset {
    Loading,
    Ready(Arc<[ScheduleEntry]>),
}

pub struct AppState {
    pub dataset: RwLock<Dataset>,
    pub source: DataSource,
    /// Month shown when a request names none
    pub default_cursor: MonthCursor,
}

impl AppState {
    pub fn loading(source: DataSource, default_cursor: MonthCursor) -> Self {
        Self {
            dataset: RwLock::new(Dataset::Loading),
            source,
            default_cursor,
        }
    }

    pub fn ready(entries: Vec<ScheduleEntry>, source: DataSource, default_cursor: MonthCursor) -> Self {
        let state = Self::loading(source, default_cursor);
        state.set_entries(entries);
        state
    }

    pub fn set_entries(&self, entries: Vec<ScheduleEntry>) {
        let dataset = Dataset::Ready(entries.into());
        match self.dataset.write() {
            Ok(mut guard) => *guard = dataset,
            Err(poisoned) => *poisoned.into_inner() = dataset,
        }
    }

    /// Loaded entries, or `None` while the load is still running
    pub fn entries(&self) -> std::result::Result<Option<Arc<[ScheduleEntry]>>, ViewerError> {
        let guard = self
            .dataset
            .read()
            .map_err(|_| ViewerError::state("dataset lock poisoned"))?;
        Ok(match &*guard {
            Dataset::Loading => None,
            Dataset::Ready(entries) => Some(entries.clone()),
        })
    }

    fn cursor_for(&self, year: Option<i32>, month: Option<u32>) -> std::result::Result<MonthCursor, ViewerError> {
        MonthCursor::new(
            year.unwrap_or(self.default_cursor.year()),
            month.unwrap_or(self.default_cursor.month()),
        )
    }
}

#[derive(Deserialize)]
pub struct ScheduleQuery {
    year: Option<i32>,
    month: Option<u32>,
    #[serde(default)]
    search: String,
    #[serde(default)]
    person: String,
}

#[derive(Deserialize)]
pub struct NavigateQuery {
    year: Option<i32>,
    month: Option<u32>,
    direction: String,
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    title: String,
    year: i32,
    month: u32,
    search: String,
    person: String,
    days: Vec<String>,
    /// Options for the person selector
    people: Vec<String>,
    rows: Vec<GridRow>,
    summary: Summary,
}

impl ScheduleResponse {
    fn from_view(view: &ScheduleView) -> Self {
        let cursor = view.cursor();
        Self {
            title: cursor.to_string(),
            year: cursor.year(),
            month: cursor.month(),
            search: view.search().to_string(),
            person: view.selected_person().to_string(),
            days: view.days().to_vec(),
            people: view.all_people().to_vec(),
            rows: view.rows(),
            summary: view.summary(),
        }
    }
}

#[derive(Serialize)]
pub struct CursorResponse {
    title: String,
    year: i32,
    month: u32,
}

impl From<MonthCursor> for CursorResponse {
    fn from(cursor: MonthCursor) -> Self {
        Self {
            title: cursor.to_string(),
            year: cursor.year(),
            month: cursor.month(),
        }
    }
}

fn loading_response() -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(serde_json::json!({ "loading": true }))
}

// Month grid endpoint
async fn get_schedule(
    query: web::Query<ScheduleQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let Some(entries) = state.entries()? else {
        return Ok(loading_response());
    };
    let cursor = state.cursor_for(query.year, query.month)?;

    let view = ScheduleView::new(entries, cursor)
        .with_search(query.search.as_str())
        .with_selected_person(query.person.as_str());

    Ok(HttpResponse::Ok().json(ScheduleResponse::from_view(&view)))
}

// Month navigation endpoint
async fn navigate(
    query: web::Query<NavigateQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let direction: Direction = query.direction.parse()?;
    let cursor = state.cursor_for(query.year, query.month)?.advance(direction)?;
    Ok(HttpResponse::Ok().json(CursorResponse::from(cursor)))
}

// Raw CSV, for clients that parse it themselves
async fn schedule_csv(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    match state.source.csv_path() {
        Some(path) => Ok(NamedFile::open(path)?.into_response(&req)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No CSV source configured"}))),
    }
}

async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html))
}

/// Registers the page and API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/schedule-data.csv", web::get().to(schedule_csv))
        .route("/api/schedule", web::get().to(get_schedule))
        .route("/api/navigate", web::get().to(navigate));
}

pub async fn start_server(
    port: u16,
    source: DataSource,
    static_dir: PathBuf,
    default_cursor: MonthCursor,
) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::loading(source.clone(), default_cursor));

    // The one asynchronous load; requests see `Loading` until it lands.
    let loader_state = app_state.clone();
    tokio::spawn(async move {
        let entries = match tokio::task::spawn_blocking(move || load_dataset(&source)).await {
            Ok(entries) => entries,
            Err(e) => {
                error!(error = %e, "schedule loader task failed, showing empty grid");
                Vec::new()
            }
        };
        loader_state.set_entries(entries);
    });

    info!(port, static_dir = %static_dir.display(), "starting schedule viewer");

    HttpServer::new(move || {
        let app = App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure);

        if static_dir.is_dir() {
            app.service(Files::new("/static", static_dir.clone()).show_files_listing())
        } else {
            app
        }
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
