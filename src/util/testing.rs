// src/util/testing.rs

use anyhow::Result;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{
    ApiRequest, ApiResponse, ApiTransport, Banner, GalleryView, Method, TaskView, ThemeStore,
};
use crate::constants::{TASKS_EXPORT_PATH, TASKS_PATH, TASKS_SUMMARY_PATH};
use crate::domain::{DomainError, Priority, Task, TaskStats, Theme, Video};

type Canned = Result<ApiResponse, DomainError>;

/// Shared mock transport for testing the controllers
///
/// Responses are queued per method and path. The last queued response for a
/// route is repeated once the queue is down to one entry, so a single
/// `with_json` answers every call to that route. Every request is recorded.
///
/// # Examples
///
/// ```
/// use boardview::application::Method;
/// use boardview::util::testing::MockTransport;
/// use serde_json::json;
///
/// let mock = MockTransport::builder()
///     .with_json(Method::Get, "/api/tasks", 200, json!([]))
///     .with_network_error(Method::Delete, "/api/tasks/1", "connection reset")
///     .build();
/// ```
pub struct MockTransport {
    routes: HashMap<(Method, String), VecDeque<Canned>>,
    requests: Vec<ApiRequest>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder::new()
    }

    pub fn requests(&self) -> &[ApiRequest] {
        &self.requests
    }
}

impl ApiTransport for MockTransport {
    fn send(&mut self, request: &ApiRequest) -> Result<ApiResponse, DomainError> {
        self.requests.push(request.clone());
        let key = (request.method, request.path.clone());
        match self.routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_else(|| no_route(request)),
            Some(queue) => queue.front().cloned().unwrap_or_else(|| no_route(request)),
            None => no_route(request),
        }
    }
}

fn no_route(request: &ApiRequest) -> Canned {
    Err(DomainError::Network(format!(
        "no mock response for {} {}",
        request.method, request.path
    )))
}

/// Builder for MockTransport
pub struct MockTransportBuilder {
    routes: HashMap<(Method, String), VecDeque<Canned>>,
}

impl MockTransportBuilder {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    fn push(mut self, method: Method, path: &str, canned: Canned) -> Self {
        self.routes
            .entry((method, path.to_string()))
            .or_default()
            .push_back(canned);
        self
    }

    /// Queue a JSON response for a route
    pub fn with_json(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.push(method, path, Ok(ApiResponse::json_body(status, &body)))
    }

    /// Queue a raw response, e.g. to set headers or a non-JSON body
    pub fn with_response(self, method: Method, path: &str, response: ApiResponse) -> Self {
        self.push(method, path, Ok(response))
    }

    /// Make a route fail before any response arrives
    pub fn with_network_error(self, method: Method, path: &str, message: &str) -> Self {
        self.push(method, path, Err(DomainError::Network(message.to_string())))
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            routes: self.routes,
            requests: Vec::new(),
        }
    }
}

impl Default for MockTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateful fake of the task backend
///
/// Implements the `/api/tasks` surface over an in-memory list so that
/// reload-after-mutation behaviour can be checked end to end.
pub struct InMemoryTaskApi {
    tasks: Vec<Task>,
    next_id: i64,
    requests: Vec<ApiRequest>,
}

impl InMemoryTaskApi {
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            tasks,
            next_id,
            requests: Vec::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn requests(&self) -> &[ApiRequest] {
        &self.requests
    }

    fn not_found() -> ApiResponse {
        ApiResponse::json_body(404, &json!({"error": "Task does not exist", "code": 404}))
    }

    fn create(&mut self, body: Option<&Value>) -> ApiResponse {
        let title = body
            .and_then(|b| b.get("title"))
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or("");
        if title.is_empty() {
            return ApiResponse::json_body(
                400,
                &json!({"error": "Task title cannot be empty", "code": 400}),
            );
        }
        let text = |key: &str| {
            body.and_then(|b| b.get(key))
                .and_then(Value::as_str)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let task = Task {
            id: self.next_id,
            title: title.to_string(),
            completed: false,
            priority: text("priority")
                .and_then(|p| p.parse().ok())
                .unwrap_or_default(),
            due_date: text("due_date"),
            tags: text("tags"),
            created_at: Some("2025-01-01 09:00:00".to_string()),
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        ApiResponse::json_body(201, &json!(task))
    }

    fn update(&mut self, id: i64, body: Option<&Value>) -> ApiResponse {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Self::not_found();
        };
        let Some(body) = body else {
            return ApiResponse::json_body(400, &json!({"error": "No update data provided"}));
        };
        if let Some(title) = body.get("title").and_then(Value::as_str) {
            task.title = title.to_string();
        }
        if let Some(completed) = body.get("completed").and_then(Value::as_bool) {
            task.completed = completed;
        }
        if let Some(priority) = body
            .get("priority")
            .and_then(Value::as_str)
            .and_then(|p| p.parse::<Priority>().ok())
        {
            task.priority = priority;
        }
        if let Some(due_date) = body.get("due_date").and_then(Value::as_str) {
            task.due_date = Some(due_date.to_string());
        }
        if let Some(tags) = body.get("tags").and_then(Value::as_str) {
            task.tags = Some(tags.to_string());
        }
        ApiResponse::json_body(200, &json!(task))
    }

    fn delete(&mut self, id: i64) -> ApiResponse {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Self::not_found();
        }
        ApiResponse::json_body(200, &json!({"message": "Task deleted"}))
    }

    fn export(&self) -> ApiResponse {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        let body = json!({
            "export_time": "2025-01-01T09:00:00+08:00",
            "total_tasks": self.tasks.len(),
            "completed_tasks": completed,
            "pending_tasks": self.tasks.len() - completed,
            "tasks": self.tasks,
        });
        ApiResponse::json_body(200, &body).with_header(
            "Content-Disposition",
            "attachment; filename=todo_tasks_export_20250101_090000.json",
        )
    }

    fn summary(&self) -> ApiResponse {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        let summary = format!(
            "## Task summary\n\nCompleted {completed}/{} tasks",
            self.tasks.len()
        );
        ApiResponse::json_body(200, &json!({ "summary": summary }))
    }
}

impl Default for InMemoryTaskApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiTransport for InMemoryTaskApi {
    fn send(&mut self, request: &ApiRequest) -> Result<ApiResponse, DomainError> {
        self.requests.push(request.clone());
        let path = request.path.as_str();
        let item_id = path
            .strip_prefix(TASKS_PATH)
            .and_then(|rest| rest.strip_prefix('/'))
            .and_then(|id| id.parse::<i64>().ok());

        let response = match (request.method, path, item_id) {
            (Method::Get, TASKS_PATH, _) => ApiResponse::json_body(200, &json!(self.tasks)),
            (Method::Post, TASKS_PATH, _) => self.create(request.body.as_ref()),
            (Method::Get, TASKS_EXPORT_PATH, _) => self.export(),
            (Method::Post, TASKS_SUMMARY_PATH, _) => self.summary(),
            (Method::Put, _, Some(id)) => self.update(id, request.body.as_ref()),
            (Method::Delete, _, Some(id)) => self.delete(id),
            _ => ApiResponse::json_body(404, &json!({"error": "Not found"})),
        };
        Ok(response)
    }
}

/// View double that records everything the controllers show
#[derive(Debug, Default)]
pub struct RecordingView {
    pub tasks: Vec<Task>,
    pub stats: Option<TaskStats>,
    pub cards: Vec<Video>,
    pub banners: Vec<Banner>,
    pub loading_transitions: Vec<bool>,
    pub prompts: Vec<String>,
    pub summary: Option<String>,
    pub downloads: Vec<(String, Vec<u8>)>,
    decline_confirmations: bool,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every confirmation prompt with `answer` (default: yes)
    pub fn answer_confirmations(&mut self, answer: bool) {
        self.decline_confirmations = !answer;
    }

    pub fn last_banner(&self) -> Option<&Banner> {
        self.banners.last()
    }

    fn record_prompt(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        !self.decline_confirmations
    }
}

impl GalleryView for RecordingView {
    fn render_videos(&mut self, videos: &[Video]) {
        self.cards = videos.to_vec();
    }

    fn prepend_video(&mut self, video: &Video) {
        self.cards.insert(0, video.clone());
    }

    fn remove_video(&mut self, id: i64) -> bool {
        let before = self.cards.len();
        self.cards.retain(|v| v.id != id);
        self.cards.len() != before
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.record_prompt(prompt)
    }

    fn show_banner(&mut self, banner: Banner) {
        self.banners.push(banner);
    }
}

impl TaskView for RecordingView {
    fn render_tasks(&mut self, tasks: &[Task]) {
        self.tasks = tasks.to_vec();
    }

    fn render_stats(&mut self, stats: TaskStats) {
        self.stats = Some(stats);
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading_transitions.push(loading);
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.record_prompt(prompt)
    }

    fn show_banner(&mut self, banner: Banner) {
        self.banners.push(banner);
    }

    fn show_summary(&mut self, summary: &str) {
        self.summary = Some(summary.to_string());
    }

    fn save_download(&mut self, filename: &str, content: &[u8]) -> Result<PathBuf, DomainError> {
        self.downloads.push((filename.to_string(), content.to_vec()));
        Ok(PathBuf::from(filename))
    }
}

/// Theme store kept in memory
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    pub saved: Option<Theme>,
    broken: bool,
}

impl MemoryThemeStore {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            saved: Some(theme),
            broken: false,
        }
    }

    /// Store whose reads and writes always fail
    pub fn failing() -> Self {
        Self {
            saved: None,
            broken: true,
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load_theme(&self) -> Result<Option<Theme>, DomainError> {
        if self.broken {
            return Err(DomainError::Storage("preferences unavailable".to_string()));
        }
        Ok(self.saved)
    }

    fn save_theme(&mut self, theme: Theme) -> Result<(), DomainError> {
        if self.broken {
            return Err(DomainError::Storage("preferences unavailable".to_string()));
        }
        self.saved = Some(theme);
        Ok(())
    }
}

pub fn sample_task(id: i64, title: &str, completed: bool, priority: Priority) -> Task {
    Task {
        id,
        title: title.to_string(),
        completed,
        priority,
        due_date: None,
        tags: None,
        created_at: Some("2025-01-01 09:00:00".to_string()),
    }
}

pub fn sample_video(id: i64, title: &str) -> Video {
    Video {
        id,
        title: title.to_string(),
        bilibili_url: format!("https://www.bilibili.com/video/BV{id}/"),
        cover_color: String::new(),
        play_count: "2.9万".to_string(),
        danmaku_count: "45".to_string(),
        publish_date: "2025-10-24 17:29:13".to_string(),
        up_name: "Uploader".to_string(),
        description: String::new(),
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
