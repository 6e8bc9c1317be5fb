// src/application/task_board.rs
use crate::application::api::{error_message, ApiRequest, ApiTransport};
use crate::application::view::{Banner, TaskView};
use crate::constants::{
    CONFIRM_TITLE_CHARS, MSG_ADD_FAILED, MSG_DELETE_FAILED, MSG_EXPORT_FAILED, MSG_FILTER_FAILED,
    MSG_LOAD_FAILED, MSG_SEARCH_FAILED, MSG_SUMMARY_FAILED, MSG_SUMMARY_READY, MSG_TASKS_EXPORTED, MSG_TASK_ADDED,
    MSG_TASK_DELETED, MSG_TASK_UPDATED, MSG_UPDATE_FAILED, TASKS_EXPORT_PATH, TASKS_PATH,
    TASKS_SUMMARY_PATH,
};
use crate::domain::{
    validate_title, DomainError, NewTask, Priority, Task, TaskFilter, TaskStats, TaskUpdate,
};
use crate::util::text::{export_filename, truncate_text};
use chrono::Utc;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    summary: Option<String>,
}

/// Mediates between the task view and the task backend.
///
/// Every mutation is followed by a full reload of the collection; the
/// server's answer is the only source of truth for what gets rendered.
pub struct TaskBoard<T: ApiTransport, V: TaskView> {
    transport: T,
    view: V,
    state: LoadState,
    filter: TaskFilter,
    keyword: String,
    rendered: Vec<Task>,
}

impl<T: ApiTransport, V: TaskView> TaskBoard<T, V> {
    pub fn new(transport: T, view: V) -> Self {
        Self {
            transport,
            view,
            state: LoadState::Idle,
            filter: TaskFilter::default(),
            keyword: String::new(),
            rendered: Vec::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[instrument(level = "debug", skip(self))]
    pub fn load_tasks(&mut self) -> Result<Vec<Task>, DomainError> {
        let began = self.begin_loading();
        let result = match self.fetch_all() {
            Ok(tasks) => {
                debug!(count = tasks.len(), "Loaded tasks");
                Ok(self.show(tasks))
            }
            Err(err) => {
                warn!(%err, "Loading tasks failed");
                self.view.show_banner(Banner::error(MSG_LOAD_FAILED));
                Err(err)
            }
        };
        self.end_loading(began);
        result
    }

    #[instrument(level = "debug", skip(self))]
    pub fn add_task(
        &mut self,
        title: &str,
        priority: Priority,
        due_date: Option<String>,
        tags: Option<String>,
    ) -> Result<(), DomainError> {
        let title = self.checked_title(title)?;
        let new_task = NewTask {
            title,
            priority,
            due_date: non_blank(due_date),
            tags: non_blank(tags),
        };
        self.mutate(
            ApiRequest::post(TASKS_PATH, &new_task),
            MSG_ADD_FAILED,
            MSG_TASK_ADDED,
        )
    }

    #[instrument(level = "debug", skip(self))]
    pub fn update_task(&mut self, id: i64, mut update: TaskUpdate) -> Result<(), DomainError> {
        if update.is_empty() {
            let err = DomainError::Validation("No fields to update".to_string());
            self.view.show_banner(Banner::error(err.to_string()));
            return Err(err);
        }
        if let Some(title) = update.title.take() {
            update.title = Some(self.checked_title(&title)?);
        }
        self.mutate(
            ApiRequest::put(format!("{TASKS_PATH}/{id}"), &update),
            MSG_UPDATE_FAILED,
            MSG_TASK_UPDATED,
        )
    }

    /// Checkbox toggle: sends only `completed`
    pub fn toggle_task(&mut self, id: i64, completed: bool) -> Result<(), DomainError> {
        self.update_task(id, TaskUpdate::completion(completed))
    }

    /// Returns `Ok(false)` when the user declined the confirmation.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_task(&mut self, id: i64) -> Result<bool, DomainError> {
        let title = self
            .rendered
            .iter()
            .find(|t| t.id == id)
            .map(|t| truncate_text(&t.title, CONFIRM_TITLE_CHARS))
            .unwrap_or_else(|| "this task".to_string());
        let prompt = format!("Delete task \"{title}\"? This cannot be undone.");
        if !self.view.confirm(&prompt) {
            debug!(id, "Delete cancelled");
            return Ok(false);
        }
        self.mutate(
            Ok(ApiRequest::delete(format!("{TASKS_PATH}/{id}"))),
            MSG_DELETE_FAILED,
            MSG_TASK_DELETED,
        )
        .map(|()| true)
    }

    /// Blank keyword is the same as `load_tasks`.
    #[instrument(level = "debug", skip(self))]
    pub fn search_tasks(&mut self, keyword: &str) -> Result<Vec<Task>, DomainError> {
        self.keyword = keyword.to_string();
        if keyword.trim().is_empty() {
            return self.load_tasks();
        }
        self.fetch_and_show(MSG_SEARCH_FAILED, |tasks| {
            tasks
                .into_iter()
                .filter(|t| t.matches_keyword(keyword))
                .collect()
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub fn apply_filters(&mut self, filter: TaskFilter) -> Result<Vec<Task>, DomainError> {
        self.filter = filter;
        self.fetch_and_show(MSG_FILTER_FAILED, |tasks| filter.apply(tasks))
    }

    pub fn clear_filters(&mut self) -> Result<Vec<Task>, DomainError> {
        self.filter = TaskFilter::default();
        self.keyword.clear();
        self.load_tasks()
    }

    /// Downloads the export blob and hands it to the view; returns where it was saved.
    #[instrument(level = "debug", skip(self))]
    pub fn export_tasks(&mut self) -> Result<PathBuf, DomainError> {
        let began = self.begin_loading();
        let result = self.download_export();
        match &result {
            Ok(path) => {
                info!(?path, "Tasks exported");
                self.view.show_banner(Banner::success(MSG_TASKS_EXPORTED));
            }
            Err(err) => {
                warn!(%err, "Exporting tasks failed");
                self.view.show_banner(Banner::error(MSG_EXPORT_FAILED));
            }
        }
        self.end_loading(began);
        result
    }

    #[instrument(level = "debug", skip(self))]
    pub fn generate_summary(&mut self) -> Result<String, DomainError> {
        let began = self.begin_loading();
        let result = self.request_summary();
        match &result {
            Ok(summary) => {
                self.view.show_summary(summary);
                self.view.show_banner(Banner::success(MSG_SUMMARY_READY));
            }
            Err(err) => {
                warn!(%err, "Generating summary failed");
                let message = match err {
                    DomainError::Decode(_) => MSG_SUMMARY_FAILED.to_string(),
                    other => other.to_string(),
                };
                self.view.show_banner(Banner::error(message));
            }
        }
        self.end_loading(began);
        result
    }

    fn begin_loading(&mut self) -> bool {
        if self.state == LoadState::Loading {
            return false;
        }
        self.state = LoadState::Loading;
        self.view.set_loading(true);
        true
    }

    fn end_loading(&mut self, began: bool) {
        if began {
            self.state = LoadState::Idle;
            self.view.set_loading(false);
        }
    }

    fn show(&mut self, tasks: Vec<Task>) -> Vec<Task> {
        self.view.render_tasks(&tasks);
        self.view.render_stats(TaskStats::from_tasks(&tasks));
        self.rendered = tasks.clone();
        tasks
    }

    fn checked_title(&mut self, title: &str) -> Result<String, DomainError> {
        validate_title(title).inspect_err(|err| {
            self.view.show_banner(Banner::error(err.to_string()));
        })
    }

    fn fetch_all(&mut self) -> Result<Vec<Task>, DomainError> {
        self.transport
            .send(&ApiRequest::get(TASKS_PATH))?
            .ensure_ok()?
            .json()
    }

    fn fetch_and_show(
        &mut self,
        failure_message: &str,
        select: impl FnOnce(Vec<Task>) -> Vec<Task>,
    ) -> Result<Vec<Task>, DomainError> {
        let began = self.begin_loading();
        let result = match self.fetch_all() {
            Ok(tasks) => Ok(self.show(select(tasks))),
            Err(err) => {
                warn!(%err, "Fetching tasks failed");
                self.view.show_banner(Banner::error(failure_message));
                Err(err)
            }
        };
        self.end_loading(began);
        result
    }

    /// Send a mutation, then reload the full list.
    fn mutate(
        &mut self,
        request: Result<ApiRequest, DomainError>,
        failure_message: &str,
        success_message: &str,
    ) -> Result<(), DomainError> {
        let began = self.begin_loading();
        let result = request
            .and_then(|request| self.transport.send(&request))
            .and_then(|response| response.ensure_success(failure_message))
            .map(|_| ());

        match &result {
            Ok(()) => {
                // a failed reload reports its own banner
                let _ = self.load_tasks();
                self.view.show_banner(Banner::success(success_message));
            }
            Err(err) => {
                warn!(%err, "Task request failed");
                self.view.show_banner(Banner::error(err.to_string()));
            }
        }
        self.end_loading(began);
        result
    }

    fn download_export(&mut self) -> Result<PathBuf, DomainError> {
        let response = self
            .transport
            .send(&ApiRequest::get(TASKS_EXPORT_PATH))?
            .ensure_ok()?;
        let filename = export_filename(
            response.header("Content-Disposition"),
            Utc::now().date_naive(),
        );
        debug!(%filename, bytes = response.body.len(), "Export received");
        self.view.save_download(&filename, &response.body)
    }

    fn request_summary(&mut self) -> Result<String, DomainError> {
        let response = self
            .transport
            .send(&ApiRequest::post_empty(TASKS_SUMMARY_PATH))?;
        if !response.is_success() {
            let status = response.status;
            return Err(DomainError::Http {
                status,
                message: error_message(
                    &response.body,
                    &format!("Summary generation failed (status {status})"),
                ),
            });
        }
        response
            .json::<SummaryResponse>()?
            .summary
            .ok_or_else(|| DomainError::Decode("response carried no summary".to_string()))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
