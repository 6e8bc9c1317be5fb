// src/constants.rs
//
// Application-wide constants: REST paths, limits, banner timings and
// user-facing messages shared by the controllers and views.

use std::time::Duration;

// REST paths, relative to the configured base URL of each backend
pub const VIDEOS_PATH: &str = "/api/videos";
pub const ADD_VIDEO_PATH: &str = "/api/add_video";
pub const DELETE_VIDEO_PATH: &str = "/api/delete_video";
pub const TASKS_PATH: &str = "/api/tasks";
pub const TASKS_EXPORT_PATH: &str = "/api/tasks/export";
pub const TASKS_SUMMARY_PATH: &str = "/api/tasks/summary";

/// Base URL used for both backends when neither config nor flags name one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Maximum task title length accepted on the client, counted in characters.
///
/// Used in: `domain/task.rs`
pub const MAX_TITLE_CHARS: usize = 100;

/// Length a task title is cut to inside the delete confirmation prompt.
///
/// Used in: `application/task_board.rs`
pub const CONFIRM_TITLE_CHARS: usize = 30;

/// How long an error banner stays visible.
pub const ERROR_BANNER_TTL: Duration = Duration::from_secs(5);

/// How long a success banner stays visible.
pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(3);

/// Delay in milliseconds after writing HTML file before opening browser.
///
/// On macOS, the browser needs a brief moment for the file to be fully written
/// and indexed before opening. Without this delay, the browser may open an empty
/// or incomplete file.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;

pub const DEFAULT_COVER_COLOR: &str = "linear-gradient(45deg, #00a1d6, #fb7299)";
pub const DEFAULT_COUNT: &str = "0";

// Task validation
pub const MSG_TITLE_EMPTY: &str = "Please enter a task title";
pub const MSG_TITLE_TOO_LONG: &str = "Task title cannot exceed 100 characters";
pub const MSG_TITLE_UNSAFE: &str = "Input contains unsafe content, please re-enter";

// Task board banners
pub const MSG_LOAD_FAILED: &str = "Could not load the task list, please try again later";
pub const MSG_ADD_FAILED: &str = "Failed to add the task, please try again later";
pub const MSG_UPDATE_FAILED: &str = "Failed to update the task, please try again later";
pub const MSG_DELETE_FAILED: &str = "Failed to delete the task, please try again later";
pub const MSG_SEARCH_FAILED: &str = "Task search failed, please try again later";
pub const MSG_FILTER_FAILED: &str = "Filtering tasks failed, please try again later";
pub const MSG_EXPORT_FAILED: &str = "Exporting tasks failed, please try again later";
pub const MSG_SUMMARY_FAILED: &str = "Generating the summary failed, please try again later";
pub const MSG_TASK_ADDED: &str = "Task added";
pub const MSG_TASK_UPDATED: &str = "Task updated";
pub const MSG_TASK_DELETED: &str = "Task deleted";
pub const MSG_TASKS_EXPORTED: &str = "Tasks exported";
pub const MSG_SUMMARY_READY: &str = "Summary generated";
pub const MSG_LOADING: &str = "Loading...";

// Video gallery banners
pub const MSG_UPLOADING: &str = "Uploading...";
pub const MSG_VIDEO_ADDED: &str = "Upload succeeded, the video was added to the list";
pub const MSG_VIDEO_DELETED: &str = "Video deleted";
pub const MSG_VIDEO_NETWORK: &str = "Network error, please retry";
pub const MSG_VIDEOS_LOAD_FAILED: &str = "Could not load the video gallery";
