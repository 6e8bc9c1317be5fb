// src/application/view.rs
use crate::constants::{ERROR_BANNER_TTL, SUCCESS_BANNER_TTL};
use crate::domain::{DomainError, Task, TaskStats, Video};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Success,
    Error,
}

/// Transient status message. `dismiss_after == None` stays until replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub dismiss_after: Option<Duration>,
}

impl Banner {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Info,
            message: message.into(),
            dismiss_after: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
            dismiss_after: Some(SUCCESS_BANNER_TTL),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
            dismiss_after: Some(ERROR_BANNER_TTL),
        }
    }
}

/// Display surface driven by `VideoGallery`
pub trait GalleryView {
    fn render_videos(&mut self, videos: &[Video]);

    /// Insert a card at the top of the grid without re-rendering the rest
    fn prepend_video(&mut self, video: &Video);

    /// Remove the card for `id`; returns whether a card was found
    fn remove_video(&mut self, id: i64) -> bool;

    fn confirm(&mut self, prompt: &str) -> bool;

    fn show_banner(&mut self, banner: Banner);
}

/// Display surface driven by `TaskBoard`
pub trait TaskView {
    fn render_tasks(&mut self, tasks: &[Task]);

    fn render_stats(&mut self, stats: TaskStats);

    fn set_loading(&mut self, loading: bool);

    fn confirm(&mut self, prompt: &str) -> bool;

    fn show_banner(&mut self, banner: Banner);

    fn show_summary(&mut self, summary: &str);

    /// Hand a downloaded file to the user; returns where it ended up
    fn save_download(&mut self, filename: &str, content: &[u8]) -> Result<PathBuf, DomainError>;
}
