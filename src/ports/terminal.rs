// src/ports/terminal.rs
use crate::application::{Banner, BannerKind, GalleryView, TaskView};
use crate::constants::MSG_LOADING;
use crate::domain::{DomainError, Task, TaskStats, Video};
use crate::util::text::format_date;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Plain-text view over any writer/reader pair
///
/// Output errors are logged and otherwise ignored: a broken pipe must not turn
/// a successful request into a failure.
///
/// A terminal cannot take a line back, so banner lifetimes map onto lines:
/// banners with a `dismiss_after` are printed once and scroll away, while
/// sticky banners and the loading indicator occupy a status line. On an
/// interactive terminal that line is overwritten by whatever is written next;
/// otherwise sticky banners are plain lines and the loading indicator is not
/// printed at all.
pub struct TerminalView<W: Write, R: BufRead> {
    out: W,
    input: R,
    assume_yes: bool,
    download_dir: PathBuf,
    cards: Vec<i64>,
    status_line: bool,
    status_open: bool,
}

impl TerminalView<io::Stdout, io::StdinLock<'static>> {
    pub fn stdio() -> Self {
        let interactive = io::stdout().is_terminal();
        Self::new(io::stdout(), io::stdin().lock()).status_line(interactive)
    }
}

impl<W: Write, R: BufRead> TerminalView<W, R> {
    pub fn new(out: W, input: R) -> Self {
        Self {
            out,
            input,
            assume_yes: false,
            download_dir: PathBuf::from("."),
            cards: Vec::new(),
            status_line: false,
            status_open: false,
        }
    }

    /// Overwrite sticky status text in place instead of printing lines
    pub fn status_line(mut self, enabled: bool) -> Self {
        self.status_line = enabled;
        self
    }

    /// Skip confirmation prompts
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        self.clear_status();
        if let Err(e) = writeln!(self.out, "{text}") {
            warn!(error = %e, "Failed to write to terminal");
        }
    }

    /// Write `text` without a newline so the next output replaces it
    fn status(&mut self, text: &str) {
        if !self.status_line {
            self.emit(text);
            return;
        }
        self.clear_status();
        match write!(self.out, "{text}").and_then(|()| self.out.flush()) {
            Ok(()) => self.status_open = true,
            Err(e) => warn!(error = %e, "Failed to write status line"),
        }
    }

    fn clear_status(&mut self) {
        if !self.status_open {
            return;
        }
        self.status_open = false;
        if let Err(e) = write!(self.out, "\r\x1b[2K") {
            warn!(error = %e, "Failed to clear status line");
        }
    }

    fn ask(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            debug!(prompt, "Confirmation assumed");
            return true;
        }
        self.clear_status();
        if let Err(e) = write!(self.out, "{prompt} [y/N] ").and_then(|()| self.out.flush()) {
            warn!(error = %e, "Failed to write prompt");
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }

    fn banner(&mut self, banner: &Banner) {
        let prefix = match banner.kind {
            BannerKind::Info => "…",
            BannerKind::Success => "✔",
            BannerKind::Error => "✖",
        };
        let text = format!("{prefix} {}", banner.message);
        match banner.dismiss_after {
            Some(ttl) => {
                debug!(?ttl, "Transient banner");
                self.emit(&text);
            }
            None => self.status(&text),
        }
    }
}

pub fn format_task_row(task: &Task) -> String {
    let mut row = format!(
        "[{}] #{:<4} {}  {}",
        if task.completed { "x" } else { " " },
        task.id,
        task.title,
        task.priority.label()
    );
    if task.due_date.as_deref().is_some_and(|d| !d.trim().is_empty()) {
        row.push_str(&format!("  due: {}", format_date(task.due_date.as_deref())));
    }
    if let Some(tags) = task.tags.as_deref().filter(|t| !t.trim().is_empty()) {
        row.push_str(&format!("  tags: {tags}"));
    }
    row.push_str(&format!("  created: {}", format_date(task.created_at.as_deref())));
    row
}

pub fn format_video_card(video: &Video) -> String {
    format!(
        "#{} {}\n    ▶ {}\n    👁 {}  💬 {}  📅 {}\n    UP: {}\n    {}",
        video.id,
        video.display_title(),
        video.display_url(),
        video.display_play_count(),
        video.display_danmaku_count(),
        video.display_publish_date(),
        video.display_up_name(),
        video.display_description()
    )
}

impl<W: Write, R: BufRead> GalleryView for TerminalView<W, R> {
    fn render_videos(&mut self, videos: &[Video]) {
        self.cards = videos.iter().map(|v| v.id).collect();
        if videos.is_empty() {
            self.emit("No videos yet.");
            return;
        }
        for video in videos {
            let card = format_video_card(video);
            self.emit(&card);
        }
    }

    fn prepend_video(&mut self, video: &Video) {
        self.cards.insert(0, video.id);
        let card = format_video_card(video);
        self.emit(&card);
    }

    fn remove_video(&mut self, id: i64) -> bool {
        let before = self.cards.len();
        self.cards.retain(|&card| card != id);
        self.cards.len() != before
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.ask(prompt)
    }

    fn show_banner(&mut self, banner: Banner) {
        self.banner(&banner);
    }
}

impl<W: Write, R: BufRead> TaskView for TerminalView<W, R> {
    fn render_tasks(&mut self, tasks: &[Task]) {
        if tasks.is_empty() {
            self.emit("No tasks yet. Add one to get started.");
            return;
        }
        for task in tasks {
            let row = format_task_row(task);
            self.emit(&row);
        }
    }

    fn render_stats(&mut self, stats: TaskStats) {
        self.emit(&format!(
            "Total: {}  Completed: {}  Pending: {}",
            stats.total, stats.completed, stats.pending
        ));
    }

    fn set_loading(&mut self, loading: bool) {
        debug!(loading, "Loading indicator");
        if !self.status_line {
            return;
        }
        if loading {
            self.status(&format!("… {MSG_LOADING}"));
        } else {
            self.clear_status();
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.ask(prompt)
    }

    fn show_banner(&mut self, banner: Banner) {
        self.banner(&banner);
    }

    fn show_summary(&mut self, summary: &str) {
        self.emit("📊 Task summary");
        self.emit(summary);
    }

    fn save_download(&mut self, filename: &str, content: &[u8]) -> Result<PathBuf, DomainError> {
        // keep only the final path component of a server-chosen name
        let name = PathBuf::from(filename)
            .file_name()
            .map(PathBuf::from)
            .ok_or_else(|| DomainError::Storage(format!("Invalid download name: {filename}")))?;
        let path = self.download_dir.join(name);
        fs::write(&path, content).map_err(|e| {
            DomainError::Storage(format!("Failed to write {}: {e}", path.display()))
        })?;
        self.emit(&format!("Saved {}", path.display()));
        Ok(path)
    }
}
