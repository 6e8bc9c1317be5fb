// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::application::{TaskBoard, ThemeSwitcher, VideoGallery};
use crate::cli::args::{Args, Command, TaskCommand, ThemeCommand, VideoCommand};
use crate::domain::{NewVideo, TaskFilter, TaskStats, TaskUpdate, Theme};
use crate::infrastructure::{Config, ContentRenderer, FilePreferences, HttpTransport};
use crate::ports::{HtmlPresenter, TerminalView};
use anyhow::{Context, Result};
use std::io;
use tracing::debug;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting boardview with arguments");

    let config = Config::load_or_default(args.config.as_deref())?
        .with_overrides(args.video_url, args.task_url);
    debug!(?config, "Effective configuration");

    match args.command {
        Command::Video(cmd) => run_video(cmd, &config),
        Command::Task(cmd) => run_task(cmd, &config),
        Command::Theme(cmd) => run_theme(cmd),
    }
}

fn run_video(cmd: VideoCommand, config: &Config) -> Result<()> {
    let transport = HttpTransport::new(&config.api.video_base_url, config.http.timeout())?;
    debug!(base_url = transport.base_url(), "Using video backend");

    match cmd {
        VideoCommand::List { html: true } => {
            let mut gallery = VideoGallery::new(transport, quiet_view());
            let videos = gallery.list_videos()?;
            let page = HtmlPresenter::new().render_gallery_page(&videos, saved_theme());
            ContentRenderer::new().show("videos.html", &page)?;
        }
        VideoCommand::List { html: false } => {
            VideoGallery::new(transport, TerminalView::stdio()).list_videos()?;
        }
        VideoCommand::Add {
            title,
            url,
            cover_color,
            play_count,
            danmaku_count,
            publish_date,
            up_name,
            description,
        } => {
            let form = NewVideo {
                title,
                bilibili_url: url,
                cover_color: cover_color.unwrap_or_default(),
                play_count: play_count.unwrap_or_default(),
                danmaku_count: danmaku_count.unwrap_or_default(),
                publish_date: publish_date.unwrap_or_default(),
                up_name: up_name.unwrap_or_default(),
                description: description.unwrap_or_default(),
            };
            VideoGallery::new(transport, TerminalView::stdio()).submit_video(form)?;
        }
        VideoCommand::Delete { id, yes } => {
            let view = TerminalView::stdio().assume_yes(yes);
            VideoGallery::new(transport, view).delete_video(id)?;
        }
    }
    Ok(())
}

fn run_task(cmd: TaskCommand, config: &Config) -> Result<()> {
    let transport = HttpTransport::new(&config.api.task_base_url, config.http.timeout())?;
    debug!(base_url = transport.base_url(), "Using task backend");

    match cmd {
        TaskCommand::List { html: true } => {
            let mut board = TaskBoard::new(transport, quiet_view());
            let tasks = board.load_tasks()?;
            let stats = TaskStats::from_tasks(&tasks);
            let page = HtmlPresenter::new().render_tasks_page(&tasks, stats, saved_theme());
            ContentRenderer::new().show("tasks.html", &page)?;
        }
        TaskCommand::List { html: false } => {
            TaskBoard::new(transport, TerminalView::stdio()).load_tasks()?;
        }
        TaskCommand::Add {
            title,
            priority,
            due,
            tags,
        } => {
            TaskBoard::new(transport, TerminalView::stdio()).add_task(&title, priority, due, tags)?;
        }
        TaskCommand::Update {
            id,
            title,
            priority,
            due,
            tags,
            completed,
        } => {
            let update = TaskUpdate {
                title,
                completed,
                priority,
                due_date: due,
                tags,
            };
            TaskBoard::new(transport, TerminalView::stdio()).update_task(id, update)?;
        }
        TaskCommand::Done { id } => {
            TaskBoard::new(transport, TerminalView::stdio()).toggle_task(id, true)?;
        }
        TaskCommand::Undone { id } => {
            TaskBoard::new(transport, TerminalView::stdio()).toggle_task(id, false)?;
        }
        TaskCommand::Delete { id, yes } => {
            let view = TerminalView::stdio().assume_yes(yes);
            TaskBoard::new(transport, view).delete_task(id)?;
        }
        TaskCommand::Search { keyword } => {
            TaskBoard::new(transport, TerminalView::stdio()).search_tasks(&keyword)?;
        }
        TaskCommand::Filter { status, priority } => {
            let filter = TaskFilter { status, priority };
            TaskBoard::new(transport, TerminalView::stdio()).apply_filters(filter)?;
        }
        TaskCommand::Clear => {
            TaskBoard::new(transport, TerminalView::stdio()).clear_filters()?;
        }
        TaskCommand::Export { output } => {
            let view = TerminalView::stdio().download_dir(output);
            let path = TaskBoard::new(transport, view).export_tasks()?;
            debug!(?path, "Export saved");
        }
        TaskCommand::Summary { html: true } => {
            let mut board = TaskBoard::new(transport, quiet_view());
            let summary = board.generate_summary()?;
            let page = HtmlPresenter::new().render_summary_page(&summary, saved_theme());
            ContentRenderer::new().show("summary.html", &page)?;
        }
        TaskCommand::Summary { html: false } => {
            TaskBoard::new(transport, TerminalView::stdio()).generate_summary()?;
        }
    }
    Ok(())
}

fn run_theme(cmd: ThemeCommand) -> Result<()> {
    let path = FilePreferences::default_path().context("Could not find config directory")?;
    let mut switcher = ThemeSwitcher::new(FilePreferences::new(path));
    let current = switcher.load_theme();

    match cmd {
        ThemeCommand::Show => {
            println!("{current} ({}: boardview theme toggle)", current.toggle_label())
        }
        ThemeCommand::Toggle => {
            let theme = switcher.toggle_theme()?;
            println!("Theme: {theme}");
        }
    }
    Ok(())
}

/// Browser output replaces the terminal listing
fn quiet_view() -> TerminalView<io::Sink, io::Empty> {
    TerminalView::new(io::sink(), io::empty())
}

fn saved_theme() -> Theme {
    match FilePreferences::default_path() {
        Some(path) => ThemeSwitcher::new(FilePreferences::new(path)).load_theme(),
        None => Theme::default(),
    }
}

#[cfg(test)]
/// must be public to be used from integration tests
mod tests {
    use crate::util::testing;
    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }
}
