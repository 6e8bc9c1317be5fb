// src/ports/html.rs
use crate::domain::{Task, TaskStats, Theme, Video};
use crate::util::text::format_date;
use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{html, Event, Options, Parser};
use tracing::instrument;

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Task list with the statistics header
    pub fn render_tasks_page(&self, tasks: &[Task], stats: TaskStats, theme: Theme) -> String {
        let items = if tasks.is_empty() {
            r#"<div class="empty-state">No tasks yet. Add one to get started.</div>"#.to_string()
        } else {
            tasks.iter().map(task_item).collect::<Vec<_>>().join("\n")
        };

        let body = format!(
            r#"<header>
        <h1>Task List</h1>
        <div class="stats">
            <span class="stat">Total: <strong id="totalTasks">{total}</strong></span>
            <span class="stat">Completed: <strong id="completedTasks">{completed}</strong></span>
            <span class="stat">Pending: <strong id="pendingTasks">{pending}</strong></span>
        </div>
    </header>
    <main class="task-list">
{items}
    </main>"#,
            total = stats.total,
            completed = stats.completed,
            pending = stats.pending,
        );
        page("Task List", theme, &body)
    }

    pub fn render_gallery_page(&self, videos: &[Video], theme: Theme) -> String {
        let cards = if videos.is_empty() {
            r#"<div class="empty-state">No videos yet.</div>"#.to_string()
        } else {
            videos.iter().map(video_card).collect::<Vec<_>>().join("\n")
        };

        let body = format!(
            r#"<header>
        <h1>Video Gallery</h1>
    </header>
    <main class="video-grid">
{cards}
    </main>"#
        );
        page("Video Gallery", theme, &body)
    }

    /// Markdown summary; raw HTML in the source is shown as text
    pub fn render_summary_page(&self, markdown: &str, theme: Theme) -> String {
        let body = format!(
            r#"<div class="summary-container">
        <div class="summary-header"><h2>📊 Task summary</h2></div>
        <div class="summary-content">
{}
        </div>
    </div>"#,
            self.markdown_to_html(markdown)
        );
        page("Task Summary", theme, &body)
    }

    #[instrument(level = "debug", skip(self), ret)]
    fn markdown_to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
            .map(|event| match event {
                Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
                other => other,
            });
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}

fn task_item(task: &Task) -> String {
    let mut meta = format!(
        r#"<span class="priority-badge {class}">{label}</span>"#,
        class = task.priority.as_str(),
        label = task.priority.label()
    );
    if task.due_date.as_deref().is_some_and(|d| !d.trim().is_empty()) {
        meta.push_str(&format!(
            r#"<span class="due-date">Due: {}</span>"#,
            encode_text(&format_date(task.due_date.as_deref()))
        ));
    }
    if let Some(tags) = task.tags.as_deref().filter(|t| !t.trim().is_empty()) {
        meta.push_str(&format!(r#"<span class="tags">Tags: {}</span>"#, encode_text(tags)));
    }
    meta.push_str(&format!(
        r#"<span class="created-time">Created: {}</span>"#,
        encode_text(&format_date(task.created_at.as_deref()))
    ));

    format!(
        r#"        <div class="task-item{completed}" data-id="{id}">
            <input type="checkbox" class="task-checkbox" disabled{checked}>
            <div class="task-content">
                <div class="task-title">{title}</div>
                <div class="task-meta">{meta}</div>
            </div>
        </div>"#,
        completed = if task.completed { " completed" } else { "" },
        checked = if task.completed { " checked" } else { "" },
        id = task.id,
        title = encode_text(&task.title),
    )
}

fn video_card(video: &Video) -> String {
    let url = safe_url(video.display_url());
    format!(
        r#"        <div class="video-card" data-video-id="{id}">
            <div class="video-cover" style="background: {cover};">
                <a href="{url}" class="play-link" target="_blank" rel="noopener">▶</a>
            </div>
            <div class="video-content">
                <h3 class="video-title">{title}</h3>
                <div class="video-meta">
                    <span class="meta-item">👁️ {plays}</span>
                    <span class="meta-item">💬 {danmaku}</span>
                    <span class="meta-item">📅 {date}</span>
                </div>
                <div class="up-info"><span class="up-avatar">UP</span> <span class="up-name">{up}</span></div>
                <p class="video-desc">{desc}</p>
            </div>
        </div>"#,
        id = video.id,
        cover = encode_double_quoted_attribute(video.display_cover()),
        url = encode_double_quoted_attribute(url),
        title = encode_text(video.display_title()),
        plays = encode_text(video.display_play_count()),
        danmaku = encode_text(video.display_danmaku_count()),
        date = encode_text(video.display_publish_date()),
        up = encode_text(video.display_up_name()),
        desc = encode_text(video.display_description()),
    )
}

/// Only http(s) links become clickable.
fn safe_url(url: &str) -> &str {
    let lower = url.trim_start().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url
    } else {
        "#"
    }
}

fn page(title: &str, theme: Theme, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        :root {{
            --bg: #f5f5f5;
            --card: #ffffff;
            --text: #222222;
            --muted: #666666;
            --accent: #00a1d6;
        }}
        [data-theme="dark"] {{
            --bg: #1e1e1e;
            --card: #2b2b2b;
            --text: #eeeeee;
            --muted: #aaaaaa;
            --accent: #fb7299;
        }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 960px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: var(--bg);
            color: var(--text);
        }}
        .stats .stat {{ margin-right: 1rem; }}
        .task-item, .video-card, .summary-container {{
            background: var(--card);
            border-radius: 8px;
            padding: 1rem;
            margin-bottom: 0.75rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .task-item {{ display: flex; gap: 0.75rem; }}
        .task-item.completed .task-title {{ text-decoration: line-through; color: var(--muted); }}
        .task-meta span {{ margin-right: 0.75rem; font-size: 0.85em; color: var(--muted); }}
        .priority-badge {{ padding: 2px 8px; border-radius: 4px; }}
        .priority-badge.high {{ background: #fdecea; }}
        .priority-badge.medium {{ background: #fff8e1; }}
        .priority-badge.low {{ background: #e8f5e9; }}
        .video-grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; }}
        .video-cover {{ height: 140px; border-radius: 6px; display: flex; align-items: center; justify-content: center; }}
        .play-link {{ color: #ffffff; font-size: 2rem; text-decoration: none; }}
        .video-meta span {{ margin-right: 0.75rem; font-size: 0.85em; color: var(--muted); }}
        .up-avatar {{ background: var(--accent); color: #ffffff; border-radius: 50%; padding: 2px 6px; font-size: 0.75em; }}
        .empty-state {{ text-align: center; color: var(--muted); padding: 2rem; }}
        pre {{ white-space: pre-wrap; word-wrap: break-word; padding: 1rem; border-radius: 4px; }}
    </style>
</head>
<body class="{theme}-theme">
    {body}
</body>
</html>"#,
        theme = theme.as_str(),
        title = encode_text(title),
    )
}
