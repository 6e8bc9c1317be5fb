use boardview::domain::{Priority, TaskStats, Theme};
use boardview::ports::HtmlPresenter;
use boardview::util::testing::{sample_task, sample_video};

#[test]
fn given_tasks_when_rendering_page_then_contains_rows_and_stats() {
    // Arrange
    let mut tagged = sample_task(2, "Groceries", false, Priority::Medium);
    tagged.tags = Some("home".to_string());
    let tasks = vec![sample_task(1, "Write report", true, Priority::High), tagged];
    let stats = TaskStats::from_tasks(&tasks);

    // Act
    let html = HtmlPresenter::new().render_tasks_page(&tasks, stats, Theme::Light);

    // Assert
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-theme="light""#));
    assert!(html.contains(r#"<strong id="totalTasks">2</strong>"#));
    assert!(html.contains(r#"<strong id="completedTasks">1</strong>"#));
    assert!(html.contains(r#"<strong id="pendingTasks">1</strong>"#));
    assert!(html.contains(r#"data-id="1""#));
    assert!(html.contains("Write report"));
    assert!(html.contains("Tags: home"));
    assert!(html.contains("Created: 2025-01-01"));
}

#[test]
fn given_no_tasks_when_rendering_page_then_shows_empty_state() {
    let html = HtmlPresenter::new().render_tasks_page(&[], TaskStats::default(), Theme::Dark);

    assert!(html.contains("No tasks yet"));
    assert!(html.contains(r#"data-theme="dark""#));
}

#[test]
fn given_hostile_task_title_when_rendering_then_markup_is_escaped() {
    // Arrange
    let tasks = vec![sample_task(1, "<img src=x onerror=alert(1)>", false, Priority::Low)];

    // Act
    let html =
        HtmlPresenter::new().render_tasks_page(&tasks, TaskStats::from_tasks(&tasks), Theme::Light);

    // Assert
    assert!(!html.contains("<img src=x"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
}

#[test]
fn given_blank_video_fields_when_rendering_gallery_then_uses_placeholders() {
    // Arrange
    let mut video = sample_video(7, "");
    video.up_name = String::new();
    video.bilibili_url = String::new();

    // Act
    let html = HtmlPresenter::new().render_gallery_page(&[video], Theme::Light);

    // Assert
    assert!(html.contains(r#"data-video-id="7""#));
    assert!(html.contains("Untitled video"));
    assert!(html.contains("Unknown uploader"));
    assert!(html.contains("No description"));
    assert!(html.contains(r##"href="#""##));
}

#[test]
fn given_markdown_summary_when_rendering_then_converts_to_html() {
    // Arrange
    let summary = "## Task summary\n\n- **2** completed\n- 1 pending";

    // Act
    let html = HtmlPresenter::new().render_summary_page(summary, Theme::Light);

    // Assert
    assert!(html.contains("<h2>Task summary</h2>"));
    assert!(html.contains("<strong>2</strong>"));
    assert!(html.contains("<li>1 pending</li>"));
}
