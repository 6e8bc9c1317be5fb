mod helpers;

use boardview::application::{BannerKind, LoadState, Method, TaskBoard};
use boardview::constants::{MSG_LOAD_FAILED, MSG_TASK_ADDED, MSG_TASK_DELETED, TASKS_PATH};
use boardview::domain::{DomainError, Priority, PriorityFilter, StatusFilter, TaskFilter, TaskUpdate};
use boardview::util::testing::{InMemoryTaskApi, MockTransport, RecordingView};
use helpers::{seeded_board, seeded_tasks};

#[test]
fn given_seeded_backend_when_loading_then_renders_tasks_and_stats() {
    // Arrange
    let mut board = seeded_board();

    // Act
    let tasks = board.load_tasks().unwrap();

    // Assert
    assert_eq!(tasks.len(), 4);
    let stats = board.view().stats.unwrap();
    assert_eq!((stats.total, stats.completed, stats.pending), (4, 2, 2));
    assert_eq!(board.view().loading_transitions, vec![true, false]);
    assert_eq!(board.state(), LoadState::Idle);
}

#[test]
fn given_buy_milk_when_adding_then_list_grows_by_one_pending_low_task() {
    // Arrange
    let mut board = seeded_board();
    let before = board.load_tasks().unwrap().len();

    // Act
    board
        .add_task("Buy milk", Priority::Low, None, None)
        .unwrap();

    // Assert
    let rendered = &board.view().tasks;
    assert_eq!(rendered.len(), before + 1);
    let added: Vec<_> = rendered.iter().filter(|t| t.title == "Buy milk").collect();
    assert_eq!(added.len(), 1);
    assert!(!added[0].completed);
    assert_eq!(added[0].priority, Priority::Low);
    assert_eq!(added[0].due_date, None);
    assert_eq!(board.view().last_banner().unwrap().message, MSG_TASK_ADDED);
}

#[test]
fn given_padded_title_when_adding_then_sends_trimmed_title_and_empty_optionals() {
    // Arrange
    let mut board = TaskBoard::new(InMemoryTaskApi::new(), RecordingView::new());

    // Act
    board
        .add_task("  Call mom  ", Priority::Medium, Some("  ".to_string()), None)
        .unwrap();

    // Assert
    let post = board
        .transport()
        .requests()
        .iter()
        .find(|r| r.method == Method::Post)
        .cloned()
        .unwrap();
    let body = post.body.unwrap();
    assert_eq!(body["title"], "Call mom");
    assert_eq!(body["priority"], "medium");
    assert_eq!(body["due_date"], "");
    assert_eq!(body["tags"], "");
}

#[test]
fn given_unsafe_title_when_adding_then_no_request_is_sent() {
    // Arrange
    let mut board = seeded_board();

    // Act
    let result = board.add_task("<script>alert(1)</script>", Priority::High, None, None);

    // Assert
    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert!(board.transport().requests().is_empty());
    assert_eq!(board.view().last_banner().unwrap().kind, BannerKind::Error);
}

#[test]
fn given_existing_task_when_deleting_then_id_is_gone_after_reload() {
    // Arrange
    let mut board = seeded_board();
    board.load_tasks().unwrap();

    // Act
    let deleted = board.delete_task(2).unwrap();

    // Assert
    assert!(deleted);
    assert!(board.view().tasks.iter().all(|t| t.id != 2));
    assert_eq!(board.view().tasks.len(), 3);
    assert_eq!(board.transport().tasks().len(), 3);
    assert_eq!(
        board.view().prompts,
        vec!["Delete task \"Groceries\"? This cannot be undone.".to_string()]
    );
    assert_eq!(board.view().last_banner().unwrap().message, MSG_TASK_DELETED);
}

#[test]
fn given_declined_confirmation_when_deleting_then_nothing_is_sent() {
    // Arrange
    let mut board = seeded_board();
    board.view_mut().answer_confirmations(false);

    // Act
    let deleted = board.delete_task(1).unwrap();

    // Assert
    assert!(!deleted);
    assert!(board
        .transport()
        .requests()
        .iter()
        .all(|r| r.method != Method::Delete));
    assert_eq!(board.transport().tasks().len(), 4);
}

#[test]
fn given_unknown_task_when_deleting_then_shows_server_error() {
    // Arrange
    let mut board = seeded_board();

    // Act
    let result = board.delete_task(99);

    // Assert
    assert_eq!(result.unwrap_err().status(), Some(404));
    assert_eq!(
        board.view().last_banner().unwrap().message,
        "Task does not exist"
    );
    assert_eq!(board.view().prompts[0], "Delete task \"this task\"? This cannot be undone.");
}

#[test]
fn given_pending_task_when_toggling_then_completed_after_reload() {
    // Arrange
    let mut board = seeded_board();

    // Act
    board.toggle_task(1, true).unwrap();

    // Assert
    let task = board.view().tasks.iter().find(|t| t.id == 1).unwrap();
    assert!(task.completed);
    let put = board
        .transport()
        .requests()
        .iter()
        .find(|r| r.method == Method::Put)
        .cloned()
        .unwrap();
    assert_eq!(put.path, format!("{TASKS_PATH}/1"));
    assert_eq!(put.body.unwrap(), serde_json::json!({"completed": true}));
}

#[test]
fn given_completed_task_when_untoggling_then_pending_after_reload() {
    // Arrange
    let mut board = seeded_board();

    // Act
    board.toggle_task(3, false).unwrap();

    // Assert
    let task = board.view().tasks.iter().find(|t| t.id == 3).unwrap();
    assert!(!task.completed);
}

#[test]
fn given_partial_update_when_updating_then_only_named_fields_change() {
    // Arrange
    let mut board = seeded_board();
    let update = TaskUpdate {
        priority: Some(Priority::Low),
        tags: Some("work".to_string()),
        ..Default::default()
    };

    // Act
    board.update_task(1, update).unwrap();

    // Assert
    let task = board.view().tasks.iter().find(|t| t.id == 1).unwrap();
    assert_eq!(task.title, "Write report");
    assert_eq!(task.priority, Priority::Low);
    assert_eq!(task.tags.as_deref(), Some("work"));
}

#[test]
fn given_blank_keyword_when_searching_then_same_as_load() {
    // Arrange
    let mut board = seeded_board();
    let all = board.load_tasks().unwrap();

    // Act
    let found = board.search_tasks("   ").unwrap();

    // Assert
    assert_eq!(found, all);
    assert_eq!(board.view().tasks, all);
}

#[test]
fn given_keyword_when_searching_then_matches_title_or_tags_ignoring_case() {
    // Arrange
    let mut board = seeded_board();

    // Act
    let by_title = board.search_tasks("REPORT").unwrap();
    let by_tag = board.search_tasks("errands").unwrap();

    // Assert
    assert_eq!(by_title.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    assert_eq!(by_tag.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
    let stats = board.view().stats.unwrap();
    assert_eq!((stats.total, stats.completed, stats.pending), (1, 0, 1));
    assert_eq!(board.keyword(), "errands");
}

#[test]
fn given_completed_filter_when_applying_then_only_completed_tasks() {
    // Arrange
    let mut board = seeded_board();
    let filter = TaskFilter {
        status: StatusFilter::Completed,
        priority: PriorityFilter::All,
    };

    // Act
    let tasks = board.apply_filters(filter).unwrap();

    // Assert
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t.completed));
}

#[test]
fn given_high_priority_filter_when_applying_then_only_high_tasks() {
    // Arrange
    let mut board = seeded_board();
    let filter = TaskFilter {
        status: StatusFilter::All,
        priority: PriorityFilter::Only(Priority::High),
    };

    // Act
    let tasks = board.apply_filters(filter).unwrap();

    // Assert
    assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn given_active_filter_when_clearing_then_shows_everything() {
    // Arrange
    let mut board = seeded_board();
    board.search_tasks("report").unwrap();
    board
        .apply_filters(TaskFilter {
            status: StatusFilter::Pending,
            priority: PriorityFilter::Only(Priority::Low),
        })
        .unwrap();

    // Act
    let tasks = board.clear_filters().unwrap();

    // Assert
    assert_eq!(tasks.len(), seeded_tasks().len());
    assert_eq!(board.filter(), TaskFilter::default());
    assert_eq!(board.keyword(), "");
}

#[test]
fn given_export_endpoint_when_exporting_then_saves_under_server_filename() {
    // Arrange
    let mut board = seeded_board();

    // Act
    let path = board.export_tasks().unwrap();

    // Assert
    assert_eq!(path.to_str(), Some("todo_tasks_export_20250101_090000.json"));
    let (name, content) = &board.view().downloads[0];
    assert_eq!(name, "todo_tasks_export_20250101_090000.json");
    let blob: serde_json::Value = serde_json::from_slice(content).unwrap();
    assert_eq!(blob["total_tasks"], 4);
}

#[test]
fn given_summary_endpoint_when_generating_then_shows_markdown() {
    // Arrange
    let mut board = seeded_board();

    // Act
    let summary = board.generate_summary().unwrap();

    // Assert
    assert!(summary.contains("Completed 2/4 tasks"));
    assert_eq!(board.view().summary.as_deref(), Some(summary.as_str()));
}

#[test]
fn given_unreachable_backend_when_loading_then_shows_load_failed_banner() {
    // Arrange
    let transport = MockTransport::builder()
        .with_network_error(Method::Get, TASKS_PATH, "connection refused")
        .build();
    let mut board = TaskBoard::new(transport, RecordingView::new());

    // Act
    let result = board.load_tasks();

    // Assert
    assert!(matches!(result, Err(DomainError::Network(_))));
    assert_eq!(board.view().last_banner().unwrap().message, MSG_LOAD_FAILED);
    assert_eq!(board.view().loading_transitions, vec![true, false]);
    assert_eq!(board.state(), LoadState::Idle);
}
