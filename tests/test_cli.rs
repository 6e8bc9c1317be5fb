use boardview::cli::args::{Args, Command, TaskCommand, ThemeCommand, VideoCommand};
use boardview::domain::{Priority, PriorityFilter, StatusFilter};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["boardview", "-v"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_task_add_with_defaults_when_parsing_then_priority_is_medium() {
    // Arrange
    let args = vec!["boardview", "task", "add", "Buy milk"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Task(TaskCommand::Add {
            title,
            priority,
            due,
            tags,
        }) => {
            assert_eq!(title, "Buy milk");
            assert_eq!(priority, Priority::Medium);
            assert_eq!(due, None);
            assert_eq!(tags, None);
        }
        other => panic!("Expected task add, got {other:?}"),
    }
    assert_eq!(parsed.config, None);
    assert_eq!(parsed.verbose, 0);
}

#[test]
fn given_task_add_with_options_when_parsing_then_reads_all_fields() {
    // Arrange
    let args = vec![
        "boardview", "task", "add", "Report", "-p", "HIGH", "-d", "2025-03-01T18:00", "-t",
        "work",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Task(TaskCommand::Add {
            priority, due, tags, ..
        }) => {
            assert_eq!(priority, Priority::High);
            assert_eq!(due.as_deref(), Some("2025-03-01T18:00"));
            assert_eq!(tags.as_deref(), Some("work"));
        }
        other => panic!("Expected task add, got {other:?}"),
    }
}

#[test]
fn given_unknown_priority_when_parsing_then_fails() {
    let result = Args::try_parse_from(vec!["boardview", "task", "add", "x", "-p", "urgent"]);

    assert!(result.is_err());
}

#[test]
fn given_filter_command_when_parsing_then_builds_filter_values() {
    // Arrange
    let args = vec![
        "boardview", "task", "filter", "--status", "completed", "--priority", "low",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Task(TaskCommand::Filter { status, priority }) => {
            assert_eq!(status, StatusFilter::Completed);
            assert_eq!(priority, PriorityFilter::Only(Priority::Low));
        }
        other => panic!("Expected task filter, got {other:?}"),
    }
}

#[test]
fn given_filter_without_options_when_parsing_then_defaults_to_all() {
    let parsed = Args::try_parse_from(vec!["boardview", "task", "filter"]).unwrap();

    match parsed.command {
        Command::Task(TaskCommand::Filter { status, priority }) => {
            assert_eq!(status, StatusFilter::All);
            assert_eq!(priority, PriorityFilter::All);
        }
        other => panic!("Expected task filter, got {other:?}"),
    }
}

#[test]
fn given_update_with_completed_flag_when_parsing_then_reads_bool() {
    let parsed =
        Args::try_parse_from(vec!["boardview", "task", "update", "7", "--completed", "true"])
            .unwrap();

    match parsed.command {
        Command::Task(TaskCommand::Update {
            id,
            completed,
            title,
            ..
        }) => {
            assert_eq!(id, 7);
            assert_eq!(completed, Some(true));
            assert_eq!(title, None);
        }
        other => panic!("Expected task update, got {other:?}"),
    }
}

#[test]
fn given_export_with_output_dir_when_parsing_then_reads_path() {
    let parsed =
        Args::try_parse_from(vec!["boardview", "task", "export", "-o", "/tmp/out"]).unwrap();

    match parsed.command {
        Command::Task(TaskCommand::Export { output }) => {
            assert_eq!(output, PathBuf::from("/tmp/out"));
        }
        other => panic!("Expected task export, got {other:?}"),
    }
}

#[test]
fn given_video_add_when_parsing_then_reads_form_fields() {
    // Arrange
    let args = vec![
        "boardview",
        "video",
        "add",
        "--title",
        "Clip",
        "--url",
        "https://www.bilibili.com/video/BV1",
        "--play-count",
        "2.9万",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Video(VideoCommand::Add {
            title,
            url,
            play_count,
            up_name,
            ..
        }) => {
            assert_eq!(title, "Clip");
            assert_eq!(url, "https://www.bilibili.com/video/BV1");
            assert_eq!(play_count.as_deref(), Some("2.9万"));
            assert_eq!(up_name, None);
        }
        other => panic!("Expected video add, got {other:?}"),
    }
}

#[test]
fn given_video_add_without_url_when_parsing_then_fails() {
    let result = Args::try_parse_from(vec!["boardview", "video", "add", "--title", "Clip"]);

    assert!(result.is_err());
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_applies_them() {
    // Arrange
    let args = vec![
        "boardview",
        "video",
        "delete",
        "5",
        "-y",
        "--video-url",
        "http://videos:8080",
        "-c",
        "/etc/boardview.toml",
        "-vv",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(
        parsed.command,
        Command::Video(VideoCommand::Delete { id: 5, yes: true })
    ));
    assert_eq!(parsed.video_url.as_deref(), Some("http://videos:8080"));
    assert_eq!(parsed.task_url, None);
    assert_eq!(parsed.config, Some(PathBuf::from("/etc/boardview.toml")));
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_theme_toggle_when_parsing_then_succeeds() {
    let parsed = Args::try_parse_from(vec!["boardview", "theme", "toggle"]).unwrap();

    assert!(matches!(parsed.command, Command::Theme(ThemeCommand::Toggle)));
}
