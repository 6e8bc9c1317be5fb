// src/cli/args.rs
use crate::domain::{Priority, PriorityFilter, StatusFilter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (default: <config dir>/boardview/config.toml)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the video backend
    #[arg(long, value_name = "URL", global = true)]
    pub video_url: Option<String>,

    /// Base URL of the task backend
    #[arg(long, value_name = "URL", global = true)]
    pub task_url: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Browse and manage the video gallery
    #[command(subcommand)]
    Video(VideoCommand),

    /// Manage the task list
    #[command(subcommand)]
    Task(TaskCommand),

    /// Show or switch the light/dark theme
    #[command(subcommand)]
    Theme(ThemeCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum VideoCommand {
    /// List all videos
    List {
        /// Open the gallery in the browser instead of printing it
        #[arg(long)]
        html: bool,
    },

    /// Submit a new video
    Add {
        #[arg(long)]
        title: String,

        /// Bilibili link of the video
        #[arg(long)]
        url: String,

        /// CSS background for the cover
        #[arg(long)]
        cover_color: Option<String>,

        #[arg(long)]
        play_count: Option<String>,

        #[arg(long)]
        danmaku_count: Option<String>,

        #[arg(long)]
        publish_date: Option<String>,

        /// Uploader name
        #[arg(long)]
        up_name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a video
    Delete {
        #[arg(value_name = "VIDEO_ID")]
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TaskCommand {
    /// List all tasks with statistics
    List {
        /// Open the list in the browser instead of printing it
        #[arg(long)]
        html: bool,
    },

    /// Add a task
    Add {
        #[arg(value_name = "TITLE")]
        title: String,

        /// high, medium or low
        #[arg(short, long, default_value = "medium")]
        priority: Priority,

        /// Due date, e.g. 2025-03-01T18:00
        #[arg(short, long)]
        due: Option<String>,

        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Change fields of a task
    Update {
        #[arg(value_name = "TASK_ID")]
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        priority: Option<Priority>,

        #[arg(short, long)]
        due: Option<String>,

        #[arg(short, long)]
        tags: Option<String>,

        #[arg(long)]
        completed: Option<bool>,
    },

    /// Mark a task completed
    Done {
        #[arg(value_name = "TASK_ID")]
        id: i64,
    },

    /// Mark a task pending again
    Undone {
        #[arg(value_name = "TASK_ID")]
        id: i64,
    },

    /// Delete a task
    Delete {
        #[arg(value_name = "TASK_ID")]
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show tasks whose title or tags contain KEYWORD
    Search {
        #[arg(value_name = "KEYWORD")]
        keyword: String,
    },

    /// Show tasks by status and priority
    Filter {
        /// all, completed or pending
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// all, high, medium or low
        #[arg(long, default_value = "all")]
        priority: PriorityFilter,
    },

    /// Reset search and filters and show every task
    Clear,

    /// Download all tasks as JSON
    Export {
        /// Directory to save the export in
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,
    },

    /// Ask the backend for a Markdown summary
    Summary {
        #[arg(long)]
        html: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ThemeCommand {
    /// Print the saved theme
    Show,

    /// Switch between light and dark
    Toggle,
}
