// src/domain/mod.rs
pub mod error;
pub mod task;
pub mod theme;
pub mod video;

pub use error::DomainError;
pub use task::{
    validate_title, NewTask, Priority, PriorityFilter, StatusFilter, Task, TaskFilter, TaskStats,
    TaskUpdate,
};
pub use theme::Theme;
pub use video::{NewVideo, Video};
