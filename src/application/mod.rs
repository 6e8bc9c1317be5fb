// src/application/mod.rs
pub mod api;
pub mod task_board;
pub mod theme;
pub mod video_gallery;
pub mod view;

pub use api::{ApiRequest, ApiResponse, ApiTransport, Method};
pub use task_board::{LoadState, TaskBoard};
pub use theme::{ThemeStore, ThemeSwitcher};
pub use video_gallery::VideoGallery;
pub use view::{Banner, BannerKind, GalleryView, TaskView};
