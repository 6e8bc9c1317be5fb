// src/infrastructure/mod.rs
pub mod config;
pub mod http;
pub mod preferences;
pub mod renderer;

pub use config::Config;
pub use http::HttpTransport;
pub use preferences::FilePreferences;
pub use renderer::ContentRenderer;
