pub mod app;
pub mod config;
pub mod context;
pub mod layout;
pub mod vm;
pub mod views;

pub use app::App;
pub use config::UiConfig;
pub use context::{AppContext, UiApp, build_app_context};
