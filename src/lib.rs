pub mod action;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod palette;
pub mod service;
pub mod tui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
