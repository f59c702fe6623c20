pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::TerminalSurface;
pub use crate::app::Api;
pub use crate::config::ApiConfig;
pub use crate::core::{dashboard::Dashboard, resource::ResourceClient, transport::HttpTransport};
pub use crate::domain::stats::DashboardStats;
pub use crate::utils::error::{ApiError, Result};
