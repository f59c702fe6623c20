pub mod api;

pub use api::{Api, DashboardApi, ResourceApi, Utils};
