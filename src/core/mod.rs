pub mod dashboard;
pub mod resource;
pub mod transport;

pub use crate::domain::model::{Lead, Office, Package, Resource, ResourceKind, TeamMember, Writable};
pub use crate::domain::ports::{ConfigProvider, RegionContent, Surface};
pub use crate::utils::error::Result;
