use async_trait::async_trait;
use std::time::Duration;

/// What a page region can be switched to by the notification helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionContent {
    Loading,
    Error(String),
}

/// The UI the admin tool renders into: named regions, toasts and modal dialogs.
#[async_trait]
pub trait Surface: Send + Sync {
    fn contains(&self, region: &str) -> bool;

    fn replace(&self, region: &str, content: RegionContent);

    /// Shows a transient notification that dismisses itself after `ttl`.
    fn toast(&self, message: &str, ttl: Duration);

    fn alert(&self, message: &str);

    async fn confirm(&self, prompt: &str) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn toast_duration(&self) -> Duration;
}
