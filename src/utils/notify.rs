use crate::domain::ports::{RegionContent, Surface};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// User feedback helpers rendered through the injected [`Surface`].
#[derive(Clone)]
pub struct Notifier {
    surface: Arc<dyn Surface>,
    toast_ttl: Duration,
}

impl Notifier {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self::with_toast_duration(surface, DEFAULT_TOAST_DURATION)
    }

    pub fn with_toast_duration(surface: Arc<dyn Surface>, toast_ttl: Duration) -> Self {
        Self { surface, toast_ttl }
    }

    pub fn show_loading(&self, target: &str) {
        if self.surface.contains(target) {
            self.surface.replace(target, RegionContent::Loading);
        }
    }

    /// Logs the message, shows it inline in `target` when that region exists, and always
    /// raises an alert.
    pub fn show_error(&self, message: &str, target: Option<&str>) {
        tracing::error!("Error: {}", message);

        if let Some(target) = target {
            if self.surface.contains(target) {
                self.surface
                    .replace(target, RegionContent::Error(message.to_string()));
            }
        }

        self.surface.alert(&format!("Error: {}", message));
    }

    pub fn show_success(&self, message: &str) {
        tracing::debug!("✅ {}", message);
        self.surface.toast(message, self.toast_ttl);
    }

    pub async fn confirm(&self, prompt: &str) -> bool {
        self.surface.confirm(prompt).await
    }
}
