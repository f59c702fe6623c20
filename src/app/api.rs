//! Page-facing API: wraps the core clients, reports every outcome through the
//! [`Notifier`] and hands back the plain values dashboard pages render.
//!
//! Methods here never fail. A failed request is shown to the user and replaced by an empty
//! value (`Vec::new()`, `None` or `false`). The `fetch_*` variants keep "request failed"
//! apart from "no data" as `None`; [`ResourceApi::client`] exposes the error itself.

use crate::core::dashboard::Dashboard;
use crate::core::resource::ResourceClient;
use crate::core::transport::HttpTransport;
use crate::domain::model::{Lead, Office, Package, Resource, TeamMember, Writable};
use crate::domain::ports::{ConfigProvider, Surface};
use crate::domain::stats::DashboardStats;
use crate::utils::error::Result;
use crate::utils::format;
use crate::utils::notify::Notifier;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

pub struct ResourceApi<R: Resource> {
    client: ResourceClient<R>,
    notifier: Notifier,
}

impl<R: Resource> ResourceApi<R> {
    pub fn new(client: ResourceClient<R>, notifier: Notifier) -> Self {
        Self { client, notifier }
    }

    pub fn client(&self) -> &ResourceClient<R> {
        &self.client
    }

    pub async fn get_all(&self) -> Vec<R> {
        self.fetch_all().await.unwrap_or_default()
    }

    /// Like [`get_all`](Self::get_all), but a failed load comes back as `None` so callers can
    /// tell it apart from an empty collection. The failure is still reported.
    pub async fn fetch_all(&self) -> Option<Vec<R>> {
        match self.client.get_all().await {
            Ok(records) => Some(records),
            Err(e) => {
                self.notifier.show_error(
                    &format!("Failed to load {}: {}", R::KIND.plural(), e),
                    None,
                );
                None
            }
        }
    }

    pub async fn get_by_id(&self, id: &str) -> Option<R> {
        match self.client.get_by_id(id).await {
            Ok(record) => Some(record),
            Err(e) => {
                self.notifier.show_error(
                    &format!("Failed to load {}: {}", R::KIND.singular(), e),
                    None,
                );
                None
            }
        }
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> Option<R> {
        match self.client.update(id, data).await {
            Ok(record) => {
                self.notifier
                    .show_success(&format!("{} updated successfully!", R::KIND.title()));
                Some(record)
            }
            Err(e) => {
                self.notifier.show_error(
                    &format!("Failed to update {}: {}", R::KIND.singular(), e),
                    None,
                );
                None
            }
        }
    }
}

impl<R: Writable> ResourceApi<R> {
    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Option<R> {
        match self.client.create(data).await {
            Ok(record) => {
                self.notifier.show_success(&format!(
                    "{} {} successfully!",
                    R::KIND.title(),
                    R::KIND.created_past()
                ));
                Some(record)
            }
            Err(e) => {
                self.notifier.show_error(
                    &format!(
                        "Failed to {} {}: {}",
                        R::KIND.create_verb(),
                        R::KIND.singular(),
                        e
                    ),
                    None,
                );
                None
            }
        }
    }

    /// Asks for confirmation first; declining returns `false` without touching the API.
    pub async fn delete(&self, id: &str) -> bool {
        let prompt = format!("Are you sure you want to delete this {}?", R::KIND.singular());
        if !self.notifier.confirm(&prompt).await {
            tracing::debug!("Deletion of {} {} declined", R::KIND.singular(), id);
            return false;
        }

        match self.client.delete(id).await {
            Ok(()) => {
                self.notifier
                    .show_success(&format!("{} deleted successfully!", R::KIND.title()));
                true
            }
            Err(e) => {
                self.notifier.show_error(
                    &format!("Failed to delete {}: {}", R::KIND.singular(), e),
                    None,
                );
                false
            }
        }
    }
}

impl ResourceApi<Lead> {
    pub async fn get_by_status(&self, status: &str) -> Vec<Lead> {
        self.fetch_by_status(status).await.unwrap_or_default()
    }

    pub async fn fetch_by_status(&self, status: &str) -> Option<Vec<Lead>> {
        match self.client.get_by_status(status).await {
            Ok(leads) => Some(leads),
            Err(e) => {
                self.notifier
                    .show_error(&format!("Failed to load leads: {}", e), None);
                None
            }
        }
    }
}

pub struct DashboardApi {
    dashboard: Dashboard,
    notifier: Notifier,
}

impl DashboardApi {
    pub fn new(dashboard: Dashboard, notifier: Notifier) -> Self {
        Self {
            dashboard,
            notifier,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Reports each collection that failed to load, then returns statistics over the rest.
    ///
    /// Counting over typed records cannot fail, so this currently always returns `Some`.
    pub async fn get_stats(&self) -> Option<DashboardStats> {
        let data = self.dashboard.fetch().await;
        for (kind, e) in data.failures() {
            self.notifier
                .show_error(&format!("Failed to load {}: {}", kind.plural(), e), None);
        }
        Some(data.stats())
    }
}

/// Feedback and formatting helpers for page code.
#[derive(Clone)]
pub struct Utils {
    notifier: Notifier,
}

impl Utils {
    pub fn new(notifier: Notifier) -> Self {
        Self { notifier }
    }

    pub fn show_loading(&self, target: &str) {
        self.notifier.show_loading(target);
    }

    pub fn show_error(&self, message: &str, target: Option<&str>) {
        self.notifier.show_error(message, target);
    }

    pub fn show_success(&self, message: &str) {
        self.notifier.show_success(message);
    }

    pub fn format_currency(&self, amount: f64) -> String {
        format::format_currency(amount)
    }

    pub fn format_currency_in(&self, amount: f64, currency: &str) -> String {
        format::format_currency_in(amount, currency)
    }

    pub fn format_date(&self, input: &str) -> String {
        format::format_date(input)
    }
}

/// Everything the admin pages use, wired to one transport and one surface.
pub struct Api {
    pub packages: ResourceApi<Package>,
    pub teams: ResourceApi<TeamMember>,
    pub offices: ResourceApi<Office>,
    pub leads: ResourceApi<Lead>,
    pub dashboard: DashboardApi,
    pub utils: Utils,
}

impl Api {
    pub fn new(transport: Arc<HttpTransport>, surface: Arc<dyn Surface>, toast_ttl: Duration) -> Self {
        let notifier = Notifier::with_toast_duration(surface, toast_ttl);

        Self {
            packages: ResourceApi::new(ResourceClient::new(Arc::clone(&transport)), notifier.clone()),
            teams: ResourceApi::new(ResourceClient::new(Arc::clone(&transport)), notifier.clone()),
            offices: ResourceApi::new(ResourceClient::new(Arc::clone(&transport)), notifier.clone()),
            leads: ResourceApi::new(ResourceClient::new(Arc::clone(&transport)), notifier.clone()),
            dashboard: DashboardApi::new(Dashboard::new(transport), notifier.clone()),
            utils: Utils::new(notifier),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, surface: Arc<dyn Surface>) -> Result<Self> {
        let transport = HttpTransport::new(config.api_base_url())?;
        tracing::debug!("Using API at {}", transport.base_url());
        Ok(Self::new(Arc::new(transport), surface, config.toast_duration()))
    }
}
