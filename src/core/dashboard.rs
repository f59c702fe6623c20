use crate::core::resource::ResourceClient;
use crate::core::transport::HttpTransport;
use crate::domain::model::{Lead, Office, Package, ResourceKind, TeamMember};
use crate::domain::stats::DashboardStats;
use crate::utils::error::{ApiError, Result};
use std::sync::Arc;

/// The four collections as fetched for one dashboard refresh, each with its own outcome.
#[derive(Debug)]
pub struct DashboardData {
    pub packages: Result<Vec<Package>>,
    pub teams: Result<Vec<TeamMember>>,
    pub offices: Result<Vec<Office>>,
    pub leads: Result<Vec<Lead>>,
}

impl DashboardData {
    pub fn failures(&self) -> Vec<(ResourceKind, &ApiError)> {
        let mut failures = Vec::new();
        if let Err(e) = &self.packages {
            failures.push((ResourceKind::Packages, e));
        }
        if let Err(e) = &self.teams {
            failures.push((ResourceKind::Teams, e));
        }
        if let Err(e) = &self.offices {
            failures.push((ResourceKind::Offices, e));
        }
        if let Err(e) = &self.leads {
            failures.push((ResourceKind::Leads, e));
        }
        failures
    }

    pub fn is_complete(&self) -> bool {
        self.packages.is_ok() && self.teams.is_ok() && self.offices.is_ok() && self.leads.is_ok()
    }

    /// Statistics over whatever loaded; a failed collection counts as empty.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(
            self.packages.as_deref().unwrap_or_default(),
            self.teams.as_deref().unwrap_or_default(),
            self.offices.as_deref().unwrap_or_default(),
            self.leads.as_deref().unwrap_or_default(),
        )
    }
}

#[derive(Clone)]
pub struct Dashboard {
    packages: ResourceClient<Package>,
    teams: ResourceClient<TeamMember>,
    offices: ResourceClient<Office>,
    leads: ResourceClient<Lead>,
}

impl Dashboard {
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self {
            packages: ResourceClient::new(Arc::clone(&transport)),
            teams: ResourceClient::new(Arc::clone(&transport)),
            offices: ResourceClient::new(Arc::clone(&transport)),
            leads: ResourceClient::new(transport),
        }
    }

    /// Loads all four collections concurrently and waits for every request to settle.
    pub async fn fetch(&self) -> DashboardData {
        let (packages, teams, offices, leads) = tokio::join!(
            self.packages.get_all(),
            self.teams.get_all(),
            self.offices.get_all(),
            self.leads.get_all(),
        );

        let data = DashboardData {
            packages,
            teams,
            offices,
            leads,
        };
        if !data.is_complete() {
            tracing::warn!(
                "Dashboard loaded with {} failed collection(s)",
                data.failures().len()
            );
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_failed_collection_is_reported_and_counted_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/packages");
            then.status(200).json_body(json!([{"status": "Active"}]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/teams");
            then.status(500);
        });
        server.mock(|when, then| {
            when.method(GET).path("/offices");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/leads");
            then.status(200).json_body(json!([{"status": "contacted"}]));
        });

        let dashboard = Dashboard::new(Arc::new(HttpTransport::new(&server.url("")).unwrap()));
        let data = dashboard.fetch().await;

        assert!(!data.is_complete());
        let failures = data.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, ResourceKind::Teams);

        let stats = data.stats();
        assert_eq!(stats.total_packages, 1);
        assert_eq!(stats.total_team, 0);
        assert_eq!(stats.contacted_leads, 1);
    }
}
