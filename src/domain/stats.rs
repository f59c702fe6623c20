use crate::domain::model::{DepartureAirport, Lead, LeadStatus, Office, Package, TeamMember};
use serde::{Deserialize, Serialize};

/// Summary figures shown on the dashboard landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_packages: usize,
    pub active_packages: usize,
    pub total_team: usize,
    pub active_team: usize,
    pub total_offices: usize,
    pub active_offices: usize,
    pub total_leads: usize,
    pub new_leads: usize,
    pub contacted_leads: usize,
    pub deals_won: usize,
    pub leads_by_airport: AirportBreakdown,
    pub leads_by_status: StatusBreakdown,
}

/// Lead counts per served airport. Leads departing from anywhere else are not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportBreakdown {
    #[serde(rename = "Lahore")]
    pub lahore: usize,
    #[serde(rename = "Karachi")]
    pub karachi: usize,
    #[serde(rename = "Islamabad")]
    pub islamabad: usize,
}

impl AirportBreakdown {
    pub fn get(&self, airport: DepartureAirport) -> usize {
        match airport {
            DepartureAirport::Lahore => self.lahore,
            DepartureAirport::Karachi => self.karachi,
            DepartureAirport::Islamabad => self.islamabad,
        }
    }

    fn record(&mut self, airport: DepartureAirport) {
        match airport {
            DepartureAirport::Lahore => self.lahore += 1,
            DepartureAirport::Karachi => self.karachi += 1,
            DepartureAirport::Islamabad => self.islamabad += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub new: usize,
    pub contacted: usize,
    pub negotiating: usize,
    pub deal_done: usize,
    pub follow_up: usize,
    pub lost: usize,
}

impl StatusBreakdown {
    pub fn get(&self, status: LeadStatus) -> usize {
        match status {
            LeadStatus::New => self.new,
            LeadStatus::Contacted => self.contacted,
            LeadStatus::Negotiating => self.negotiating,
            LeadStatus::DealDone => self.deal_done,
            LeadStatus::FollowUp => self.follow_up,
            LeadStatus::Lost => self.lost,
        }
    }

    fn record(&mut self, status: LeadStatus) {
        match status {
            LeadStatus::New => self.new += 1,
            LeadStatus::Contacted => self.contacted += 1,
            LeadStatus::Negotiating => self.negotiating += 1,
            LeadStatus::DealDone => self.deal_done += 1,
            LeadStatus::FollowUp => self.follow_up += 1,
            LeadStatus::Lost => self.lost += 1,
        }
    }
}

impl DashboardStats {
    pub fn compute(
        packages: &[Package],
        teams: &[TeamMember],
        offices: &[Office],
        leads: &[Lead],
    ) -> Self {
        let mut leads_by_status = StatusBreakdown::default();
        let mut leads_by_airport = AirportBreakdown::default();

        for lead in leads {
            if let Some(status) = lead.lead_status() {
                leads_by_status.record(status);
            }
            if let Some(airport) = lead.airport() {
                leads_by_airport.record(airport);
            }
        }

        Self {
            total_packages: packages.len(),
            active_packages: packages.iter().filter(|p| p.is_active()).count(),
            total_team: teams.len(),
            active_team: teams.iter().filter(|t| t.is_active()).count(),
            total_offices: offices.len(),
            active_offices: offices.iter().filter(|o| o.is_active()).count(),
            total_leads: leads.len(),
            new_leads: leads_by_status.new,
            contacted_leads: leads_by_status.contacted,
            deals_won: leads_by_status.deal_done,
            leads_by_airport,
            leads_by_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Vec<T> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_compute_reference_fixture() {
        let packages: Vec<Package> = parse(json!([{"status": "Active"}, {"status": "Draft"}]));
        let teams: Vec<TeamMember> = parse(json!([{"is_active": true}, {"is_active": false}]));
        let offices: Vec<Office> = parse(json!([{"status": "active"}]));
        let leads: Vec<Lead> = parse(json!([
            {"status": "new", "departure_airport": "Lahore"},
            {"status": "deal_done", "departure_airport": "Dubai"}
        ]));

        let stats = DashboardStats::compute(&packages, &teams, &offices, &leads);

        assert_eq!(stats.total_packages, 2);
        assert_eq!(stats.active_packages, 1);
        assert_eq!(stats.total_team, 2);
        assert_eq!(stats.active_team, 1);
        assert_eq!(stats.total_offices, 1);
        assert_eq!(stats.active_offices, 1);
        assert_eq!(stats.total_leads, 2);
        assert_eq!(stats.new_leads, 1);
        assert_eq!(stats.contacted_leads, 0);
        assert_eq!(stats.deals_won, 1);
        assert_eq!(
            stats.leads_by_airport,
            AirportBreakdown { lahore: 1, karachi: 0, islamabad: 0 }
        );
        assert_eq!(stats.leads_by_status.get(LeadStatus::DealDone), 1);
    }

    #[test]
    fn test_unknown_status_counts_toward_total_only() {
        let leads: Vec<Lead> = parse(json!([
            {"status": "archived", "departure_airport": "Karachi"},
            {"departure_airport": "Islamabad"},
            {"status": "lost"}
        ]));

        let stats = DashboardStats::compute(&[], &[], &[], &leads);

        assert_eq!(stats.total_leads, 3);
        let by_status: usize = LeadStatus::ALL.iter().map(|s| stats.leads_by_status.get(*s)).sum();
        assert_eq!(by_status, 1);
        assert_eq!(stats.leads_by_airport.get(DepartureAirport::Karachi), 1);
        assert_eq!(stats.leads_by_airport.get(DepartureAirport::Islamabad), 1);
    }

    #[test]
    fn test_serialized_field_names() {
        let stats = DashboardStats::default();
        let value = serde_json::to_value(&stats).unwrap();

        assert_eq!(value["totalPackages"], 0);
        assert_eq!(value["dealsWon"], 0);
        assert_eq!(value["leadsByAirport"]["Lahore"], 0);
        assert_eq!(value["leadsByStatus"]["deal_done"], 0);
        assert_eq!(value["leadsByStatus"]["follow_up"], 0);
    }
}
