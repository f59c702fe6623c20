use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// The four collections exposed by the UmrahFlex API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Packages,
    Teams,
    Offices,
    Leads,
}

impl ResourceKind {
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Packages => "packages",
            ResourceKind::Teams => "teams",
            ResourceKind::Offices => "offices",
            ResourceKind::Leads => "leads",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            ResourceKind::Packages => "package",
            ResourceKind::Teams => "team member",
            ResourceKind::Offices => "office",
            ResourceKind::Leads => "lead",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Packages => "packages",
            ResourceKind::Teams => "team members",
            ResourceKind::Offices => "offices",
            ResourceKind::Leads => "leads",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Packages => "Package",
            ResourceKind::Teams => "Team member",
            ResourceKind::Offices => "Office",
            ResourceKind::Leads => "Lead",
        }
    }

    /// Verb used in user-facing messages about creation; team members are "added".
    pub fn create_verb(&self) -> &'static str {
        match self {
            ResourceKind::Teams => "add",
            _ => "create",
        }
    }

    pub fn created_past(&self) -> &'static str {
        match self {
            ResourceKind::Teams => "added",
            _ => "created",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A record type served by one of the API collections.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// The record exactly as the API sent it.
    fn fields(&self) -> &Map<String, Value>;

    fn field(&self, key: &str) -> Option<&Value> {
        self.fields().get(key)
    }

    /// A string field; missing, null and non-string values read as `None`.
    fn str_field(&self, key: &str) -> Option<&str> {
        self.field(key)?.as_str()
    }

    fn id(&self) -> Option<String> {
        match self.field("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Collections that can be created and deleted from the dashboard.
pub trait Writable: Resource {}

/// Truthiness the dashboard pages apply to flags: false, 0, "" and null are off.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Package {
    pub fields: Map<String, Value>,
}

impl Package {
    pub fn status(&self) -> Option<&str> {
        self.str_field("status")
    }

    pub fn is_active(&self) -> bool {
        self.status() == Some("Active")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamMember {
    pub fields: Map<String, Value>,
}

impl TeamMember {
    pub fn is_active(&self) -> bool {
        self.field("is_active").is_some_and(is_truthy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Office {
    pub fields: Map<String, Value>,
}

impl Office {
    pub fn status(&self) -> Option<&str> {
        self.str_field("status")
    }

    pub fn is_active(&self) -> bool {
        self.status() == Some("active")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lead {
    pub fields: Map<String, Value>,
}

impl Lead {
    pub fn status(&self) -> Option<&str> {
        self.str_field("status")
    }

    pub fn departure_airport(&self) -> Option<&str> {
        self.str_field("departure_airport")
    }

    pub fn lead_status(&self) -> Option<LeadStatus> {
        self.status()?.parse().ok()
    }

    pub fn airport(&self) -> Option<DepartureAirport> {
        self.departure_airport()?.parse().ok()
    }
}

impl Resource for Package {
    const KIND: ResourceKind = ResourceKind::Packages;

    fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Resource for TeamMember {
    const KIND: ResourceKind = ResourceKind::Teams;

    fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Resource for Office {
    const KIND: ResourceKind = ResourceKind::Offices;

    fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Resource for Lead {
    const KIND: ResourceKind = ResourceKind::Leads;

    fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Writable for Package {}
impl Writable for TeamMember {}
impl Writable for Office {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadStatus {
    New,
    Contacted,
    Negotiating,
    DealDone,
    FollowUp,
    Lost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Negotiating,
        LeadStatus::DealDone,
        LeadStatus::FollowUp,
        LeadStatus::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Negotiating => "negotiating",
            LeadStatus::DealDone => "deal_done",
            LeadStatus::FollowUp => "follow_up",
            LeadStatus::Lost => "lost",
        }
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown lead status: {}", s))
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Airports the agency runs departures from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartureAirport {
    Lahore,
    Karachi,
    Islamabad,
}

impl DepartureAirport {
    pub const ALL: [DepartureAirport; 3] = [
        DepartureAirport::Lahore,
        DepartureAirport::Karachi,
        DepartureAirport::Islamabad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DepartureAirport::Lahore => "Lahore",
            DepartureAirport::Karachi => "Karachi",
            DepartureAirport::Islamabad => "Islamabad",
        }
    }
}

impl FromStr for DepartureAirport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DepartureAirport::ALL
            .into_iter()
            .find(|airport| airport.as_str() == s)
            .ok_or_else(|| format!("unknown departure airport: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_package_round_trips_unknown_fields() {
        let body = json!({"id": 7, "name": "Economy 21 days", "price": 350000, "status": "Active"});
        let package: Package = serde_json::from_value(body.clone()).unwrap();

        assert!(package.is_active());
        assert_eq!(package.id().as_deref(), Some("7"));
        assert_eq!(serde_json::to_value(&package).unwrap(), body);
    }

    #[test]
    fn test_active_predicates_are_case_sensitive() {
        let package: Package = serde_json::from_value(json!({"status": "active"})).unwrap();
        let office: Office = serde_json::from_value(json!({"status": "Active"})).unwrap();
        let member: TeamMember = serde_json::from_value(json!({"name": "Ayesha"})).unwrap();

        assert!(!package.is_active());
        assert!(!office.is_active());
        assert!(!member.is_active());
    }

    #[test]
    fn test_null_fields_survive_round_trip() {
        let body = json!({"id": 1, "status": "new", "departure_airport": null, "notes": null});
        let lead: Lead = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(lead.departure_airport(), None);
        assert_eq!(lead.airport(), None);
        assert_eq!(lead.lead_status(), Some(LeadStatus::New));
        assert_eq!(serde_json::to_value(&lead).unwrap(), body);
    }

    #[test]
    fn test_unexpected_field_types_do_not_fail_parsing() {
        let member: TeamMember = serde_json::from_value(json!({"id": 2, "is_active": 1})).unwrap();
        assert!(member.is_active());

        let package: Package = serde_json::from_value(json!({"status": 5})).unwrap();
        assert_eq!(package.status(), None);
        assert!(!package.is_active());

        let lead: Lead =
            serde_json::from_value(json!({"status": ["new"], "departure_airport": 42})).unwrap();
        assert_eq!(lead.lead_status(), None);
        assert_eq!(lead.airport(), None);
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-0.5)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }

    #[test]
    fn test_lead_status_and_airport_parsing() {
        let lead: Lead =
            serde_json::from_value(json!({"id": "L-1", "status": "follow_up", "departure_airport": "Dubai"}))
                .unwrap();

        assert_eq!(lead.lead_status(), Some(LeadStatus::FollowUp));
        assert_eq!(lead.airport(), None);
        assert_eq!(lead.id().as_deref(), Some("L-1"));
        assert!("Deal_Done".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn test_team_wording() {
        assert_eq!(ResourceKind::Teams.create_verb(), "add");
        assert_eq!(ResourceKind::Teams.created_past(), "added");
        assert_eq!(ResourceKind::Offices.created_past(), "created");
        assert_eq!(ResourceKind::Teams.path(), "teams");
    }
}
