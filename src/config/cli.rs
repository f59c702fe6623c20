use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "umrahflex")]
#[command(about = "Command-line access to the UmrahFlex admin API")]
pub struct CliConfig {
    #[arg(long, global = true, help = "API base URL (overrides the config file)")]
    pub api_url: Option<String>,

    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, short = 'y', global = true, help = "Answer yes to confirmation prompts")]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show dashboard statistics
    Stats,
    /// Manage tour packages
    Packages {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Manage team members
    Teams {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Manage offices
    Offices {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Browse and update leads
    Leads {
        #[command(subcommand)]
        action: LeadAction,
    },
    /// Format values the way the dashboard shows them
    Format {
        #[command(subcommand)]
        what: FormatAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CrudAction {
    List,
    Get { id: String },
    Create(DataArg),
    Update {
        id: String,
        #[command(flatten)]
        data: DataArg,
    },
    Delete { id: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum LeadAction {
    List {
        #[arg(long, value_enum)]
        status: Option<LeadStatusArg>,
    },
    Get { id: String },
    Update {
        id: String,
        #[command(flatten)]
        data: DataArg,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum FormatAction {
    Currency {
        amount: f64,
        #[arg(long, default_value = crate::utils::format::DEFAULT_CURRENCY)]
        currency: String,
    },
    Date { input: String },
}

#[derive(Debug, Clone, Args)]
pub struct DataArg {
    #[arg(long, help = "JSON request body")]
    pub data: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LeadStatusArg {
    New,
    Contacted,
    Negotiating,
    DealDone,
    FollowUp,
    Lost,
}

impl From<LeadStatusArg> for crate::domain::model::LeadStatus {
    fn from(arg: LeadStatusArg) -> Self {
        use crate::domain::model::LeadStatus;
        match arg {
            LeadStatusArg::New => LeadStatus::New,
            LeadStatusArg::Contacted => LeadStatus::Contacted,
            LeadStatusArg::Negotiating => LeadStatus::Negotiating,
            LeadStatusArg::DealDone => LeadStatus::DealDone,
            LeadStatusArg::FollowUp => LeadStatus::FollowUp,
            LeadStatusArg::Lost => LeadStatus::Lost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LeadStatus;

    #[test]
    fn test_parse_delete_with_global_flags() {
        let cli = CliConfig::try_parse_from([
            "umrahflex",
            "packages",
            "delete",
            "12",
            "--yes",
            "--api-url",
            "http://localhost:8000/api",
        ])
        .unwrap();

        assert!(cli.yes);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8000/api"));
        match cli.command {
            Command::Packages {
                action: CrudAction::Delete { id },
            } => assert_eq!(id, "12"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_lead_status_filter() {
        let cli =
            CliConfig::try_parse_from(["umrahflex", "leads", "list", "--status", "deal-done"]).unwrap();
        match cli.command {
            Command::Leads {
                action: LeadAction::List { status: Some(status) },
            } => assert_eq!(LeadStatus::from(status).as_str(), "deal_done"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_currency_defaults_to_pkr() {
        let cli = CliConfig::try_parse_from(["umrahflex", "format", "currency", "150000"]).unwrap();
        match cli.command {
            Command::Format {
                what: FormatAction::Currency { amount, currency },
            } => {
                assert_eq!(amount, 150000.0);
                assert_eq!(currency, "PKR");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
