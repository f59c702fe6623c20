use clap::Parser;
use serde::Serialize;
use std::sync::Arc;
use umrahflex_admin::config::cli::{Command, CrudAction, FormatAction, LeadAction};
use umrahflex_admin::config::toml_config::TomlConfig;
use umrahflex_admin::app::{ResourceApi, Utils};
use umrahflex_admin::domain::model::{LeadStatus, Resource, Writable};
use umrahflex_admin::utils::error::ErrorCategory;
use umrahflex_admin::utils::logger;
use umrahflex_admin::utils::validation::validate_non_empty_string;
use umrahflex_admin::{Api, ApiConfig, ApiError, CliConfig, TerminalSurface};

const REGIONS: [&str; 5] = ["stats", "packages", "teams", "offices", "leads"];

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting umrahflex CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("❌ {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.category() {
                ErrorCategory::Configuration => 2,
                ErrorCategory::Network => 3,
                ErrorCategory::Http | ErrorCategory::Payload => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

/// Returns `Ok(false)` when the command ran but the API call did not succeed; the failure has
/// already been shown to the user by then.
async fn run(cli: CliConfig) -> Result<bool, ApiError> {
    // Formatting needs neither config nor network.
    if let Command::Format { what } = &cli.command {
        match what {
            FormatAction::Currency { amount, currency } => {
                println!("{}", umrahflex_admin::utils::format::format_currency_in(*amount, currency))
            }
            FormatAction::Date { input } => {
                println!("{}", umrahflex_admin::utils::format::format_date(input))
            }
        }
        return Ok(true);
    }

    // 載入配置
    let file = match &cli.config {
        Some(path) => Some(TomlConfig::from_file(path)?),
        None => None,
    };
    let config = ApiConfig::resolve(file.as_ref(), cli.api_url.as_deref())?;
    tracing::debug!("Resolved config: {:?}", config);

    let surface = Arc::new(TerminalSurface::new(REGIONS).assume_yes(cli.yes));
    let api = Api::from_config(&config, surface)?;

    let ok = match cli.command {
        Command::Stats => {
            api.utils.show_loading("stats");
            match api.dashboard.get_stats().await {
                Some(stats) => print_json(&stats)?,
                None => false,
            }
        }
        Command::Packages { action } => crud(&api.packages, &api.utils, action).await?,
        Command::Teams { action } => crud(&api.teams, &api.utils, action).await?,
        Command::Offices { action } => crud(&api.offices, &api.utils, action).await?,
        Command::Leads { action } => {
            api.utils.show_loading("leads");
            match action {
                LeadAction::List { status: None } => print_optional(api.leads.fetch_all().await)?,
                LeadAction::List { status: Some(status) } => {
                    let status = LeadStatus::from(status);
                    print_optional(api.leads.fetch_by_status(status.as_str()).await)?
                }
                LeadAction::Get { id } => {
                    validate_non_empty_string("id", &id)?;
                    print_optional(api.leads.get_by_id(&id).await)?
                }
                LeadAction::Update { id, data } => {
                    validate_non_empty_string("id", &id)?;
                    let body = parse_body(&data.data)?;
                    print_optional(api.leads.update(&id, &body).await)?
                }
            }
        }
        Command::Format { .. } => true,
    };

    Ok(ok)
}

async fn crud<R: Writable>(
    api: &ResourceApi<R>,
    utils: &Utils,
    action: CrudAction,
) -> Result<bool, ApiError> {
    utils.show_loading(<R as Resource>::KIND.path());
    match action {
        CrudAction::List => print_optional(api.fetch_all().await),
        CrudAction::Get { id } => {
            validate_non_empty_string("id", &id)?;
            print_optional(api.get_by_id(&id).await)
        }
        CrudAction::Create(data) => {
            let body = parse_body(&data.data)?;
            print_optional(api.create(&body).await)
        }
        CrudAction::Update { id, data } => {
            validate_non_empty_string("id", &id)?;
            let body = parse_body(&data.data)?;
            print_optional(api.update(&id, &body).await)
        }
        CrudAction::Delete { id } => {
            validate_non_empty_string("id", &id)?;
            Ok(api.delete(&id).await)
        }
    }
}

fn parse_body(raw: &str) -> Result<serde_json::Value, ApiError> {
    serde_json::from_str(raw).map_err(|e| ApiError::InvalidConfigValue {
        field: "--data".to_string(),
        value: raw.to_string(),
        reason: format!("not valid JSON: {}", e),
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<bool, ApiError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(true)
}

fn print_optional<T: Serialize>(value: Option<T>) -> Result<bool, ApiError> {
    match value {
        Some(value) => print_json(&value),
        None => Ok(false),
    }
}
