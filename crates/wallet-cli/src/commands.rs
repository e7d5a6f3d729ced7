use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info};
use wallet_cli::config::{OutputFormat, Settings};
use wallet_cli::report::{
    AccountsReport, LookupReport, NetworkReport, NotificationsReport, Report, SummaryReport,
};
use wallet_model::AppState;
use wallet_selectors::Selectors;

use crate::cli::{Command, LookupArgs, StateArgs};

pub fn run_command(command: &Command, settings: &Settings) -> Result<()> {
    let selectors = Selectors::new();
    let env = &settings.environment;
    let format = settings.output.format;
    match command {
        Command::Accounts(args) => {
            let state = load_state(args)?;
            emit(&AccountsReport::build(&selectors, &state), format)
        }
        Command::Network(args) => {
            let state = load_state(args)?;
            emit(&NetworkReport::build(&state, env), format)
        }
        Command::Notifications(args) => {
            let state = load_state(args)?;
            emit(&NotificationsReport::build(&state, env), format)
        }
        Command::SwapsToken(args) => {
            let state = load_state(args)?;
            let token = selectors
                .swaps_default_token(&state)
                .context("cannot determine the default swaps token")?;
            emit(&token, format)
        }
        Command::Lookup(LookupArgs { address, state }) => {
            let state = load_state(state)?;
            emit(&LookupReport::build(&state, address), format)
        }
        Command::Summary(args) => {
            let state = load_state(args)?;
            let now_ms = Utc::now().timestamp_millis();
            emit(&SummaryReport::build(&selectors, &state, now_ms), format)
        }
    }
}

fn load_state(args: &StateArgs) -> Result<AppState> {
    let path: &Path = &args.state_file;
    info!(path = %path.display(), "loading state snapshot");
    let state = AppState::load(path)
        .with_context(|| format!("failed to load state snapshot {}", path.display()))?;
    debug!(
        chain_id = %state.wallet.provider.chain_id,
        identities = state.wallet.identities.len(),
        keyrings = state.wallet.keyrings.len(),
        "state snapshot loaded"
    );
    Ok(state)
}

fn emit<R: Report>(report: &R, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", report.table()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}
