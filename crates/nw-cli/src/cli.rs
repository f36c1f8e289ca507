//! Command definitions and dispatch

use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use nw_api::{
    ensure_known_values, ensure_unique_values, error_json, result_json, ApiError, ApiResponse,
};
use nw_state::{InstallerState, Record};
use nw_validation::{MissingFieldPolicy, NameScope, NameValidator, ValidationConfig};
use serde_json::{json, Value};
use std::path::PathBuf;

pub(crate) fn command() -> Command {
    Command::new("nw-check")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run installer validation checks against a saved state")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Validation config (TOML)"),
        )
        .arg(
            Arg::new("state")
                .long("state")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Installer state (JSON); empty state if omitted"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("name")
                .about("Check a candidate name against its scope")
                .arg(
                    Arg::new("scope")
                        .required(true)
                        .value_parser(["source", "channel", "chain", "user", "kms"])
                        .help("Rule to apply"),
                )
                .arg(Arg::new("candidate").required(true).help("Name to check"))
                .arg(
                    Arg::new("chain")
                        .long("chain")
                        .required_if_eq_any([("scope", "source"), ("scope", "kms")])
                        .help("Chain id, required for source and kms names"),
                ),
        )
        .subcommand(
            Command::new("missing")
                .about("List fields of a JSON record that have no value")
                .arg(Arg::new("record").required(true).help("Record as a JSON object"))
                .arg(
                    Arg::new("falsy")
                        .long("falsy")
                        .action(ArgAction::SetTrue)
                        .help("Treat false, 0 and empty strings as missing"),
                ),
        )
        .subcommand(
            Command::new("subset")
                .about("Check that every value belongs to an allowed list")
                .arg(
                    Arg::new("values")
                        .long("values")
                        .required(true)
                        .value_delimiter(',')
                        .help("Comma-separated values"),
                )
                .arg(
                    Arg::new("allowed")
                        .long("allowed")
                        .required(true)
                        .value_delimiter(',')
                        .help("Comma-separated allowed values"),
                ),
        )
}

/// Execute the selected subcommand
///
/// Global options are read from the subcommand's matches, where clap
/// propagates them regardless of their position on the command line.
pub(crate) fn run(matches: &ArgMatches) -> anyhow::Result<ApiResponse<Value>> {
    let Some((name, args)) = matches.subcommand() else {
        bail!("no command given");
    };

    let config = match args.get_one::<PathBuf>("config") {
        Some(path) => ValidationConfig::load(path)?,
        None => ValidationConfig::default(),
    };

    match name {
        "name" => {
            let state = load_state(args.get_one::<PathBuf>("state"))?;
            run_name(&NameValidator::new(config), &state, args)
        }
        "missing" => {
            let config = if args.get_flag("falsy") {
                config.with_missing_field_policy(MissingFieldPolicy::Falsy)
            } else {
                config
            };
            run_missing(&NameValidator::new(config), args)
        }
        "subset" => Ok(run_subset(args)),
        other => bail!("unknown command: {other}"),
    }
}

fn load_state(path: Option<&PathBuf>) -> anyhow::Result<InstallerState> {
    let Some(path) = path else {
        return Ok(InstallerState::new());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read state '{}'", path.display()))?;
    let state: InstallerState = serde_json::from_str(&text)
        .with_context(|| format!("invalid state '{}'", path.display()))?;
    tracing::debug!(records = state.total_records(), "loaded installer state");
    Ok(state)
}

fn run_name(
    validator: &NameValidator,
    state: &InstallerState,
    args: &ArgMatches,
) -> anyhow::Result<ApiResponse<Value>> {
    let candidate = args
        .get_one::<String>("candidate")
        .context("candidate is required")?;
    let chain = args.get_one::<String>("chain").map(String::as_str);

    let (scope, result) = match args.get_one::<String>("scope").map(String::as_str) {
        Some("source") => (
            NameScope::Source,
            validator.check_source_name(state, require_chain(chain)?, candidate),
        ),
        Some("kms") => (
            NameScope::Kms,
            validator.check_kms_name(state, require_chain(chain)?, candidate),
        ),
        Some(global @ ("channel" | "chain" | "user")) if chain.is_some() => {
            bail!("--chain does not apply to {global} names")
        }
        Some("channel") => (
            NameScope::Channel,
            validator.check_channel_name(state, candidate),
        ),
        Some("chain") => (NameScope::Chain, validator.check_chain_name(state, candidate)),
        Some("user") => (NameScope::User, validator.check_user_name(state, candidate)),
        other => bail!("unknown scope: {other:?}"),
    };

    Ok(match result {
        Ok(()) => result_json(json!({
            "name": candidate,
            "scope": scope.label(),
            "available": true,
        })),
        Err(e) => error_json(e),
    })
}

fn require_chain(chain: Option<&str>) -> anyhow::Result<&str> {
    chain.context("--chain is required for this scope")
}

fn run_missing(validator: &NameValidator, args: &ArgMatches) -> anyhow::Result<ApiResponse<Value>> {
    let text = args
        .get_one::<String>("record")
        .context("record is required")?;
    let record: Record = serde_json::from_str(text).context("record must be a JSON object")?;

    let missing = validator.missing_fields(&record);
    if missing.is_empty() {
        Ok(result_json(json!({ "missing": [] })))
    } else {
        Ok(ApiError::MissingArguments(missing).into_response())
    }
}

fn run_subset(args: &ArgMatches) -> ApiResponse<Value> {
    let list = |name: &str| -> Vec<String> {
        args.get_many::<String>(name)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    };
    let values = list("values");
    let allowed = list("allowed");

    match ensure_unique_values(&values).and_then(|()| ensure_known_values(&values, &allowed)) {
        Ok(()) => result_json(json!({ "values": values })),
        Err(e) => e.into_response(),
    }
}
