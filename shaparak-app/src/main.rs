//! # Shaparak CLI
//!
//! Binary that wires together all the components:
//! - Load configuration from flags and environment
//! - Load persisted driver configuration
//! - Build the driver registry and dispatch manager
//! - Resolve a driver for a transaction and print the bound provider

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value, json};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shaparak_banks::Bank;
use shaparak_hex::{DriverRegistry, ShaparakManager};
use shaparak_repo::build_config_source;
use shaparak_types::{
    ConfigSource, Configuration, Currency, DriverName, Mode, Money, PaymentTransaction,
};

#[derive(Parser)]
#[command(name = "shaparak")]
#[command(author, version, about = "Resolve and dispatch Shaparak bank drivers", long_about = None)]
struct Cli {
    /// TOML file with persisted driver configuration
    #[arg(long, env = "SHAPARAK_CONFIG")]
    config_file: Option<PathBuf>,

    /// Global default mode (sandbox or production), overriding the file's
    #[arg(long, env = "SHAPARAK_MODE")]
    mode: Option<Mode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered drivers
    Drivers,
    /// Show the persisted configuration a driver resolves to
    Config {
        /// Driver name (e.g. saman)
        driver: String,
    },
    /// Build the provider for a transaction
    Dispatch {
        /// Driver name (e.g. saman)
        driver: String,
        /// Order identifier sent to the gateway
        #[arg(long)]
        order_id: String,
        /// Amount to pay
        #[arg(long)]
        amount: i64,
        /// Currency (IRR, IRT)
        #[arg(long, default_value = "IRR")]
        currency: String,
        /// Callback URL the payer returns to
        #[arg(long)]
        callback_url: Option<String>,
        /// Runtime configuration override, as KEY=VALUE (dotted keys nest)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },
}

/// Splits `KEY=VALUE`; the value is JSON when it parses, a string otherwise.
fn parse_assignment(raw: &str) -> Result<(String, Value)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("Expected KEY=VALUE, got `{}`", raw);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Empty key in `{}`", raw);
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn insert_path(map: &mut Map<String, Value>, path: &str, value: Value) -> Result<()> {
    match path.split_once('.') {
        None => {
            map.insert(path.to_string(), value);
            Ok(())
        }
        Some((head, rest)) => {
            let entry = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            match entry {
                Value::Object(inner) => insert_path(inner, rest, value),
                _ => bail!("`{}` is already set to a non-table value", head),
            }
        }
    }
}

fn build_override(assignments: &[String]) -> Result<Configuration> {
    let mut root = Map::new();
    for raw in assignments {
        let (key, value) = parse_assignment(raw)?;
        insert_path(&mut root, &key, value)?;
    }
    Ok(Configuration::from(root))
}

fn init_tracing() {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shaparak_app=debug,shaparak_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let source = build_config_source(cli.config_file.as_deref())?;
    if let Some(mode) = cli.mode {
        tracing::debug!("Global default mode set to {}", mode);
        source.set_default_mode(Some(mode));
    }

    let manager = ShaparakManager::new(DriverRegistry::builtin(), Arc::new(source));

    match cli.command {
        Commands::Drivers => {
            let drivers: Vec<Value> = manager
                .registry()
                .names()
                .map(|name| {
                    json!({
                        "driver": name,
                        "title": name.as_str().parse::<Bank>().ok().map(|bank| bank.title()),
                        "configured": manager.config_source().driver_config(name).is_some(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&drivers)?);
        }

        Commands::Config { driver } => {
            let name = DriverName::parse(&driver)?;
            manager.registry().constructor(&name)?;
            let resolved = manager.dispatcher().resolve_config(name.as_str())?;
            let mode = Mode::resolve(resolved.mode()?, manager.config_source().default_mode());
            let output = json!({
                "driver": name,
                "key": name.config_key(),
                "mode": mode,
                "config": resolved,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::Dispatch {
            driver,
            order_id,
            amount,
            currency,
            callback_url,
            overrides,
        } => {
            let currency: Currency = currency.parse()?;
            let mut transaction = PaymentTransaction::new(order_id, Money::new(amount, currency)?);
            if let Some(url) = callback_url {
                transaction = transaction.with_callback_url(url);
            }

            let provider = manager.with(
                &driver,
                Arc::new(transaction),
                build_override(&overrides)?,
            )?;

            let output = json!({
                "driver": provider.name(),
                "mode": provider.mode(),
                "gateway_url": provider.gateway_url(),
                "order_id": provider.transaction().order_id(),
                "amount_rials": provider.transaction().amount().to_rials(),
                "callback_url": provider.transaction().callback_url(),
                "config": provider.config(),
                "http_client_options": provider.http_client_options(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_values_parse_as_json() {
        assert_eq!(
            parse_assignment("timeout=5").unwrap(),
            ("timeout".to_string(), json!(5))
        );
        assert_eq!(
            parse_assignment("merchantId=A-1").unwrap(),
            ("merchantId".to_string(), json!("A-1"))
        );
        assert_eq!(
            parse_assignment("url=http://x?a=b").unwrap(),
            ("url".to_string(), json!("http://x?a=b"))
        );
    }

    #[test]
    fn test_invalid_assignments() {
        assert!(parse_assignment("merchantId").is_err());
        assert!(parse_assignment("=5").is_err());
    }

    #[test]
    fn test_dotted_keys_nest() {
        let config = build_override(&[
            "mode=sandbox".to_string(),
            "httpClientOptions.timeout=5".to_string(),
            "httpClientOptions.verify=false".to_string(),
        ])
        .unwrap();

        assert_eq!(config.mode().unwrap(), Some(Mode::Sandbox));
        let opts = config.http_client_options().unwrap();
        assert_eq!(opts.timeout(), Some(std::time::Duration::from_secs(5)));
        assert_eq!(opts.verify(), Some(false));
    }

    #[test]
    fn test_nesting_under_scalar_fails() {
        let result = build_override(&["mode=sandbox".to_string(), "mode.x=1".to_string()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_assignments_is_empty_override() {
        assert!(build_override(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_cli_rejects_invalid_mode() {
        let result = Cli::try_parse_from(["shaparak", "--mode", "live", "drivers"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_reads_config_file_flag() {
        let cli =
            Cli::try_parse_from(["shaparak", "--config-file", "local.toml", "drivers"]).unwrap();
        assert_eq!(cli.config_file, Some(PathBuf::from("local.toml")));
        assert!(matches!(cli.command, Commands::Drivers));
    }

    #[test]
    fn test_cli_parses_dispatch() {
        let cli = Cli::try_parse_from([
            "shaparak",
            "--mode",
            "sandbox",
            "dispatch",
            "saman",
            "--order-id",
            "o-1",
            "--amount",
            "1000",
            "--set",
            "merchantId=A",
        ])
        .unwrap();

        assert_eq!(cli.mode, Some(Mode::Sandbox));
        assert!(matches!(
            cli.command,
            Commands::Dispatch { ref driver, ref overrides, .. }
                if driver == "saman" && overrides == &vec!["merchantId=A".to_string()]
        ));
    }
}
