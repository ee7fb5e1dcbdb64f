mod api;
mod charts;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::api::{ApiClient, ApiVariant, DashboardApi};
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::refresh::{INTERVAL_MS, MIN_INTERVAL_MS};
use crate::environment::Environment;
use crate::session::{SessionSettings, run_headless_mode, run_tui_mode, setup_session};
use crate::ui::dashboard::state::NO_MATCHES;
use crate::workers::searchable_query;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the live dashboard
    Start {
        /// Base URL of the dashboard server
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Milliseconds between refreshes
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,

        /// Endpoint family to poll
        #[arg(long, value_enum)]
        variant: Option<ApiVariant>,

        /// Comma-separated panel ids to render (default: all)
        #[arg(long, value_delimiter = ',', value_name = "ID")]
        panels: Vec<String>,

        /// Print events to stdout instead of drawing the terminal UI
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Paint a solid background behind the dashboard
        #[arg(long = "with-background", default_value_t = false)]
        with_background: bool,
    },
    /// Run one search and print the matching messages
    Search {
        /// Text to search for (at least 2 characters)
        query: String,

        /// Base URL of the dashboard server
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Endpoint family whose search parameter to use
        #[arg(long, value_enum)]
        variant: Option<ApiVariant>,
    },
    /// Save the dashboard server to the config file
    SetServer {
        #[arg(long, value_name = "URL")]
        api_url: String,
    },
    /// Delete the config file
    Reset,
}

/// Picks the server: command line first, then the config file, then
/// `LISTENTG_ENVIRONMENT`.
fn resolve_environment(
    cli_url: Option<&str>,
    config: &Config,
    env_value: &str,
) -> Result<Environment, String> {
    if let Some(url) = cli_url {
        return url.parse();
    }
    if let Some(url) = config.api_url.as_deref() {
        return url.parse();
    }
    env_value.parse()
}

fn resolve_interval(cli_ms: Option<u64>, config: &Config) -> Result<Duration, String> {
    let ms = cli_ms
        .or(config.refresh_interval_ms)
        .unwrap_or(INTERVAL_MS);
    if ms < MIN_INTERVAL_MS {
        return Err(format!(
            "Refresh interval of {} ms is too short; the minimum is {} ms",
            ms, MIN_INTERVAL_MS
        ));
    }
    Ok(Duration::from_millis(ms))
}

fn load_config(path: &Path) -> Config {
    Config::load_or_default(path).unwrap_or_else(|e| {
        print_cmd_warn!(
            "Ignoring unreadable config file",
            "{}: {}",
            path.display(),
            e
        );
        Config::default()
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_log_level();
    let env_value = std::env::var("LISTENTG_ENVIRONMENT").unwrap_or_default();
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            api_url,
            interval_ms,
            variant,
            panels,
            headless,
            with_background,
        } => {
            let config = load_config(&config_path);
            let environment = resolve_environment(api_url.as_deref(), &config, &env_value)?;
            let refresh_interval = resolve_interval(interval_ms, &config)?;
            let settings = SessionSettings {
                environment,
                variant: variant.or(config.variant).unwrap_or_default(),
                refresh_interval,
                panels: if panels.is_empty() {
                    config.panels
                } else {
                    panels
                },
            };
            let session = setup_session(settings).await?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Search {
            query,
            api_url,
            variant,
        } => {
            let Some(query) = searchable_query(&query) else {
                print_cmd_warn!("Query must be at least 2 characters", "");
                return Ok(());
            };
            let config = load_config(&config_path);
            let environment = resolve_environment(api_url.as_deref(), &config, &env_value)?;
            let variant = variant.or(config.variant).unwrap_or_default();
            search_once(ApiClient::new(environment, variant)?, &query).await
        }
        Command::SetServer { api_url } => {
            let environment = Environment::custom(&api_url)?;
            let mut config = load_config(&config_path);
            config.api_url = Some(environment.api_url());
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Dashboard server saved", "{}", environment.api_url());
            Ok(())
        }
        Command::Reset => {
            Config::clear(&config_path)?;
            print_cmd_success!(
                "Configuration cleared",
                "{}",
                config_path.display()
            );
            Ok(())
        }
    }
}

async fn search_once(api: impl DashboardApi, query: &str) -> Result<(), Box<dyn Error>> {
    print_cmd_info!("Searching", "\"{}\" on {}", query, api.base_url());
    match api.search(query).await {
        Ok(hits) if hits.is_empty() => {
            println!("{}", NO_MATCHES);
            Ok(())
        }
        Ok(hits) => {
            for hit in hits {
                println!("{}", hit.heading());
                println!("    {}", hit.text.unwrap_or_default());
            }
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Search failed.", &e.to_string());
            Err(e.into())
        }
    }
}
