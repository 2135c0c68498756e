mod api;
mod cli_messages;
mod config;
mod consts;
mod controller;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod session;
mod ui;
mod workers;

use crate::api::{ApiClient, LipidApi};
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{environment_from_sources, run_headless_mode, run_tui_mode, setup_session};
use crate::ui::UIConfig;
use clap::{Parser, Subcommand};
use std::error::Error;

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
    /// Start the lipid dashboard
    Start {
        /// API endpoint root, `local` or an http(s) URL
        #[arg(long, value_name = "URL")]
        api_url: Option<Environment>,

        /// Run without the terminal UI and print the dashboard as text
        #[arg(long)]
        headless: bool,

        /// Fill the dashboard background
        #[arg(long)]
        with_background: bool,
    },
    /// List the users known to the API
    Users {
        /// API endpoint root, `local` or an http(s) URL
        #[arg(long, value_name = "URL")]
        api_url: Option<Environment>,
    },
    /// Save the API endpoint root to the config file
    Configure {
        /// API endpoint root, `local` or an http(s) URL
        #[arg(long, value_name = "URL")]
        api_url: String,
    },
    /// Delete the config file
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            api_url,
            headless,
            with_background,
        } => start(api_url, headless, with_background).await,
        Command::Users { api_url } => list_users(api_url).await,
        Command::Configure { api_url } => {
            let environment = api_url.parse::<Environment>().map_err(|e| {
                print_cmd_error!("Invalid API URL", "{}", e);
                e
            })?;
            let config_path = get_config_path()?;
            Config::new(api_url.trim().to_string())
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "Configuration saved",
                "{} ({})",
                config_path.display(),
                environment.api_url()
            );
            Ok(())
        }
        Command::ClearConfig => {
            let config_path = get_config_path()?;
            println!("Clearing configuration file...");
            Config::clear(&config_path)?;
            print_cmd_success!("Configuration cleared", "{}", config_path.display());
            Ok(())
        }
    }
}

/// Starts the dashboard.
///
/// # Arguments
/// * `api_url` - Endpoint root from the command line, if given.
/// * `headless` - Print the dashboard as text instead of running the TUI.
/// * `with_background` - Fill the dashboard background.
async fn start(
    api_url: Option<Environment>,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let environment = environment_from_sources(api_url);
    let session = setup_session(environment, UIConfig::new(with_background))?;

    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session).await
    }
}

/// Prints one line per user, or the API error.
async fn list_users(api_url: Option<Environment>) -> Result<(), Box<dyn Error>> {
    let environment = environment_from_sources(api_url);
    let client = ApiClient::new(environment.clone())?;
    match client.list_users().await {
        Ok(users) => {
            print_cmd_info!("Users", "{} at {}", users.len(), environment.api_url());
            for user in users {
                println!("{}", user.display_label());
            }
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Failed to list users", "{}", e.user_message());
            Err(Box::new(e))
        }
    }
}
