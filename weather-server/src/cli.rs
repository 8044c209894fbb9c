use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Password, PasswordDisplayMode};
use weather_core::Config;

use crate::server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "HTTP gateway for current weather data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server.
    Serve {
        /// Interface to bind, overrides the config file.
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on, overrides the config file and environment.
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Store the OpenWeather API key and listening port.
    Configure,

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Serve { host, port } => {
                server::init_tracing();
                let config = resolve_config(host, port)?;
                server::run(&config).await
            }
            Command::Configure => configure(),
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

/// File, then environment, then command-line flags.
fn resolve_config(host: Option<String>, port: Option<u16>) -> Result<Config> {
    let mut config = Config::load()?;
    config.apply_env_overrides()?;
    apply_flags(&mut config, host, port);
    Ok(config)
}

fn apply_flags(config: &mut Config, host: Option<String>, port: Option<u16>) {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let port = CustomType::<u16>::new("Port:")
        .with_default(config.server.port)
        .with_error_message("Please enter a valid port number")
        .prompt()
        .context("Failed to read port")?;

    config.set_api_key(api_key.trim().to_string());
    config.server.port = port;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
