//! Configuration management commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::api::normalize_base_url;
use crate::cli::output::{print_formatted, print_success, OutputFormat};
use crate::config::Config;
use crate::ui::theme::ThemePreset;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Get a specific config value
    Get {
        /// Config key ("service.base_url" or "appearance.theme")
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key ("service.base_url" or "appearance.theme")
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

#[derive(Serialize)]
struct ConfigPathResult {
    path: String,
    exists: bool,
}

#[derive(Serialize)]
struct ConfigValue<'a> {
    key: &'a str,
    value: String,
}

pub fn run(command: &ConfigCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => show(format),
        ConfigCommands::Get { key } => get(key, format),
        ConfigCommands::Set { key, value } => set(key, value, quiet),
        ConfigCommands::Path => path(format),
    }
}

fn show(format: OutputFormat) -> Result<()> {
    let config = Config::load()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => println!("{}", toml::to_string_pretty(&config)?),
    }

    Ok(())
}

fn get(key: &str, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let value = ConfigValue {
        key,
        value: get_config_value(&config, key)?,
    };
    print_formatted(&value, format, |v| v.value.clone());
    Ok(())
}

fn set(key: &str, value: &str, quiet: bool) -> Result<()> {
    let mut config = Config::load()?;
    set_config_value(&mut config, key, value)?;
    config.save()?;

    let stored = get_config_value(&config, key)?;
    print_success(&format!("Set {} = {}", key, stored), quiet);
    Ok(())
}

fn path(format: OutputFormat) -> Result<()> {
    let path = Config::config_path()?;
    let result = ConfigPathResult {
        path: path.display().to_string(),
        exists: path.exists(),
    };

    print_formatted(&result, format, |r| {
        if r.exists {
            r.path.clone()
        } else {
            format!("{} (not created yet)", r.path)
        }
    });
    Ok(())
}

pub(crate) fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["service", "base_url"] => Ok(config.service.base_url.clone()),
        ["appearance", "theme"] => Ok(config.appearance.theme.name().to_lowercase()),
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
}

pub(crate) fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["service", "base_url"] => {
            let url = normalize_base_url(value);
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("Base URL must start with http:// or https://: {}", value);
            }
            config.service.base_url = url;
        }
        ["appearance", "theme"] => {
            config.appearance.theme = value.parse::<ThemePreset>().map_err(anyhow::Error::msg)?;
        }
        _ => anyhow::bail!("Unknown config key: {}", key),
    }

    Ok(())
}
