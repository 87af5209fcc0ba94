//! Command-line interface
//!
//! Every GUI operation is also reachable from the shell. Running the binary
//! without a subcommand starts the GUI instead.

mod commands;
mod output;

use clap::{Parser, Subcommand};

use crate::api::StegoClient;
use crate::config::Config;

pub use output::{print_error, OutputFormat};

/// Stego Toolkit - hide and extract messages in images
#[derive(Parser, Debug)]
#[command(name = "stego-toolkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    /// Service base URL (overrides STEGO_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hide a message inside an image
    Encode(commands::encode::EncodeArgs),

    /// Extract a hidden message from an image
    Decode(commands::decode::DecodeArgs),

    /// List the available steganography methods
    Methods,

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

impl Cli {
    /// Service URL: `--api-url`, then the environment, then the config file
    pub fn resolve_base_url(&self, config: &Config) -> String {
        config.resolve_base_url(self.api_url.as_deref())
    }
}

/// Run the CLI with parsed arguments
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let format = cli.output.format();
    let quiet = cli.output.quiet;

    let Some(command) = &cli.command else {
        anyhow::bail!("No command given");
    };

    match command {
        Commands::Encode(args) => {
            let client = client_for(&cli)?;
            commands::encode::run(args, &client, format, quiet).await
        }
        Commands::Decode(args) => {
            let client = client_for(&cli)?;
            commands::decode::run(args, &client, format, quiet).await
        }
        Commands::Methods => commands::methods::run(format),
        Commands::Config { command } => commands::config::run(command, format, quiet),
    }
}

fn client_for(cli: &Cli) -> anyhow::Result<StegoClient> {
    let config = Config::load()?;
    let base_url = cli.resolve_base_url(&config);
    tracing::debug!("Using steganography service at {}", base_url);
    Ok(StegoClient::new(base_url)?)
}
