pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "gatectl")]
#[command(about = "Operator tooling for the course gateway")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List the proxied route table")]
    Routes,

    #[command(about = "Show the route guard decision for a page path")]
    Guard {
        #[arg(help = "Request path, e.g. /dashboard/courses")]
        path: String,
        #[arg(long, help = "Evaluate as if a credential were present")]
        with_token: bool,
    },

    #[command(about = "Check that the upstream API answers")]
    Ping {
        #[arg(long, help = "Upstream base URL (defaults to UPSTREAM_API_URL)")]
        url: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Routes => commands::routes::handle(output_format),
        Commands::Guard { path, with_token } => commands::guard::handle(&path, with_token, output_format),
        Commands::Ping { url } => commands::ping::handle(url, output_format).await,
    }
}
