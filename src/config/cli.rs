use super::{FileConfig, Overrides, SnippetConfig};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "lang-snippets")]
#[command(about = "Runs the async fetch, logged method and typed add demos")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Optional TOML file with a [fetch] section
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// GET a URL and print the decoded JSON
    Fetch {
        #[arg(long)]
        url: Option<String>,
    },
    /// Add two numbers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Multiply two numbers through the logged Calculator
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Run every demo with its stock inputs
    All,
}

impl Cli {
    /// Fetch settings for the subcommands that make a request. `add` and
    /// `multiply` get `None` and never read the file or validate flags.
    pub fn fetch_config(&self) -> Result<Option<SnippetConfig>> {
        match self.command {
            Command::Fetch { .. } | Command::All => self.snippet_config().map(Some),
            Command::Add { .. } | Command::Multiply { .. } => Ok(None),
        }
    }

    pub fn snippet_config(&self) -> Result<SnippetConfig> {
        let file = match &self.config {
            Some(path) => Some(FileConfig::from_file(path)?),
            None => None,
        };
        let url = match &self.command {
            Command::Fetch { url } => url.clone(),
            _ => None,
        };
        SnippetConfig::resolve(
            file,
            Overrides {
                url,
                timeout_seconds: self.timeout_seconds,
            },
        )
    }
}
