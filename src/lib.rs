pub mod adapters;
pub mod config;
pub mod domain;
pub mod snippets;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};

pub use adapters::ReqwestSource;
pub use config::{FileConfig, SnippetConfig};
pub use domain::JsonSource;
pub use snippets::{add, fetch_data, fetch_json, sum_line, Calculator, FetchOutcome, Logged};
pub use utils::error::{Result, SnippetError};
