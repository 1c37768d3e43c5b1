use anyhow::Context;
use clap::Parser;
use lang_snippets::utils::logger;
use lang_snippets::{fetch_data, sum_line, Calculator, Cli, Command, ReqwestSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI args: {:?}", cli);

    let settings = match cli.fetch_config() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            return Err(e.into());
        }
    };

    match cli.command {
        Command::Fetch { .. } => {
            let config = settings.context("fetch settings were not resolved")?;
            let source = ReqwestSource::new(config.timeout())?;
            let outcome = fetch_data(&source, &config.url).await;
            if let Some(data) = outcome.data() {
                println!("{}", serde_json::to_string_pretty(data)?);
            }
        }
        Command::Add { a, b } => {
            println!("{}", sum_line(a, b));
        }
        Command::Multiply { a, b } => {
            println!("{}", Calculator::new().multiply(a, b));
        }
        Command::All => {
            let config = settings.context("fetch settings were not resolved")?;
            let source = ReqwestSource::new(config.timeout())?;
            fetch_data(&source, &config.url).await;
            Calculator::new().multiply(4.0, 5.0);
            println!("{}", sum_line(5.0, 10.0));
        }
    }

    Ok(())
}
