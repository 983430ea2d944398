use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shopping_parser::completion::GeminiClient;
use shopping_parser::item_text_parser::TextItemParser;
use shopping_parser::parser_config::ParserConfig;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Text from the command line, or stdin when no arguments are given
fn read_input() -> Result<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read shopping text from stdin")?;
    Ok(text)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging();

    let config = ParserConfig::from_env()?;
    info!(
        models = config.models.len(),
        remote_enabled = config.api_key.is_some(),
        "Starting shopping item parser"
    );

    let client = Arc::new(GeminiClient::new(&config)?);
    let parser = TextItemParser::new(client, config.models.clone());

    let text = read_input()?;
    let outcome = parser.parse(&text).await;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
