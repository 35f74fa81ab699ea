//! Bot API CLI — call a handful of Bot API methods from the shell
//!
//! Usage:
//!   bot-api-cli me                              Show basic bot information
//!   bot-api-cli updates [offset]                Fetch pending updates
//!   bot-api-cli send-message <chat_id> <text>   Send a text message
//!   bot-api-cli send-photo <chat_id> <path|id>  Upload a local photo or resend a file id
//!   bot-api-cli file <file_id>                  Resolve a file id to a download URL

use anyhow::{bail, Context};
use std::path::Path;
use telegram_bot_api::{ApiEnvelope, BotApiBuilder, InputFile, Parameters};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "version" | "--version" | "-V" => {
            println!("bot-api-cli {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        _ => {}
    }

    let api = BotApiBuilder::from_env()
        .build()
        .context("set TELEGRAM_BOT_TOKEN or store the token in the keyring")?;

    let envelope = match (args[1].as_str(), &args[2..]) {
        ("me", []) => api.get_me(None).await?,
        ("updates", rest) => {
            let params = match rest.first() {
                Some(offset) => {
                    let offset: i64 = offset.parse().context("offset must be an integer")?;
                    Some(Parameters::new().with("offset", offset))
                }
                None => None,
            };
            api.get_updates(params, None).await?
        }
        ("send-message", [chat_id, text]) => {
            let params = Parameters::new()
                .with("chat_id", chat_value(chat_id))
                .with("text", text.as_str());
            api.send_message(params, None).await?
        }
        ("send-photo", [chat_id, photo]) => {
            let params = Parameters::new().with("chat_id", chat_value(chat_id));
            let params = if Path::new(photo).is_file() {
                params.with("photo", InputFile::path(photo))
            } else {
                params.with("photo", photo.as_str())
            };
            api.send_photo(params, None).await?
        }
        ("file", [file_id]) => {
            api.get_file(Parameters::new().with("file_id", file_id.as_str()), None)
                .await?
        }
        (other, _) => {
            eprintln!("Unknown command or wrong arguments: {other}");
            eprintln!();
            print_usage();
            bail!("invalid usage");
        }
    };

    print_envelope(&envelope)?;
    Ok(())
}

/// Numeric chat ids go out as numbers, `@channelname` as a string.
fn chat_value(chat_id: &str) -> serde_json::Value {
    match chat_id.parse::<i64>() {
        Ok(id) => serde_json::Value::from(id),
        Err(_) => serde_json::Value::from(chat_id),
    }
}

fn print_envelope(envelope: &ApiEnvelope) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(envelope)?);
    Ok(())
}

fn print_usage() {
    println!(
        r#"bot-api-cli — Telegram Bot API command line client

USAGE:
    bot-api-cli <COMMAND> [ARGS]

COMMANDS:
    me                              Show basic bot information (getMe)
    updates [offset]                Fetch pending updates (getUpdates)
    send-message <chat_id> <text>   Send a text message
    send-photo <chat_id> <path|id>  Upload a local photo or resend by file id
    file <file_id>                  Resolve a file id to a download URL
    version                         Show version information
    help                            Show this help message

ENVIRONMENT:
    TELEGRAM_BOT_TOKEN              Bot token (falls back to the OS keyring)
    TELEGRAM_API_ENDPOINT           API base URL (default https://api.telegram.org)
    TELEGRAM_HTTP_TIMEOUT_SECS      Request timeout in seconds (default 30)
    TELEGRAM_PROXY_URL              Proxy for all requests
    RUST_LOG                        Log filter (default info)"#
    );
}
