//! Repo Saga Client - Command Line Entry Point
//!
//! Turn GitHub repositories into poetry and fiction from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use repo_saga_client::constants::LOG_FILE_PREFIX;
use repo_saga_client::helpers::get_or_create_data_dir;
use repo_saga_client::i18n::{available_locales, has_locale};
use repo_saga_client::{ApiClient, LiteraryWork, Presets, current_locale, set_locale, t};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "repo-saga", version, about = "Turn GitHub projects into poetry and fiction")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an insight report, a poem and a novel for a repository
    Generate {
        /// GitHub repository URL
        url: String,
        #[arg(long)]
        poem_style: Option<String>,
        #[arg(long)]
        novel_genre: Option<String>,
        #[arg(long)]
        tone: Option<String>,
    },
    /// Show the FastAPI showcase
    Example,
    /// Ask the Repo Saga assistant a question
    Chat { message: String },
    /// Show or change the interface language
    Lang { code: Option<String> },
    /// Translate a dotted key with the current language
    T { key: String },
}

/// Log to stderr and to a daily file in the data directory
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("File logging disabled: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

fn print_work(work: &LiteraryWork) {
    println!("{}: {}", t("results.project"), work.repo_url().unwrap_or_default());
    for (key, text) in [
        ("sections.insight", work.insight_report()),
        ("sections.poem", work.poem()),
        ("sections.novel", work.novel()),
    ] {
        println!("\n== {} ==\n{}", t(key), text.unwrap_or_default());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging();
    let cli = Cli::parse();

    tracing::info!(command = ?cli.command, "Starting Repo Saga client");

    match cli.command {
        Command::Generate {
            url,
            poem_style,
            novel_genre,
            tone,
        } => {
            let presets = Presets {
                poem_style,
                novel_genre,
                tone,
                lang: Some(current_locale()),
                ..Presets::default()
            };
            println!("{}", t("input.generating"));
            let work = ApiClient::from_env()?.generate(&url, &presets).await?;
            println!("{}\n", t("results.done"));
            print_work(&work);
        }
        Command::Example => {
            println!("{}\n{}\n", t("example.title"), t("example.desc"));
            let work = ApiClient::from_env()?.get_example().await?;
            print_work(&work);
        }
        Command::Chat { message } => {
            let lang = current_locale();
            let reply = ApiClient::from_env()?
                .chat(&message, &[], Some(&lang), None)
                .await?;
            match reply {
                Some(text) => println!("{text}"),
                None => eprintln!("The assistant sent no reply text"),
            }
        }
        Command::Lang { code } => {
            if let Some(code) = code {
                if !has_locale(&code) {
                    eprintln!(
                        "No dictionary for '{code}', translations will show keys (available: {})",
                        available_locales().join(", ")
                    );
                }
                set_locale(code);
            }
            println!("{}", current_locale());
        }
        Command::T { key } => println!("{}", t(&key)),
    }

    Ok(())
}
