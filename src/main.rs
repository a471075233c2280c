use name_pinyin::config;
use name_pinyin::pinyin::PinyinTable;
use name_pinyin::romanize::{NameRequest, romanize};
use name_pinyin::server::{self, AppState, PinyinReply};

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "Name Pinyin")]
#[command(version = "0.1.0")]
#[command(about = "Convert Chinese personal names to pinyin", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Convert a single name and print the result as JSON
    Convert(ConvertArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = config::ENV_HOST, default_value = config::DEFAULT_HOST)]
    host: String,

    #[arg(short, long, env = config::ENV_PORT, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Directory containing index.html
    #[arg(long, env = config::ENV_STATIC_DIR, default_value = config::DEFAULT_STATIC_DIR)]
    static_dir: PathBuf,
}

#[derive(Args)]
struct ConvertArgs {
    /// Full name, surname first
    name: String,

    /// Tone notation: none, mark or num
    #[arg(long)]
    tone: Option<String>,

    /// Letter case: lower, upper or capitalize
    #[arg(long)]
    case: Option<String>,

    /// Separator between syllables
    #[arg(long)]
    sep: Option<String>,

    /// Output mode: full or initials
    #[arg(long)]
    mode: Option<String>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "could not listen for shutdown signal");
    }
    info!("shutting down");
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let state = AppState {
        source: Arc::new(PinyinTable),
        static_dir: args.static_dir,
    };
    let app = server::router(state);

    let listener = server::bind(&args.host, args.port)
        .await
        .context(format!("Could not bind to {}:{}", args.host, args.port))?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    Ok(())
}

fn convert(args: &ConvertArgs) -> anyhow::Result<()> {
    let request = NameRequest::from_options(
        &args.name,
        args.tone.as_deref(),
        args.case.as_deref(),
        args.sep.as_deref(),
        args.mode.as_deref(),
    );
    match romanize(&request, &PinyinTable) {
        Ok(result) => {
            let reply = PinyinReply::Converted { ok: true, result };
            println!("{}", serde_json::to_string_pretty(&reply)?);
            Ok(())
        }
        Err(err) => {
            let reply = PinyinReply::Rejected {
                ok: false,
                error: err.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&reply)?);
            Err(anyhow!(err))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Convert(args) => convert(&args),
    }
}
