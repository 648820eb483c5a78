use clap::Parser;
use code_exec::CodeExecutionService;
use code_exec_server::{config, create_app, run_server};
use std::{net::SocketAddr, num::NonZeroUsize, path::PathBuf, sync::Arc, time::Duration};
use tio_client::{MystbinClient, PasteConfig, TioClient, TioConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to listen on
    #[arg(short, long, env = "RELAY_ADDR", default_value = "0.0.0.0:3000")]
    addr: SocketAddr,

    /// Language list, one id per line
    #[arg(long, env = "RELAY_LANGUAGES", default_value = "data/languages.txt")]
    languages: PathBuf,

    /// Alias, default and wrapping tables
    #[arg(long, env = "RELAY_TABLES", default_value = "data/tables.toml")]
    tables: PathBuf,

    /// tio.run run API endpoint
    #[arg(long, env = "TIO_URL", default_value = "https://tio.run/cgi-bin/run/api/")]
    tio_url: String,

    /// Paste service API base URL
    #[arg(long, env = "PASTE_API_URL", default_value = "https://mystb.in/api")]
    paste_api_url: String,

    /// Base URL of created pastes
    #[arg(long, env = "PASTE_URL", default_value = "https://mystb.in")]
    paste_url: String,

    /// Maximum number of concurrent executions, at least one
    #[arg(short, long, env = "RELAY_MAX_CONCURRENT", default_value = "10")]
    max_concurrent: NonZeroUsize,

    /// Timeout for backend and paste requests, in seconds
    #[arg(long, env = "RELAY_TIMEOUT", default_value = "30")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let timeout = Duration::from_secs(args.timeout);

    let (catalog, templates) = config::load_tables(&args.languages, &args.tables)?;

    let backend = TioClient::new(
        TioConfig::new()
            .with_api_url(args.tio_url)
            .with_timeout(timeout),
    )?;
    let paste = Arc::new(MystbinClient::new(
        PasteConfig::new()
            .with_api_url(args.paste_api_url)
            .with_site_url(args.paste_url)
            .with_timeout(timeout),
    )?);

    let service = CodeExecutionService::new(
        catalog,
        templates,
        Arc::new(backend),
        paste.clone(),
        args.max_concurrent.get(),
    );

    let app = create_app(service, paste);
    run_server(app, args.addr).await?;

    Ok(())
}
