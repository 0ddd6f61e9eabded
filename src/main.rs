use clap::Parser;
use tower_lsp::LspService;
use tower_lsp::Server;
use tracing_subscriber::EnvFilter;

use smartci_lsp::Backend;

/// Environment variable that overrides `--log-level` with a full
/// `tracing` filter directive.
const LOG_ENV: &str = "SMARTCI_LOG";

/// CodeIgniter 3 model navigation language server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Communicate over stdin/stdout (the only transport; accepted because
    /// most editors pass it).
    #[arg(long)]
    stdio: bool,

    /// Log level written to stderr: error, warn, info, debug or trace.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // stdout carries the protocol, so logs go to stderr.
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!(stdio = cli.stdio, "starting SmartCI");

    let (service, socket) = LspService::new(Backend::new);
    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
        .serve(service)
        .await;
}
