mod app;
mod config;
mod handlers;
mod inertia;
mod state;
mod templates;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use listenfd::ListenFd;
use pressbridge_vite::HotFileGuard;
use pressbridge_vite_core::{
    resolve_dev_server_url, DevServerAddress, DevServerOverrides, PluginConfig, RawPluginConfig,
};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// pressbridge - Serve Inertia pages with Vite-built assets
#[derive(Parser, Debug)]
#[command(name = "pressbridge")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the page server (default)
    Serve,
    /// Publish a running dev server to the hot file until Ctrl+C
    Hot(HotArgs),
}

#[derive(Args, Debug)]
struct HotArgs {
    /// Address the dev server is bound to
    #[arg(long, default_value = "localhost")]
    address: String,

    /// Port the dev server is bound to
    #[arg(long, default_value = "5173")]
    port: u16,

    /// The bound address is IPv6
    #[arg(long)]
    ipv6: bool,

    /// Dev server uses TLS
    #[arg(long)]
    https: bool,

    /// Public host of the dev server
    #[arg(long)]
    dev_host: Option<String>,

    /// HMR protocol override ("ws" or "wss")
    #[arg(long)]
    hmr_protocol: Option<String>,

    /// HMR host override
    #[arg(long)]
    hmr_host: Option<String>,

    /// HMR client port override
    #[arg(long)]
    hmr_client_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pressbridge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    match cli.command {
        Some(Command::Hot(args)) => publish_hot_file(&config, args).await,
        Some(Command::Serve) | None => serve(config, &cli.host, cli.port).await,
    }
}

async fn serve(config: Config, host: &str, port: u16) -> Result<()> {
    let state = AppState::new(config)?;
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        None => TcpListener::bind(format!("{host}:{port}")).await?,
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Write the dev server URL to the hot file and remove it on shutdown.
async fn publish_hot_file(config: &Config, args: HotArgs) -> Result<()> {
    let plugin = PluginConfig::resolve(RawPluginConfig {
        input: config.vite.input.clone(),
        public_directory: config.vite.public_directory.clone(),
        build_directory: config.vite.build_directory.clone(),
        hot_file: config.vite.hot_file.clone(),
        ..RawPluginConfig::default()
    })?;

    let url = resolve_dev_server_url(
        &DevServerAddress {
            address: args.address,
            port: args.port,
            ipv6: args.ipv6,
        },
        &DevServerOverrides {
            https: args.https,
            host: args.dev_host,
            hmr_protocol: args.hmr_protocol,
            hmr_host: args.hmr_host,
            hmr_client_port: args.hmr_client_port,
        },
    );

    tracing::info!(
        base = %plugin.base(&config.public_url),
        out_dir = %plugin.out_dir(false),
        "Build settings"
    );

    let guard = HotFileGuard::publish(config.root.join(&plugin.hot_file), &url)?;
    tracing::info!("Dev server published at {url}, press Ctrl+C to stop");

    shutdown_signal().await;
    drop(guard);

    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
