mod config;
mod export;
mod preview;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cardbinder", about = "Build and preview the static card collection site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render every route shell into a static directory.
    Export {
        /// Output directory (defaults to `SITE_OUT_DIR` or `dist`).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Serve an exported directory the way a static host would.
    Preview {
        /// Export directory (defaults to `SITE_OUT_DIR` or `dist`).
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Listen port (defaults to `SITE_PREVIEW_PORT` or 4173).
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let site = match config::SiteConfig::from_env() {
        Ok(site) => site,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Export { out } => {
            let out_dir = out.unwrap_or(site.out_dir);
            let options = match leptos::config::get_configuration(None) {
                Ok(conf) => conf.leptos_options,
                Err(e) => {
                    tracing::error!(error = %e, "leptos configuration");
                    return ExitCode::FAILURE;
                }
            };
            match export::run(&out_dir, &options) {
                Ok(summary) => {
                    tracing::info!(
                        shells = summary.shells,
                        rewrites = summary.rewrites,
                        out = %out_dir.display(),
                        "export complete"
                    );
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    tracing::error!(error = %e, "export failed");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Preview { dir, port } => {
            let dir = dir.unwrap_or(site.out_dir);
            let port = port.unwrap_or(site.preview_port);
            match preview::serve(&dir, port).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    tracing::error!(error = %e, "preview failed");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
