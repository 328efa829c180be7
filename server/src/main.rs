use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing::{Level, error, info};
use tracing_subscriber::{
    filter::LevelFilter,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

mod bundle;
mod config;
mod http;

use config::{FolioConfig, read_config};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// config file (defaults to ./folio.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// more logging, repeat for even more
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// serve the built site for local preview
    Serve {
        /// ip and port to listen on
        #[arg(short, long)]
        socket: Option<String>,

        /// directory holding the built webapp
        #[arg(short, long)]
        doc_root: Option<PathBuf>,
    },

    /// assemble the static bundle for publishing
    Build {
        /// directory holding the built webapp
        #[arg(long)]
        dist: Option<PathBuf>,

        /// where to write the bundle
        #[arg(long, default_value = "public")]
        out: PathBuf,
    },
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(LevelFilter::from_level(log_level(cli.verbose))))
        .init();

    if let Err(err) = run(cli).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = read_config(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Serve { socket, doc_root } => {
            // flags win over the config file
            let mut config = FolioConfig::clone(&config);

            if let Some(socket) = socket {
                config.http.socket = socket;
            }
            if let Some(doc_root) = doc_root {
                config.http.doc_root = doc_root;
            }

            info!("folio preview server starting up");

            http::svc::serve_http(config.into()).await
        }
        Commands::Build { dist, out } => {
            let dist = dist.unwrap_or_else(|| config.http.doc_root.clone());

            let report = bundle::build_bundle(&dist, &out, &config.site).await?;

            println!(
                "copied {} files, {} pages in sitemap, bundle at {}",
                report.files_copied,
                report.sitemap_urls,
                out.display()
            );

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from(["folio", "-vv", "serve", "--socket", "0.0.0.0:80"]).unwrap();

        assert_eq!(log_level(cli.verbose), Level::DEBUG);
        assert!(matches!(
            cli.command,
            Commands::Serve { socket: Some(ref s), doc_root: None } if s == "0.0.0.0:80"
        ));
    }

    #[test]
    fn test_build_defaults() {
        let cli = Cli::try_parse_from(["folio", "build"]).unwrap();

        assert_eq!(log_level(cli.verbose), Level::WARN);
        assert!(matches!(
            cli.command,
            Commands::Build { dist: None, ref out } if out == &PathBuf::from("public")
        ));
    }
}
