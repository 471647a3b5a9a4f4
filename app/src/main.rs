#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod command;

use command::{
    ChatInput, ChatStrategy, CommandStrategy, InitStrategy, ServeInput, ServeStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "replog")]
#[command(about = "HCP interaction record keeper", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Talk to the interaction assistant locally
    Chat {
        /// Single message to send
        #[arg(short = 'm', long)]
        message: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            ServeStrategy.execute(ServeInput { host, port }).await?;
        }
        Commands::Chat { message } => {
            ChatStrategy.execute(ChatInput { message }).await?;
        }
        Commands::Init => {
            InitStrategy.execute(()).await?;
        }
        Commands::Version => {
            VersionStrategy.execute(()).await?;
        }
    }

    Ok(())
}
