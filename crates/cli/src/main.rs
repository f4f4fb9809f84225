use std::process::ExitCode;

use anyhow::Result;
use catalogue_core::{CatalogueId, ListQuery, SortOrder, StatusFilter};
use catalogue_gateway::ClientConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod terminal;

use commands::catalogue::{RecordArgs, Session};

#[derive(Parser)]
#[command(name = "catalogue")]
#[command(about = "Browse and edit catalogues on a Catalogue Manager backend", long_about = None)]
struct Cli {
    /// Backend base URL (defaults to CATALOGUE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web interface
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// List catalogues, five per page
    List {
        #[arg(short, long, default_value = "")]
        search: String,
        /// all, active or inactive
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// asc or desc (by ID)
        #[arg(long, default_value = "asc")]
        sort: SortOrder,
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Show one catalogue (asks for the ID when omitted)
    Get { id: Option<CatalogueId> },
    /// Add a catalogue
    Create {
        #[arg(long)]
        id: Option<CatalogueId>,
        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Change fields of an existing catalogue
    Update {
        id: CatalogueId,
        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Remove a catalogue
    Delete {
        id: CatalogueId,
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config = config.with_base_url(url);
    }

    let code = match cli.command {
        Commands::Serve { port, host } => {
            commands::serve::run(config, port, host).await?;
            ExitCode::SUCCESS
        },
        Commands::List { search, status, sort, page } => {
            let session = Session::open(config).await?;
            commands::catalogue::list(session, ListQuery { search, status, sort, page }).await
        },
        Commands::Get { id } => commands::catalogue::get(Session::open(config).await?, id).await,
        Commands::Create { id, fields } => {
            commands::catalogue::create(Session::open(config).await?, id, fields).await
        },
        Commands::Update { id, fields } => {
            commands::catalogue::update(Session::open(config).await?, id, fields).await
        },
        Commands::Delete { id, yes } => {
            commands::catalogue::delete(Session::open(config).await?, id, yes).await
        },
    };

    Ok(code)
}
