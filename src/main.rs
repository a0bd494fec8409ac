use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio::config::{MailConfig, ServerConfig};
use portfolio::server;
use tracing::Level;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Serve {
        #[clap(long, default_value = "0.0.0.0")]
        host: String,
        #[clap(short, long, default_value = "8001")]
        port: u16,
        #[clap(short, long, default_value = "portfolio.db")]
        database: String,
        /// Frontend origin allowed to call the API; any origin when omitted
        #[clap(long)]
        cors_origin: Option<String>,
    },
    Db {
        #[clap(subcommand)]
        command: DbCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommands {
    Migrate {
        #[clap(subcommand)]
        direction: server::MigrateDirection,
        #[clap(short, long, default_value = "portfolio.db")]
        database: String,
    },
    /// Load sample projects, testimonials and a post into an empty database
    Seed {
        #[clap(short, long, default_value = "portfolio.db")]
        database: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_file = dotenv::dotenv();
    let args = Cli::parse();
    setup_logging(&args.log_level);

    // A missing .env file is fine; real environment variables still apply
    if let Err(err) = env_file {
        debug!("No .env file loaded: {}", err);
    }

    match args.command {
        Commands::Serve {
            host,
            port,
            database,
            cors_origin,
        } => {
            let config = ServerConfig {
                host,
                port,
                database,
                cors_origin,
            };
            info!("Starting server on {}:{}", config.host, config.port);
            server::start_server(&config, &MailConfig::from_env()).await?;
        }
        Commands::Db { command } => match command {
            DbCommands::Migrate {
                direction,
                database,
            } => {
                info!("Running database migration: {:?}", direction);
                server::migrate_database(&database, direction).await?;
            }
            DbCommands::Seed { database } => {
                info!("Seeding database: {}", database);
                server::seed_database(&database).await?;
            }
        },
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sqlx=warn,{}", log_level)))
        .without_time()
        .init();
}
