use clap::Parser;
use dotenvy::dotenv;
use premi_tracker::{
    cli::{self, Cli, Commands},
    config::{database, settings},
    errors::Result,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn run(cli: Cli) -> Result<String> {
    // Load the optional settings file (suggestion presets)
    let settings = settings::load_default_config()?;

    // Open the database and bring the schema up to date
    let database_url = database::get_database_url();
    let db = database::create_connection(&database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // Run one command; `today` is read fresh so remaining days are always current
    let command = cli.command.unwrap_or(Commands::List { trash: false });
    let today = chrono::Local::now().date_naive();
    cli::execute(command, &db, &settings, today).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 2. Initialize tracing on stderr so the table output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{e}");
            if e.is_recoverable() {
                eprintln!("Nothing was changed; correct the input and try again.");
            }
            ExitCode::FAILURE
        }
    }
}
