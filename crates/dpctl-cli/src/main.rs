use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dpctl::{
    CATALOG_INFO_FILE, DESCRIPTOR_FILE, DeleteOutcome, ENVIRONMENTS_FILE, Error, RunContext,
    StatementClient,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

const DOTENV_FILE: &str = ".env";

/// Data product schema lifecycle on Databricks SQL warehouses.
///
/// Branch and environment come from GITHUB_REF_NAME and ENVIRONMENT (both
/// default to `dev`); warehouse access needs DATABRICKS_TOKEN.
#[derive(Parser, Debug)]
#[command(name = "dpctl", version)]
struct Cli {
    /// Environment settings file
    #[arg(long, global = true, default_value = ENVIRONMENTS_FILE)]
    environments: PathBuf,

    /// Data product descriptor
    #[arg(long, global = true, default_value = DESCRIPTOR_FILE)]
    descriptor: PathBuf,

    /// Command to run
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the product's catalog (unity only) and schema if missing
    Provision,
    /// Drop the product's schema and everything in it
    Delete,
    /// Set spec.lifecycle in the catalog metadata file
    Lifecycle {
        /// New lifecycle stage (e.g. "production", "deprecated")
        value: String,

        /// Catalog metadata file
        #[arg(long, default_value = CATALOG_INFO_FILE)]
        file: PathBuf,
    },
    /// Print the catalog and schema names for the current environment
    Names,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and are not failures.
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    // Only the working directory's `.env`, never one found in a parent.
    dotenvy::from_path(DOTENV_FILE).ok();
    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

async fn run(cli: Cli) -> Result<(), Error> {
    match &cli.command {
        Commands::Provision => provision(&cli).await,
        Commands::Delete => delete(&cli).await,
        Commands::Lifecycle { value, file } => {
            dpctl::update_lifecycle(file, value)?;
            println!("{} lifecycle updated to '{}'", ok(), value);
            Ok(())
        }
        Commands::Names => names(&cli),
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn resolve(cli: &Cli) -> Result<RunContext, Error> {
    RunContext::resolve(env_var, &cli.environments, &cli.descriptor)
}

/// Resolve everything and open the warehouse client; no I/O happens before
/// every check has passed.
fn connect(cli: &Cli, action: &str) -> Result<(RunContext, StatementClient), Error> {
    let ctx = resolve(cli)?;
    println!("{action} for environment: {}", ctx.environment.name.bold());

    let token = dpctl::access_token(env_var)?;
    let client = StatementClient::new(&ctx.environment, token)?;
    println!(
        "Connecting to Databricks ({} metastore)...",
        ctx.environment.metastore
    );
    Ok((ctx, client))
}

async fn provision(cli: &Cli) -> Result<(), Error> {
    let (ctx, client) = connect(cli, "Provisioning")?;

    let report = dpctl::provision(&client, &ctx.product, &ctx.target).await?;
    if report.created_catalog {
        if let Some(catalog) = report.target.catalog() {
            println!("{} Catalog '{}' created.", ok(), catalog);
        }
    }
    println!("{} Schema '{}' provisioned.", ok(), report.target.schema());
    Ok(())
}

async fn delete(cli: &Cli) -> Result<(), Error> {
    let (ctx, client) = connect(cli, "Deleting schema")?;

    let outcome = dpctl::delete(&client, &ctx.target).await?;
    match outcome {
        DeleteOutcome::Dropped(_) => println!("{} {}", ok(), outcome),
        DeleteOutcome::CatalogMissing(_) | DeleteOutcome::SchemaMissing(_) => {
            println!("{} {}", "!".yellow().bold(), outcome)
        }
    }
    Ok(())
}

fn names(cli: &Cli) -> Result<(), Error> {
    let ctx = resolve(cli)?;
    println!("environment: {}", ctx.environment.name);
    println!("metastore:   {}", ctx.environment.metastore);
    if let Some(catalog) = ctx.target.catalog() {
        println!("catalog:     {catalog}");
    }
    println!("schema:      {}", ctx.target.schema());
    Ok(())
}

fn ok() -> String {
    "✓".green().bold().to_string()
}

fn report(err: &Error) {
    eprintln!("{} {}", "error:".red().bold(), err);

    // Wrapped errors often repeat their source's message; skip those.
    let mut shown = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let message = cause.to_string();
        if !shown.contains(&message) {
            eprintln!("  {} {}", "caused by:".dimmed(), message);
        }
        shown = message;
        source = cause.source();
    }
}
