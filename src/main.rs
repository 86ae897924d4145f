use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use dish_constructor_rs::catalog::{IngredientSource, MemoryCatalog, SqliteCatalog, load_records};
use dish_constructor_rs::cli::{Cli, Command};
use dish_constructor_rs::config::ServerConfig;
use dish_constructor_rs::constructor::DishService;
use dish_constructor_rs::error::Result;
use dish_constructor_rs::interface::display_dishes;
use dish_constructor_rs::logging::LoggingConfig;
use dish_constructor_rs::server;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::from_env().init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    match cli.command.unwrap_or_default() {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            cmd_serve(&config).await
        }
        Command::Import { path } => cmd_import(&config, &path).await,
        Command::Combine {
            codes,
            catalog,
            json,
        } => cmd_combine(&config, &codes, catalog.as_deref(), json).await,
    }
}

/// Run the HTTP API.
async fn cmd_serve(config: &ServerConfig) -> Result<()> {
    let catalog = SqliteCatalog::connect(&config.database_url).await?;
    let service = DishService::new(Arc::new(catalog), config.limits);

    info!(
        max_groups = config.limits.max_groups,
        max_dishes = config.limits.max_dishes,
        max_steps = config.limits.max_steps,
        empty_group = %config.limits.empty_group,
        "Constructor limits"
    );

    server::serve(&config.bind_address(), Arc::new(service)).await
}

/// Load a catalog CSV into the database.
async fn cmd_import(config: &ServerConfig, path: &Path) -> Result<()> {
    let records = load_records(path)?;
    let catalog = SqliteCatalog::connect(&config.database_url).await?;
    let count = catalog.import(&records).await?;

    println!("Imported {} ingredients from {}", count, path.display());
    Ok(())
}

/// Build dishes without the server and print them.
async fn cmd_combine(
    config: &ServerConfig,
    codes: &str,
    catalog_csv: Option<&Path>,
    json: bool,
) -> Result<()> {
    let source: Arc<dyn IngredientSource> = match catalog_csv {
        Some(path) => Arc::new(MemoryCatalog::from_records(&load_records(path)?)?),
        None => Arc::new(SqliteCatalog::connect(&config.database_url).await?),
    };
    let service = DishService::new(source, config.limits);

    let dishes = service.build(codes).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dishes)?);
    } else {
        display_dishes(&dishes);
    }
    Ok(())
}
