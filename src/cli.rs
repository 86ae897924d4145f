use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dish constructor: every dish you can assemble from ingredient type codes.
#[derive(Parser, Debug)]
#[command(name = "dish-constructor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Database URL (overrides DATABASE_URL).
    #[arg(long, global = true)]
    pub database_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server.
    Serve {
        /// Port to listen on (overrides HTTP_PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Import a catalog CSV (code,type,value,price) into the database.
    Import {
        /// Path to the CSV file.
        path: PathBuf,
    },

    /// Build dishes for a code string and print them.
    Combine {
        /// Ingredient type codes, one character each (e.g. "BSC").
        codes: String,

        /// Read ingredients from a catalog CSV instead of the database.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve { port: None }
    }
}
