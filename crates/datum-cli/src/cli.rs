use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "datum")]
#[command(about = "Redact personal data in key=value log lines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query the users table and log every row with PII redacted
    Emit {
        /// Connection URL (mysql://... or sqlite:...), overrides DATABASE_URL
        #[arg(long)]
        url: Option<String>,

        /// Overrides DB_HOST
        #[arg(long)]
        host: Option<String>,

        /// Overrides DB_USERNAME
        #[arg(long)]
        user: Option<String>,

        /// Overrides DB_PASSWORD
        #[arg(long)]
        password: Option<String>,

        /// Overrides DB_NAME
        #[arg(long)]
        database: Option<String>,

        /// Query to run instead of the configured one
        #[arg(long)]
        query: Option<String>,

        /// Write records to stdout instead of stderr
        #[arg(long)]
        stdout: bool,

        /// Use the column names reported by the query
        #[arg(long)]
        table_columns: bool,
    },

    /// Redact key=value lines read from stdin
    Redact {
        /// Fields to mask (default from config)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Replacement token
        #[arg(long)]
        token: Option<String>,

        /// Value separator
        #[arg(long)]
        separator: Option<String>,

        /// Print a JSON summary of masked fields to stderr
        #[arg(long)]
        report: bool,
    },

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file path
    Path,

    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective config
    Show,
}
