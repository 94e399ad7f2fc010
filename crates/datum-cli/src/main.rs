mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; redacted records go through the line sink
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        cli::Commands::Emit {
            url,
            host,
            user,
            password,
            database,
            query,
            stdout,
            table_columns,
        } => {
            let config = commands::load_config(config_path)?;
            let options = commands::emit::EmitOptions {
                url,
                host,
                user,
                password,
                database,
                query,
                stdout,
                table_columns,
            };
            commands::emit::handle(options, &config).await
        }
        cli::Commands::Redact {
            fields,
            token,
            separator,
            report,
        } => {
            let config = commands::load_config(config_path)?;
            commands::redact::handle(&config, fields, token, separator, report)
        }
        cli::Commands::Config(cmd) => commands::config::handle(cmd, config_path),
    }
}
