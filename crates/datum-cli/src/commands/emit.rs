use anyhow::{Context, Result};
use datum_config::{
    Config, DatabaseSettings, ENV_DATABASE_URL, ENV_HOST, ENV_NAME, ENV_PASSWORD, ENV_USERNAME,
    Output,
};
use datum_core::{LineSink, WriterSink};
use datum_engine::{ColumnNames, Emitter, emit_from_database};
use tracing::debug;

#[derive(Debug, Default)]
pub struct EmitOptions {
    pub url: Option<String>,
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub query: Option<String>,
    pub stdout: bool,
    pub table_columns: bool,
}

impl EmitOptions {
    /// Command-line value standing in for environment variable `key`
    fn override_for(&self, key: &str) -> Option<String> {
        match key {
            ENV_DATABASE_URL => self.url.clone(),
            ENV_HOST => self.host.clone(),
            ENV_USERNAME => self.user.clone(),
            ENV_PASSWORD => self.password.clone(),
            ENV_NAME => self.database.clone(),
            _ => None,
        }
    }
}

pub async fn handle(options: EmitOptions, config: &Config) -> Result<()> {
    let settings = DatabaseSettings::from_lookup(|key| {
        options
            .override_for(key)
            .or_else(|| std::env::var(key).ok())
    })
    .context("Invalid database configuration")?;

    let sql = options.query.as_deref().unwrap_or(&config.query.sql);

    let sink: Box<dyn LineSink> = if options.stdout || config.logger.output == Output::Stdout {
        Box::new(WriterSink::stdout())
    } else {
        Box::new(WriterSink::stderr())
    };

    let mut emitter = Emitter::from_config(config, sink)?;
    if options.table_columns {
        emitter = emitter.with_columns(ColumnNames::FromSource);
    }

    let count = emit_from_database(&settings, sql, &mut emitter)
        .await
        .context("Failed to emit rows")?;

    debug!(rows = count, "emit finished");
    Ok(())
}
