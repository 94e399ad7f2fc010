//! Database settings from environment variables

use std::fmt;

use crate::{ConfigError, Result};

pub const ENV_HOST: &str = "DB_HOST";
pub const ENV_USERNAME: &str = "DB_USERNAME";
pub const ENV_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_NAME: &str = "DB_NAME";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: String,
    pub username: String,
    pub password: String,
    pub database: String,
    /// Full connection URL; takes precedence over the fields above
    pub url: Option<String>,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`.
    ///
    /// `DB_NAME` is required unless `DATABASE_URL` is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(ENV_DATABASE_URL).filter(|u| !u.is_empty());
        let database = match lookup(ENV_NAME).filter(|n| !n.is_empty()) {
            Some(name) => name,
            None if url.is_some() => String::new(),
            None => return Err(ConfigError::MissingVar(ENV_NAME)),
        };

        Ok(Self {
            host: lookup(ENV_HOST).unwrap_or_else(|| "localhost".to_string()),
            username: lookup(ENV_USERNAME).unwrap_or_else(|| "root".to_string()),
            password: lookup(ENV_PASSWORD).unwrap_or_default(),
            database,
            url,
        })
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"***")
            .field("database", &self.database)
            .field("url", &self.url.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = DatabaseSettings::from_lookup(lookup(&[("DB_NAME", "my_db")])).unwrap();

        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.username, "root");
        assert_eq!(settings.password, "");
        assert_eq!(settings.database, "my_db");
        assert_eq!(settings.url, None);
    }

    #[test]
    fn test_missing_database_name() {
        let err = DatabaseSettings::from_lookup(lookup(&[("DB_HOST", "db")])).unwrap_err();

        assert!(matches!(err, ConfigError::MissingVar("DB_NAME")));
    }

    #[test]
    fn test_empty_database_name_is_missing() {
        let result = DatabaseSettings::from_lookup(lookup(&[("DB_NAME", "")]));

        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_values() {
        let settings = DatabaseSettings::from_lookup(lookup(&[
            ("DB_HOST", "db.internal"),
            ("DB_USERNAME", "reader"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_NAME", "holberton"),
        ]))
        .unwrap();

        assert_eq!(settings.host, "db.internal");
        assert_eq!(settings.username, "reader");
        assert_eq!(settings.password, "s3cret");
        assert_eq!(settings.database, "holberton");
    }

    #[test]
    fn test_url_makes_name_optional() {
        let settings =
            DatabaseSettings::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();

        assert_eq!(settings.url.as_deref(), Some("sqlite::memory:"));
        assert!(settings.database.is_empty());
    }

    #[test]
    fn test_debug_hides_password() {
        let settings = DatabaseSettings::from_lookup(lookup(&[
            ("DB_PASSWORD", "s3cret"),
            ("DB_NAME", "db"),
        ]))
        .unwrap();

        assert!(!format!("{:?}", settings).contains("s3cret"));
    }
}
