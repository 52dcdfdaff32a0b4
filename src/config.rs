use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Environment keys consulted when loading [`Config`].
const ENV_KEYS: [&str; 5] = [
    "database_url",
    "listen_addr",
    "loglevel",
    "strict_startup",
    "body_limit",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// sqlx SQLite URL; the file is created when missing.
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Abort startup when the database cannot be opened or the table cannot be created.
    pub strict_startup: bool,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:TapTrackerDb.sqlite".to_string(),
            listen_addr: "0.0.0.0:8181".to_string(),
            loglevel: "info".to_string(),
            strict_startup: false,
            body_limit: 1024 * 1024,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::raw().only(&ENV_KEYS))
    }

    pub fn load() -> Result<Self, TrackerError> {
        Ok(Self::figment().extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn environment_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("DATABASE_URL", "sqlite:/tmp/tracker-test.sqlite");
            jail.set_env("STRICT_STARTUP", "true");
            jail.set_env("BODY_LIMIT", "2048");
            jail.set_env("UNRELATED_KEY", "ignored");

            let cfg: Config = Config::figment().extract()?;
            assert_eq!(cfg.database_url, "sqlite:/tmp/tracker-test.sqlite");
            assert!(cfg.strict_startup);
            assert_eq!(cfg.body_limit, 2048);
            assert_eq!(cfg.listen_addr, "0.0.0.0:8181");
            Ok(())
        });
    }
}
