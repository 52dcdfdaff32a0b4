use crate::config::Config;
use crate::db::CompanyStorage;
use crate::error::TrackerError;
use tracing::{error, info, warn};

/// Open the database and make sure the `Company` table exists.
///
/// Without `strict_startup`, an unopenable database yields `Ok(None)` and a
/// failed table creation keeps the handle; both are logged. With it, either
/// failure is returned.
pub async fn open_storage(cfg: &Config) -> Result<Option<CompanyStorage>, TrackerError> {
    let storage = match CompanyStorage::connect(&cfg.database_url).await {
        Ok(storage) => storage,
        Err(e) if cfg.strict_startup => return Err(e),
        Err(e) => {
            error!(
                database_url = %cfg.database_url,
                error = %e,
                "failed to open database; serving without storage"
            );
            return Ok(None);
        }
    };

    match storage.init_schema().await {
        Ok(()) => info!(database_url = %cfg.database_url, "Company table ready"),
        Err(e) if cfg.strict_startup => {
            storage.close().await;
            return Err(e);
        }
        Err(e) => warn!(error = %e, "failed to create Company table; continuing"),
    }

    Ok(Some(storage))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config(strict_startup: bool) -> Config {
        let mut dir = std::env::temp_dir();
        dir.push(format!("tap-tracker-missing-{}", std::process::id()));
        dir.push("nested");
        dir.push("db.sqlite");
        Config {
            database_url: format!("sqlite:{}", dir.display()),
            strict_startup,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn unopenable_database_degrades_by_default() {
        let storage = open_storage(&unreachable_config(false))
            .await
            .expect("non-strict startup never fails");
        assert!(storage.is_none());
    }

    #[tokio::test]
    async fn unopenable_database_fails_when_strict() {
        let res = open_storage(&unreachable_config(true)).await;
        assert!(res.is_err());
    }

    /// An existing, empty database opened read-only: connecting succeeds but
    /// `CREATE TABLE` does not.
    fn read_only_config(tag: &str, strict_startup: bool) -> (Config, std::path::PathBuf) {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "tap-tracker-ro-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));
        std::fs::write(&path, b"").expect("create empty database file");

        let cfg = Config {
            database_url: format!("sqlite:{}?mode=ro", path.display()),
            strict_startup,
            ..Config::default()
        };
        (cfg, path)
    }

    #[tokio::test]
    async fn table_creation_failure_keeps_handle_by_default() {
        let (cfg, path) = read_only_config("lenient", false);

        let storage = open_storage(&cfg)
            .await
            .expect("non-strict startup never fails")
            .expect("handle kept after failed DDL");
        let err = storage.list_all().await.expect_err("table was not created");
        assert!(matches!(err, TrackerError::Database(_)));

        storage.close().await;
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn table_creation_failure_is_fatal_when_strict() {
        let (cfg, path) = read_only_config("strict", true);

        let err = open_storage(&cfg).await.expect_err("DDL fails on read-only db");
        assert!(matches!(err, TrackerError::Database(_)));

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn opens_and_creates_table() {
        let cfg = Config {
            database_url: "sqlite::memory:".to_string(),
            strict_startup: true,
            ..Config::default()
        };
        let storage = open_storage(&cfg)
            .await
            .expect("open in-memory")
            .expect("handle present");
        assert!(storage.list_all().await.expect("table exists").is_empty());
    }
}
