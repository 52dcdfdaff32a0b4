use crate::db::models::DbCompany;
use crate::db::schema::SQLITE_INIT;
use crate::error::TrackerError;
use crate::types::company::Company;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Owner of the single SQLite connection used by every request.
#[derive(Clone, Debug)]
pub struct CompanyStorage {
    pool: SqlitePool,
}

impl CompanyStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open `database_url`, creating the file if needed. The pool keeps exactly
    /// one connection open until [`CompanyStorage::close`].
    pub async fn connect(database_url: &str) -> Result<Self, TrackerError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_opts)
            .await?;
        debug!(database_url, "opened sqlite connection");
        Ok(Self::new(pool))
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TrackerError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert one company. A taken `companyID` yields `DuplicateCompany`.
    pub async fn insert(&self, company: &Company) -> Result<(), TrackerError> {
        let row = DbCompany::from(company);
        sqlx::query(
            r#"INSERT INTO Company (CompanyID, Name, BaseURL, CompanyBlogURL, InfoTableID)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(row.company_id)
        .bind(row.name)
        .bind(row.base_url)
        .bind(row.company_blog_url)
        .bind(row.info_table_id)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                TrackerError::DuplicateCompany(company.company_id)
            }
            other => TrackerError::Database(other),
        })?;
        Ok(())
    }

    /// Every company in table order.
    pub async fn list_all(&self) -> Result<Vec<Company>, TrackerError> {
        let rows = sqlx::query(
            r#"SELECT CompanyID, Name, BaseURL, CompanyBlogURL, InfoTableID
               FROM Company"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|row| Self::row_to_model(row).map(Company::from))
            .collect()
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn row_to_model(row: SqliteRow) -> Result<DbCompany, TrackerError> {
        Ok(DbCompany {
            company_id: row.try_get(0)?,
            name: row.try_get(1)?,
            base_url: row.try_get(2)?,
            company_blog_url: row.try_get(3)?,
            info_table_id: row.try_get(4)?,
        })
    }
}
