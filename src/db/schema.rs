//! SQL DDL for initializing the company storage.

/// SQLite schema with:
/// - `CompanyID` INTEGER PRIMARY KEY (rowid alias, so ids are unique)
/// - text columns left nullable; readers map NULL to an empty string
/// - `InfoTableID` 0 when the company has no info table
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS Company (
    CompanyID INTEGER PRIMARY KEY NOT NULL,
    Name TEXT,
    BaseURL TEXT,
    CompanyBlogURL TEXT,
    InfoTableID INTEGER
);
"#;
