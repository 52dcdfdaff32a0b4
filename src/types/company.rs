use serde::{Deserialize, Serialize};

/// Optional reference to a company's info table. Stored and serialized as an
/// integer where `0` means no table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum InfoTable {
    #[default]
    Unassigned,
    Table(i64),
}

impl From<i64> for InfoTable {
    fn from(id: i64) -> Self {
        match id {
            0 => InfoTable::Unassigned,
            id => InfoTable::Table(id),
        }
    }
}

impl From<InfoTable> for i64 {
    fn from(value: InfoTable) -> Self {
        match value {
            InfoTable::Unassigned => 0,
            InfoTable::Table(id) => id,
        }
    }
}

/// A company as listed by `GET /Company`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "companyID")]
    pub company_id: i64,
    pub name: String,
    #[serde(rename = "baseURL")]
    pub base_url: String,
    #[serde(rename = "companyBlogURL")]
    pub company_blog_url: String,
    #[serde(rename = "infotableID")]
    pub info_table: InfoTable,
}

/// Body of `POST /Company`. Only `companyID` and `name` are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCompany {
    #[serde(rename = "companyID")]
    pub company_id: i64,
    pub name: String,
    #[serde(rename = "baseURL", default)]
    pub base_url: Option<String>,
    #[serde(rename = "companyBlogURL", default)]
    pub company_blog_url: Option<String>,
    #[serde(rename = "infotableID", default)]
    pub info_table: Option<InfoTable>,
}

impl From<NewCompany> for Company {
    fn from(n: NewCompany) -> Self {
        Self {
            company_id: n.company_id,
            name: n.name,
            base_url: n.base_url.unwrap_or_default(),
            company_blog_url: n.company_blog_url.unwrap_or_default(),
            info_table: n.info_table.unwrap_or_default(),
        }
    }
}
