use crate::types::company::{Company, InfoTable};

/// Raw `Company` row, columns in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbCompany {
    pub company_id: i64,
    pub name: Option<String>,
    pub base_url: Option<String>,
    pub company_blog_url: Option<String>,
    pub info_table_id: Option<i64>,
}

impl From<DbCompany> for Company {
    fn from(d: DbCompany) -> Self {
        Company {
            company_id: d.company_id,
            name: d.name.unwrap_or_default(),
            base_url: d.base_url.unwrap_or_default(),
            company_blog_url: d.company_blog_url.unwrap_or_default(),
            info_table: d.info_table_id.map(InfoTable::from).unwrap_or_default(),
        }
    }
}

impl From<&Company> for DbCompany {
    fn from(c: &Company) -> Self {
        Self {
            company_id: c.company_id,
            name: Some(c.name.clone()),
            base_url: Some(c.base_url.clone()),
            company_blog_url: Some(c.company_blog_url.clone()),
            info_table_id: Some(c.info_table.into()),
        }
    }
}
