use async_trait::async_trait;

use crate::catalog::TableSchema;
use crate::connection::{ConnectionDetails, ConnectionError};
use crate::result::QueryResult;
use crate::sql::offset_page_sql;

#[async_trait]
pub trait DatabaseService: Send + Sync {
    async fn connect(&self, details: &ConnectionDetails) -> Result<(), ConnectionError>;

    async fn list_schemas(&self) -> Vec<TableSchema>;

    async fn execute(&self, sql: &str) -> QueryResult;

    // Paging sugar only: the page and size arguments round-trip through the
    // lexical resolver, so they never constrain the synthesized result.
    async fn fetch_page(&self, table_name: &str, page: u64, page_size: u64) -> QueryResult {
        let sql = offset_page_sql(table_name, page_size, page.saturating_mul(page_size));
        self.execute(&sql).await
    }
}
