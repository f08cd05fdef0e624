use super::*;

pub const DEFAULT_TABLE_LIMIT: u32 = 1000;

/// Builds catalog lookups for schema, table and column selectors.
///
/// Every method returns ready-to-run SQL; nothing is executed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaQuery {
    /// Maximum number of rows a table lookup may return.
    pub table_limit: u32,
}

impl Default for MetaQuery {
    fn default() -> Self {
        Self {
            table_limit: DEFAULT_TABLE_LIMIT,
        }
    }
}

impl MetaQuery {
    pub fn from_config() -> Self {
        Self {
            table_limit: crate::config().table_limit,
        }
    }

    /// User schemas, hiding `SYS` and the `_SYS*` system schemas.
    pub fn show_databases(&self) -> String {
        let sql = "SELECT schema_name FROM SCHEMAS where schema_name not like '_SYS%' and schema_name <> 'SYS' ORDER BY schema_name".to_string();
        trace!("Built schema query: {sql}");
        sql
    }

    /// Tables of `schema` (the session schema if `None`), optionally filtered
    /// by a `*` wildcard pattern. An empty pattern is ignored.
    pub fn tables(&self, schema: Option<&str>, pattern: Option<&str>) -> String {
        let schema = SchemaRef::from(schema);
        let filter = pattern
            .and_then(TablePattern::non_empty)
            .map(|p| format!(" and table_name like {}", quote_literal(&p.to_like())))
            .unwrap_or_default();
        let sql = format!(
            "SELECT table_name FROM tables WHERE schema_name = {schema}{filter} ORDER BY table_name limit {}",
            self.table_limit
        );
        debug!("Built table query: {sql}");
        sql
    }

    /// Columns and their type names for `table`, see [`TableConstraint`].
    pub fn columns(&self, table: &str, schema: Option<&str>) -> String {
        let constraint = TableConstraint::new(table, schema);
        let sql = format!(
            "SELECT COLUMN_NAME, DATA_TYPE_NAME FROM TABLE_COLUMNS WHERE {constraint} ORDER BY column_name"
        );
        debug!("Built column query: {sql}");
        sql
    }
}

pub fn show_databases() -> String {
    MetaQuery::default().show_databases()
}

pub fn build_table_query(schema: Option<&str>, pattern: Option<&str>) -> String {
    MetaQuery::default().tables(schema, pattern)
}

pub fn build_column_query(table: &str, schema: Option<&str>) -> String {
    MetaQuery::default().columns(table, schema)
}
