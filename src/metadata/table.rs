use super::*;

/// A table listed by [`build_table_query`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Table {
    /// Schema the lookup ran against; `None` for the session schema.
    pub schema: Option<String>,
    pub name: String,
}

impl Table {
    pub fn new(schema: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.map(unquote_identifier),
            name: name.into(),
        }
    }

    /// Map a `table_name` row returned for `schema`.
    pub fn from_row(schema: Option<&str>, row: &[impl AsRef<str>]) -> Result<Self> {
        field(row, 0, "table_name").map(|name| Self::new(schema, name))
    }

    pub fn from_rows<R: AsRef<[S]>, S: AsRef<str>>(
        schema: Option<&str>,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Vec<Self>> {
        rows.into_iter()
            .map(|row| Self::from_row(schema, row.as_ref()))
            .collect()
    }

    /// Text usable after `FROM`, delimiting each part only where required.
    pub fn reference(&self, dialect: Dialect) -> String {
        let name = dialect.quote_if_needed(&self.name);
        match &self.schema {
            Some(schema) => format!("{}.{name}", dialect.quote_if_needed(schema)),
            None => name,
        }
    }
}
