use super::*;

/// A schema listed by [`show_databases`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Schema {
    pub name: String,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Map a `schema_name` row.
    pub fn from_row(row: &[impl AsRef<str>]) -> Result<Self> {
        field(row, 0, "schema_name").map(Self::new)
    }

    /// Map every row, stopping at the first malformed one.
    pub fn from_rows<R: AsRef<[S]>, S: AsRef<str>>(
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Vec<Self>> {
        rows.into_iter()
            .map(|row| Self::from_row(row.as_ref()))
            .collect()
    }
}
