use super::*;

/// A column listed by [`build_column_query`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<DataType>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }

    /// Map a `COLUMN_NAME, DATA_TYPE_NAME` row.
    pub fn from_row(row: &[impl AsRef<str>]) -> Result<Self> {
        let name = field(row, 0, "COLUMN_NAME")?;
        let data_type = field(row, 1, "DATA_TYPE_NAME")?;
        Ok(Self::new(name, data_type))
    }

    pub fn from_rows<R: AsRef<[S]>, S: AsRef<str>>(
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Vec<Self>> {
        rows.into_iter()
            .map(|row| Self::from_row(row.as_ref()))
            .collect()
    }
}
