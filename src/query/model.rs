use crate::*;
use serde::{Deserialize, Serialize};

/// UI-facing description of a `SELECT`, prior to rendering.
///
/// Source, filter, grouping, ordering and limit keys follow the query
/// editor's JSON (`dataset`, `whereString`, `groupBy[].property.name`,
/// `orderByDirection`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredQuery {
    pub columns: Vec<QueryColumn>,
    #[serde(flatten)]
    pub source: Source,
    #[serde(rename = "whereString", skip_serializing_if = "Option::is_none")]
    pub filter_expression: Option<String>,
    pub group_by: Vec<PropertyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<PropertyRef>,
    #[serde(rename = "orderByDirection", skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<OrderDirection>,
    /// Signed so a negative value from the editor survives decoding; only
    /// `>= 0` is rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// One entry of the select list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryColumn {
    pub expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Where the rows come from. Either part may be unset while the user is
/// still making selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    #[serde(rename = "dataset", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

/// Grouping or ordering entry, shaped `{ "type": ..., "property": { "name": ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRef {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub property: Property,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub name: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDirection {
    #[display("ASC")]
    Asc,
    #[display("DESC")]
    Desc,
}

impl QueryColumn {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            ..Self::default()
        }
    }

    pub fn aggregate(mut self, function: impl Into<String>) -> Self {
        self.aggregation = Some(function.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn is_usable(&self) -> bool {
        !self.expression.is_empty()
    }
}

impl From<&str> for QueryColumn {
    fn from(value: &str) -> Self {
        QueryColumn::new(value)
    }
}

impl PropertyRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: None,
            property: Property {
                kind: None,
                name: name.into(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.property.name
    }
}

impl Source {
    /// Both schema and table, when both are set and non-empty.
    pub fn qualified(&self) -> Option<(&str, &str)> {
        let schema = self.schema.as_deref().filter(|s| !s.is_empty())?;
        let table = self.table.as_deref().filter(|t| !t.is_empty())?;
        Some((schema, table))
    }
}

impl StructuredQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let query: Self = serde_json::from_str(json)?;
        trace!("Decoded structured query {query:?}");
        Ok(query)
    }

    pub fn column(mut self, column: impl Into<QueryColumn>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn from(mut self, schema: impl Into<String>, table: impl Into<String>) -> Self {
        self.source = Source {
            schema: Some(schema.into()),
            table: Some(table.into()),
        };
        self
    }

    pub fn filter(mut self, expression: impl Into<String>) -> Self {
        self.filter_expression = Some(expression.into());
        self
    }

    pub fn group_by<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.group_by
            .extend(names.into_iter().map(PropertyRef::new));
        self
    }

    pub fn order_by(mut self, name: impl Into<String>, direction: Option<OrderDirection>) -> Self {
        self.order_by = Some(PropertyRef::new(name));
        self.order_direction = direction;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
