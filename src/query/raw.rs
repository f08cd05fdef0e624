//! Raw SQL assembly for a [`StructuredQuery`].
//!
//! Each clause is a small function returning `Some(text)` only when its input
//! is present. Clause text carries its own trailing space and the assembler
//! concatenates them in statement order, so the result always ends with a
//! space. A query without usable columns renders as the empty string, which
//! callers treat as "not ready" rather than as an error.
use super::*;
use itertools::Itertools as _;

pub fn select_clause(columns: &[QueryColumn], renderer: &dyn ColumnRenderer) -> Option<String> {
    renderer
        .has_columns(columns)
        .then(|| renderer.render(columns))
}

/// `FROM schema.table`, verbatim, only when both parts are set.
pub fn from_clause(source: &Source) -> Option<String> {
    source
        .qualified()
        .map(|(schema, table)| Keyword::From.clause(format!("{schema}.{table}")))
}

/// The filter is pre-rendered by the editor and inserted unchanged.
pub fn where_clause(filter: Option<&str>) -> Option<String> {
    filter
        .filter(|f| !f.is_empty())
        .map(|f| Keyword::Where.clause(f))
}

/// Gated on the first entry; unnamed entries are dropped from the list.
pub fn group_by_clause(group_by: &[PropertyRef]) -> Option<String> {
    let first = group_by.first()?;
    if first.name().is_empty() {
        return None;
    }
    let names = group_by
        .iter()
        .map(PropertyRef::name)
        .filter(|name| !name.is_empty())
        .join(", ");
    Some(Keyword::GroupBy.clause(names))
}

/// A direction is only rendered after a property name.
pub fn order_by_clause(
    order_by: Option<&PropertyRef>,
    direction: Option<OrderDirection>,
) -> Option<String> {
    let name = order_by.map(PropertyRef::name).filter(|n| !n.is_empty())?;
    let mut clause = Keyword::OrderBy.clause(name);
    if let Some(direction) = direction {
        clause.push_str(&format!("{direction} "));
    }
    Some(clause)
}

/// `LIMIT 0` is kept: it asks for no rows, unlike an absent limit.
pub fn limit_clause(limit: Option<i64>) -> Option<String> {
    limit.filter(|l| *l >= 0).map(|l| Keyword::Limit.clause(l))
}

pub fn to_raw_sql(query: &StructuredQuery) -> String {
    to_raw_sql_with(query, &SelectList)
}

pub fn to_raw_sql_with(query: &StructuredQuery, renderer: &dyn ColumnRenderer) -> String {
    let Some(select) = select_clause(&query.columns, renderer) else {
        debug!("Query has no usable columns, nothing to render");
        return String::new();
    };

    let sql: String = [
        Some(select),
        from_clause(&query.source),
        where_clause(query.filter_expression.as_deref()),
        group_by_clause(&query.group_by),
        order_by_clause(query.order_by.as_ref(), query.order_direction),
        limit_clause(query.limit),
    ]
    .into_iter()
    .flatten()
    .collect();

    debug!("Rendered raw query: {sql}");
    sql
}
