use super::*;
use itertools::Itertools as _;

/// Renders the select list of a [`StructuredQuery`].
///
/// `render` returns the whole `SELECT ...` clause including its trailing
/// separator. `has_columns` decides whether a query is ready to be rendered
/// at all.
pub trait ColumnRenderer {
    fn has_columns(&self, columns: &[QueryColumn]) -> bool;

    fn render(&self, columns: &[QueryColumn]) -> String;
}

/// Default renderer: `AGG(expr) AS alias`, comma separated.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectList;

impl SelectList {
    fn item(column: &QueryColumn) -> String {
        let mut item = match &column.aggregation {
            Some(function) if !function.is_empty() => format!("{function}({})", column.expression),
            _ => column.expression.clone(),
        };
        if let Some(alias) = column.alias.as_deref().filter(|a| !a.is_empty()) {
            item.push_str(" AS ");
            item.push_str(alias);
        }
        item
    }
}

impl ColumnRenderer for SelectList {
    fn has_columns(&self, columns: &[QueryColumn]) -> bool {
        columns.iter().any(QueryColumn::is_usable)
    }

    fn render(&self, columns: &[QueryColumn]) -> String {
        let list = columns
            .iter()
            .filter(|c| c.is_usable())
            .map(Self::item)
            .join(", ");
        Keyword::Select.clause(list)
    }
}
