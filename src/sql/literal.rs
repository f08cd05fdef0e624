use crate::sql::ident::unquote_identifier;

/// Render `value` as a single-quoted SQL string literal, doubling every `'`.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Render a possibly delimited identifier as a string literal of its bare name.
///
/// Catalog views store names unquoted, so `"MySchema"` must be compared as
/// `'MySchema'`, never as `'"MySchema"'`.
pub fn quote_ident_as_literal(value: &str) -> String {
    quote_literal(&unquote_identifier(value))
}
