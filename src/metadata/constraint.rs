use super::*;

/// Schema side of a catalog predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaRef<'a> {
    /// An explicit schema name, possibly delimited.
    Named(&'a str),
    /// The session's current schema, resolved by the server.
    Current,
}

impl<'a> From<Option<&'a str>> for SchemaRef<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(SchemaRef::Current, SchemaRef::Named)
    }
}

impl Display for SchemaRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaRef::Named(name) => f.write_str(&quote_ident_as_literal(name)),
            SchemaRef::Current => f.write_str("database()"),
        }
    }
}

/// `schema_name = .. AND table_name = ..` predicate over catalog views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConstraint<'a> {
    pub schema: SchemaRef<'a>,
    pub table: &'a str,
}

impl<'a> TableConstraint<'a> {
    /// Resolve a table reference.
    ///
    /// A dotted `table` carries its own schema and wins over `schema`. Only the
    /// first `.` splits, so `a.b.c` is schema `a`, table `b.c`.
    pub fn new(table: &'a str, schema: Option<&'a str>) -> Self {
        match table.split_once('.') {
            Some((schema, table)) => Self {
                schema: SchemaRef::Named(schema),
                table,
            },
            None => Self {
                schema: schema.into(),
                table,
            },
        }
    }
}

impl Display for TableConstraint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "schema_name = {} AND table_name = {}",
            self.schema,
            quote_ident_as_literal(self.table)
        )
    }
}

pub fn build_table_constraint(table: &str, schema: Option<&str>) -> String {
    TableConstraint::new(table, schema).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    // Case 1: schema qualified table
    #[case("S.T", None, "schema_name = 'S' AND table_name = 'T'")]
    // Case 2: no schema falls back to the session schema
    #[case("T", None, "schema_name = database() AND table_name = 'T'")]
    // Case 3: separate schema argument
    #[case("T", Some("S"), "schema_name = 'S' AND table_name = 'T'")]
    // Case 4: qualified table wins over the schema argument
    #[case("A.T", Some("S"), "schema_name = 'A' AND table_name = 'T'")]
    // Case 5: only the first dot splits
    #[case("a.b.c", None, "schema_name = 'a' AND table_name = 'b.c'")]
    // Case 6: delimited parts are unquoted before becoming literals
    #[case(r#""My Schema"."Orders""#, None, "schema_name = 'My Schema' AND table_name = 'Orders'")]
    #[case("T", Some(r#""MySchema""#), "schema_name = 'MySchema' AND table_name = 'T'")]
    #[case("`db`.`t`", None, "schema_name = 'db' AND table_name = 't'")]
    // Case 7: quotes inside names are escaped as literals
    #[case("O'Brien", Some("it's"), "schema_name = 'it''s' AND table_name = 'O''Brien'")]
    // Case 8: leading or trailing dot yields empty parts, never a panic
    #[case(".T", None, "schema_name = '' AND table_name = 'T'")]
    #[case("S.", None, "schema_name = 'S' AND table_name = ''")]
    fn builds_constraints(
        #[case] table: &str,
        #[case] schema: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(build_table_constraint(table, schema), expected);
    }

    #[test]
    fn dotted_delimited_name_splits_on_first_dot() {
        // A dot inside delimiters is not recognized as part of the name.
        let constraint = TableConstraint::new(r#""a.b"."c""#, None);
        assert_eq!(constraint.schema, SchemaRef::Named("\"a"));
        assert_eq!(constraint.table, r#"b"."c""#);
    }

    #[test]
    fn schema_ref_from_option() {
        assert_eq!(SchemaRef::from(None), SchemaRef::Current);
        assert_eq!(SchemaRef::from(Some("S")), SchemaRef::Named("S"));
        assert_eq!(SchemaRef::Current.to_string(), "database()");
    }
}
