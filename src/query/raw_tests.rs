#![cfg(test)]
use crate::*;
use rstest::rstest;

/// Build a query with one column per name, all other fields from `base`.
fn with_columns(base: StructuredQuery, names: &[&str]) -> StructuredQuery {
    StructuredQuery {
        columns: names.iter().map(|n| QueryColumn::new(*n)).collect(),
        ..base
    }
}

/// Every clause but the select list.
fn populated() -> StructuredQuery {
    StructuredQuery::new()
        .from("s", "t")
        .filter("A > 1")
        .group_by(["A"])
        .order_by("A", Some(OrderDirection::Desc))
        .limit(0)
}

#[cfg(test)]
mod short_circuit {
    use super::*;

    #[rstest]
    // Case 1: nothing at all
    #[case(StructuredQuery::new())]
    // Case 2: every other clause populated
    #[case(with_columns(populated(), &[]))]
    // Case 3: columns present but none usable
    #[case(with_columns(populated(), &["", ""]))]
    fn no_usable_columns_renders_nothing(#[case] query: StructuredQuery) {
        crate::testing::common_init();
        assert_eq!(to_raw_sql(&query), "");
    }
}

#[cfg(test)]
mod clauses {
    use super::*;

    #[rstest]
    // Case 1: select only
    #[case(StructuredQuery::new().column("A"), "SELECT A ")]
    // Case 2: schema and table
    #[case(StructuredQuery::new().column("A").from("s", "t"), "SELECT A FROM s.t ")]
    // Case 3: table without schema is not rendered
    #[case(
        StructuredQuery { source: Source { schema: None, table: Some("t".into()) }, ..StructuredQuery::new().column("A") },
        "SELECT A "
    )]
    // Case 4: empty schema counts as unset
    #[case(StructuredQuery::new().column("A").from("", "t"), "SELECT A ")]
    // Case 5: filter is inserted verbatim
    #[case(
        StructuredQuery::new().column("A").filter("A = 'x''y'"),
        "SELECT A WHERE A = 'x''y' "
    )]
    // Case 6: empty filter is skipped
    #[case(StructuredQuery::new().column("A").filter(""), "SELECT A ")]
    // Case 7: group by list drops unnamed entries after the first
    #[case(
        StructuredQuery::new().column("A").group_by(["A", "", "B"]),
        "SELECT A GROUP BY A, B "
    )]
    // Case 8: unnamed first entry suppresses the whole clause
    #[case(StructuredQuery::new().column("A").group_by([""]), "SELECT A ")]
    #[case(StructuredQuery::new().column("A").group_by(["", "B"]), "SELECT A ")]
    // Case 9: order by with and without direction
    #[case(StructuredQuery::new().column("A").order_by("A", None), "SELECT A ORDER BY A ")]
    #[case(
        StructuredQuery::new().column("A").order_by("A", Some(OrderDirection::Asc)),
        "SELECT A ORDER BY A ASC "
    )]
    // Case 10: direction without a property is never rendered
    #[case(
        StructuredQuery { order_direction: Some(OrderDirection::Desc), ..StructuredQuery::new().column("A") },
        "SELECT A "
    )]
    #[case(
        StructuredQuery::new().column("A").order_by("", Some(OrderDirection::Desc)),
        "SELECT A "
    )]
    // Case 11: limits
    #[case(StructuredQuery::new().column("A").limit(10), "SELECT A LIMIT 10 ")]
    #[case(StructuredQuery::new().column("A").limit(0), "SELECT A LIMIT 0 ")]
    #[case(StructuredQuery::new().column("A").limit(-1), "SELECT A ")]
    fn renders_clauses(#[case] query: StructuredQuery, #[case] expected: &str) {
        assert_eq!(to_raw_sql(&query), expected);
    }

    #[rstest]
    fn full_query_in_clause_order(sales_query: StructuredQuery) {
        assert_eq!(
            to_raw_sql(&sales_query),
            "SELECT REGION, SUM(AMOUNT) AS TOTAL FROM SALES.ORDERS WHERE AMOUNT > 10 GROUP BY REGION ORDER BY TOTAL DESC LIMIT 100 "
        );
    }

    #[rstest]
    fn limit_zero_keeps_trailing_space(bare_query: StructuredQuery) {
        let sql = to_raw_sql(&bare_query.from("s", "t").limit(0));
        assert!(sql.contains("FROM s.t"), "{sql}");
        assert!(sql.ends_with("LIMIT 0 "), "{sql}");
    }
}

#[cfg(test)]
mod clause_functions {
    use super::*;

    #[test]
    fn each_clause_is_optional() {
        assert_eq!(from_clause(&Source::default()), None);
        assert_eq!(where_clause(None), None);
        assert_eq!(group_by_clause(&[]), None);
        assert_eq!(order_by_clause(None, Some(OrderDirection::Asc)), None);
        assert_eq!(limit_clause(None), None);
        assert_eq!(select_clause(&[], &SelectList), None);
    }

    #[test]
    fn clauses_carry_trailing_space() {
        assert_eq!(where_clause(Some("X")), Some("WHERE X ".to_string()));
        assert_eq!(
            order_by_clause(Some(&PropertyRef::new("X")), Some(OrderDirection::Desc)),
            Some("ORDER BY X DESC ".to_string())
        );
        assert_eq!(limit_clause(Some(5)), Some("LIMIT 5 ".to_string()));
    }
}

#[cfg(test)]
mod custom_renderer {
    use super::*;

    /// Renders a fixed list regardless of the columns it is given.
    struct Star;

    impl ColumnRenderer for Star {
        fn has_columns(&self, columns: &[QueryColumn]) -> bool {
            !columns.is_empty()
        }

        fn render(&self, _columns: &[QueryColumn]) -> String {
            "SELECT * ".to_string()
        }
    }

    #[rstest]
    fn assembler_defers_to_renderer(bare_query: StructuredQuery) {
        let query = bare_query.from("s", "t");
        assert_eq!(to_raw_sql_with(&query, &Star), "SELECT * FROM s.t ");
        assert_eq!(to_raw_sql_with(&StructuredQuery::new(), &Star), "");
    }
}

#[cfg(test)]
mod validity {
    use super::*;

    #[rstest]
    #[case(StructuredQuery::new().column("A"))]
    #[case(StructuredQuery::new().column("A").from("s", "t").limit(0))]
    #[case(StructuredQuery::new().column(QueryColumn::new("*").aggregate("COUNT").alias("N")).from("S", "T").group_by(["A"]))]
    fn rendered_sql_parses(#[case] query: StructuredQuery) {
        crate::testing::common_init();
        let sql = to_raw_sql(&query);
        assert!(Validator.is_valid(&sql), "{sql} should parse");
    }
}
