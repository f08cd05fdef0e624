use crate::*;
use rstest::fixture;

/// Aggregate over a schema-qualified table, exercising every clause.
#[fixture]
pub fn sales_query() -> StructuredQuery {
    StructuredQuery::new()
        .column("REGION")
        .column(QueryColumn::new("AMOUNT").aggregate("SUM").alias("TOTAL"))
        .from("SALES", "ORDERS")
        .filter("AMOUNT > 10")
        .group_by(["REGION"])
        .order_by("TOTAL", Some(OrderDirection::Desc))
        .limit(100)
}

/// Single column, no source yet.
#[fixture]
pub fn bare_query() -> StructuredQuery {
    StructuredQuery::new().column("A")
}
