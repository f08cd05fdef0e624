#![cfg(test)]
crate::reexport!(fixtures);
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

mod fixture_tests {
    use super::{super::*, *};

    #[rstest]
    fn sales_query_is_ready(sales_query: StructuredQuery) {
        assert!(SelectList.has_columns(&sales_query.columns));
        assert_eq!(sales_query.source.qualified(), Some(("SALES", "ORDERS")));
    }

    #[rstest]
    fn sales_query_renders_valid_sql(sales_query: StructuredQuery) {
        common_init();
        let sql = to_raw_sql(&sales_query);
        assert!(Validator.is_valid(&sql), "{sql} should parse");
    }
}
