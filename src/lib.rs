//! SQL text generation for HANA-family datasources.
//!
//! Turns a structured query description into dialect-correct `SELECT` text and
//! builds the catalog lookups (schemas, tables, columns) a query editor needs
//! to populate its selectors. Nothing here opens a connection or executes SQL.
//!
//! ```rust
//! use hanaql::prelude::*;
//!
//! assert_eq!(quote_if_needed("ORDER"), r#""ORDER""#);
//! assert_eq!(quote_literal("O'Brien"), "'O''Brien'");
//! ```
reexport!(testing, test);
reexport!(config);
reexport!(logic);
reexport!(sql);
reexport!(metadata);
reexport!(query);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
