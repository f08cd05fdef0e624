//! Leaf SQL text utilities.
//!
//! Modules:
//! - `keyword`  : Clause keywords written by the raw SQL assembler.
//! - `reserved` : Reserved word table consulted by identifier quoting.
//! - `ident`    : Bare-safe detection, per-dialect quoting and unquoting.
//! - `literal`  : String literal escaping.
//!
//! Everything here is a pure function of its input; the only shared state is
//! the reserved word set and the identifier pattern, both built on first use
//! and never mutated.
//!
//! Example:
//! ```rust
//! use hanaql::prelude::*;
//!
//! assert_eq!(quote_if_needed("SALES"), "SALES");
//! assert_eq!(Dialect::MySql.quote_if_needed("sales"), "`sales`");
//! assert_eq!(unquote_identifier(r#""My""Schema""#), r#"My"Schema"#);
//! assert_eq!(quote_ident_as_literal(r#""MySchema""#), "'MySchema'");
//! ```

pub mod ident;
pub mod keyword;
pub mod literal;
pub mod reserved;

pub use ident::{
    Backtick, Dialect, DoubleQuote, QuoteStyle, is_bare_safe, quote_if_needed, unquote_identifier,
};
pub use keyword::Keyword;
pub use literal::{quote_ident_as_literal, quote_literal};
pub use reserved::{RESERVED_WORDS, is_reserved};

/// Convenience prelude re‑exporting the most commonly used items.
///
/// Import with:
/// `use hanaql::prelude::*;`
pub mod prelude {
    pub use super::{
        Dialect, Keyword, QuoteStyle, is_reserved, quote_ident_as_literal, quote_if_needed,
        quote_literal, unquote_identifier,
    };
}
