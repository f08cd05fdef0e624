//! Identifier quoting.
//!
//! An identifier is *bare-safe* when it matches the unquoted grammar
//! `[A-Z_][A-Z0-9_$]*` and is not a reserved word. The grammar is upper-case
//! only because unquoted names fold to upper case; `users` therefore needs
//! delimiting to keep its case.
//!
//! Delimiting is a per-dialect [`QuoteStyle`]:
//! - [`DoubleQuote`] wraps in `"` and doubles embedded `"`.
//! - [`Backtick`] wraps in `` ` `` and leaves the content untouched.

use crate::sql::reserved::is_reserved;
use regex::Regex;
use std::sync::LazyLock;

static BARE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z_][A-Z0-9_$]*$").expect("valid regex literal"));

/// How a dialect delimits identifiers.
pub trait QuoteStyle: Send + Sync {
    /// Delimiter placed on both sides of the identifier.
    fn delimiter(&self) -> char;

    /// Wrap `raw` in delimiters, escaping as the style requires.
    fn quote(&self, raw: &str) -> String;

    /// Strip this style's delimiters from `value`.
    ///
    /// Returns `None` if `value` is not bounded by the delimiter on both ends.
    fn unquote(&self, value: &str) -> Option<String>;
}

/// `"name"` with embedded `"` doubled.
#[derive(Debug, Default, Clone, Copy)]
pub struct DoubleQuote;

impl QuoteStyle for DoubleQuote {
    fn delimiter(&self) -> char {
        '"'
    }

    fn quote(&self, raw: &str) -> String {
        format!("\"{}\"", raw.replace('"', "\"\""))
    }

    fn unquote(&self, value: &str) -> Option<String> {
        strip_delimiters(value, self.delimiter()).map(|inner| inner.replace("\"\"", "\""))
    }
}

/// `` `name` `` without any internal escaping.
#[derive(Debug, Default, Clone, Copy)]
pub struct Backtick;

impl QuoteStyle for Backtick {
    fn delimiter(&self) -> char {
        '`'
    }

    fn quote(&self, raw: &str) -> String {
        format!("`{raw}`")
    }

    fn unquote(&self, value: &str) -> Option<String> {
        strip_delimiters(value, self.delimiter()).map(str::to_string)
    }
}

/// Inner text of `value` if it starts and ends with `delimiter`.
///
/// Values shorter than two characters are never considered delimited.
fn strip_delimiters(value: &str, delimiter: char) -> Option<&str> {
    if value.chars().count() < 2 {
        return None;
    }
    value.strip_prefix(delimiter)?.strip_suffix(delimiter)
}

/// SQL dialects with distinct identifier delimiters.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Dialect {
    #[default]
    #[display("hana")]
    Hana,
    #[display("mysql")]
    MySql,
}

impl Dialect {
    pub const ALL: [Self; 2] = [Dialect::Hana, Dialect::MySql];

    /// The dialect selected through `HANAQL_DIALECT`.
    pub fn configured() -> Self {
        crate::config().dialect
    }

    pub fn quoting(self) -> &'static dyn QuoteStyle {
        static DOUBLE_QUOTE: DoubleQuote = DoubleQuote;
        static BACKTICK: Backtick = Backtick;
        match self {
            Dialect::Hana => &DOUBLE_QUOTE,
            Dialect::MySql => &BACKTICK,
        }
    }

    /// Return `identifier` untouched when bare-safe, delimited otherwise.
    pub fn quote_if_needed(self, identifier: &str) -> String {
        if is_bare_safe(identifier) {
            identifier.to_string()
        } else {
            self.quoting().quote(identifier)
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown dialect `{s}`, expected one of: hana, mysql"))
    }
}

impl TryFrom<String> for Dialect {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// True if `identifier` can appear in SQL without delimiters.
pub fn is_bare_safe(identifier: &str) -> bool {
    BARE_IDENTIFIER.is_match(identifier) && !is_reserved(identifier)
}

/// Delimit `identifier` with double quotes unless it is bare-safe.
pub fn quote_if_needed(identifier: &str) -> String {
    Dialect::Hana.quote_if_needed(identifier)
}

/// Remove identifier delimiters so the underlying name can be used as a value.
///
/// Recognizes every dialect's style; anything else (including unbalanced
/// delimiters) comes back unchanged, which also makes the function idempotent
/// on plain names.
pub fn unquote_identifier(value: &str) -> String {
    Dialect::ALL
        .iter()
        .find_map(|dialect| dialect.quoting().unquote(value))
        .unwrap_or_else(|| value.to_string())
}
