//! Reserved keywords of the HANA SQL dialect.
//!
//! The list mirrors `SELECT * FROM RESERVED_KEYWORDS ORDER BY RESERVED_KEYWORD`
//! on a HANA instance. Entries are stored upper-cased; lookups upper-case the
//! candidate first, so membership is case-insensitive.

use std::{collections::HashSet, sync::LazyLock};

pub const RESERVED_WORDS: [&str; 85] = [
    "ALL",
    "ALTER",
    "AS",
    "BEFORE",
    "BEGIN",
    "BOTH",
    "CASE",
    "CHAR",
    "CONDITION",
    "CONNECT",
    "CROSS",
    "CUBE",
    "CURRENT_CONNECTION",
    "CURRENT_DATE",
    "CURRENT_SCHEMA",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "CURRENT_TRANSACTION_ISOLATION_LEVEL",
    "CURRENT_USER",
    "CURRENT_UTCDATE",
    "CURRENT_UTCTIME",
    "CURRENT_UTCTIMESTAMP",
    "CURRVAL",
    "CURSOR",
    "DECLARE",
    "DISTINCT",
    "ELSE",
    "ELSEIF",
    "END",
    "EXCEPT",
    "EXCEPTION",
    "EXEC",
    "FALSE",
    "FOR",
    "FROM",
    "FULL",
    "GROUP",
    "HAVING",
    "IF",
    "IN",
    "INNER",
    "INOUT",
    "INTERSECT",
    "INTO",
    "IS",
    "JOIN",
    "LATERAL",
    "LEADING",
    "LEFT",
    "LIMIT",
    "LOOP",
    "MINUS",
    "NATURAL",
    "NCHAR",
    "NEXTVAL",
    "NULL",
    "ON",
    "ORDER",
    "OUT",
    "PRIOR",
    "RETURN",
    "RETURNS",
    "REVERSE",
    "RIGHT",
    "ROLLUP",
    "ROWID",
    "SELECT",
    "SESSION_USER",
    "SET",
    "SQL",
    "START",
    "SYSUUID",
    "TABLESAMPLE",
    "TOP",
    "TRAILING",
    "TRUE",
    "UNION",
    "UNKNOWN",
    "USING",
    "UTCTIMESTAMP",
    "VALUES",
    "WHEN",
    "WHERE",
    "WHILE",
    "WITH",
];

static RESERVED: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| RESERVED_WORDS.into_iter().collect());

/// True if `word` is a reserved keyword, ignoring case.
pub fn is_reserved(word: &str) -> bool {
    RESERVED.contains(word.to_ascii_uppercase().as_str())
}
