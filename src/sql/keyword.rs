//! Clause keywords emitted by the raw SQL assembler.
//!
//! Only the clauses the assembler knows how to produce are listed here, in
//! the order they appear in a statement. `as_str` is the canonical upper-case
//! spelling written into generated SQL.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Keyword {
    Select,
    From,
    Where,
    GroupBy,
    OrderBy,
    Limit,
}

impl Keyword {
    /// Clause keywords in statement order.
    pub const CLAUSES: [Self; 6] = [
        Keyword::Select,
        Keyword::From,
        Keyword::Where,
        Keyword::GroupBy,
        Keyword::OrderBy,
        Keyword::Limit,
    ];

    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "SELECT",
            From => "FROM",
            Where => "WHERE",
            GroupBy => "GROUP BY",
            OrderBy => "ORDER BY",
            Limit => "LIMIT",
        }
    }

    /// Clause text `KEYWORD body ` including the trailing separator.
    pub fn clause(self, body: impl std::fmt::Display) -> String {
        format!("{self} {body} ")
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
