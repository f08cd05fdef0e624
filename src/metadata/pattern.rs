/// User-typed table filter where `*` matches any run of characters.
///
/// Only `*` is translated. `%` and `_` typed by the user already act as `LIKE`
/// wildcards and are passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{_0}")]
pub struct TablePattern(String);

impl TablePattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// `None` for an empty pattern, which means "every table".
    pub fn non_empty(pattern: &str) -> Option<Self> {
        (!pattern.is_empty()).then(|| Self::new(pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the user asked for a wildcard search.
    pub fn is_wildcard(&self) -> bool {
        self.0.contains('*')
    }

    /// The pattern in `LIKE` syntax.
    pub fn to_like(&self) -> String {
        self.0.replace('*', "%")
    }
}
