//! Validator module for checking that generated SQL is syntactically sound.
use crate::*;
use sqlparser::{ast::Statement, dialect::GenericDialect, parser::Parser};

static GENERIC: GenericDialect = GenericDialect {};

/// Parses SQL text without executing it.
///
/// The generic dialect accepts both `"` and `` ` `` delimited identifiers,
/// covering every [`Dialect`] this crate renders.
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;

impl Validator {
    pub fn sql(&self, sql: &str) -> Result<Vec<Statement>> {
        if sql.trim().is_empty() {
            trace!("Skipping validation of empty query");
            return Ok(vec![]);
        }
        Parser::parse_sql(&GENERIC, sql).map_err(|e| {
            warn!("Generated SQL failed to parse: {e}");
            e.into()
        })
    }

    pub fn is_valid(&self, sql: &str) -> bool {
        self.sql(sql).is_ok()
    }
}
