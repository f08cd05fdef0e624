//! Catalog discovery: predicates, lookup queries and result-row mapping.
crate::reexport!(constraint);
crate::reexport!(pattern);
crate::reexport!(lookup);
crate::reexport!(column);
crate::reexport!(table);
crate::reexport!(schema);

use crate::*;
use std::fmt::Display;

/// Field `index` of a metadata result row, or a `MalformedRow` error naming `field`.
fn field<'r>(row: &'r [impl AsRef<str>], index: usize, field: &str) -> Result<&'r str> {
    row.get(index).map(|v| v.as_ref()).ok_or_else(|| {
        Error::MalformedRow(format!(
            "expected {field} at position {index}, row has {} fields",
            row.len()
        ))
    })
}
