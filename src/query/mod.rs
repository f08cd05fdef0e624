//! Structured query model and its rendering into raw SQL.
crate::reexport!(model);
crate::reexport!(render);
crate::reexport!(raw);
crate::reexport!(raw_tests, test);

use crate::*;
