crate::reexport!(error);
crate::reexport!(datatype);
crate::reexport!(validator);
