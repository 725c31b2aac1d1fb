use serde::{Deserialize, Serialize};

/// Identifies a single table column touched by a generated statement.
///
/// Every emitted SQL fragment carries the descriptors of the objects it
/// affects so the caller can record them for change tracking. `catalog` and
/// `schema` are optional qualifiers; `table` and `column` are always
/// non-empty on a descriptor attached to a fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub table: String,
    pub column: String,
}

impl ColumnRef {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            catalog: None,
            schema: None,
            table: table.into(),
            column: column.into(),
        }
    }

    pub fn qualified(
        catalog: Option<String>,
        schema: Option<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            schema,
            table: table.into(),
            column: column.into(),
        }
    }
}
