use crate::core::column::ColumnRef;
use serde::{Deserialize, Serialize};

/// One literal SQL statement plus the schema objects it affects.
///
/// Fragments returned together are ordered; later fragments may depend on
/// earlier ones having run, so the caller executes them in sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlFragment {
    pub sql: String,
    pub affected: Vec<ColumnRef>,
}

impl SqlFragment {
    pub fn new(sql: impl Into<String>, affected: Vec<ColumnRef>) -> Self {
        Self {
            sql: sql.into(),
            affected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_serializes_with_affected_metadata() {
        let fragment = SqlFragment::new(
            r#"ALTER TABLE "users" DROP COLUMN "legacy_flags""#,
            vec![ColumnRef::new("users", "legacy_flags")],
        );

        let json = serde_json::to_string(&fragment).unwrap();
        assert!(json.contains(r#""table":"users""#));

        let back: SqlFragment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fragment);
    }
}
