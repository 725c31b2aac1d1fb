use serde::{Deserialize, Serialize};

/// Grammar family a database product belongs to for schema-change synthesis.
///
/// Generation strategies dispatch on this tag. The enum is non-exhaustive:
/// matches must keep a default arm, so a family added later falls back to
/// the generic `ALTER TABLE` grammar instead of silently mis-generating SQL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DialectFamily {
    /// Standard `ALTER TABLE ... DROP COLUMN` grammar (PostgreSQL, Oracle, H2, ...).
    Generic,
    /// MySQL and its derivatives; supports compound `ALTER TABLE` drop lists.
    MySql,
    /// SQL Server; default constraints must be dropped before their column.
    Mssql,
    Db2,
    Sybase,
    SybaseAsa,
    Firebird,
    Informix,
}
