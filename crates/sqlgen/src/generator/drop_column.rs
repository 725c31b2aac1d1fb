//! Validation and dialect dispatch for DROP COLUMN statements.

use crate::{ast::drop_column::DropColumn, dialect::Dialect, generator::mssql};
use model::{
    core::{column::ColumnRef, dialect::DialectFamily, fragment::SqlFragment},
    validation::errors::ValidationErrors,
};
use tracing::debug;

/// Formats the auxiliary statement that clears a column's default
/// constraint, given the escaped table and column names.
pub type DropDefaultTemplate = fn(&str, &str) -> String;

/// Validates and renders DROP COLUMN statements for a target dialect.
///
/// `generate` assumes its statement already passed `validate`; calling it
/// with an invalid statement is a contract violation and fails loudly
/// instead of emitting wrong SQL.
pub struct DropColumnGenerator {
    drop_default: DropDefaultTemplate,
}

impl Default for DropColumnGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DropColumnGenerator {
    pub fn new() -> Self {
        Self {
            drop_default: mssql::drop_default_constraint_sql,
        }
    }

    /// Uses a caller-supplied template for the SQL Server default-constraint
    /// cleanup statement.
    pub fn with_drop_default_template(drop_default: DropDefaultTemplate) -> Self {
        Self { drop_default }
    }

    /// Checks structural well-formedness of the statement.
    ///
    /// Never consults the dialect and never mutates the statement; all
    /// failures accumulate in child order.
    pub fn validate(&self, statement: &DropColumn) -> ValidationErrors {
        if !statement.is_batch() {
            return Self::validate_single(statement);
        }

        let mut errors = ValidationErrors::new();
        let first_table = statement.columns[0].table.as_deref();
        for child in &statement.columns {
            errors.extend(Self::validate_single(child));
            if let Some(table) = child.table.as_deref()
                && Some(table) != first_table
            {
                errors.add("All columns must be targeted at the same table");
            }
            if child.is_batch() {
                errors.add("Nested multiple drop column statements are not supported");
            }
        }
        errors
    }

    /// Renders the statement for `dialect`.
    ///
    /// The returned fragments must be executed in order; a fragment may
    /// depend on the ones before it having run.
    pub fn generate(&self, statement: &DropColumn, dialect: &dyn Dialect) -> Vec<SqlFragment> {
        debug_assert!(
            self.validate(statement).is_empty(),
            "generate called on a statement that failed validation"
        );
        debug!(
            "generating DROP COLUMN statements for dialect {}",
            dialect.name()
        );

        if statement.is_batch() {
            self.generate_batch(&statement.columns, dialect)
        } else {
            self.generate_single(statement, dialect)
        }
    }

    fn generate_single(&self, statement: &DropColumn, dialect: &dyn Dialect) -> Vec<SqlFragment> {
        let affected = affected_column(statement);
        let table = dialect.escape_table(
            affected.catalog.as_deref(),
            affected.schema.as_deref(),
            &affected.table,
        );
        let column = dialect.escape_column(
            affected.catalog.as_deref(),
            affected.schema.as_deref(),
            &affected.table,
            &affected.column,
        );

        match dialect.family() {
            DialectFamily::Db2 => vec![SqlFragment::new(
                format!("ALTER TABLE {table} DROP COLUMN {column}"),
                vec![affected],
            )],
            DialectFamily::Sybase
            | DialectFamily::SybaseAsa
            | DialectFamily::Firebird
            | DialectFamily::Informix => vec![SqlFragment::new(
                format!("ALTER TABLE {table} DROP {column}"),
                vec![affected],
            )],
            DialectFamily::Mssql => vec![
                // The default constraint has to go before the column drop
                // can succeed.
                SqlFragment::new((self.drop_default)(&table, &column), vec![affected.clone()]),
                SqlFragment::new(
                    format!("ALTER TABLE {table} DROP COLUMN {column}"),
                    vec![affected],
                ),
            ],
            _ => vec![SqlFragment::new(
                format!("ALTER TABLE {table} DROP COLUMN {column}"),
                vec![affected],
            )],
        }
    }

    fn generate_batch(&self, columns: &[DropColumn], dialect: &dyn Dialect) -> Vec<SqlFragment> {
        match dialect.family() {
            DialectFamily::MySql => {
                // MySQL lists every drop in one compound ALTER TABLE.
                let affected: Vec<ColumnRef> = columns.iter().map(affected_column).collect();
                let mut sql = format!(
                    "ALTER TABLE {}",
                    dialect.escape_table(
                        affected[0].catalog.as_deref(),
                        affected[0].schema.as_deref(),
                        &affected[0].table,
                    )
                );
                for (i, column) in affected.iter().enumerate() {
                    if i > 0 {
                        sql.push(',');
                    }
                    sql.push_str(" DROP ");
                    sql.push_str(&dialect.escape_column(
                        column.catalog.as_deref(),
                        column.schema.as_deref(),
                        &column.table,
                        &column.column,
                    ));
                }
                vec![SqlFragment::new(sql, affected)]
            }
            DialectFamily::Mssql => {
                let mut fragments = Vec::with_capacity(columns.len() * 2);
                for column in columns {
                    // Each column's constraint cleanup stays immediately
                    // ahead of its own drop.
                    fragments.extend(self.generate_single(column, dialect));
                }
                fragments
            }
            _ => columns
                .iter()
                // Only the first fragment per column; the single strategy
                // yields exactly one for these families.
                .filter_map(|column| self.generate_single(column, dialect).into_iter().next())
                .collect(),
        }
    }

    fn validate_single(statement: &DropColumn) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check_required_field("tableName", statement.table.as_deref());
        errors.check_required_field("columnName", statement.column.as_deref());
        errors
    }
}

fn affected_column(statement: &DropColumn) -> ColumnRef {
    ColumnRef::qualified(
        statement.catalog.clone(),
        statement.schema.clone(),
        statement
            .table
            .clone()
            .expect("validated drop column statement has a table name"),
        statement
            .column
            .clone()
            .expect("validated drop column statement has a column name"),
    )
}
