//! Defines the `Dialect` trait for database-specific SQL syntax.

use model::core::dialect::DialectFamily;

pub trait Dialect: Send + Sync {
    /// The grammar family generation strategies dispatch on.
    fn family(&self) -> DialectFamily;

    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;

    /// Escapes a possibly catalog- or schema-qualified table name.
    ///
    /// Present qualifiers are quoted individually and joined with `.`.
    fn escape_table(&self, catalog: Option<&str>, schema: Option<&str>, table: &str) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(catalog) = catalog {
            parts.push(self.quote_identifier(catalog));
        }
        if let Some(schema) = schema {
            parts.push(self.quote_identifier(schema));
        }
        parts.push(self.quote_identifier(table));
        parts.join(".")
    }

    /// Escapes a column name.
    ///
    /// The qualifiers are part of the contract for dialects whose column
    /// escaping depends on where the column lives; the default rendering is
    /// the quoted bare name.
    fn escape_column(
        &self,
        _catalog: Option<&str>,
        _schema: Option<&str>,
        _table: &str,
        column: &str,
    ) -> String {
        self.quote_identifier(column)
    }
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn family(&self) -> DialectFamily {
        // Postgres speaks the standard ALTER TABLE grammar.
        DialectFamily::Generic
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{ident}""#)
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn family(&self) -> DialectFamily {
        DialectFamily::MySql
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#"`{ident}`"#)
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct Mssql;

impl Dialect for Mssql {
    fn family(&self) -> DialectFamily {
        DialectFamily::Mssql
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!("[{ident}]")
    }

    fn name(&self) -> String {
        "Microsoft SQL Server".into()
    }
}

#[derive(Debug, Clone)]
pub struct Db2;

impl Dialect for Db2 {
    fn family(&self) -> DialectFamily {
        DialectFamily::Db2
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{ident}""#)
    }

    fn name(&self) -> String {
        "DB2".into()
    }
}

#[derive(Debug, Clone)]
pub struct Sybase;

impl Dialect for Sybase {
    fn family(&self) -> DialectFamily {
        DialectFamily::Sybase
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!("[{ident}]")
    }

    fn name(&self) -> String {
        "Sybase".into()
    }
}

#[derive(Debug, Clone)]
pub struct SybaseAsa;

impl Dialect for SybaseAsa {
    fn family(&self) -> DialectFamily {
        DialectFamily::SybaseAsa
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!("[{ident}]")
    }

    fn name(&self) -> String {
        "SQL Anywhere".into()
    }
}

#[derive(Debug, Clone)]
pub struct Firebird;

impl Dialect for Firebird {
    fn family(&self) -> DialectFamily {
        DialectFamily::Firebird
    }

    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{ident}""#)
    }

    fn name(&self) -> String {
        "Firebird".into()
    }
}

#[derive(Debug, Clone)]
pub struct Informix;

impl Dialect for Informix {
    fn family(&self) -> DialectFamily {
        DialectFamily::Informix
    }

    fn quote_identifier(&self, ident: &str) -> String {
        // DELIMIDENT is off by default; identifiers stay bare.
        ident.to_string()
    }

    fn name(&self) -> String {
        "Informix".into()
    }
}
