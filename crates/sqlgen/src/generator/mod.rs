pub mod drop_column;
pub mod mssql;
