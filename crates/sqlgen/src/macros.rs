#[macro_export]
macro_rules! drop_column {
    ($table:expr, $column:expr) => {
        $crate::ast::drop_column::DropColumn {
            table: Some($table.to_string()),
            column: Some($column.to_string()),
            ..Default::default()
        }
    };
    ($schema:expr, $table:expr, $column:expr) => {
        $crate::ast::drop_column::DropColumn {
            schema: Some($schema.to_string()),
            table: Some($table.to_string()),
            column: Some($column.to_string()),
            ..Default::default()
        }
    };
}
