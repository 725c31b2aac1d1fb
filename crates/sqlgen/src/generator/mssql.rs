//! Shared T-SQL templates for SQL Server schema changes.

/// Renders the statement that locates the system-named default constraint
/// bound to a column and drops it.
///
/// SQL Server refuses to drop a column while a default constraint still
/// references it, and the constraint name is server-generated unless the
/// author picked one, so the cleanup has to be resolved at execution time.
/// Takes already-escaped names; shared by every generator that clears a
/// default before altering a column.
pub fn drop_default_constraint_sql(escaped_table: &str, escaped_column: &str) -> String {
    format!(
        "DECLARE @sql [nvarchar](MAX)\n\
         SELECT @sql = N'ALTER TABLE {escaped_table} DROP CONSTRAINT ' + QUOTENAME([df].[name]) \
         FROM [sys].[columns] AS [c] \
         INNER JOIN [sys].[default_constraints] AS [df] \
         ON [df].[object_id] = [c].[default_object_id] \
         WHERE [c].[object_id] = OBJECT_ID(N'{escaped_table}') \
         AND QUOTENAME([c].[name]) = N'{escaped_column}'\n\
         EXEC [sys].[sp_executesql] @sql"
    )
}
