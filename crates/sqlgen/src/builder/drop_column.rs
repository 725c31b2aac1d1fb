use crate::ast::drop_column::DropColumn;

#[derive(Debug, Clone)]
pub struct DropColumnBuilder {
    ast: DropColumn,
}

impl DropColumnBuilder {
    pub fn new(table: &str, column: &str) -> Self {
        Self {
            ast: DropColumn {
                table: Some(table.to_string()),
                column: Some(column.to_string()),
                ..Default::default()
            },
        }
    }

    pub fn catalog(mut self, catalog: &str) -> Self {
        self.ast.catalog = Some(catalog.to_string());
        self
    }

    pub fn schema(mut self, schema: &str) -> Self {
        self.ast.schema = Some(schema.to_string());
        self
    }

    pub fn build(self) -> DropColumn {
        self.ast
    }
}

/// Builds a batch statement grouping several drops against one table.
#[derive(Debug, Clone, Default)]
pub struct DropColumnBatchBuilder {
    ast: DropColumn,
}

impl DropColumnBatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, column: DropColumn) -> Self {
        self.ast.columns.push(column);
        self
    }

    pub fn build(self) -> DropColumn {
        self.ast
    }
}
