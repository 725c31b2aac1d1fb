pub mod drop_column;
