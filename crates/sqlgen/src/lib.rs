//! Dialect-aware SQL synthesis for schema-change statements.
//!
//! The engine takes an abstract statement describing a schema change and a
//! resolved [`dialect::Dialect`] descriptor, and produces the ordered SQL
//! fragments that perform the change on that database product. Each fragment
//! carries the affected-object metadata the caller records for change
//! tracking. Execution, connections, and changelog bookkeeping live in the
//! consuming engine, not here.

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod generator;
pub mod macros;
