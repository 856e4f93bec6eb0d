//! Convenience re-exports for common QueryKit usage
//!
//! This prelude module re-exports the most commonly used items for building
//! query models, making it easier to import everything you need with a single
//! use statement.

// Error types
pub use crate::errors::QueryError;

// Query model building
pub use crate::query::{
    Join, JoinType, Joiner, OrderBy, QueryColumn, QueryCondition, QueryTable, QueryWrapper,
    SortOrder, SqlConnector, SqlOperator, TableSource,
};

// Common external dependencies that are frequently used
pub use serde_json::{json, Value};
