//! Query model construction
//!
//! This module provides the query-model building blocks: column and table
//! references, condition trees, joins, ordering, and the [`QueryWrapper`]
//! aggregate that ties them together.

pub mod column;
pub mod condition;
pub mod join;
pub mod ordering;
pub mod table;
pub mod wrapper;

#[cfg(test)]
mod tests;

// Re-export main types
pub use column::QueryColumn;
pub use condition::{QueryCondition, SqlConnector, SqlOperator};
pub use join::{Join, JoinType, Joiner};
pub use ordering::{OrderBy, SortOrder};
pub use table::{QueryTable, TableSource};
pub use wrapper::QueryWrapper;
