//! # QueryKit
//!
//! A programmatic SQL query-model builder: assemble a SELECT statement
//! (tables, joins, predicates, grouping, ordering, pagination) through
//! chained method calls, then hand the finished model to a dialect renderer
//! together with its ordered positional-parameter list.
//!
//! QueryKit builds and owns the query model only. It does not render SQL
//! text for a specific database, execute statements, or manage connections.
//!
//! ## Quick Start
//!
//! ```rust
//! use querykit::prelude::*;
//!
//! fn main() -> Result<(), QueryError> {
//!     let query = QueryWrapper::create()
//!         .select(QueryColumn::new("id"))
//!         .select(QueryColumn::new("name"))
//!         .from("users")
//!         .alias("u")?
//!         .where_clause(QueryColumn::new("age").gt(18))
//!         .and(QueryColumn::new("status").eq("active"))
//!         .order_by(OrderBy::desc("created_at"))
//!         .limit(10);
//!
//!     // Positional parameters, in the order the renderer will print them.
//!     let params = query.value_array();
//!     assert_eq!(params, vec![json!(18), json!("active")]);
//!     Ok(())
//! }
//! ```
//!
//! Joins return a [`Joiner`](query::Joiner) handle so the ON condition can be
//! attached before chaining continues:
//!
//! ```rust
//! use querykit::prelude::*;
//!
//! let query = QueryWrapper::create()
//!     .from("users")
//!     .left_join("orders")
//!     .on("orders.user_id = users.id")
//!     .group_by(QueryColumn::new("users.id"));
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod prelude;
pub mod query;

// Re-export the main public types for convenience
pub use errors::QueryError;
pub use query::{
    Join, JoinType, Joiner, OrderBy, QueryColumn, QueryCondition, QueryTable, QueryWrapper,
    SortOrder, SqlConnector, SqlOperator,
};
