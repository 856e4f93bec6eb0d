//! Ordering
//!
//! ORDER BY entries: a column plus direction, or a raw expression.

use serde::Serialize;

use crate::query::column::QueryColumn;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// One ORDER BY entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OrderBy {
    /// Column plus direction
    Column {
        column: QueryColumn,
        order: SortOrder,
    },
    /// Raw ordering expression, emitted verbatim
    Raw(String),
}

impl OrderBy {
    /// Ascending order on a column
    pub fn asc(column: impl Into<QueryColumn>) -> Self {
        Self::Column {
            column: column.into(),
            order: SortOrder::Asc,
        }
    }

    /// Descending order on a column
    pub fn desc(column: impl Into<QueryColumn>) -> Self {
        Self::Column {
            column: column.into(),
            order: SortOrder::Desc,
        }
    }

    /// Raw ordering expression
    pub fn raw(expression: impl Into<String>) -> Self {
        Self::Raw(expression.into())
    }
}

impl From<&str> for OrderBy {
    fn from(expression: &str) -> Self {
        Self::raw(expression)
    }
}

impl From<String> for OrderBy {
    fn from(expression: String) -> Self {
        Self::raw(expression)
    }
}
