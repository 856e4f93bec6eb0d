//! Column references
//!
//! A [`QueryColumn`] names a table field for SELECT/GROUP BY/ORDER BY and
//! condition contexts, with an optional table qualifier.

use serde::Serialize;
use serde_json::Value;

use crate::query::condition::{QueryCondition, SqlOperator};

/// A reference to a table's field. Immutable value object; equality is by
/// `(table, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryColumn {
    pub(crate) table: Option<String>,
    pub(crate) name: String,
}

impl QueryColumn {
    /// Create an unqualified column reference
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// Create a column reference qualified by a table name or alias
    pub fn with_table(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    /// Table qualifier, if any
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    // Predicate factories. Each produces a leaf condition bound to this
    // column; the column itself stays reusable.

    /// `column = value`
    pub fn eq(&self, value: impl Into<Value>) -> QueryCondition {
        self.predicate(SqlOperator::Eq, Some(value.into()))
    }

    /// `column != value`
    pub fn ne(&self, value: impl Into<Value>) -> QueryCondition {
        self.predicate(SqlOperator::Ne, Some(value.into()))
    }

    /// `column > value`
    pub fn gt(&self, value: impl Into<Value>) -> QueryCondition {
        self.predicate(SqlOperator::Gt, Some(value.into()))
    }

    /// `column >= value`
    pub fn ge(&self, value: impl Into<Value>) -> QueryCondition {
        self.predicate(SqlOperator::Ge, Some(value.into()))
    }

    /// `column < value`
    pub fn lt(&self, value: impl Into<Value>) -> QueryCondition {
        self.predicate(SqlOperator::Lt, Some(value.into()))
    }

    /// `column <= value`
    pub fn le(&self, value: impl Into<Value>) -> QueryCondition {
        self.predicate(SqlOperator::Le, Some(value.into()))
    }

    /// `column LIKE pattern` (pattern is bound as-is)
    pub fn like(&self, pattern: impl Into<String>) -> QueryCondition {
        self.predicate(SqlOperator::Like, Some(Value::String(pattern.into())))
    }

    /// `column NOT LIKE pattern`
    pub fn not_like(&self, pattern: impl Into<String>) -> QueryCondition {
        self.predicate(SqlOperator::NotLike, Some(Value::String(pattern.into())))
    }

    /// `column IN (values...)`
    pub fn in_values(&self, values: Vec<Value>) -> QueryCondition {
        self.predicate(SqlOperator::In, Some(Value::Array(values)))
    }

    /// `column NOT IN (values...)`
    pub fn not_in_values(&self, values: Vec<Value>) -> QueryCondition {
        self.predicate(SqlOperator::NotIn, Some(Value::Array(values)))
    }

    /// `column BETWEEN low AND high`
    pub fn between(&self, low: impl Into<Value>, high: impl Into<Value>) -> QueryCondition {
        self.predicate(
            SqlOperator::Between,
            Some(Value::Array(vec![low.into(), high.into()])),
        )
    }

    /// `column IS NULL`
    pub fn is_null(&self) -> QueryCondition {
        self.predicate(SqlOperator::IsNull, None)
    }

    /// `column IS NOT NULL`
    pub fn is_not_null(&self) -> QueryCondition {
        self.predicate(SqlOperator::IsNotNull, None)
    }

    fn predicate(&self, operator: SqlOperator, value: Option<Value>) -> QueryCondition {
        QueryCondition::predicate(self.clone(), operator, value)
    }
}

impl From<&str> for QueryColumn {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for QueryColumn {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
