//! Condition trees
//!
//! A [`QueryCondition`] is a binary tree of boolean predicates. Leaves are
//! either column/operator/value predicates or raw SQL fragments with
//! positional parameters; composites join two sub-trees with AND/OR.
//!
//! Repeated `and`/`or` calls absorb the existing tree as the LEFT operand,
//! so conditions attach left-associatively in call order. The renderer is
//! expected to parenthesize composites to preserve that grouping.

use serde::Serialize;
use serde_json::Value;

use crate::query::column::QueryColumn;

/// Logical connector between two condition sub-trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SqlConnector {
    And,
    Or,
}

impl SqlConnector {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlConnector::And => "AND",
            SqlConnector::Or => "OR",
        }
    }
}

/// Comparison operators for leaf predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SqlOperator {
    Eq,        // =
    Ne,        // !=
    Gt,        // >
    Ge,        // >=
    Lt,        // <
    Le,        // <=
    Like,      // LIKE
    NotLike,   // NOT LIKE
    In,        // IN
    NotIn,     // NOT IN
    Between,   // BETWEEN
    IsNull,    // IS NULL
    IsNotNull, // IS NOT NULL
}

impl SqlOperator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlOperator::Eq => "=",
            SqlOperator::Ne => "!=",
            SqlOperator::Gt => ">",
            SqlOperator::Ge => ">=",
            SqlOperator::Lt => "<",
            SqlOperator::Le => "<=",
            SqlOperator::Like => "LIKE",
            SqlOperator::NotLike => "NOT LIKE",
            SqlOperator::In => "IN",
            SqlOperator::NotIn => "NOT IN",
            SqlOperator::Between => "BETWEEN",
            SqlOperator::IsNull => "IS NULL",
            SqlOperator::IsNotNull => "IS NOT NULL",
        }
    }
}

/// A composable boolean predicate tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QueryCondition {
    /// Atomic column/operator/value test. `value` is `None` for
    /// IS NULL / IS NOT NULL and an array for IN / NOT IN / BETWEEN.
    Predicate {
        column: QueryColumn,
        operator: SqlOperator,
        value: Option<Value>,
    },
    /// Raw SQL fragment with positional parameters. Fragment text and exact
    /// parameter count are preserved so the renderer can detect placeholder
    /// mismatches.
    Raw { sql: String, params: Vec<Value> },
    /// AND/OR combination of two sub-trees
    Composite {
        left: Box<QueryCondition>,
        connector: SqlConnector,
        right: Box<QueryCondition>,
    },
}

impl QueryCondition {
    /// Create a leaf predicate
    pub fn predicate(
        column: impl Into<QueryColumn>,
        operator: SqlOperator,
        value: Option<Value>,
    ) -> Self {
        Self::Predicate {
            column: column.into(),
            operator,
            value,
        }
    }

    /// Equality shortcut, `column = value`
    pub fn eq(column: impl Into<QueryColumn>, value: impl Into<Value>) -> Self {
        Self::predicate(column, SqlOperator::Eq, Some(value.into()))
    }

    /// Raw SQL fragment without parameters
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Raw SQL fragment with positional parameters
    pub fn raw_with_params(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self::Raw {
            sql: sql.into(),
            params,
        }
    }

    /// Combine with another condition using AND, absorbing `self` as the
    /// left operand
    pub fn and(self, other: impl Into<QueryCondition>) -> Self {
        self.combine(SqlConnector::And, other.into())
    }

    /// Combine with another condition using OR, absorbing `self` as the
    /// left operand
    pub fn or(self, other: impl Into<QueryCondition>) -> Self {
        self.combine(SqlConnector::Or, other.into())
    }

    /// Build a composite with `self` as the left operand
    pub fn combine(self, connector: SqlConnector, other: QueryCondition) -> Self {
        Self::Composite {
            left: Box::new(self),
            connector,
            right: Box::new(other),
        }
    }

    /// Bound parameter values of this tree, by in-order left-to-right leaf
    /// traversal. This is the same order a renderer prints the leaves in, so
    /// positional placeholders line up with the returned values.
    pub fn values(&self) -> Vec<Value> {
        let mut out = Vec::new();
        self.collect_values(&mut out);
        out
    }

    pub(crate) fn collect_values(&self, out: &mut Vec<Value>) {
        match self {
            QueryCondition::Predicate { value, .. } => match value {
                // IN / NOT IN / BETWEEN carry one placeholder per element
                Some(Value::Array(items)) => out.extend(items.iter().cloned()),
                Some(value) => out.push(value.clone()),
                None => {}
            },
            QueryCondition::Raw { params, .. } => out.extend(params.iter().cloned()),
            QueryCondition::Composite { left, right, .. } => {
                left.collect_values(out);
                right.collect_values(out);
            }
        }
    }
}

impl From<&str> for QueryCondition {
    fn from(sql: &str) -> Self {
        Self::raw(sql)
    }
}

impl From<String> for QueryCondition {
    fn from(sql: String) -> Self {
        Self::raw(sql)
    }
}
