//! Joins
//!
//! A [`Join`] records the join kind, the joined table (plain or derived),
//! the attached ON condition, and an inclusion flag. Inactive joins stay in
//! the model but are skipped by rendering and parameter extraction.
//!
//! Join-creating calls on [`QueryWrapper`] return a [`Joiner`], a short-lived
//! handle whose only job is to attach the ON condition and hand the parent
//! model back for continued chaining.

use serde::Serialize;
use serde_json::Value;

use crate::query::condition::QueryCondition;
use crate::query::table::QueryTable;
use crate::query::wrapper::QueryWrapper;

/// Represents the type of SQL JOIN operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JoinType {
    /// LEFT JOIN - all records from the left table, matched records from the right
    Left,
    /// RIGHT JOIN - all records from the right table, matched records from the left
    Right,
    /// INNER JOIN - records with matching values in both tables
    Inner,
    /// FULL OUTER JOIN - all records with a match in either table
    Full,
    /// CROSS JOIN - Cartesian product of both tables
    Cross,
}

impl JoinType {
    /// Convert JoinType to SQL keyword text
    pub fn as_sql(&self) -> &'static str {
        match self {
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
            JoinType::Inner => "INNER JOIN",
            JoinType::Full => "FULL OUTER JOIN",
            JoinType::Cross => "CROSS JOIN",
        }
    }
}

/// A complete join record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Join {
    pub(crate) join_type: JoinType,
    pub(crate) table: QueryTable,
    pub(crate) on: Option<QueryCondition>,
    pub(crate) active: bool,
}

impl Join {
    pub(crate) fn new(join_type: JoinType, table: QueryTable, active: bool) -> Self {
        Self {
            join_type,
            table,
            on: None,
            active,
        }
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    pub fn table(&self) -> &QueryTable {
        &self.table
    }

    /// Attached ON condition, if any
    pub fn condition(&self) -> Option<&QueryCondition> {
        self.on.as_ref()
    }

    /// Whether this join is included in rendering and parameter extraction
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Bound parameters of the ON condition, in render order. Inactive
    /// joins contribute nothing.
    pub fn parameter_values(&self) -> Vec<Value> {
        if !self.active {
            return Vec::new();
        }
        self.on
            .as_ref()
            .map(QueryCondition::values)
            .unwrap_or_default()
    }
}

/// Short-lived builder handle returned by join-creating calls. Holds the
/// parent model and the index of the join it was created for, nothing else.
#[derive(Debug)]
pub struct Joiner {
    wrapper: QueryWrapper,
    join_index: usize,
}

impl Joiner {
    pub(crate) fn new(wrapper: QueryWrapper, join_index: usize) -> Self {
        Self {
            wrapper,
            join_index,
        }
    }

    /// Attach the ON condition and yield the parent model back
    pub fn on(mut self, condition: impl Into<QueryCondition>) -> QueryWrapper {
        self.wrapper.joins[self.join_index].on = Some(condition.into());
        self.wrapper
    }
}
