//! Query model aggregate
//!
//! [`QueryWrapper`] owns the table list, join list, select columns, the
//! where/having condition trees, grouping, ordering, pagination, and the
//! datasource override. It is mutated exclusively through its own fluent
//! methods; once handed to a renderer it is only read.

use serde::Serialize;
use serde_json::Value;

use crate::errors::QueryError;
use crate::query::column::QueryColumn;
use crate::query::condition::{QueryCondition, SqlConnector};
use crate::query::join::{Join, JoinType, Joiner};
use crate::query::ordering::OrderBy;
use crate::query::table::QueryTable;

/// The aggregate builder object representing one (possibly nested) SELECT
/// statement under construction.
///
/// Every mutating method takes the model by value and returns it, enabling
/// method chaining. A `QueryWrapper` can itself be registered as a FROM
/// source or JOIN target of another `QueryWrapper`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryWrapper {
    pub(crate) select_columns: Vec<QueryColumn>,
    pub(crate) tables: Vec<QueryTable>,
    pub(crate) join_tables: Vec<QueryTable>,
    pub(crate) joins: Vec<Join>,
    pub(crate) where_condition: Option<QueryCondition>,
    pub(crate) group_by: Vec<QueryColumn>,
    pub(crate) having_condition: Option<QueryCondition>,
    pub(crate) order_by: Vec<OrderBy>,
    pub(crate) limit_rows: Option<i64>,
    pub(crate) limit_offset: Option<i64>,
    pub(crate) datasource: Option<String>,
}

impl QueryWrapper {
    /// Create an empty query model
    pub fn create() -> Self {
        Self::new()
    }

    pub fn new() -> Self {
        Self {
            select_columns: Vec::new(),
            tables: Vec::new(),
            join_tables: Vec::new(),
            joins: Vec::new(),
            where_condition: None,
            group_by: Vec::new(),
            having_condition: None,
            order_by: Vec::new(),
            limit_rows: None,
            limit_offset: None,
            datasource: None,
        }
    }

    /// Append a select column. An empty select list means "select all".
    pub fn select(mut self, column: impl Into<QueryColumn>) -> Self {
        self.select_columns.push(column.into());
        self
    }

    /// Append several select columns at once
    pub fn select_columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<QueryColumn>,
    {
        self.select_columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Register a FROM source: a table name, a [`QueryTable`], or another
    /// [`QueryWrapper`] used as a derived table.
    ///
    /// The FROM list is deduplicated: a reference that is the same table as
    /// an existing entry is discarded, keeping the first registration and
    /// its alias.
    pub fn from(mut self, table: impl Into<QueryTable>) -> Self {
        let table = table.into();
        if self.tables.iter().any(|existing| existing.is_same_table(&table)) {
            tracing::debug!(table = ?table.name(), "duplicate FROM table suppressed");
            return self;
        }
        self.tables.push(table);
        self
    }

    /// Set the alias of the single registered FROM table.
    ///
    /// Fails with [`QueryError::NoTable`] before any `from(...)` call and
    /// with [`QueryError::MultipleTables`] on multi-table queries; the model
    /// is not mutated on failure.
    pub fn alias(mut self, alias: impl Into<String>) -> Result<Self, QueryError> {
        match self.tables.len() {
            0 => Err(QueryError::NoTable),
            1 => {
                self.tables[0].set_alias(alias.into());
                Ok(self)
            }
            n => Err(QueryError::MultipleTables(n)),
        }
    }

    /// Set the WHERE condition tree root, replacing any previous root.
    /// Use [`and`](Self::and) / [`or`](Self::or) to append instead.
    pub fn where_clause(mut self, condition: impl Into<QueryCondition>) -> Self {
        self.where_condition = Some(condition.into());
        self
    }

    /// AND one equality predicate per `(column, value)` pair into the WHERE
    /// tree, in iteration order. The caller's iteration order determines the
    /// tree shape and therefore the parameter order.
    pub fn where_all<I, K>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (name, value) in pairs {
            self = self.and(QueryCondition::eq(QueryColumn::new(name), value));
        }
        self
    }

    /// AND a condition into the WHERE tree. The existing tree becomes the
    /// left operand; on an empty tree the condition becomes the root.
    pub fn and(mut self, condition: impl Into<QueryCondition>) -> Self {
        self.attach_where(SqlConnector::And, condition.into());
        self
    }

    /// OR a condition into the WHERE tree. The existing tree becomes the
    /// left operand; on an empty tree the condition becomes the root.
    pub fn or(mut self, condition: impl Into<QueryCondition>) -> Self {
        self.attach_where(SqlConnector::Or, condition.into());
        self
    }

    fn attach_where(&mut self, connector: SqlConnector, condition: QueryCondition) {
        self.where_condition = Some(match self.where_condition.take() {
            Some(root) => root.combine(connector, condition),
            None => condition,
        });
    }

    /// AND a condition into the HAVING tree
    pub fn having(mut self, condition: impl Into<QueryCondition>) -> Self {
        let condition = condition.into();
        self.having_condition = Some(match self.having_condition.take() {
            Some(root) => root.combine(SqlConnector::And, condition),
            None => condition,
        });
        self
    }

    /// LEFT JOIN a table or derived table
    pub fn left_join(self, table: impl Into<QueryTable>) -> Joiner {
        self.joining(JoinType::Left, table, true)
    }

    /// LEFT JOIN gated by an inclusion flag; the join record is always
    /// created, but inactive joins are skipped by rendering and parameter
    /// extraction
    pub fn left_join_if(self, table: impl Into<QueryTable>, active: bool) -> Joiner {
        self.joining(JoinType::Left, table, active)
    }

    /// RIGHT JOIN a table or derived table
    pub fn right_join(self, table: impl Into<QueryTable>) -> Joiner {
        self.joining(JoinType::Right, table, true)
    }

    /// RIGHT JOIN gated by an inclusion flag
    pub fn right_join_if(self, table: impl Into<QueryTable>, active: bool) -> Joiner {
        self.joining(JoinType::Right, table, active)
    }

    /// INNER JOIN a table or derived table
    pub fn inner_join(self, table: impl Into<QueryTable>) -> Joiner {
        self.joining(JoinType::Inner, table, true)
    }

    /// INNER JOIN gated by an inclusion flag
    pub fn inner_join_if(self, table: impl Into<QueryTable>, active: bool) -> Joiner {
        self.joining(JoinType::Inner, table, active)
    }

    /// FULL OUTER JOIN a table or derived table
    pub fn full_join(self, table: impl Into<QueryTable>) -> Joiner {
        self.joining(JoinType::Full, table, true)
    }

    /// FULL OUTER JOIN gated by an inclusion flag
    pub fn full_join_if(self, table: impl Into<QueryTable>, active: bool) -> Joiner {
        self.joining(JoinType::Full, table, active)
    }

    /// CROSS JOIN a table or derived table
    pub fn cross_join(self, table: impl Into<QueryTable>) -> Joiner {
        self.joining(JoinType::Cross, table, true)
    }

    /// CROSS JOIN gated by an inclusion flag
    pub fn cross_join_if(self, table: impl Into<QueryTable>, active: bool) -> Joiner {
        self.joining(JoinType::Cross, table, active)
    }

    fn joining(mut self, join_type: JoinType, table: impl Into<QueryTable>, active: bool) -> Joiner {
        let table = table.into();
        if !self
            .join_tables
            .iter()
            .any(|existing| existing.is_same_table(&table))
        {
            self.join_tables.push(table.clone());
        }
        tracing::debug!(kind = join_type.as_sql(), active, "join registered");
        self.joins.push(Join::new(join_type, table, active));
        let join_index = self.joins.len() - 1;
        Joiner::new(self, join_index)
    }

    /// Append a GROUP BY column (call order preserved, no dedup)
    pub fn group_by(mut self, column: impl Into<QueryColumn>) -> Self {
        self.group_by.push(column.into());
        self
    }

    /// Append several GROUP BY columns at once
    pub fn group_by_all<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<QueryColumn>,
    {
        self.group_by.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Append an ORDER BY entry (call order preserved)
    pub fn order_by(mut self, entry: impl Into<OrderBy>) -> Self {
        self.order_by.push(entry.into());
        self
    }

    /// Append several ORDER BY entries at once
    pub fn order_by_all<I, O>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<OrderBy>,
    {
        self.order_by.extend(entries.into_iter().map(Into::into));
        self
    }

    /// Set the LIMIT row count. Last write wins; `None` unsets.
    pub fn limit(mut self, rows: impl Into<Option<i64>>) -> Self {
        self.limit_rows = rows.into();
        self
    }

    /// Set the OFFSET. Last write wins; `None` unsets.
    pub fn offset(mut self, offset: impl Into<Option<i64>>) -> Self {
        self.limit_offset = offset.into();
        self
    }

    /// Set OFFSET and LIMIT together; equivalent to `offset(o).limit(rows)`
    pub fn limit_with_offset(
        mut self,
        offset: impl Into<Option<i64>>,
        rows: impl Into<Option<i64>>,
    ) -> Self {
        self.limit_offset = offset.into();
        self.limit_rows = rows.into();
        self
    }

    /// Override the datasource name used to pick a connection pool
    pub fn datasource(mut self, datasource: impl Into<String>) -> Self {
        self.datasource = Some(datasource.into());
        self
    }

    /// Ordered positional parameters of the whole model: WHERE-tree values
    /// followed by HAVING-tree values, each by in-order leaf traversal.
    ///
    /// This matches clause emission order, so placeholders bind correctly.
    /// Join ON parameters are not included here; the renderer extracts them
    /// per join via [`Join::parameter_values`] at join-emission time.
    pub fn value_array(&self) -> Vec<Value> {
        let mut values = Vec::new();
        if let Some(condition) = &self.where_condition {
            condition.collect_values(&mut values);
        }
        if let Some(condition) = &self.having_condition {
            condition.collect_values(&mut values);
        }
        values
    }

    // Read-only accessors for the renderer and executor collaborators.

    /// Select columns; empty means "select all"
    pub fn selected_columns(&self) -> &[QueryColumn] {
        &self.select_columns
    }

    /// FROM sources, insertion order, deduplicated
    pub fn tables(&self) -> &[QueryTable] {
        &self.tables
    }

    /// Tables registered by join calls, deduplicated independently of the
    /// FROM list
    pub fn join_tables(&self) -> &[QueryTable] {
        &self.join_tables
    }

    /// Joins in insertion order; insertion order is render order
    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// WHERE condition tree root
    pub fn where_condition(&self) -> Option<&QueryCondition> {
        self.where_condition.as_ref()
    }

    /// GROUP BY columns in call order
    pub fn group_by_columns(&self) -> &[QueryColumn] {
        &self.group_by
    }

    /// HAVING condition tree root
    pub fn having_condition(&self) -> Option<&QueryCondition> {
        self.having_condition.as_ref()
    }

    /// ORDER BY entries in call order
    pub fn order_by_entries(&self) -> &[OrderBy] {
        &self.order_by
    }

    /// LIMIT row count, if set
    pub fn limit_rows(&self) -> Option<i64> {
        self.limit_rows
    }

    /// OFFSET, if set
    pub fn limit_offset(&self) -> Option<i64> {
        self.limit_offset
    }

    /// Datasource name override, if set
    pub fn datasource_name(&self) -> Option<&str> {
        self.datasource.as_deref()
    }
}

impl Default for QueryWrapper {
    fn default() -> Self {
        Self::new()
    }
}
