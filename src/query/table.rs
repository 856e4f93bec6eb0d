//! Table references
//!
//! A [`QueryTable`] names a FROM or JOIN source: either a plain table name
//! or a nested [`QueryWrapper`] used as a derived table, plus an optional
//! alias.

use serde::Serialize;

use crate::query::wrapper::QueryWrapper;

/// What a table reference points at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TableSource {
    /// A plain table name
    Named(String),
    /// A nested query model used as a derived table
    Derived(Box<QueryWrapper>),
}

/// A reference to a table by name or to a nested query model, with an
/// optional alias
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryTable {
    pub(crate) source: TableSource,
    pub(crate) alias: Option<String>,
}

impl QueryTable {
    /// Reference a table by name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            source: TableSource::Named(name.into()),
            alias: None,
        }
    }

    /// Reference a nested query model as a derived table
    pub fn derived(query: QueryWrapper) -> Self {
        Self {
            source: TableSource::Derived(Box::new(query)),
            alias: None,
        }
    }

    /// Attach an alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub(crate) fn set_alias(&mut self, alias: String) {
        self.alias = Some(alias);
    }

    /// Plain table name, if this is a named reference
    pub fn name(&self) -> Option<&str> {
        match &self.source {
            TableSource::Named(name) => Some(name),
            TableSource::Derived(_) => None,
        }
    }

    /// Nested query model, if this is a derived table
    pub fn derived_query(&self) -> Option<&QueryWrapper> {
        match &self.source {
            TableSource::Named(_) => None,
            TableSource::Derived(query) => Some(query),
        }
    }

    /// Alias, if any
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Table source
    pub fn source(&self) -> &TableSource {
        &self.source
    }

    /// Whether two references point at the same table. Named references
    /// match by exact name; derived tables are distinct sub-query
    /// expressions and never match anything, even with equal contents.
    pub fn is_same_table(&self, other: &QueryTable) -> bool {
        match (&self.source, &other.source) {
            (TableSource::Named(a), TableSource::Named(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for QueryTable {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for QueryTable {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

impl From<QueryWrapper> for QueryTable {
    fn from(query: QueryWrapper) -> Self {
        Self::derived(query)
    }
}
