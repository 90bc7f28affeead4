//! The statement/result contract shared by every store client.
//!
//! A [`Query`] is SQL text with positional (`$1`, `$2`, ...) parameters and an
//! ordered list of values; a [`QueryResult`] carries the rows the statement
//! returned and their count. Values never get interpolated into the text.

use crate::error::DatabaseError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;

/// A parameter value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<SqlValue> for Value {
    fn from(value: SqlValue) -> Self {
        match value {
            SqlValue::Null => Self::Null,
            SqlValue::Bool(b) => Self::Bool(b),
            SqlValue::Int(i) => Self::from(i),
            SqlValue::Text(s) => Self::String(s),
        }
    }
}

/// A parameterized SQL statement.
///
/// ```rust
/// use vhub_database::{Query, SqlValue};
///
/// let query = Query::new("SELECT email FROM vendors WHERE vendor_id = $1").bind(42_i64);
/// assert_eq!(query.values(), &[SqlValue::Int(42)]);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: Cow<'static, str>,
    values: Vec<SqlValue>,
}

impl Query {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self { text: text.into(), values: Vec::new() }
    }

    /// Appends the value for the next positional placeholder.
    pub fn bind(mut self, value: impl Into<SqlValue>) -> Self {
        self.values.push(value.into());
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }
}

/// One returned row, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row(Map<String, Value>);

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style column setter, mostly useful for fixtures.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<SqlValue>) {
        self.0.insert(column.into(), Value::from(value.into()));
    }

    /// Maps the row onto `T` by column name.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Decode`] when a column is missing or has the wrong type.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DatabaseError> {
        T::deserialize(&Value::Object(self.0.clone())).map_err(|e| DatabaseError::Decode {
            message: e.to_string().into(),
            context: Some(std::any::type_name::<T>().into()),
        })
    }
}

/// Rows returned by one statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    /// Number of rows the statement produced. Statements that need an affected-row
    /// count must use `RETURNING`.
    pub row_count: u64,
    pub rows: Vec<Row>,
}

impl QueryResult {
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { row_count: rows.len() as u64, rows }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }
}

/// Executes one parameterized statement against a relational store.
///
/// Implementations must be cheap to share; handlers receive them as [`SharedExecutor`].
#[async_trait::async_trait]
pub trait QueryExecutor: Debug + Send + Sync {
    /// Runs `query` and returns every row it produced.
    ///
    /// # Errors
    /// Returns [`DatabaseError::UniqueViolation`] for duplicate keys and
    /// [`DatabaseError::Sql`] for any other driver failure.
    async fn query(&self, query: Query) -> Result<QueryResult, DatabaseError>;

    /// Cheap round trip used by readiness probes.
    ///
    /// # Errors
    /// Returns an error when the store is unreachable.
    async fn ping(&self) -> Result<(), DatabaseError>;
}

/// Shared, type-erased executor handle.
pub type SharedExecutor = Arc<dyn QueryExecutor>;
