//! In-memory [`QueryExecutor`] for tests that must not reach a real server.

use crate::{DatabaseError, Query, QueryExecutor, QueryResult};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Script {
    responses: VecDeque<Result<QueryResult, DatabaseError>>,
    executed: Vec<Query>,
    reachable: bool,
}

/// Replays scripted responses in order and records every statement it receives.
///
/// Once the script runs dry, statements return an empty result.
///
/// ```rust
/// # use vhub_database::testing::ScriptedExecutor;
/// # use vhub_database::{Query, QueryExecutor, QueryResult, Row};
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let executor = ScriptedExecutor::new()
///     .respond(QueryResult::from_rows(vec![Row::new().with("one", 1_i64)]));
///
/// let result = executor.query(Query::new("SELECT 1 AS one")).await.unwrap();
/// assert_eq!(result.row_count, 1);
/// assert_eq!(executor.executed()[0].text(), "SELECT 1 AS one");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedExecutor {
    script: Arc<Mutex<Script>>,
}

impl Default for ScriptedExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self { script: Arc::new(Mutex::new(Script { reachable: true, ..Script::default() })) }
    }

    /// Queues a successful response.
    #[must_use]
    pub fn respond(self, result: QueryResult) -> Self {
        self.lock().responses.push_back(Ok(result));
        self
    }

    /// Queues a failure.
    #[must_use]
    pub fn fail(self, error: DatabaseError) -> Self {
        self.lock().responses.push_back(Err(error));
        self
    }

    /// Makes [`QueryExecutor::ping`] fail.
    #[must_use]
    pub fn unreachable(self) -> Self {
        self.lock().reachable = false;
        self
    }

    /// Statements received so far, in order.
    #[must_use]
    pub fn executed(&self) -> Vec<Query> {
        self.lock().executed.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl QueryExecutor for ScriptedExecutor {
    async fn query(&self, query: Query) -> Result<QueryResult, DatabaseError> {
        let mut script = self.lock();
        script.executed.push(query);
        script.responses.pop_front().unwrap_or_else(|| Ok(QueryResult::empty()))
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        if self.lock().reachable {
            Ok(())
        } else {
            Err(DatabaseError::Connection {
                message: "scripted executor is unreachable".into(),
                context: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Row;

    #[tokio::test]
    async fn replays_in_order_then_runs_dry() {
        let executor = ScriptedExecutor::new()
            .respond(QueryResult::from_rows(vec![Row::new().with("n", 1_i64)]))
            .fail(DatabaseError::Internal { message: "boom".into(), context: None });

        assert_eq!(executor.query(Query::new("A")).await.unwrap().row_count, 1);
        assert!(executor.query(Query::new("B")).await.is_err());
        assert_eq!(executor.query(Query::new("C")).await.unwrap(), QueryResult::empty());

        let texts: Vec<String> = executor.executed().iter().map(|q| q.text().to_owned()).collect();
        assert_eq!(texts, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn ping_follows_reachability() {
        assert!(ScriptedExecutor::new().ping().await.is_ok());
        assert!(ScriptedExecutor::new().unreachable().ping().await.is_err());
    }
}
