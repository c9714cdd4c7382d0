//! Atomic write scope spanning multiple statements.

use neo4rs::{Graph, Query};

use crate::infrastructure::ports::RepoError;

/// A unit of work over an explicit database transaction.
///
/// Statements staged through a scope become visible to other readers only
/// when [`WriteScope::commit`] succeeds; aborting (or failing before commit)
/// leaves the datastore exactly as it was when the scope was opened. This is
/// what lets the ownership writes touch a place node and its owner's
/// back-reference list with all-or-nothing semantics despite the absence of
/// native cross-node constraints.
pub struct WriteScope {
    txn: neo4rs::Txn,
}

impl WriteScope {
    /// Open a new scope on the given connection.
    pub async fn begin(graph: &Graph) -> Result<Self, RepoError> {
        let txn = graph
            .start_txn()
            .await
            .map_err(|e| RepoError::unavailable(e))?;
        Ok(Self { txn })
    }

    /// Stage a statement that does not need to return rows.
    pub async fn run(&mut self, query: Query) -> Result<(), RepoError> {
        self.txn
            .run(query)
            .await
            .map_err(|e| RepoError::database("scoped write", e))
    }

    /// Stage a statement and require that it matched something.
    ///
    /// Statements used inside the ownership writes `RETURN` an id so that a
    /// vanished anchor entity (owner deleted between the precondition check
    /// and the scope) surfaces as `NotFound` and aborts the whole scope
    /// instead of silently writing nothing.
    pub async fn run_expecting_row(
        &mut self,
        query: Query,
        entity_type: &'static str,
        id: &str,
    ) -> Result<(), RepoError> {
        let mut result = self
            .txn
            .execute(query)
            .await
            .map_err(|e| RepoError::database("scoped write", e))?;

        if result
            .next(self.txn.handle())
            .await
            .map_err(|e| RepoError::database("scoped write", e))?
            .is_none()
        {
            return Err(RepoError::not_found(entity_type, id.to_string()));
        }

        Ok(())
    }

    /// Make every staged write visible at once.
    pub async fn commit(self) -> Result<(), RepoError> {
        self.txn
            .commit()
            .await
            .map_err(|e| RepoError::database("commit", e))
    }

    /// Discard every staged write.
    pub async fn abort(self) -> Result<(), RepoError> {
        self.txn
            .rollback()
            .await
            .map_err(|e| RepoError::database("rollback", e))
    }
}
