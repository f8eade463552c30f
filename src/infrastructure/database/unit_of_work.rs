//! Unit of Work
//!
//! Transactional boundary for multi-statement writes. Every statement issued
//! through a `TransactionContext` commits together or not at all; dropping
//! the context without committing rolls the transaction back.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::shared::error::AppError;

/// Wraps a SQLx transaction borrowed from the pool.
pub struct TransactionContext {
    tx: Transaction<'static, Postgres>,
    label: &'static str,
}

impl TransactionContext {
    /// Begin a transaction on the pool. `label` names the unit of work in logs.
    pub async fn begin(pool: &PgPool, label: &'static str) -> Result<Self, AppError> {
        let tx = pool.begin().await.map_err(AppError::Database)?;
        tracing::trace!(unit_of_work = label, "transaction started");
        Ok(Self { tx, label })
    }

    /// Connection to run statements on inside this transaction.
    pub fn executor(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Commit the transaction.
    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await.map_err(AppError::Database)?;
        tracing::trace!(unit_of_work = self.label, "transaction committed");
        Ok(())
    }

    /// Roll back the transaction explicitly.
    pub async fn rollback(self) -> Result<(), AppError> {
        self.tx.rollback().await.map_err(AppError::Database)?;
        tracing::debug!(unit_of_work = self.label, "transaction rolled back");
        Ok(())
    }
}
