use std::future::Future;

use chrono::{DateTime, Utc};
use common::{Clock, DocumentNumber};
use sea_orm::prelude::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};
use tracing::info;

use crate::numbering::{NumberedEntity, lock_day_sequence, next_document_number};
use crate::state::AppState;

/// A validated document ready to be written.
pub trait NewDocument: Sync {
    type Entity: NumberedEntity;
    type Output: Send;

    /// Insert the parent row carrying `number`, then every child row.
    fn insert(
        &self,
        txn: &DatabaseTransaction,
        number: &str,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<Self::Output, DbErr>> + Send;
}

/// Creates, previews and soft-deletes numbered documents.
pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(&state.db, state.clock.as_ref())
    }

    /// Number and persist `draft` in one transaction.
    ///
    /// The day's sequence for the document kind is locked first, so the
    /// lookup, the parent insert and the child inserts of concurrent
    /// creations run one after another. Everything commits together or not
    /// at all. Past `999` the timestamp-derived number is written even if a
    /// live row already carries it.
    pub async fn create<D: NewDocument>(
        &self,
        draft: &D,
    ) -> Result<(DocumentNumber, D::Output), DbErr> {
        let kind = <D::Entity as NumberedEntity>::KIND;
        let now = self.clock.now();

        let txn = self.db.begin().await?;
        lock_day_sequence::<D::Entity, _>(&txn, now.date_naive()).await?;
        let number = next_document_number::<D::Entity, _>(&txn, now).await?;
        let output = draft.insert(&txn, &number.to_string(), now.to_utc()).await?;
        txn.commit().await?;

        info!(%kind, %number, "Document created");
        Ok((number, output))
    }

    /// Number the next document of `E` would receive now. Nothing is reserved.
    pub async fn preview<E: NumberedEntity>(&self) -> Result<DocumentNumber, DbErr> {
        next_document_number::<E, _>(self.db, self.clock.now()).await
    }

    /// Mark a live document deleted. Returns `false` if no live row has `id`.
    ///
    /// The number stays on the row but no longer counts toward the daily
    /// sequence.
    pub async fn soft_delete<E: NumberedEntity>(&self, id: i32) -> Result<bool, DbErr> {
        let now = self.clock.now().to_utc();
        let result = E::update_many()
            .col_expr(E::is_deleted_column(), Expr::value(true))
            .col_expr(E::updated_at_column(), Expr::value(now))
            .filter(E::id_column().eq(id))
            .filter(E::is_deleted_column().eq(false))
            .exec(self.db)
            .await?;

        if result.rows_affected > 0 {
            info!(kind = %E::KIND, id, "Document soft-deleted");
        }
        Ok(result.rows_affected > 0)
    }
}
