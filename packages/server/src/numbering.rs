use chrono::{DateTime, FixedOffset, NaiveDate};
use common::{DocumentKind, DocumentNumber, next_number};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbBackend, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Statement,
};
use tracing::{debug, warn};

use crate::entity::{purchase, quotation, sale, service_job};

/// A document table whose rows carry a date-scoped number and a soft-delete flag.
pub trait NumberedEntity: EntityTrait {
    const KIND: DocumentKind;

    fn id_column() -> Self::Column;
    fn number_column() -> Self::Column;
    fn is_deleted_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;
}

impl NumberedEntity for service_job::Entity {
    const KIND: DocumentKind = DocumentKind::ServiceJob;

    fn id_column() -> Self::Column {
        service_job::Column::Id
    }
    fn number_column() -> Self::Column {
        service_job::Column::JobNumber
    }
    fn is_deleted_column() -> Self::Column {
        service_job::Column::IsDeleted
    }
    fn updated_at_column() -> Self::Column {
        service_job::Column::UpdatedAt
    }
}

impl NumberedEntity for purchase::Entity {
    const KIND: DocumentKind = DocumentKind::Purchase;

    fn id_column() -> Self::Column {
        purchase::Column::Id
    }
    fn number_column() -> Self::Column {
        purchase::Column::BillNumber
    }
    fn is_deleted_column() -> Self::Column {
        purchase::Column::IsDeleted
    }
    fn updated_at_column() -> Self::Column {
        purchase::Column::UpdatedAt
    }
}

impl NumberedEntity for sale::Entity {
    const KIND: DocumentKind = DocumentKind::Sale;

    fn id_column() -> Self::Column {
        sale::Column::Id
    }
    fn number_column() -> Self::Column {
        sale::Column::BillNumber
    }
    fn is_deleted_column() -> Self::Column {
        sale::Column::IsDeleted
    }
    fn updated_at_column() -> Self::Column {
        sale::Column::UpdatedAt
    }
}

impl NumberedEntity for quotation::Entity {
    const KIND: DocumentKind = DocumentKind::Quotation;

    fn id_column() -> Self::Column {
        quotation::Column::Id
    }
    fn number_column() -> Self::Column {
        quotation::Column::QuotationNumber
    }
    fn is_deleted_column() -> Self::Column {
        quotation::Column::IsDeleted
    }
    fn updated_at_column() -> Self::Column {
        quotation::Column::UpdatedAt
    }
}

/// Greatest live number of `E` starting with `day_prefix`.
///
/// Every number for one kind and day has the same length, so descending
/// string order is descending sequence order. Soft-deleted rows are skipped.
pub async fn latest_live_number<E, C>(conn: &C, day_prefix: &str) -> Result<Option<String>, DbErr>
where
    E: NumberedEntity,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::is_deleted_column().eq(false))
        .filter(E::number_column().starts_with(day_prefix))
        .order_by_desc(E::number_column())
        .select_only()
        .column(E::number_column())
        .into_tuple::<String>()
        .one(conn)
        .await
}

/// Block until no other transaction is numbering `E` documents for `date`.
///
/// Takes a transaction-scoped Postgres advisory lock keyed on the day prefix,
/// released on commit or rollback. Must run inside the transaction that
/// performs the lookup and the insert.
pub async fn lock_day_sequence<E, C>(conn: &C, date: NaiveDate) -> Result<(), DbErr>
where
    E: NumberedEntity,
    C: ConnectionTrait,
{
    let day_prefix = DocumentNumber::day_prefix(E::KIND, date);
    conn.execute_raw(Statement::from_sql_and_values(
        DbBackend::Postgres,
        "SELECT pg_advisory_xact_lock(hashtext($1))",
        [day_prefix.into()],
    ))
    .await?;
    Ok(())
}

/// Number the next document of `E` would receive at `now`.
///
/// Performs one read and no writes. Callers that insert with the result
/// should hold [`lock_day_sequence`] in the same transaction.
pub async fn next_document_number<E, C>(
    conn: &C,
    now: DateTime<FixedOffset>,
) -> Result<DocumentNumber, DbErr>
where
    E: NumberedEntity,
    C: ConnectionTrait,
{
    let day_prefix = DocumentNumber::day_prefix(E::KIND, now.date_naive());
    let latest = latest_live_number::<E, _>(conn, &day_prefix).await?;
    let number = next_number(E::KIND, now, latest.as_deref());

    if number.is_fallback() {
        warn!(
            kind = %E::KIND,
            latest = latest.as_deref().unwrap_or_default(),
            number = %number,
            "Daily sequence exhausted, using timestamp suffix"
        );
    } else {
        debug!(kind = %E::KIND, number = %number, "Computed next document number");
    }

    Ok(number)
}
