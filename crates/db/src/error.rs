/// Failure of a storage backing.
///
/// "Not found" is not an error at this layer: lookups return `Option` and
/// the caller decides what absence means.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Any failure reported by PostgreSQL or the connection pool.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The in-memory id sequence for an entity ran past `i64::MAX`.
    #[error("Id sequence exhausted for {0}")]
    SequenceExhausted(&'static str),
}
