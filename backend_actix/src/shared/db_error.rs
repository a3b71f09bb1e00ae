// src/shared/db_error.rs
use sea_orm::DbErr;

/// Coarse Postgres error classes the adapters care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbErrorKind {
    UniqueViolation,
    /// Not-null, foreign key or check constraint.
    ConstraintViolation,
    Other,
}

pub fn classify_db_error(e: &DbErr) -> DbErrorKind {
    let msg = e.to_string().to_lowercase();

    if msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
    {
        DbErrorKind::UniqueViolation
    } else if msg.contains("23502")
        || msg.contains("23503")
        || msg.contains("23514")
        || msg.contains("not-null constraint")
        || msg.contains("foreign key constraint")
        || msg.contains("check constraint")
    {
        DbErrorKind::ConstraintViolation
    } else {
        DbErrorKind::Other
    }
}
