use sea_orm::{DbErr, SqlErr};

/// True when `err` is a unique-key violation on the index named `constraint`.
pub fn is_unique_violation(err: &DbErr, constraint: &str) -> bool {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return detail.contains(constraint);
    }

    let msg = err.to_string().to_lowercase();
    (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains(constraint)
}
