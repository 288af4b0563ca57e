use crate::domain::errors::DomainError;

const IDX_STORE_SLUG: &str = "stores.slug";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                // SQLite reports the offending column in the message rather
                // than a constraint name.
                return if db_err.message().contains(IDX_STORE_SLUG) {
                    DomainError::Conflict("slug already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("store not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub fn map_json(err: serde_json::Error) -> DomainError {
    DomainError::Persistence(format!("malformed stored json: {err}"))
}
