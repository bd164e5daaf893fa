//! Client directory repository implementation.

use sqlx::PgPool;

use constructia_core::error::{AppError, ErrorKind};
use constructia_core::result::AppResult;
use constructia_entity::user::ClientAccount;

/// SQLSTATE for insufficient privilege (permission denied).
const SQLSTATE_INSUFFICIENT_PRIVILEGE: &str = "42501";

/// Repository for lookups against the remote `clients` table.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    /// Create a new client repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a client by email. Case-sensitive exact match, at most one
    /// row consulted.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<ClientAccount>> {
        sqlx::query_as::<_, ClientAccount>("SELECT * FROM clients WHERE email = $1 LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_query_error)
    }
}

/// Map a sqlx error to the application taxonomy.
///
/// Policy-style rejections (RLS, missing grants) become
/// [`ErrorKind::Authorization`] so the authenticator can treat them as a
/// negative match; everything else is a database error.
fn classify_query_error(err: sqlx::Error) -> AppError {
    if is_policy_denial(&err) {
        return AppError::with_source(
            ErrorKind::Authorization,
            "Query rejected by access policy",
            err,
        );
    }
    AppError::with_source(ErrorKind::Database, "Failed to query clients", err)
}

fn is_policy_denial(err: &sqlx::Error) -> bool {
    let sqlx::Error::Database(db_err) = err else {
        return false;
    };

    if db_err.code().as_deref() == Some(SQLSTATE_INSUFFICIENT_PRIVILEGE) {
        return true;
    }

    let message = db_err.message().to_lowercase();
    message.contains("permission") || message.contains("rls") || message.contains("policy")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_policy_denials() {
        let err = sqlx::Error::PoolTimedOut;
        assert!(!is_policy_denial(&err));
        assert_eq!(classify_query_error(err).kind, ErrorKind::Database);
    }
}
