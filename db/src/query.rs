use deadpool_diesel::sqlite::Pool;
use diesel::SqliteConnection;
use snafu::ResultExt;
use tracing::warn;

use crate::Result;
use crate::error::{DbInteractSnafu, DbPoolSnafu};
use dto::query::QueryResultDto;

/// Runs a read query on a pooled connection.
///
/// Failing to get or use a connection is returned as `Err`. A statement that
/// the database rejects is reported through `QueryResultDto::is_error`.
pub async fn execute_query<T, F>(db_pool: &Pool, table: &str, query: F) -> Result<QueryResultDto<T>>
where
    T: Send + 'static,
    F: FnOnce(&mut SqliteConnection) -> diesel::QueryResult<Vec<T>> + Send + 'static,
{
    let db = db_pool.get().await.context(DbPoolSnafu)?;

    let select_res = db.interact(query).await.context(DbInteractSnafu)?;

    match select_res {
        Ok(rows) => Ok(QueryResultDto::ok(rows)),
        Err(e) => {
            let msg = format!("Error querying {}: {}", table, e);
            warn!("{}", msg);
            Ok(QueryResultDto::error(msg))
        }
    }
}
