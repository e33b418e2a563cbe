use std::sync::Arc;

use deadpool_diesel::sqlite::{Manager, Pool, Runtime};

use crate::Result;
use crate::error::Error;
use crate::org::{OrgRepo, OrgRepoable};

pub fn create_db_pool(database_url: &str) -> Result<Pool> {
    let manager = Manager::new(database_url, Runtime::Tokio1);
    Pool::builder(manager)
        .max_size(8)
        .build()
        .map_err(|e| Error::DbPoolBuild { msg: e.to_string() })
}

pub struct DbMapper {
    pub orgs: Arc<dyn OrgRepoable>,
}

pub fn create_db_mapper(database_url: &str) -> Result<DbMapper> {
    let pool = create_db_pool(database_url)?;
    Ok(DbMapper {
        orgs: Arc::new(OrgRepo::new(pool)),
    })
}

#[cfg(feature = "test")]
pub fn create_test_db_mapper() -> DbMapper {
    use crate::org::{OrgTestRepo, TEST_ORGS_COUNT};

    DbMapper {
        orgs: Arc::new(OrgTestRepo::new(TEST_ORGS_COUNT)),
    }
}

#[cfg(feature = "test")]
pub fn create_test_db_mapper_with(orgs: Arc<dyn OrgRepoable>) -> DbMapper {
    DbMapper { orgs }
}
