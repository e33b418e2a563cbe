use async_trait::async_trait;
use deadpool_diesel::sqlite::Pool;
use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::{QueryDsl, SelectableHelper};

use crate::Result;
use crate::query::execute_query;
use crate::schema::organizations::dsl;
use dto::org::{OrgCountDto, OrgDto};
use dto::query::QueryResultDto;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::organizations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Organization {
    pub id: i32,
    pub name: String,
    pub industry: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub subscription_tier: String,
    pub created_at: i64,
}

impl From<Organization> for OrgDto {
    fn from(org: Organization) -> Self {
        OrgDto {
            id: org.id,
            name: org.name,
            industry: org.industry,
            address: org.address,
            phone: org.phone,
            email: org.email,
            subscription_tier: org.subscription_tier,
            created_at: org.created_at,
        }
    }
}

/// Read-only access to organizations.
#[async_trait]
pub trait OrgRepoable: Send + Sync {
    /// A page of organizations ordered by name
    async fn list(&self, limit: i64, offset: i64) -> Result<QueryResultDto<OrgDto>>;

    /// Total number of organizations, as a single row
    async fn count(&self) -> Result<QueryResultDto<OrgCountDto>>;
}

pub struct OrgRepo {
    db_pool: Pool,
}

impl OrgRepo {
    pub fn new(db_pool: Pool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl OrgRepoable for OrgRepo {
    async fn list(&self, limit: i64, offset: i64) -> Result<QueryResultDto<OrgDto>> {
        execute_query(&self.db_pool, "organizations", move |conn| {
            dsl::organizations
                .select(Organization::as_select())
                .order(dsl::name.asc())
                .limit(limit)
                .offset(offset)
                .load::<Organization>(conn)
                .map(|rows| rows.into_iter().map(OrgDto::from).collect())
        })
        .await
    }

    async fn count(&self) -> Result<QueryResultDto<OrgCountDto>> {
        execute_query(&self.db_pool, "organizations", move |conn| {
            dsl::organizations
                .select(count_star())
                .get_result::<i64>(conn)
                .map(|count| vec![OrgCountDto { count }])
        })
        .await
    }
}

#[cfg(feature = "test")]
pub const TEST_ORGS_COUNT: usize = 25;

#[cfg(feature = "test")]
pub const TEST_CREATED_AT: i64 = 1_714_521_600;

#[cfg(feature = "test")]
pub fn create_test_org(id: i32) -> OrgDto {
    OrgDto {
        id,
        name: format!("Test Org {:02}", id),
        industry: "Logistics".to_string(),
        address: format!("{} Harbor Road", id),
        phone: format!("555-01{:02}", id),
        email: format!("contact{}@example.com", id),
        subscription_tier: "basic".to_string(),
        created_at: TEST_CREATED_AT,
    }
}

/// In-memory organizations, already sorted by name
#[cfg(feature = "test")]
pub struct OrgTestRepo {
    orgs: Vec<OrgDto>,
}

#[cfg(feature = "test")]
impl OrgTestRepo {
    pub fn new(total: usize) -> Self {
        let orgs = (1..=total as i32).map(create_test_org).collect();
        Self { orgs }
    }
}

#[cfg(feature = "test")]
#[async_trait]
impl OrgRepoable for OrgTestRepo {
    async fn list(&self, limit: i64, offset: i64) -> Result<QueryResultDto<OrgDto>> {
        let rows = self
            .orgs
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();
        Ok(QueryResultDto::ok(rows))
    }

    async fn count(&self) -> Result<QueryResultDto<OrgCountDto>> {
        Ok(QueryResultDto::ok(vec![OrgCountDto {
            count: self.orgs.len() as i64,
        }]))
    }
}

/// Listing fails to reach the database, counting works
#[cfg(feature = "test")]
pub struct OrgFailingRepo {}

#[cfg(feature = "test")]
#[async_trait]
impl OrgRepoable for OrgFailingRepo {
    async fn list(&self, _limit: i64, _offset: i64) -> Result<QueryResultDto<OrgDto>> {
        Err("database is unavailable".into())
    }

    async fn count(&self) -> Result<QueryResultDto<OrgCountDto>> {
        Ok(QueryResultDto::ok(vec![OrgCountDto {
            count: TEST_ORGS_COUNT as i64,
        }]))
    }
}

/// Both statements are rejected by the database
#[cfg(feature = "test")]
pub struct OrgQueryErrorRepo {}

#[cfg(feature = "test")]
pub const TEST_QUERY_ERROR: &str =
    "Error querying organizations: no such table: organizations";

#[cfg(feature = "test")]
#[async_trait]
impl OrgRepoable for OrgQueryErrorRepo {
    async fn list(&self, _limit: i64, _offset: i64) -> Result<QueryResultDto<OrgDto>> {
        Ok(QueryResultDto::error(TEST_QUERY_ERROR))
    }

    async fn count(&self) -> Result<QueryResultDto<OrgCountDto>> {
        Ok(QueryResultDto::error(TEST_QUERY_ERROR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deadpool_diesel::sqlite::{Manager, Runtime};
    use diesel::connection::SimpleConnection;

    const CREATE_TABLE: &str = include_str!(
        "../migrations/2025-05-20-000000_create_organizations/up.sql"
    );

    // A single connection keeps the in-memory database alive between queries
    fn create_memory_pool() -> Pool {
        let manager = Manager::new(":memory:", Runtime::Tokio1);
        Pool::builder(manager).max_size(1).build().unwrap()
    }

    async fn setup(sql: &'static str) -> Pool {
        let pool = create_memory_pool();
        let db = pool.get().await.unwrap();
        db.interact(move |conn| conn.batch_execute(sql))
            .await
            .unwrap()
            .unwrap();
        drop(db);
        pool
    }

    async fn seed(pool: &Pool, names: &[&str]) {
        let statements: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                format!(
                    "INSERT INTO organizations VALUES ({}, '{}', 'Retail', '1 Main St', '555-0100', 'info@example.com', 'pro', 1714521600);",
                    i + 1,
                    name
                )
            })
            .collect();
        let sql = statements.join("\n");
        let db = pool.get().await.unwrap();
        db.interact(move |conn| conn.batch_execute(&sql))
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_orders_by_name() {
        let pool = setup(CREATE_TABLE).await;
        seed(&pool, &["Globex", "Acme", "Initech"]).await;
        let repo = OrgRepo::new(pool);

        let result = repo.list(10, 0).await.unwrap();
        assert!(!result.is_error);

        let names: Vec<&str> = result.data.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Globex", "Initech"]);
    }

    #[tokio::test]
    async fn test_list_applies_limit_and_offset() {
        let pool = setup(CREATE_TABLE).await;
        let names: Vec<String> = (1..=25).map(|i| format!("Org {:02}", i)).collect();
        let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
        seed(&pool, &names).await;
        let repo = OrgRepo::new(pool);

        let page3 = repo.list(10, 20).await.unwrap();
        assert_eq!(page3.data.len(), 5);
        assert_eq!(page3.data[0].name, "Org 21");

        let beyond = repo.list(10, 30).await.unwrap();
        assert!(!beyond.is_error);
        assert!(beyond.data.is_empty());
    }

    #[tokio::test]
    async fn test_count() {
        let pool = setup(CREATE_TABLE).await;
        seed(&pool, &["Acme", "Globex"]).await;
        let repo = OrgRepo::new(pool);

        let result = repo.count().await.unwrap();
        assert!(!result.is_error);
        assert_eq!(result.data, vec![OrgCountDto { count: 2 }]);
    }

    #[tokio::test]
    async fn test_count_empty_table() {
        let pool = setup(CREATE_TABLE).await;
        let repo = OrgRepo::new(pool);

        let result = repo.count().await.unwrap();
        assert_eq!(result.data, vec![OrgCountDto { count: 0 }]);
    }

    #[tokio::test]
    async fn test_missing_table_is_query_error() {
        let pool = setup("SELECT 1;").await;
        let repo = OrgRepo::new(pool);

        let result = repo.list(10, 0).await.unwrap();
        assert!(result.is_error);
        assert!(result.data.is_empty());
        let msg = result.message.unwrap();
        assert!(msg.starts_with("Error querying organizations"));
    }
}
