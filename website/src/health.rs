use serde::Serialize;
use tracing::error;

use crate::Result;
use db::db::DbMapper;

#[derive(Serialize)]
pub struct LiveStatus {
    pub status: String,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.checks.is_healthy()
    }
}

impl HealthChecks {
    pub fn new() -> Self {
        Self {
            database: "DOWN".to_string(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.database == "UP"
    }
}

pub async fn check_liveness() -> Result<LiveStatus> {
    // Nothing much to check, if it hits this function, it's alive
    Ok(LiveStatus {
        status: "UP".to_string(),
    })
}

pub async fn check_readiness(db: &DbMapper) -> Result<HealthStatus> {
    let mut checks = HealthChecks::new();
    checks.database = check_database(db).await;

    let mut status = "DOWN".to_string();
    let mut message = "One or more health checks are failing".to_string();

    if checks.is_healthy() {
        status = "UP".to_string();
        message = "All health checks are passing".to_string();
    }

    Ok(HealthStatus {
        status,
        message,
        checks,
    })
}

async fn check_database(db: &DbMapper) -> String {
    match db.orgs.count().await {
        Ok(result) if !result.is_error => "UP".to_string(),
        Ok(result) => {
            error!("{}", result.error_message().unwrap_or("Query failed"));
            "DOWN".to_string()
        }
        Err(e) => {
            error!("{}", e);
            "DOWN".to_string()
        }
    }
}
