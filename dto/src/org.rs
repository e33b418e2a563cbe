use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgDto {
    pub id: i32,
    pub name: String,
    pub industry: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub subscription_tier: String,
    pub created_at: i64,
}

/// Single row produced by the organizations count statement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrgCountDto {
    pub count: i64,
}
