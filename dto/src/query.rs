use serde::{Deserialize, Serialize};

/// Result envelope produced by the query executor.
///
/// A statement that fails at the database level is not an `Err`, it comes back
/// with `is_error` set and the rows empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResultDto<T> {
    pub data: Vec<T>,
    pub is_error: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> QueryResultDto<T> {
    pub fn ok(data: Vec<T>) -> Self {
        Self {
            data,
            is_error: false,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            is_error: true,
            message: Some(message.into()),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        if !self.is_error {
            return None;
        }
        Some(self.message.as_deref().unwrap_or("Query failed"))
    }
}
