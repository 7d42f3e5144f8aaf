//! Liveness check payload.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Version reported by the health check.
pub const API_VERSION: &str = "1.0";

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    /// Local time, ISO-8601 with microseconds
    pub timestamp: String,
    pub version: String,
}

/// Report the service as healthy. Does not touch the message store.
pub fn health() -> HealthStatus {
    HealthStatus {
        status: "healthy".to_string(),
        timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        version: API_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_health() {
        let status = health();

        assert_eq!(status.status, "healthy");
        assert_eq!(status.version, "1.0");
        assert!(NaiveDateTime::parse_from_str(&status.timestamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }
}
