//! Timeout utilities for the narrative-generation call.
//!
//! Model inference is the only potentially slow step in the pipeline, so it
//! gets a deadline. A timeout degrades to an error report upstream; it never
//! aborts the process.

use crate::error::{ReportError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error};

/// Default narrative-generation timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Timeout configuration for generation operations.
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Maximum duration for the operation
    pub duration: Duration,
    /// Whether to log timeout warnings
    pub log_warnings: bool,
    /// Operation name for logging
    pub operation_name: String,
}

impl TimeoutConfig {
    /// Create a new timeout configuration
    pub fn new(seconds: u64, operation: impl Into<String>) -> Self {
        Self {
            duration: Duration::from_secs(seconds),
            log_warnings: true,
            operation_name: operation.into(),
        }
    }

    /// Create a default timeout configuration (30 seconds)
    pub fn default_timeout(operation: impl Into<String>) -> Self {
        Self::new(DEFAULT_TIMEOUT_SECONDS, operation)
    }
}

/// Execute an async operation with a timeout
pub async fn with_timeout<T, F>(config: TimeoutConfig, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    debug!(
        "Starting operation '{}' with timeout of {}s",
        config.operation_name,
        config.duration.as_secs()
    );

    match timeout(config.duration, future).await {
        Ok(result) => {
            debug!(
                "Operation '{}' completed successfully",
                config.operation_name
            );
            result
        }
        Err(_) => {
            let msg = format!(
                "Operation '{}' timed out after {}s",
                config.operation_name,
                config.duration.as_secs()
            );

            if config.log_warnings {
                error!("{}", msg);
            }

            Err(ReportError::Timeout {
                seconds: config.duration.as_secs(),
            })
        }
    }
}
