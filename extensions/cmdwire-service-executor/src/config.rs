//! Executor configuration.
//!
//! Transport concerns (broker address, topics, QoS) belong to whatever feeds
//! requests into the executor and are not represented here.

use cmdwire::constants::DEFAULT_MAX_PAYLOAD_SIZE;
use std::time::Duration;

/// The default limit on a single handler execution.
pub const DEFAULT_EXECUTION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Identifies this executor in log output.
    pub executor_id: String,

    /// Requests with larger payloads are rejected with `PayloadTooLarge`
    /// before decoding.
    pub max_payload_size: usize,

    /// Upper bound on a single handler execution. Enforced only with the
    /// `tokio_support` feature; `None` disables it.
    ///
    /// Default: 10 seconds
    pub execution_timeout: Option<Duration>,
}

impl ExecutorConfig {
    pub fn new(executor_id: impl Into<String>) -> Self {
        Self {
            executor_id: executor_id.into(),
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
            execution_timeout: Some(DEFAULT_EXECUTION_TIMEOUT),
        }
    }

    pub fn with_max_payload_size(mut self, max_payload_size: usize) -> Self {
        self.max_payload_size = max_payload_size;
        self
    }

    pub fn with_execution_timeout(mut self, timeout: Duration) -> Self {
        self.execution_timeout = Some(timeout);
        self
    }

    pub fn without_execution_timeout(mut self) -> Self {
        self.execution_timeout = None;
        self
    }
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self::new("cmdwire-executor")
    }
}
