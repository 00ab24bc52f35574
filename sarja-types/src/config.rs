//! Configuration types for the sarja engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `Sarja` engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarjaConfig {
    /// Upper bound accepted for `page_size` on data queries.
    pub max_page_size: u32,
    /// Timeout applied to each individual store call.
    ///
    /// `None` removes the bound; an expired call surfaces as an upstream
    /// failure, never as partial data.
    pub store_timeout: Option<Duration>,
}

impl Default for SarjaConfig {
    fn default() -> Self {
        Self {
            max_page_size: 1000,
            store_timeout: Some(Duration::from_secs(5)),
        }
    }
}
