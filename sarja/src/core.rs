use std::sync::Arc;

use sarja_core::store::{MetadataProvider, PointProvider, SeriesBackend};
use sarja_core::types::{SarjaConfig, SarjaError};

/// Engine that answers series queries against a registered storage backend.
pub struct Sarja {
    pub(crate) backend: Arc<dyn SeriesBackend>,
    pub(crate) cfg: SarjaConfig,
}

impl std::fmt::Debug for Sarja {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sarja")
            .field("backend", &"<dyn SeriesBackend>")
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Sarja` engine with custom configuration.
pub struct SarjaBuilder {
    backend: Option<Arc<dyn SeriesBackend>>,
    cfg: SarjaConfig,
}

impl Default for SarjaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SarjaBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - No backend is registered; you must provide one via [`with_backend`].
    /// - Defaults are conservative: a 1000-row page-size ceiling and a 5s
    ///   per-store-call timeout.
    ///
    /// [`with_backend`]: SarjaBuilder::with_backend
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: None,
            cfg: SarjaConfig::default(),
        }
    }

    /// Register the storage backend serving series metadata and observations.
    ///
    /// The backend must advertise both the metadata and the point-retrieval
    /// capabilities; [`build`](SarjaBuilder::build) verifies this.
    #[must_use]
    pub fn with_backend(mut self, backend: Arc<dyn SeriesBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the upper bound accepted for `page_size` on data queries.
    ///
    /// Behavior and trade-offs:
    /// - Larger pages mean fewer round trips but bigger response bodies; the
    ///   bound caps worst-case envelope size, not the underlying fetch.
    #[must_use]
    pub const fn max_page_size(mut self, limit: u32) -> Self {
        self.cfg.max_page_size = limit;
        self
    }

    /// Set the per-store-call timeout; `None` removes the bound.
    ///
    /// Behavior and trade-offs:
    /// - Applied independently to the metadata fetch and the point fetch.
    /// - On expiry the query fails with `UpstreamUnavailable`; the engine
    ///   never returns partial results.
    #[must_use]
    pub const fn store_timeout(mut self, timeout: Option<std::time::Duration>) -> Self {
        self.cfg.store_timeout = timeout;
        self
    }

    /// Replace the whole configuration at once.
    #[must_use]
    pub fn config(mut self, cfg: SarjaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Sarja` engine.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if no backend was registered, if the
    /// backend does not advertise both store capabilities, or if
    /// `max_page_size` is zero.
    pub fn build(self) -> Result<Sarja, SarjaError> {
        let Some(backend) = self.backend else {
            return Err(SarjaError::invalid_parameter(
                "no backend registered; add one via with_backend(...)",
            ));
        };
        if backend.as_metadata_provider().is_none() {
            return Err(SarjaError::invalid_parameter(format!(
                "backend {} does not provide series metadata",
                backend.name()
            )));
        }
        if backend.as_point_provider().is_none() {
            return Err(SarjaError::invalid_parameter(format!(
                "backend {} does not provide observations",
                backend.name()
            )));
        }
        if self.cfg.max_page_size == 0 {
            return Err(SarjaError::invalid_parameter(
                "max_page_size must be greater than or equal to 1",
            ));
        }
        Ok(Sarja {
            backend,
            cfg: self.cfg,
        })
    }
}

/// Normalize store-raised errors: `NotFound` and already-tagged upstream
/// failures pass through, anything else is tagged as an upstream failure of
/// the named store.
pub(crate) fn tag_err(store: &'static str, e: SarjaError) -> SarjaError {
    match e {
        e @ (SarjaError::NotFound { .. } | SarjaError::UpstreamUnavailable { .. }) => e,
        other => SarjaError::upstream(store, other.to_string()),
    }
}

impl Sarja {
    /// Start building a new `Sarja` engine.
    ///
    /// Typical usage registers a backend and adjusts limits, e.g.:
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let engine = sarja::Sarja::builder()
    ///     .with_backend(Arc::new(backend))
    ///     .max_page_size(500)
    ///     .store_timeout(Some(std::time::Duration::from_secs(2)))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> SarjaBuilder {
        SarjaBuilder::new()
    }

    pub(crate) fn metadata_provider(&self) -> &dyn MetadataProvider {
        self.backend
            .as_metadata_provider()
            .expect("capability verified at build")
    }

    pub(crate) fn point_provider(&self) -> &dyn PointProvider {
        self.backend
            .as_point_provider()
            .expect("capability verified at build")
    }

    /// Wrap a store future with the configured timeout and standardized error
    /// tagging.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sarja::core::store_call",
            skip(self, fut),
            fields(store = store),
        )
    )]
    pub(crate) async fn store_call<T, Fut>(
        &self,
        store: &'static str,
        fut: Fut,
    ) -> Result<T, SarjaError>
    where
        Fut: core::future::Future<Output = Result<T, SarjaError>>,
    {
        let res = if let Some(timeout) = self.cfg.store_timeout {
            match tokio::time::timeout(timeout, fut).await {
                Ok(r) => r,
                Err(_) => {
                    return Err(SarjaError::upstream(
                        store,
                        format!("timed out after {}ms", timeout.as_millis()),
                    ));
                }
            }
        } else {
            fut.await
        };
        res.map_err(|e| tag_err(store, e))
    }
}
