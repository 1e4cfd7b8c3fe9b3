//! Resolves a lightbox item's full-size image.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Image not found: {0}")]
    NotFound(String),
    #[error("Failed to load image {locator}: {reason}")]
    Failed { locator: String, reason: String },
}

/// Fetches or decodes the image behind a locator. Completion order is not
/// guaranteed; the lightbox discards results it no longer waits for.
#[async_trait]
pub trait ImageResolver: Send + Sync {
    fn name(&self) -> &'static str;

    async fn resolve(&self, locator: &str) -> Result<(), ResolveError>;
}

/// Accepts any non-empty locator after `delay`.
#[derive(Debug, Clone)]
pub struct PassthroughResolver {
    delay: Duration,
}

impl PassthroughResolver {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ImageResolver for PassthroughResolver {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    async fn resolve(&self, locator: &str) -> Result<(), ResolveError> {
        tokio::time::sleep(self.delay).await;
        if locator.trim().is_empty() {
            return Err(ResolveError::NotFound(locator.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn passthrough_resolves_after_delay() {
        let resolver = PassthroughResolver::new(Duration::from_millis(150));
        let started = tokio::time::Instant::now();
        assert!(resolver.resolve("images/portfolio/family-1.jpg").await.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_locator_is_not_found() {
        let resolver = PassthroughResolver::new(Duration::ZERO);
        assert_eq!(
            resolver.resolve("").await,
            Err(ResolveError::NotFound(String::new()))
        );
    }
}
