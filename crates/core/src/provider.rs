//! # Node Display Name Providers
//!
//! Node scopes are validated against a list of display names that is produced
//! outside this crate. Producing the list can be slow and can fail, so it is
//! abstracted behind the [`DisplayNameProvider`] trait. Validation never fails
//! because of a provider: a failed fetch means no node scopes are known.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::errors::ProviderError;

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;

/// Source of the currently valid node display names, e.g. `"Mattermost"`.
///
/// # Example Implementation
///
/// ```rust
/// use async_trait::async_trait;
/// use title_warden_core::errors::ProviderError;
/// use title_warden_core::provider::DisplayNameProvider;
///
/// struct EnvDisplayNames;
///
/// #[async_trait]
/// impl DisplayNameProvider for EnvDisplayNames {
///     async fn display_names(&self) -> Result<Vec<String>, ProviderError> {
///         let value = std::env::var("NODE_NAMES")
///             .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
///         Ok(value.split(';').map(str::to_string).collect())
///     }
/// }
/// ```
#[async_trait]
pub trait DisplayNameProvider: Send + Sync {
    /// Fetches the display names, without the node suffix.
    async fn display_names(&self) -> Result<Vec<String>, ProviderError>;
}

/// A provider backed by a fixed list of names.
///
/// `StaticDisplayNames::default()` knows no names at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDisplayNames {
    names: Vec<String>,
}

impl StaticDisplayNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[async_trait]
impl DisplayNameProvider for StaticDisplayNames {
    async fn display_names(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.names.clone())
    }
}

/// Wraps a provider so that it is asked at most once successfully.
///
/// Use this when validating many titles against the same list of names.
/// Failed fetches are not cached and will be retried on the next call.
#[derive(Debug)]
pub struct CachedDisplayNames<P> {
    inner: P,
    cache: OnceCell<Vec<String>>,
}

impl<P: DisplayNameProvider> CachedDisplayNames<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: OnceCell::new(),
        }
    }

    /// Whether a list of names has been cached.
    pub fn is_cached(&self) -> bool {
        self.cache.initialized()
    }
}

#[async_trait]
impl<P: DisplayNameProvider> DisplayNameProvider for CachedDisplayNames<P> {
    async fn display_names(&self) -> Result<Vec<String>, ProviderError> {
        let names = self
            .cache
            .get_or_try_init(|| self.inner.display_names())
            .await?;
        Ok(names.clone())
    }
}

/// Fetches display names, turning a provider failure into `None`.
///
/// The failure is logged as a warning and otherwise swallowed.
pub async fn fetch_display_names<P>(provider: &P) -> Option<Vec<String>>
where
    P: DisplayNameProvider + ?Sized,
{
    match provider.display_names().await {
        Ok(names) => {
            debug!(count = names.len(), "Fetched node display names");
            Some(names)
        }
        Err(e) => {
            warn!(error = %e, "Failed to generate list of node display names");
            None
        }
    }
}
