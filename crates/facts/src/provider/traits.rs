//! Current snapshot provider trait definition.

use async_trait::async_trait;

use crate::errors::FactsError;
use crate::models::FactMap;

/// Source of "right now" fact values.
///
/// The resolver calls [`fetch_current`](Self::fetch_current) once per
/// resolution and treats any error as an empty snapshot, so implementations
/// should report failures rather than retry internally.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use keepsake_facts::provider::CurrentSnapshotProvider;
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl CurrentSnapshotProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_current(&self) -> Result<FactMap, FactsError> {
///         Ok(FactMap::from([(FactKey::Gasoline, "$3.15".into())]))
///     }
/// }
/// ```
#[async_trait]
pub trait CurrentSnapshotProvider: Send + Sync {
    /// Identifier used in logs and diagnostics (e.g. "SHEET").
    fn id(&self) -> &'static str;

    /// Fetch every currently known fact value.
    async fn fetch_current(&self) -> Result<FactMap, FactsError>;
}
