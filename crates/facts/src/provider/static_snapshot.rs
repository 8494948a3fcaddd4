use async_trait::async_trait;

use crate::errors::FactsError;
use crate::models::{FactKey, FactMap, FactValue};

use super::CurrentSnapshotProvider;

const PROVIDER_ID: &str = "STATIC";

/// Provider that always returns the same snapshot.
///
/// Useful when no live source is configured, and as a test double.
#[derive(Clone, Debug, Default)]
pub struct StaticSnapshotProvider {
    snapshot: FactMap,
}

impl StaticSnapshotProvider {
    pub fn new(snapshot: FactMap) -> Self {
        Self { snapshot }
    }

    /// A provider with no current values.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl<K, V> FromIterator<(K, V)> for StaticSnapshotProvider
where
    K: Into<FactKey>,
    V: Into<FactValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[async_trait]
impl CurrentSnapshotProvider for StaticSnapshotProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_current(&self) -> Result<FactMap, FactsError> {
        Ok(self.snapshot.clone())
    }
}
