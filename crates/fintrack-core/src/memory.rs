//! In-memory credential store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::trace;

use crate::traits::{CredentialKey, CredentialStore};
use crate::Result;

/// A process-local [`CredentialStore`].
///
/// Cheap to clone; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    entries: Arc<RwLock<HashMap<CredentialKey, String>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a credential pair.
    pub fn with_tokens(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(CredentialKey::Access, access.into());
        entries.insert(CredentialKey::Refresh, refresh.into());
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: CredentialKey) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(&key).cloned())
    }

    async fn set(&self, key: CredentialKey, value: &str) -> Result<()> {
        trace!(%key, "storing credential");
        self.entries.write().await.insert(key, value.to_string());
        Ok(())
    }

    async fn remove(&self, key: CredentialKey) -> Result<()> {
        trace!(%key, "removing credential");
        self.entries.write().await.remove(&key);
        Ok(())
    }
}
