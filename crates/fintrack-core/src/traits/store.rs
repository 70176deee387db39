//! Credential store trait.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{AccessToken, RefreshToken, Result, TokenPair};

/// The fixed keys credentials are stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    Access,
    Refresh,
}

impl CredentialKey {
    /// Returns the storage key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKey::Access => "access",
            CredentialKey::Refresh => "refresh",
        }
    }
}

impl fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value storage for the access/refresh credential pair.
///
/// Every outgoing request reads from the store, so implementations must be
/// cheap to read. Errors from any method abort the operation that needed
/// the store.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read a credential, `None` if it is not stored.
    async fn get(&self, key: CredentialKey) -> Result<Option<String>>;

    /// Store or overwrite a credential.
    async fn set(&self, key: CredentialKey, value: &str) -> Result<()>;

    /// Delete a credential. Deleting a missing key is not an error.
    async fn remove(&self, key: CredentialKey) -> Result<()>;

    /// Read the access token. An empty value counts as absent.
    async fn access_token(&self) -> Result<Option<AccessToken>> {
        Ok(self
            .get(CredentialKey::Access)
            .await?
            .filter(|s| !s.is_empty())
            .map(AccessToken::new))
    }

    /// Read the refresh token. An empty value counts as absent.
    async fn refresh_token(&self) -> Result<Option<RefreshToken>> {
        Ok(self
            .get(CredentialKey::Refresh)
            .await?
            .filter(|s| !s.is_empty())
            .map(RefreshToken::new))
    }

    /// Store both tokens issued at login.
    async fn save_pair(&self, pair: &TokenPair) -> Result<()> {
        self.set(CredentialKey::Access, pair.access.as_str()).await?;
        self.set(CredentialKey::Refresh, pair.refresh.as_str()).await
    }

    /// Delete both tokens.
    async fn clear(&self) -> Result<()> {
        self.remove(CredentialKey::Access).await?;
        self.remove(CredentialKey::Refresh).await
    }
}

#[async_trait]
impl<T: CredentialStore + ?Sized> CredentialStore for Arc<T> {
    async fn get(&self, key: CredentialKey) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: CredentialKey, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: CredentialKey) -> Result<()> {
        (**self).remove(key).await
    }
}
