//! In-memory login sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Timestamp};
use crate::domain::user::SessionToken;
use crate::ports::SessionStore;

#[derive(Debug, Clone)]
struct SessionRecord {
    user: AuthenticatedUser,
    expires_at: Timestamp,
}

/// Sessions keyed by token digest.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
    ttl_secs: u64,
}

impl InMemorySessionStore {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl_secs,
        }
    }

    /// Get the number of live and expired sessions still held
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, user: &AuthenticatedUser) -> Result<SessionToken, AuthError> {
        let expires_at = Timestamp::now()
            .plus_secs(self.ttl_secs)
            .ok_or_else(|| AuthError::service_unavailable("session expiry out of range"))?;
        let token = SessionToken::generate();
        let record = SessionRecord {
            user: user.clone(),
            expires_at,
        };
        self.sessions.write().await.insert(token.digest(), record);
        Ok(token)
    }

    async fn validate(&self, token: &SessionToken) -> Result<AuthenticatedUser, AuthError> {
        let digest = token.digest();
        let record = self
            .sessions
            .read()
            .await
            .get(&digest)
            .cloned()
            .ok_or(AuthError::InvalidSession)?;

        if !Timestamp::now().is_before(&record.expires_at) {
            self.sessions.write().await.remove(&digest);
            return Err(AuthError::SessionExpired);
        }

        Ok(record.user)
    }

    async fn revoke(&self, token: &SessionToken) -> Result<(), AuthError> {
        self.sessions.write().await.remove(&token.digest());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(), "edith@example.com")
    }

    #[tokio::test]
    async fn created_session_validates_to_its_user() {
        let store = InMemorySessionStore::new(3600);
        let u = user();
        let token = store.create(&u).await.unwrap();

        assert_eq!(store.validate(&token).await.unwrap(), u);
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let store = InMemorySessionStore::new(3600);
        let result = store.validate(&SessionToken::generate()).await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidSession);
    }

    #[tokio::test]
    async fn revoked_token_is_invalid_and_revoke_is_idempotent() {
        let store = InMemorySessionStore::new(3600);
        let token = store.create(&user()).await.unwrap();

        store.revoke(&token).await.unwrap();
        store.revoke(&token).await.unwrap();

        assert_eq!(
            store.validate(&token).await.unwrap_err(),
            AuthError::InvalidSession
        );
    }

    #[tokio::test]
    async fn zero_ttl_session_is_expired_and_dropped() {
        let store = InMemorySessionStore::new(0);
        let token = store.create(&user()).await.unwrap();

        assert_eq!(
            store.validate(&token).await.unwrap_err(),
            AuthError::SessionExpired
        );
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn unrepresentable_ttl_fails_without_storing() {
        let store = InMemorySessionStore::new(u64::MAX);
        let err = store.create(&user()).await.unwrap_err();

        assert!(matches!(err, AuthError::ServiceUnavailable(_)));
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn raw_token_is_not_stored() {
        let store = InMemorySessionStore::new(3600);
        let token = store.create(&user()).await.unwrap();

        let sessions = store.sessions.read().await;
        assert!(!sessions.contains_key(token.as_str()));
        assert!(sessions.contains_key(&token.digest()));
    }
}
