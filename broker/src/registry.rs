use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::store::Store;
use crate::subscription::{Subscription, SubscriptionModel};

/// Outcome of a create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Exists,
}

/// Outcome of a modify request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifyOutcome {
    Success,
    DoesNotExist,
    AlreadyInUse,
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    DoesNotExist,
}

/// The canonical in-memory view of all subscriptions, backed by the
/// subscription store.
///
/// One registry-wide mutex protects the token map. Stream attach and detach
/// also go through the registry, so they serialise against `modify` and
/// `delete`; a handle obtained before a destructive replace keeps its inbox
/// but the registry no longer routes anything new through it.
pub struct SubscriptionRegistry {
    store: Store<SubscriptionModel>,
    subscriptions: Mutex<HashMap<String, Arc<Subscription>>>,
    inbox_capacity: usize,
}

impl SubscriptionRegistry {
    /// Loads every persisted subscription into memory. A record whose
    /// patterns no longer compile fails the load; the registry never starts
    /// from a partial view.
    pub async fn load(
        store: Store<SubscriptionModel>,
        inbox_capacity: usize,
    ) -> Result<Self, Error> {
        let mut subscriptions = HashMap::new();
        for model in store.get_all().await? {
            let subscription = Arc::new(Subscription::new(&model, inbox_capacity)?);
            subscriptions.insert(model.token, subscription);
        }
        tracing::debug!(count = subscriptions.len(), "loaded subscriptions");
        Ok(Self {
            store,
            subscriptions: Mutex::new(subscriptions),
            inbox_capacity,
        })
    }

    /// Creates a subscription with an empty topic list.
    pub async fn create(&self, token: &str) -> Result<CreateOutcome, Error> {
        let mut subscriptions = self.subscriptions.lock().await;
        if subscriptions.contains_key(token) {
            tracing::debug!(token, "subscription already exists");
            return Ok(CreateOutcome::Exists);
        }

        let model = SubscriptionModel {
            token: token.to_string(),
            topics: Vec::new(),
        };
        let subscription = Arc::new(Subscription::new(&model, self.inbox_capacity)?);
        self.store.put(token, &model).await?;
        subscriptions.insert(model.token, subscription);
        tracing::debug!(token, "created subscription");
        Ok(CreateOutcome::Created)
    }

    /// Replaces the subscription's topic list.
    ///
    /// The replace is destructive: the old subscription object is closed and
    /// a fresh one (new inbox, Idle state) takes its place. Refused while a
    /// stream is attached.
    pub async fn modify(&self, token: &str, topics: Vec<String>) -> Result<ModifyOutcome, Error> {
        let mut subscriptions = self.subscriptions.lock().await;
        let Some(existing) = subscriptions.get(token) else {
            tracing::debug!(token, "subscription does not exist");
            return Ok(ModifyOutcome::DoesNotExist);
        };
        if existing.is_active() {
            tracing::debug!(token, "subscription is already active");
            return Ok(ModifyOutcome::AlreadyInUse);
        }

        let model = SubscriptionModel {
            token: token.to_string(),
            topics,
        };
        // Compile the new patterns before anything is persisted or replaced.
        let replacement = Arc::new(Subscription::new(&model, self.inbox_capacity)?);
        self.store.put(token, &model).await?;
        if let Some(old) = subscriptions.insert(model.token, replacement) {
            old.close();
        }
        tracing::debug!(token, "modified subscription");
        Ok(ModifyOutcome::Success)
    }

    /// Removes the subscription from persistence and from the map. An
    /// attached stream is actively terminated rather than left writing into
    /// a detached handle.
    pub async fn delete(&self, token: &str) -> Result<DeleteOutcome, Error> {
        let mut subscriptions = self.subscriptions.lock().await;
        if !subscriptions.contains_key(token) {
            tracing::debug!(token, "subscription does not exist");
            return Ok(DeleteOutcome::DoesNotExist);
        }

        self.store.delete(token).await?;
        if let Some(subscription) = subscriptions.remove(token) {
            subscription.close();
        }
        tracing::debug!(token, "deleted subscription");
        Ok(DeleteOutcome::Deleted)
    }

    /// Snapshot lookup.
    pub async fn get(&self, token: &str) -> Option<Arc<Subscription>> {
        self.subscriptions.lock().await.get(token).cloned()
    }

    /// Snapshot of all current subscriptions.
    pub async fn snapshot(&self) -> Vec<Arc<Subscription>> {
        self.subscriptions.lock().await.values().cloned().collect()
    }

    /// Attaches a stream: looks the subscription up and transitions it to
    /// Active in one step under the registry lock, so attach cannot
    /// interleave with `modify` or `delete`.
    pub async fn begin_streaming(
        &self,
        token: &str,
    ) -> Result<(Arc<Subscription>, CancellationToken), Error> {
        let subscriptions = self.subscriptions.lock().await;
        let subscription = subscriptions.get(token).ok_or(Error::SubscriptionNotFound)?;
        let cancel = subscription.start_streaming()?;
        Ok((Arc::clone(subscription), cancel))
    }

    /// Detaches the stream attached to `token`, if any.
    pub async fn end_streaming(&self, token: &str) -> Result<(), Error> {
        let subscriptions = self.subscriptions.lock().await;
        let subscription = subscriptions.get(token).ok_or(Error::SubscriptionNotFound)?;
        subscription.stop_streaming()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn registry(dir: &std::path::Path) -> SubscriptionRegistry {
        let store = Store::open(dir.join("subscriptions")).await.unwrap();
        SubscriptionRegistry::load(store, 16).await.unwrap()
    }

    #[tokio::test]
    async fn create_is_idempotent_by_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path()).await;

        assert_eq!(registry.create("a").await.unwrap(), CreateOutcome::Created);
        assert_eq!(registry.create("a").await.unwrap(), CreateOutcome::Exists);
    }

    #[tokio::test]
    async fn modify_refused_while_streaming() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path()).await;
        registry.create("a").await.unwrap();

        registry.begin_streaming("a").await.unwrap();
        assert_eq!(
            registry.modify("a", vec!["x".to_string()]).await.unwrap(),
            ModifyOutcome::AlreadyInUse
        );

        registry.end_streaming("a").await.unwrap();
        assert_eq!(
            registry.modify("a", vec!["x".to_string()]).await.unwrap(),
            ModifyOutcome::Success
        );
    }

    #[tokio::test]
    async fn modify_replaces_the_subscription_object() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path()).await;
        registry.create("a").await.unwrap();

        let before = registry.get("a").await.unwrap();
        registry.modify("a", vec!["x".to_string()]).await.unwrap();
        let after = registry.get("a").await.unwrap();

        assert!(!Arc::ptr_eq(&before, &after));
        assert!(after.matches("x"));
        // The old handle is defunct: its inbox no longer accepts deliveries.
        assert!(!before.try_deliver(crate::message::Envelope {
            from: String::new(),
            topic: "x".to_string(),
            content: "c".to_string(),
        }));
    }

    #[tokio::test]
    async fn modify_rejects_invalid_patterns_without_mutating() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path()).await;
        registry.create("a").await.unwrap();
        registry.modify("a", vec!["x".to_string()]).await.unwrap();

        let result = registry.modify("a", vec!["(".to_string()]).await;
        assert!(matches!(result, Err(Error::InvalidTopicPattern { .. })));

        let current = registry.get("a").await.unwrap();
        assert_eq!(current.model().topics, vec!["x".to_string()]);
    }

    #[tokio::test]
    async fn delete_terminates_an_attached_stream() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry(dir.path()).await;
        registry.create("a").await.unwrap();

        let (subscription, cancel) = registry.begin_streaming("a").await.unwrap();
        assert_eq!(registry.delete("a").await.unwrap(), DeleteOutcome::Deleted);
        assert!(cancel.is_cancelled());
        assert!(!subscription.is_active());
        assert_eq!(
            registry.delete("a").await.unwrap(),
            DeleteOutcome::DoesNotExist
        );
    }

    #[tokio::test]
    async fn load_restores_persisted_subscriptions() {
        let dir = tempfile::tempdir().unwrap();
        {
            let registry = registry(dir.path()).await;
            registry.create("a").await.unwrap();
            registry.modify("a", vec!["foo.*".to_string()]).await.unwrap();
        }

        let reloaded = registry(dir.path()).await;
        let sub = reloaded.get("a").await.unwrap();
        assert_eq!(sub.model().topics, vec!["foo.*".to_string()]);
        assert!(sub.matches("foobar"));
    }
}
