use std::sync::Arc;
use std::time::Duration;

use time::OffsetDateTime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::message::StoredMessage;
use crate::registry::SubscriptionRegistry;
use crate::store::Store;
use crate::subscription::Subscription;

/// How long a replay send may wait on a full inbox before the whole replay is
/// abandoned. The writer re-replays on the next attach, so abandoning loses
/// nothing durable.
const REPLAY_SEND_DEADLINE: Duration = Duration::from_secs(30);

/// Handle through which the RPC façade submits published messages.
///
/// Persists first, enqueues second: once `publish` returns, the message
/// survives a crash and will reach matching subscriptions via replay even if
/// the live fan-out never sees it.
#[derive(Clone)]
pub struct PublishHandle {
    store: Store<StoredMessage>,
    queue: mpsc::Sender<StoredMessage>,
}

impl PublishHandle {
    pub async fn publish(
        &self,
        topic: String,
        from: String,
        content: String,
    ) -> Result<String, Error> {
        let message = StoredMessage::new(topic, from, content, OffsetDateTime::now_utc());
        self.store.put(&message.id, &message).await?;
        let id = message.id.clone();
        if self.queue.send(message).await.is_err() {
            // Engine already shut down. The message is durable, so the next
            // attach of each matching subscription still replays it.
            tracing::warn!(id = %id, "delivery engine stopped, message will only be replayed");
        }
        Ok(id)
    }
}

/// Moves every published message into the inbox of every currently active
/// matching subscription, and replays missed messages on stream attach.
pub struct DeliveryEngine {
    registry: Arc<SubscriptionRegistry>,
    store: Store<StoredMessage>,
    queue: mpsc::Sender<StoredMessage>,
    inbound: parking_lot::Mutex<Option<mpsc::Receiver<StoredMessage>>>,
}

impl DeliveryEngine {
    pub fn new(
        registry: Arc<SubscriptionRegistry>,
        store: Store<StoredMessage>,
        queue_capacity: usize,
    ) -> Self {
        let (queue, inbound) = mpsc::channel(queue_capacity);
        Self {
            registry,
            store,
            queue,
            inbound: parking_lot::Mutex::new(Some(inbound)),
        }
    }

    pub fn publish_handle(&self) -> PublishHandle {
        PublishHandle {
            store: self.store.clone(),
            queue: self.queue.clone(),
        }
    }

    /// Runs the live fan-out loop until `shutdown` fires. There is exactly
    /// one consumer of the publish queue.
    pub async fn run(&self, shutdown: CancellationToken) {
        let Some(mut inbound) = self.inbound.lock().take() else {
            tracing::error!("delivery engine started twice");
            return;
        };
        tracing::debug!("delivery engine started");
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                received = inbound.recv() => {
                    let Some(message) = received else { break };
                    self.fan_out(message).await;
                }
            }
        }
        tracing::debug!("delivery engine stopped");
    }

    /// Live fan-out of one message. Sends are non-blocking so one slow
    /// subscriber cannot stall the rest; an envelope lost to a full inbox is
    /// redelivered by replay on that subscription's next attach. Topic
    /// filtering happens in the stream writer, not here.
    async fn fan_out(&self, mut message: StoredMessage) {
        let envelope = message.envelope();
        for subscription in self.registry.snapshot().await {
            if subscription.token() == message.from {
                continue;
            }
            if !subscription.is_active() {
                continue;
            }
            if subscription.try_deliver(envelope.clone()) {
                message.mark_received(subscription.token());
            }
        }
        if let Err(err) = self.store.put(&message.id, &message).await {
            tracing::error!(id = %message.id, error = %err, "could not persist delivery receipts");
        }
    }

    /// Spawns the one-shot replay of messages `subscription` has not yet
    /// received, in `received_at` order. Called on stream attach, before live
    /// consumption starts competing.
    pub fn spawn_replay(&self, subscription: Arc<Subscription>) -> JoinHandle<()> {
        let store = self.store.clone();
        tokio::spawn(async move { replay(store, subscription).await })
    }
}

async fn replay(store: Store<StoredMessage>, subscription: Arc<Subscription>) {
    let token = subscription.token().to_string();
    let mut missed = match store.get_all().await {
        Ok(all) => all
            .into_iter()
            .filter(|message| !message.was_received_by(&token))
            .collect::<Vec<_>>(),
        Err(err) => {
            tracing::error!(token, error = %err, "could not read messages for replay");
            return;
        }
    };
    missed.sort_by(|a, b| a.received_at.cmp(&b.received_at));

    tracing::debug!(token, count = missed.len(), "replaying missed messages");
    for mut message in missed {
        match timeout(REPLAY_SEND_DEADLINE, subscription.deliver(message.envelope())).await {
            Ok(Ok(())) => {}
            Ok(Err(_)) => {
                tracing::debug!(token, "inbox closed, abandoning replay");
                return;
            }
            Err(_) => {
                tracing::warn!(token, "replay send timed out, abandoning replay");
                return;
            }
        }
        if message.mark_received(&token) {
            if let Err(err) = store.put(&message.id, &message).await {
                tracing::error!(token, id = %message.id, error = %err, "could not persist replay receipt");
            }
        }
    }
}
