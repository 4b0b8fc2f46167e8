use async_channel::{Receiver, Sender, TrySendError};
use parking_lot::Mutex;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::message::Envelope;

/// Persisted form of a subscription, without any runtime state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionModel {
    pub token: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug)]
struct StreamState {
    active: bool,
    cancel: CancellationToken,
}

/// A subscription together with its streaming state machine.
///
/// The state is Idle or Active; transitions are serialised by the internal
/// mutex, and at most one stream writer consumes the inbox at a time. The
/// inbox is bounded: live fan-out drops on a full inbox (replay covers the
/// gap on the next attach) while replay sends block up to a deadline.
#[derive(Debug)]
pub struct Subscription {
    token: String,
    topics: Vec<String>,
    matchers: Vec<Regex>,
    inbox_tx: Sender<Envelope>,
    inbox_rx: Receiver<Envelope>,
    state: Mutex<StreamState>,
}

impl Subscription {
    /// Builds a subscription from its persisted form, compiling and
    /// validating every topic pattern.
    pub fn new(model: &SubscriptionModel, inbox_capacity: usize) -> Result<Self, Error> {
        let mut matchers = Vec::with_capacity(model.topics.len());
        for pattern in &model.topics {
            // Anchored: a pattern must match the whole topic, not a substring.
            let compiled = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
                Error::InvalidTopicPattern {
                    pattern: pattern.clone(),
                    source,
                }
            })?;
            matchers.push(compiled);
        }
        let (inbox_tx, inbox_rx) = async_channel::bounded(inbox_capacity);
        Ok(Self {
            token: model.token.clone(),
            topics: model.topics.clone(),
            matchers,
            inbox_tx,
            inbox_rx,
            state: Mutex::new(StreamState {
                active: false,
                cancel: CancellationToken::new(),
            }),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn model(&self) -> SubscriptionModel {
        SubscriptionModel {
            token: self.token.clone(),
            topics: self.topics.clone(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.lock().active
    }

    /// Idle → Active. Returns the close signal for this attachment; each
    /// attach gets a fresh one.
    pub fn start_streaming(&self) -> Result<CancellationToken, Error> {
        let mut state = self.state.lock();
        if state.active {
            return Err(Error::StreamAlreadyActive);
        }
        state.active = true;
        state.cancel = CancellationToken::new();
        Ok(state.cancel.clone())
    }

    /// Active → Idle, signalling the writer to exit after the envelope it is
    /// currently handling.
    pub fn stop_streaming(&self) -> Result<(), Error> {
        let mut state = self.state.lock();
        if !state.active {
            return Err(Error::StreamNotActive);
        }
        state.active = false;
        state.cancel.cancel();
        Ok(())
    }

    /// Active → Idle after a transport failure. The writer is already gone,
    /// so no close signal is emitted.
    pub fn handle_stream_error(&self) {
        self.state.lock().active = false;
    }

    /// Tears the subscription down: ends any attached stream and closes the
    /// inbox so replay tasks and stale handles observe it as defunct.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.active = false;
        state.cancel.cancel();
        self.inbox_tx.close();
    }

    pub fn matches(&self, topic: &str) -> bool {
        self.matchers.iter().any(|matcher| matcher.is_match(topic))
    }

    /// Non-blocking enqueue used by live fan-out. A full or closed inbox
    /// loses the envelope; replay on the next attach redelivers it.
    pub fn try_deliver(&self, envelope: Envelope) -> bool {
        match self.inbox_tx.try_send(envelope) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::warn!(token = %self.token, "inbox full, dropping live delivery");
                false
            }
            Err(TrySendError::Closed(_)) => {
                tracing::debug!(token = %self.token, "inbox closed, dropping live delivery");
                false
            }
        }
    }

    /// Blocking enqueue used by replay; callers bound it with a deadline.
    pub async fn deliver(&self, envelope: Envelope) -> Result<(), async_channel::SendError<Envelope>> {
        self.inbox_tx.send(envelope).await
    }

    pub fn inbox(&self) -> Receiver<Envelope> {
        self.inbox_rx.clone()
    }
}
