//! End-to-end delivery scenarios driven through the gRPC façade, without a
//! network in between.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tonic::{Code, Request, Status};

use topigo_broker::delivery::DeliveryEngine;
use topigo_broker::registry::SubscriptionRegistry;
use topigo_broker::server::BrokerService;
use topigo_broker::store::Store;
use topigo_proto::topigo::topigo_server::Topigo;
use topigo_proto::topigo::{
    modify_subscription_response::ModifySubscriptionResult, CreateSubscriptionRequest,
    EndSubscriptionStreamingRequest, Message, ModifySubscriptionRequest, PublishRequest,
    StartSubscriptionStreamingRequest,
};

const RECV_DEADLINE: Duration = Duration::from_secs(2);
const SILENCE_WINDOW: Duration = Duration::from_millis(300);

struct Broker {
    service: BrokerService,
    shutdown: CancellationToken,
}

impl Drop for Broker {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn broker(dir: &Path) -> Broker {
    let message_store = Store::open(dir.join("messages")).await.unwrap();
    let subscription_store = Store::open(dir.join("subscriptions")).await.unwrap();
    let registry = Arc::new(
        SubscriptionRegistry::load(subscription_store, 64)
            .await
            .unwrap(),
    );
    let engine = Arc::new(DeliveryEngine::new(
        Arc::clone(&registry),
        message_store,
        64,
    ));
    let publisher = engine.publish_handle();

    let shutdown = CancellationToken::new();
    {
        let engine = Arc::clone(&engine);
        let shutdown = shutdown.clone();
        tokio::spawn(async move { engine.run(shutdown).await });
    }

    Broker {
        service: BrokerService::new(registry, engine, publisher),
        shutdown,
    }
}

impl Broker {
    async fn create(&self, token: &str) {
        self.service
            .create_subscription(Request::new(CreateSubscriptionRequest {
                subscription_token: token.to_string(),
            }))
            .await
            .unwrap();
    }

    async fn modify(&self, token: &str, topics: &[&str]) -> ModifySubscriptionResult {
        self.service
            .modify_subscription(Request::new(ModifySubscriptionRequest {
                subscription_token: token.to_string(),
                topics: topics.iter().map(|t| t.to_string()).collect(),
            }))
            .await
            .unwrap()
            .into_inner()
            .result()
    }

    async fn subscribe(&self, token: &str, topics: &[&str]) {
        self.create(token).await;
        assert_eq!(
            self.modify(token, topics).await,
            ModifySubscriptionResult::Success
        );
    }

    async fn publish(&self, topic: &str, from: &str, content: &str) {
        self.service
            .publish(Request::new(PublishRequest {
                subscription_token: from.to_string(),
                message: Some(Message {
                    topic: topic.to_string(),
                    content: content.to_string(),
                }),
            }))
            .await
            .unwrap();
    }

    async fn attach(&self, token: &str) -> mpsc::Receiver<Result<Message, Status>> {
        self.service
            .start_subscription_streaming(Request::new(StartSubscriptionStreamingRequest {
                subscription_token: token.to_string(),
            }))
            .await
            .unwrap()
            .into_inner()
            .into_inner()
    }

    async fn detach(&self, token: &str) {
        self.service
            .end_subscription_streaming(Request::new(EndSubscriptionStreamingRequest {
                subscription_token: token.to_string(),
            }))
            .await
            .unwrap();
    }
}

async fn next_message(stream: &mut mpsc::Receiver<Result<Message, Status>>) -> Message {
    timeout(RECV_DEADLINE, stream.recv())
        .await
        .expect("timed out waiting for a message")
        .expect("stream ended unexpectedly")
        .expect("stream yielded an error")
}

async fn assert_silent(stream: &mut mpsc::Receiver<Result<Message, Status>>) {
    if let Ok(received) = timeout(SILENCE_WINDOW, stream.recv()).await {
        panic!("expected no delivery, got {received:?}");
    }
}

#[tokio::test]
async fn published_before_attach_is_replayed() {
    let dir = tempfile::tempdir().unwrap();
    let broker = broker(dir.path()).await;

    broker.subscribe("A", &["foo.*"]).await;
    broker.publish("foobar", "", "hi").await;

    let mut stream = broker.attach("A").await;
    let message = next_message(&mut stream).await;
    assert_eq!(message.topic, "foobar");
    assert_eq!(message.content, "hi");
}

#[tokio::test]
async fn publisher_does_not_receive_its_own_message() {
    let dir = tempfile::tempdir().unwrap();
    let broker = broker(dir.path()).await;

    broker.subscribe("A", &["x"]).await;
    broker.subscribe("B", &["x"]).await;
    let mut a = broker.attach("A").await;
    let mut b = broker.attach("B").await;

    broker.publish("x", "A", "p").await;

    let message = next_message(&mut b).await;
    assert_eq!(message.content, "p");
    assert_silent(&mut a).await;
}

#[tokio::test]
async fn replay_only_delivers_matching_topics() {
    let dir = tempfile::tempdir().unwrap();
    let broker = broker(dir.path()).await;

    broker.subscribe("A", &["x"]).await;
    broker.publish("x", "", "m1").await;
    broker.publish("y", "", "m2").await;

    let mut stream = broker.attach("A").await;
    let message = next_message(&mut stream).await;
    assert_eq!(message.content, "m1");
    assert_silent(&mut stream).await;
}

#[tokio::test]
async fn second_attach_is_refused_while_streaming() {
    let dir = tempfile::tempdir().unwrap();
    let broker = broker(dir.path()).await;

    broker.create("A").await;
    let _stream = broker.attach("A").await;

    let refused = broker
        .service
        .start_subscription_streaming(Request::new(StartSubscriptionStreamingRequest {
            subscription_token: "A".to_string(),
        }))
        .await;
    assert_eq!(refused.unwrap_err().code(), Code::FailedPrecondition);
}

#[tokio::test]
async fn attach_of_unknown_token_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let broker = broker(dir.path()).await;

    let refused = broker
        .service
        .start_subscription_streaming(Request::new(StartSubscriptionStreamingRequest {
            subscription_token: "ghost".to_string(),
        }))
        .await;
    assert_eq!(refused.unwrap_err().code(), Code::NotFound);
}

#[tokio::test]
async fn modify_is_refused_while_streaming_and_allowed_after_detach() {
    let dir = tempfile::tempdir().unwrap();
    let broker = broker(dir.path()).await;

    broker.create("A").await;
    let _stream = broker.attach("A").await;
    assert_eq!(
        broker.modify("A", &["x"]).await,
        ModifySubscriptionResult::AlreadyInUse
    );

    broker.detach("A").await;
    assert_eq!(
        broker.modify("A", &["x"]).await,
        ModifySubscriptionResult::Success
    );
}

#[tokio::test]
async fn detach_then_reattach_delivers_missed_messages() {
    let dir = tempfile::tempdir().unwrap();
    let broker = broker(dir.path()).await;

    broker.subscribe("A", &["x"]).await;
    let mut stream = broker.attach("A").await;
    broker.publish("x", "", "while-attached").await;
    assert_eq!(next_message(&mut stream).await.content, "while-attached");

    broker.detach("A").await;
    // The writer exits on the close signal; the stream channel ends.
    assert!(timeout(RECV_DEADLINE, stream.recv()).await.unwrap().is_none());

    broker.publish("x", "", "while-detached").await;

    // Receipts are persisted off the delivery path; let them land before the
    // next replay snapshots the store.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let mut stream = broker.attach("A").await;
    assert_eq!(next_message(&mut stream).await.content, "while-detached");
    assert_silent(&mut stream).await;
}

#[tokio::test]
async fn restart_preserves_subscriptions_and_messages() {
    let dir = tempfile::tempdir().unwrap();
    {
        let broker = broker(dir.path()).await;
        broker.subscribe("A", &["x"]).await;
        broker.publish("x", "", "survives").await;
        // Leave A unattached so the message stays unreceipted.
    }

    let broker = broker(dir.path()).await;
    assert_eq!(
        broker.modify("A", &["x"]).await,
        ModifySubscriptionResult::Success
    );

    let mut stream = broker.attach("A").await;
    assert_eq!(next_message(&mut stream).await.content, "survives");
}

#[tokio::test]
async fn duplicate_delivery_is_tolerated_not_multiplied_per_receipt() {
    let dir = tempfile::tempdir().unwrap();
    let broker = broker(dir.path()).await;

    broker.subscribe("A", &["x"]).await;
    broker.publish("x", "", "once").await;

    let mut stream = broker.attach("A").await;
    assert_eq!(next_message(&mut stream).await.content, "once");
    broker.detach("A").await;
    assert!(timeout(RECV_DEADLINE, stream.recv()).await.unwrap().is_none());

    // Receipts are persisted off the delivery path; let them land before the
    // next replay snapshots the store.
    tokio::time::sleep(Duration::from_millis(100)).await;

    // The receipt is on disk, so a fresh attach replays nothing.
    let mut stream = broker.attach("A").await;
    assert_silent(&mut stream).await;
}
