use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;
use tonic::{Request, Response, Status};

use topigo_proto::topigo::topigo_server::Topigo;
use topigo_proto::topigo::{
    create_subscription_response::CreateSubscriptionResult,
    delete_subscription_response::DeleteSubscriptionResult,
    end_subscription_streaming_response::EndSubscriptionStreamingResult,
    modify_subscription_response::ModifySubscriptionResult, CreateSubscriptionRequest,
    CreateSubscriptionResponse, DeleteSubscriptionRequest, DeleteSubscriptionResponse,
    EndSubscriptionStreamingRequest, EndSubscriptionStreamingResponse, Message,
    ModifySubscriptionRequest, ModifySubscriptionResponse, PublishRequest, PublishResponse,
    StartSubscriptionStreamingRequest,
};

use crate::delivery::{DeliveryEngine, PublishHandle};
use crate::error::Error;
use crate::registry::{CreateOutcome, DeleteOutcome, ModifyOutcome, SubscriptionRegistry};
use crate::subscription::Subscription;

/// Capacity of the per-stream channel between the writer task and the
/// transport.
const STREAM_BUFFER: usize = 64;

/// The gRPC façade. Translates transport calls into registry and delivery
/// engine operations; owns no state of its own beyond the injected handles.
pub struct BrokerService {
    registry: Arc<SubscriptionRegistry>,
    engine: Arc<DeliveryEngine>,
    publisher: PublishHandle,
}

impl BrokerService {
    pub fn new(
        registry: Arc<SubscriptionRegistry>,
        engine: Arc<DeliveryEngine>,
        publisher: PublishHandle,
    ) -> Self {
        Self {
            registry,
            engine,
            publisher,
        }
    }
}

#[tonic::async_trait]
impl Topigo for BrokerService {
    async fn create_subscription(
        &self,
        request: Request<CreateSubscriptionRequest>,
    ) -> Result<Response<CreateSubscriptionResponse>, Status> {
        let request = request.into_inner();
        let result = match self
            .registry
            .create(&request.subscription_token)
            .await
            .map_err(Status::from)?
        {
            CreateOutcome::Created => CreateSubscriptionResult::Created,
            CreateOutcome::Exists => CreateSubscriptionResult::Exists,
        };
        Ok(Response::new(CreateSubscriptionResponse {
            result: result as i32,
        }))
    }

    async fn modify_subscription(
        &self,
        request: Request<ModifySubscriptionRequest>,
    ) -> Result<Response<ModifySubscriptionResponse>, Status> {
        let request = request.into_inner();
        let result = match self
            .registry
            .modify(&request.subscription_token, request.topics)
            .await
            .map_err(Status::from)?
        {
            ModifyOutcome::Success => ModifySubscriptionResult::Success,
            ModifyOutcome::DoesNotExist => ModifySubscriptionResult::DoesNotExist,
            ModifyOutcome::AlreadyInUse => ModifySubscriptionResult::AlreadyInUse,
        };
        Ok(Response::new(ModifySubscriptionResponse {
            result: result as i32,
        }))
    }

    async fn delete_subscription(
        &self,
        request: Request<DeleteSubscriptionRequest>,
    ) -> Result<Response<DeleteSubscriptionResponse>, Status> {
        let request = request.into_inner();
        let result = match self
            .registry
            .delete(&request.subscription_token)
            .await
            .map_err(Status::from)?
        {
            DeleteOutcome::Deleted => DeleteSubscriptionResult::Deleted,
            DeleteOutcome::DoesNotExist => DeleteSubscriptionResult::Error,
        };
        Ok(Response::new(DeleteSubscriptionResponse {
            result: result as i32,
        }))
    }

    type StartSubscriptionStreamingStream = ReceiverStream<Result<Message, Status>>;

    async fn start_subscription_streaming(
        &self,
        request: Request<StartSubscriptionStreamingRequest>,
    ) -> Result<Response<Self::StartSubscriptionStreamingStream>, Status> {
        let token = request.into_inner().subscription_token;
        let (subscription, cancel) = self
            .registry
            .begin_streaming(&token)
            .await
            .map_err(Status::from)?;

        // Replay runs ahead of live consumption; the writer consumes both
        // interleaved from the same inbox.
        self.engine.spawn_replay(Arc::clone(&subscription));

        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        tokio::spawn(stream_writer(subscription, cancel, tx));
        Ok(Response::new(ReceiverStream::new(rx)))
    }

    async fn end_subscription_streaming(
        &self,
        request: Request<EndSubscriptionStreamingRequest>,
    ) -> Result<Response<EndSubscriptionStreamingResponse>, Status> {
        let token = request.into_inner().subscription_token;
        let result = match self.registry.end_streaming(&token).await {
            Ok(()) => EndSubscriptionStreamingResult::Ended,
            Err(Error::StreamNotActive) => EndSubscriptionStreamingResult::Error,
            Err(err) => return Err(err.into()),
        };
        Ok(Response::new(EndSubscriptionStreamingResponse {
            result: result as i32,
        }))
    }

    async fn publish(
        &self,
        request: Request<PublishRequest>,
    ) -> Result<Response<PublishResponse>, Status> {
        let request = request.into_inner();
        let Some(message) = request.message else {
            return Err(Status::invalid_argument("message is required"));
        };
        if message.topic.is_empty() {
            return Err(Status::invalid_argument("topic must not be empty"));
        }
        self.publisher
            .publish(message.topic, request.subscription_token, message.content)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(PublishResponse {}))
    }
}

/// The per-attachment writer task. Consumes inbox envelopes, drops the
/// publisher's own messages, forwards topic matches to the transport, and
/// discards the rest.
async fn stream_writer(
    subscription: Arc<Subscription>,
    cancel: CancellationToken,
    tx: mpsc::Sender<Result<Message, Status>>,
) {
    let inbox = subscription.inbox();
    tracing::debug!(token = %subscription.token(), "stream attached");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(token = %subscription.token(), "stream closed");
                break;
            }
            // The client went away without EndSubscriptionStreaming.
            _ = tx.closed() => {
                subscription.handle_stream_error();
                tracing::debug!(token = %subscription.token(), "stream client disconnected");
                break;
            }
            received = inbox.recv() => {
                let Ok(envelope) = received else {
                    // Inbox closed: the subscription was deleted or replaced.
                    tracing::debug!(token = %subscription.token(), "inbox closed, ending stream");
                    break;
                };
                if envelope.from == subscription.token() {
                    continue;
                }
                if !subscription.matches(&envelope.topic) {
                    continue;
                }
                let message = Message {
                    topic: envelope.topic,
                    content: envelope.content,
                };
                if tx.send(Ok(message)).await.is_err() {
                    subscription.handle_stream_error();
                    tracing::debug!(token = %subscription.token(), "stream write failed");
                    break;
                }
            }
        }
    }
}
