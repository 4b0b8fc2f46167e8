//! # topigo-broker
//!
//! A topic message broker with durable, at-least-once delivery over a gRPC
//! streaming interface.
//!
//! Publishers submit messages tagged with a topic; subscribers register a
//! token with a set of topic patterns and attach a server stream to receive
//! every matching message. Delivery survives broker restarts and stream
//! disconnects:
//!
//! * every published message is persisted before fan-out, together with the
//!   set of subscriptions that have received it,
//! * an attaching stream first replays messages it has not yet received, in
//!   timestamp order, then consumes live deliveries,
//! * a publisher never receives its own messages back,
//! * storage is bounded by a time-based retention policy with a grace
//!   buffer for late-attaching subscribers.
//!
//! At most one stream may be attached per subscription token at a time.
//! There are no ordering guarantees between distinct publishers and no
//! exactly-once delivery; duplicates can occur after receipt-write races and
//! must be tolerated by consumers.
pub mod config;
pub mod delivery;
pub mod error;
pub mod message;
pub mod registry;
pub mod server;
pub mod store;
pub mod subscription;
pub mod sweeper;
