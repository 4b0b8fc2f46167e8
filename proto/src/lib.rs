//! Wire types and gRPC bindings for the topigo message broker.
//!
//! The contents of `topigo.rs` are generated from `proto/topigo.proto` by
//! `tonic-build`. Regenerate with `cargo build --features generate`.

#[path = "topigo.rs"]
pub mod topigo;

pub use tonic::{Code, Status};
