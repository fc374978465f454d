//! Content store client.
//!
//! Blog posts live in a remote PostgREST-style store; this crate fetches the
//! published ones. The renderer is a pure read-only consumer: every build
//! re-fetches and re-renders from scratch, with no caching and no retries.
//! Fetch failures surface to the caller as [`StoreError`].

mod client;
mod error;
mod types;

pub use client::StoreClient;
pub use error::StoreError;
pub use types::Post;
