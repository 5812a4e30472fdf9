//! Host-facing plugin pair: the provider configuration node and the send
//! node.
//!
//! The host runtime resolves per-item parameters and reads the credential
//! store; this crate projects credentials per provider, turns each item
//! into one wasend-core request, and assembles the per-item result
//! records. Items are processed strictly in order, one awaited send at a
//! time.

pub mod config;
pub mod item;
pub mod node;
pub mod schema;

pub use config::ProviderConfig;
pub use item::{SendItem, SendParams};
pub use node::{ItemError, SendNode};
