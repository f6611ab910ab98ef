//! # srmock registry
//!
//! The storage and deduplication engine behind the srmock schema registry.
//!
//! Schemas are registered under named *subjects*. Every distinct schema
//! content gets a stable, globally unique id; re-registering the same content
//! is idempotent, and identical content under a different subject reuses the
//! id while getting its own per-subject version number. These are the exact
//! id/version semantics of the registry wire protocol the server crate
//! emulates.
//!
//! ## Example
//!
//! ```rust
//! use srmock_registry::{Schema, SchemaStore};
//!
//! let store = SchemaStore::new();
//!
//! let record = store.register("orders-value", Schema::new(r#"{"type":"string"}"#));
//! assert_eq!((record.id, record.version), (1, 1));
//!
//! // Same content, same subject: nothing new is allocated.
//! let again = store.register("orders-value", Schema::new(r#"{"type":"string"}"#));
//! assert_eq!(again, record);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod fingerprint;
mod store;
mod types;

pub use fingerprint::rabin;
pub use store::SchemaStore;
pub use types::{Schema, SchemaType, SubjectSchema};
