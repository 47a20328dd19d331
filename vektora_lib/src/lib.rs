//! Data-access layer for the Vektora client: cached reads, the mutation
//! executor with its declarative invalidation policy, localized notices,
//! and input validation.
//!
//! Wraps the `vektora_api` crate with a query cache keyed by the
//! deterministic registry in [`keys`]; invalidation is the sole cache
//! mutation primitive exposed to callers.

pub mod cache;
pub mod client;
pub mod error;
pub mod invalidation;
pub mod keys;
pub mod messages;
mod mutation;
pub mod notify;
pub mod validation;

pub use vektora_api;
pub use vektora_api::types;
pub use vektora_api::{
    Client, ClientConfig, Filter, FilterOperator, FilterSet, ListQuery, Locale, Resource,
    SessionSnapshot, SessionStore, SortDirection,
};

pub use cache::QueryCache;
pub use client::{CachedClient, StalePolicy, OPTIONS_PAGE_SIZE};
pub use error::VektoraError;
pub use keys::QueryKey;
pub use messages::MutationVerb;
pub use notify::{BufferingNotifier, Notice, Notifier, StderrNotifier};
