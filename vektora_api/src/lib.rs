//! Typed HTTP client for the Vektora CRM/ERP backend.
//!
//! One generic request core serves every feature resource: list queries,
//! detail reads, creates, partial updates, and deletes all travel through
//! the same envelope-checked transport, with session headers attached from
//! a shared [`SessionStore`].

mod client;
mod config;
mod errors;
mod locale;
mod query;
mod resources;
mod session;
pub mod types;

pub use self::client::{Client, LOGIN_PATH, LOGIN_REDIRECT};
pub use self::config::{ClientConfig, API_URL_ENV, DEFAULT_API_URL, RUNTIME_CONFIG_FILE};
pub use self::errors::Error;
pub use self::locale::Locale;
pub use self::query::{Filter, FilterOperator, FilterSet, ListQuery, SortDirection};
pub use self::resources::Resource;
pub use self::session::{is_authenticated, SessionSnapshot, SessionStore};
