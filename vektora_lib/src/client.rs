//! Cached read path over the API client.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use vektora_api::types::{Entity, PagedResult};
use vektora_api::{Client, ListQuery};

use crate::cache::QueryCache;
use crate::error::VektoraError;
use crate::keys::{self, QueryKey};
use crate::notify::Notifier;

/// Page size used for dropdown option queries: one fetch covers the whole
/// option list.
pub const OPTIONS_PAGE_SIZE: i64 = 500;

/// Staleness windows per query shape. Within the window a repeated read is
/// served from cache without a network call.
#[derive(Clone, Copy, Debug)]
pub struct StalePolicy {
    /// Lists change often.
    pub list: Duration,
    /// Detail reads tolerate a little more.
    pub detail: Duration,
    /// Option lists barely change.
    pub options: Duration,
}

impl Default for StalePolicy {
    fn default() -> Self {
        Self {
            list: Duration::from_secs(30),
            detail: Duration::from_secs(60),
            options: Duration::from_secs(300),
        }
    }
}

impl StalePolicy {
    /// Reads windows from the environment, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            list: Duration::from_millis(env_u64(
                "VEKTORA_STALE_LIST_MS",
                defaults.list.as_millis() as u64,
            )),
            detail: Duration::from_millis(env_u64(
                "VEKTORA_STALE_DETAIL_MS",
                defaults.detail.as_millis() as u64,
            )),
            options: Duration::from_millis(env_u64(
                "VEKTORA_STALE_OPTIONS_MS",
                defaults.options.as_millis() as u64,
            )),
        }
    }
}

struct RetryConfig {
    max_retries: usize,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryConfig {
    fn from_env() -> Self {
        Self {
            max_retries: env_usize("VEKTORA_RETRY_MAX", 1),
            base_delay_ms: env_u64("VEKTORA_RETRY_BASE_MS", 500),
            max_delay_ms: env_u64("VEKTORA_RETRY_MAX_MS", 5000),
        }
    }

    fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let shift = (attempt.saturating_sub(1)).min(30) as u32;
        let exp = 1u64 << shift;
        let base = self
            .base_delay_ms
            .saturating_mul(exp)
            .min(self.max_delay_ms);
        let jitter = rand::thread_rng().gen_range(0.8..1.2);
        Duration::from_millis((base as f64 * jitter) as u64)
    }
}

/// API client wrapper that adds the query cache and retry policy.
///
/// Reads go key -> cache -> network: a fresh hit bypasses the network
/// entirely, a miss fetches with at most one retry and settles into the
/// key's own slot. Mutations never retry and reconcile the cache purely by
/// invalidation (see the mutation executor).
pub struct CachedClient {
    pub(crate) api: Client,
    pub(crate) cache: QueryCache,
    pub(crate) notifier: Arc<dyn Notifier>,
    stale: StalePolicy,
}

impl CachedClient {
    /// Creates a cached client with environment-tunable staleness windows.
    pub fn new(api: Client, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_policy(api, notifier, StalePolicy::from_env())
    }

    /// Creates a cached client with explicit staleness windows. Used in
    /// tests.
    pub fn with_policy(api: Client, notifier: Arc<dyn Notifier>, stale: StalePolicy) -> Self {
        Self {
            api,
            cache: QueryCache::new(),
            notifier,
            stale,
        }
    }

    /// The underlying API client.
    pub fn api(&self) -> &Client {
        &self.api
    }

    /// Fetches one page of `E` records, served from cache within the list
    /// staleness window.
    pub async fn list<E: Entity>(&self, query: &ListQuery) -> Result<PagedResult<E>, VektoraError> {
        let key = keys::list_key(E::RESOURCE, query);
        self.fetch_cached(key, self.stale.list, || self.api.list::<E>(query))
            .await
    }

    /// Fetches a single `E` record by id, served from cache within the
    /// detail staleness window.
    pub async fn get_by_id<E: Entity>(&self, id: i64) -> Result<E, VektoraError> {
        let key = keys::detail_key(E::RESOURCE, id);
        self.fetch_cached(key, self.stale.detail, || self.api.get_by_id::<E>(id))
            .await
    }

    /// Fetches the dropdown option list for `E`: one large page under a
    /// long staleness window.
    pub async fn options<E: Entity>(&self) -> Result<PagedResult<E>, VektoraError> {
        let key = keys::options_key(E::RESOURCE);
        let query = ListQuery::default().with_page_size(OPTIONS_PAGE_SIZE);
        self.fetch_cached(key, self.stale.options, || self.api.list::<E>(&query))
            .await
    }

    /// Removes all cached entries.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    async fn fetch_cached<T, F, Fut>(
        &self,
        key: QueryKey,
        ttl: Duration,
        fetch: F,
    ) -> Result<T, VektoraError>
    where
        T: Serialize + DeserializeOwned,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, vektora_api::Error>>,
    {
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!("cache hit for {}", key);
            let value = serde_json::from_str(&cached)
                .map_err(|e| VektoraError::Cache(format!("corrupt entry for {}: {}", key, e)))?;
            return Ok(value);
        }

        // The epoch observed before the fetch travels with the result; an
        // invalidation landing mid-flight makes the settle a no-op.
        let epoch = self.cache.epoch(&key.namespace);
        let value = self.with_retry(&key, fetch).await?;
        if let Ok(json) = serde_json::to_string(&value) {
            self.cache.set(key, json, ttl, epoch);
        }
        Ok(value)
    }

    async fn with_retry<T, F, Fut>(&self, key: &QueryKey, mut fetch: F) -> Result<T, VektoraError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, vektora_api::Error>>,
    {
        let cfg = RetryConfig::from_env();
        let mut attempt = 0usize;
        loop {
            match fetch().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if attempt > cfg.max_retries || !is_retryable(&err) {
                        return Err(err.into());
                    }
                    let delay = cfg.delay_for_attempt(attempt);
                    tracing::warn!(
                        "{} failed (attempt {}/{}), retrying in {:.1}s",
                        key,
                        attempt,
                        cfg.max_retries,
                        delay.as_secs_f64()
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

/// Network faults and server-side pressure are worth one more try; envelope
/// violations and client errors are not.
fn is_retryable(err: &vektora_api::Error) -> bool {
    match err {
        vektora_api::Error::Transport(_) => true,
        vektora_api::Error::HttpStatus { status, .. } => *status == 429 || *status >= 500,
        _ => false,
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(default)
}
