use serde_json::Value;
use std::{
    collections::HashMap,
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

use crate::error::ApiError;

struct CachedPage {
    rendered_at: Instant,
    payload: Value,
}

/// PageCache
///
/// Holds the payloads of the statically generated pages. An entry is served
/// until it is older than the revalidation interval, then regenerated on the
/// next request. Admin writes drop every entry so edits show up immediately.
///
/// Not-found outcomes and errors are never cached, and neither is a payload
/// whose render overlapped an invalidation.
pub struct PageCache {
    revalidate: Duration,
    entries: RwLock<HashMap<String, CachedPage>>,
    /// Bumped by `invalidate`, under the entries write lock.
    generation: AtomicU64,
}

impl PageCache {
    pub fn new(revalidate: Duration) -> Self {
        Self {
            revalidate,
            entries: RwLock::new(HashMap::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// get_or_render
    ///
    /// Returns the cached payload for `key` while it is fresh; otherwise runs
    /// `render` and stores its result.
    pub async fn get_or_render<F, Fut>(&self, key: &str, render: F) -> Result<Value, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, ApiError>>,
    {
        {
            let entries = self.entries.read().await;
            if let Some(page) = entries.get(key) {
                if page.rendered_at.elapsed() < self.revalidate {
                    tracing::debug!(page = key, "page served from cache");
                    return Ok(page.payload.clone());
                }
            }
        }

        let generation = self.generation.load(Ordering::Acquire);
        let payload = render().await?;

        let mut entries = self.entries.write().await;
        if self.generation.load(Ordering::Acquire) != generation {
            tracing::debug!(page = key, "page rendered across an invalidation, not cached");
            return Ok(payload);
        }
        entries.insert(
            key.to_string(),
            CachedPage {
                rendered_at: Instant::now(),
                payload: payload.clone(),
            },
        );
        tracing::debug!(page = key, "page regenerated");
        Ok(payload)
    }

    /// Drops every cached page.
    pub async fn invalidate(&self) {
        let mut entries = self.entries.write().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        if !entries.is_empty() {
            tracing::debug!(pages = entries.len(), "page cache invalidated");
            entries.clear();
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
