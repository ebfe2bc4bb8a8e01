use std::{
    collections::{HashMap, VecDeque},
    time::{Duration, Instant},
};

use axum::http::StatusCode;
use tokio::sync::Mutex;

pub(crate) const MAX_CACHED_PAGES: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CachedPage {
    pub(crate) status: StatusCode,
    pub(crate) html: String,
}

struct CacheEntry {
    page: CachedPage,
    expires_at: Instant,
    seq: u64,
}

#[derive(Default)]
struct CacheEntries {
    pages: HashMap<String, CacheEntry>,
    // Every entry shares one ttl, so insertion order is expiry order.
    order: VecDeque<(String, u64, Instant)>,
    next_seq: u64,
}

impl CacheEntries {
    fn evict_front(&mut self) {
        if let Some((key, seq, _)) = self.order.pop_front() {
            // A re-inserted key leaves a stale marker behind; only the newest one evicts.
            if self.pages.get(&key).is_some_and(|entry| entry.seq == seq) {
                self.pages.remove(&key);
            }
        }
    }
}

pub(crate) struct PageCache {
    ttl: Duration,
    capacity: usize,
    entries: Mutex<CacheEntries>,
}

impl PageCache {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, MAX_CACHED_PAGES)
    }

    pub(crate) fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity,
            entries: Mutex::new(CacheEntries::default()),
        }
    }

    pub(crate) fn enabled(&self) -> bool {
        !self.ttl.is_zero() && self.capacity > 0
    }

    pub(crate) async fn get(&self, key: &str) -> Option<CachedPage> {
        if !self.enabled() {
            return None;
        }
        let mut guard = self.entries.lock().await;
        match guard.pages.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.page.clone()),
            Some(_) => {
                guard.pages.remove(key);
                None
            }
            None => None,
        }
    }

    pub(crate) async fn insert(&self, key: String, page: CachedPage) {
        if !self.enabled() {
            return;
        }
        let now = Instant::now();
        let expires_at = now + self.ttl;
        let mut guard = self.entries.lock().await;
        while guard
            .order
            .front()
            .is_some_and(|(_, _, deadline)| *deadline <= now)
        {
            guard.evict_front();
        }
        let seq = guard.next_seq;
        guard.next_seq += 1;
        guard.order.push_back((key.clone(), seq, expires_at));
        guard.pages.insert(
            key,
            CacheEntry {
                page,
                expires_at,
                seq,
            },
        );
        while guard.pages.len() > self.capacity || guard.order.len() > self.capacity * 2 {
            guard.evict_front();
        }
    }
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
