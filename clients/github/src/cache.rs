use clients::api::Contributor;
use derive_more::Constructor;
use log::debug;
use std::collections::HashMap;
use std::time::Duration;
use std::time::Instant;
use tokio::sync::Mutex;

/// Freshness window over contributor listings.
///
/// A fetched listing is reused for `ttl` after it arrived; afterwards the next
/// lookup misses and the caller refetches. `ttl` of zero disables reuse.
pub struct FreshnessCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

#[derive(Constructor)]
struct CacheEntry {
    fetched_at: Instant,
    contributors: Vec<Contributor>,
}

impl FreshnessCache {
    pub fn new(ttl: Duration) -> Self {
        FreshnessCache {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) async fn get(&self, key: &str) -> Option<Vec<Contributor>> {
        let entries = self.entries.lock().await;
        let entry = entries.get(key)?;
        if entry.fetched_at.elapsed() >= self.ttl {
            debug!("Cached contributors of {} expired", key);
            return None;
        }
        Some(entry.contributors.clone())
    }

    pub(crate) async fn put(&self, key: String, contributors: Vec<Contributor>) {
        if self.ttl.is_zero() {
            return;
        }
        let mut entries = self.entries.lock().await;
        //TODO evict expired entries instead of letting the map grow
        entries.insert(key, CacheEntry::new(Instant::now(), contributors));
    }
}

#[tokio::test]
async fn fresh_entry_is_reused() {
    let cache = FreshnessCache::new(Duration::from_secs(60));
    let contributor = Contributor::new("a".into(), "".into(), "".into(), 1);
    cache.put("o/r".to_string(), vec![contributor.clone()]).await;
    assert_eq!(cache.get("o/r").await, Some(vec![contributor]));
}

#[tokio::test]
async fn zero_ttl_disables_reuse() {
    let cache = FreshnessCache::new(Duration::ZERO);
    let contributor = Contributor::new("a".into(), "".into(), "".into(), 1);
    cache.put("o/r".to_string(), vec![contributor]).await;
    assert_eq!(cache.get("o/r").await, None);
}

#[tokio::test]
async fn expired_entry_misses() {
    let cache = FreshnessCache::new(Duration::from_millis(10));
    let contributor = Contributor::new("a".into(), "".into(), "".into(), 1);
    cache.put("o/r".to_string(), vec![contributor]).await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(cache.get("o/r").await, None);
}
