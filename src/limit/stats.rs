//! 权限存储统计收集器

use parking_lot::Mutex;
use std::sync::Arc;

/// 存储统计信息
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreStats {
    pub total_hits: u64,
    pub total_misses: u64,
    /// 显式 refresh 触发的重建
    pub total_refreshes: u64,
    pub total_invalidations: u64,
}

impl StoreStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit_rate(&self) -> f64 {
        if self.total_hits + self.total_misses == 0 {
            0.0
        } else {
            self.total_hits as f64 / (self.total_hits + self.total_misses) as f64
        }
    }

    pub fn hit_rate_percentage(&self) -> f64 {
        self.hit_rate() * 100.0
    }

    pub fn total_operations(&self) -> u64 {
        self.total_hits + self.total_misses
    }

    pub fn is_empty(&self) -> bool {
        self.total_operations() == 0
    }
}

/// 统计收集器
#[derive(Clone, Default)]
pub struct StoreStatsCollector {
    stats: Arc<Mutex<StoreStats>>,
}

impl StoreStatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.stats.lock().total_hits += 1;
    }

    pub fn record_miss(&self) {
        self.stats.lock().total_misses += 1;
    }

    pub fn record_refresh(&self) {
        self.stats.lock().total_refreshes += 1;
    }

    pub fn record_invalidation(&self) {
        self.stats.lock().total_invalidations += 1;
    }

    pub fn reset(&self) {
        *self.stats.lock() = StoreStats::new();
    }

    pub fn snapshot(&self) -> StoreStats {
        self.stats.lock().clone()
    }
}

impl std::fmt::Debug for StoreStatsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats.lock();
        f.debug_struct("StoreStatsCollector")
            .field("total_operations", &stats.total_operations())
            .field("hit_rate", &stats.hit_rate())
            .finish()
    }
}
