use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use lru::LruCache;
use parking_lot::RwLock;
use rayon::prelude::*;
use tracing::debug;

use crate::archetypes::{archetype_for, Archetype};
use crate::cycle::{CycleDay, Profile, CYCLE_LENGTH};
use crate::lunar::phase_fraction;
use crate::phases::{resolve_phase, LunarPhaseRange, DEFAULT_PHASE_TABLE};

// Performance Metrics
#[derive(Default)]
pub struct Metrics {
    calculation_time: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_calculation(&self, duration: std::time::Duration) {
        self.calculation_time
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn report(&self) -> String {
        format!(
            "Performance Metrics:\n\
             Calculation Time: {}µs\n\
             Cache Hits: {}\n\
             Cache Misses: {}\n\
             Cache Hit Rate: {:.2}%",
            self.calculation_time.load(Ordering::Relaxed),
            self.cache_hits(),
            self.cache_misses(),
            self.cache_hit_rate() * 100.0
        )
    }

    fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits() as f64;
        let misses = self.cache_misses() as f64;
        let total = hits + misses;
        if total > 0.0 {
            hits / total
        } else {
            0.0
        }
    }
}

/// Everything the front end shows for one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub cycle_day: CycleDay,
    pub archetype: &'static Archetype,
    pub phase_fraction: f64,
    pub phase: Option<LunarPhaseRange>,
}

impl DailySnapshot {
    pub fn phase_name(&self) -> &str {
        self.phase.as_ref().map_or("unknown phase", |p| p.name)
    }

    pub fn phase_symbol(&self) -> &str {
        self.phase.as_ref().map_or("❓", |p| p.symbol)
    }

    pub fn phase_message(&self) -> &str {
        self.phase.as_ref().map_or("", |p| p.message)
    }
}

// Snapshot Cache
pub struct SnapshotCache {
    cache: LruCache<NaiveDate, DailySnapshot>,
}

impl SnapshotCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cache: LruCache::new(capacity),
        }
    }

    // LruCache::get requires mutable access, so we use &mut self.
    pub fn get_snapshot(&mut self, date: NaiveDate) -> Option<DailySnapshot> {
        self.cache.get(&date).cloned()
    }

    pub fn put_snapshot(&mut self, date: NaiveDate, snapshot: DailySnapshot) {
        self.cache.put(date, snapshot);
    }
}

/// Cache-fronted assembler of daily snapshots for one profile.
pub struct CycleCalculator {
    profile: Profile,
    ranges: Vec<LunarPhaseRange>,
    cache: Arc<RwLock<SnapshotCache>>,
    metrics: Arc<Metrics>,
}

impl CycleCalculator {
    pub fn new(profile: Profile) -> Self {
        Self::with_table(profile, DEFAULT_PHASE_TABLE.clone())
    }

    /// Build a calculator over a caller-supplied phase-range table.
    pub fn with_table(profile: Profile, ranges: Vec<LunarPhaseRange>) -> Self {
        let capacity = NonZeroUsize::new(64).expect("capacity is nonzero");
        Self {
            profile,
            ranges,
            cache: Arc::new(RwLock::new(SnapshotCache::new(capacity))),
            metrics: Arc::new(Metrics::new()),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Snapshot for one date, served from the LRU when already computed.
    pub fn snapshot(&self, on: NaiveDate) -> DailySnapshot {
        {
            let mut cache = self.cache.write();
            if let Some(snapshot) = cache.get_snapshot(on) {
                self.metrics.record_cache_hit();
                return snapshot;
            }
        }

        let started = std::time::Instant::now();
        let snapshot = self.compute(on);
        self.metrics.record_calculation(started.elapsed());
        self.metrics.record_cache_miss();
        debug!(date = %on, cycle_day = snapshot.cycle_day.get(), "computed snapshot");

        self.cache.write().put_snapshot(on, snapshot.clone());
        snapshot
    }

    /// All 28 days of the cycle containing `on`, in day order.
    ///
    /// Each day is independent, so the batch is computed in parallel and
    /// bypasses the cache.
    pub fn cycle_overview(&self, on: NaiveDate) -> Vec<DailySnapshot> {
        let cycle_start = self.profile.cycle_start_on(on);
        (0..CYCLE_LENGTH as i32)
            .into_par_iter()
            .map(|offset| self.compute(cycle_start + Duration::days(i64::from(offset))))
            .collect()
    }

    fn compute(&self, on: NaiveDate) -> DailySnapshot {
        let cycle_day = self.profile.cycle_day_on(on);
        let fraction = phase_fraction(on);
        let resolution = resolve_phase(fraction, &self.ranges);
        DailySnapshot {
            date: on,
            cycle_day,
            archetype: archetype_for(cycle_day),
            phase_fraction: fraction,
            phase: resolution.matched.cloned(),
        }
    }
}
