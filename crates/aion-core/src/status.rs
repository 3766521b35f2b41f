//! Simulated live status feed for the status dashboard.
//!
//! Nothing here is measured. Every tick draws fresh display values from the
//! RNG inside fixed ranges and appends a made-up event to a short log.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Lines kept in the event log.
pub const LOG_CAPACITY: usize = 6;

/// Default refresh period of the dashboard, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 2_000;

pub const LOAD_RANGE: RangeInclusive<f64> = 62.0..=94.0;
pub const NODES_RANGE: RangeInclusive<u32> = 1_380..=1_420;
pub const LATENCY_RANGE: RangeInclusive<f64> = 0.15..=0.35;
pub const THROUGHPUT_RANGE: RangeInclusive<f64> = 4.5..=5.1;
pub const REGION_LOAD_RANGE: RangeInclusive<u8> = 28..=96;

const REGIONS: [(&str, &str); 4] = [
    ("JKT-01", "Jakarta"),
    ("SGP-02", "Singapore"),
    ("TYO-03", "Tokyo"),
    ("FRA-04", "Frankfurt"),
];

/// Health of one edge region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionHealth {
    pub node: &'static str,
    pub city: &'static str,
    pub load_pct: u8,
    pub online: bool,
}

/// One refresh of the dashboard figures.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub neural_load_pct: f64,
    /// Active nodes, in millions
    pub active_nodes: u32,
    pub sync_latency_ms: f64,
    pub throughput_pf: f64,
    pub regions: Vec<RegionHealth>,
}

impl Default for StatusSnapshot {
    /// Nominal figures shown before the first tick.
    fn default() -> Self {
        Self {
            neural_load_pct: 78.0,
            active_nodes: 1_400,
            sync_latency_ms: 0.2,
            throughput_pf: 4.8,
            regions: REGIONS
                .iter()
                .map(|&(node, city)| RegionHealth {
                    node,
                    city,
                    load_pct: 50,
                    online: true,
                })
                .collect(),
        }
    }
}

impl StatusSnapshot {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            neural_load_pct: rng.random_range(LOAD_RANGE),
            active_nodes: rng.random_range(NODES_RANGE),
            sync_latency_ms: rng.random_range(LATENCY_RANGE),
            throughput_pf: rng.random_range(THROUGHPUT_RANGE),
            regions: REGIONS
                .iter()
                .map(|&(node, city)| RegionHealth {
                    node,
                    city,
                    load_pct: rng.random_range(REGION_LOAD_RANGE),
                    // The home cluster never drops off the board
                    online: node == "JKT-01" || rng.random_bool(0.95),
                })
                .collect(),
        }
    }

    pub fn online_regions(&self) -> usize {
        self.regions.iter().filter(|r| r.online).count()
    }
}

/// Source of simulated dashboard values.
#[derive(Debug)]
pub struct StatusFeed<R = StdRng> {
    rng: R,
    snapshot: StatusSnapshot,
    log: VecDeque<String>,
    ticks: u64,
}

impl StatusFeed<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> StatusFeed<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            snapshot: StatusSnapshot::default(),
            log: VecDeque::with_capacity(LOG_CAPACITY),
            ticks: 0,
        }
    }

    pub fn snapshot(&self) -> &StatusSnapshot {
        &self.snapshot
    }

    /// Event log, newest first.
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Draw a fresh snapshot and log one event.
    pub fn tick(&mut self) -> &StatusSnapshot {
        self.snapshot = StatusSnapshot::sample(&mut self.rng);
        self.ticks += 1;

        let line = self.event_line();
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_back();
        }
        self.log.push_front(line);

        tracing::trace!(tick = self.ticks, "Status feed refreshed");
        &self.snapshot
    }

    fn event_line(&mut self) -> String {
        let (node, _) = *REGIONS.choose(&mut self.rng).unwrap_or(&REGIONS[0]);
        let snap = &self.snapshot;
        match self.rng.random_range(0..4u8) {
            0 => format!("[SYNC] {} handshake {:.2}ms", node, snap.sync_latency_ms),
            1 => format!("[CORE] cognitive map refreshed at {:.1}% load", snap.neural_load_pct),
            2 => format!(
                "[EDGE] {} rebalanced {} shards",
                node,
                self.rng.random_range(2..=24u8)
            ),
            _ => format!("[SAFE] ethics audit passed on {}", node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nominal_figures() {
        let feed = StatusFeed::seeded(1);
        assert_eq!(feed.snapshot().active_nodes, 1_400);
        assert_eq!(feed.log().count(), 0);
    }

    #[test]
    fn values_stay_in_range() {
        let mut feed = StatusFeed::seeded(11);
        for _ in 0..200 {
            let snap = feed.tick().clone();
            assert!(LOAD_RANGE.contains(&snap.neural_load_pct));
            assert!(NODES_RANGE.contains(&snap.active_nodes));
            assert!(LATENCY_RANGE.contains(&snap.sync_latency_ms));
            assert!(THROUGHPUT_RANGE.contains(&snap.throughput_pf));
            assert_eq!(snap.regions.len(), 4);
            assert!(snap.regions.iter().all(|r| REGION_LOAD_RANGE.contains(&r.load_pct)));
            assert!(snap.online_regions() >= 1);
        }
    }

    #[test]
    fn log_is_bounded_newest_first() {
        let mut feed = StatusFeed::seeded(5);
        for _ in 0..10 {
            feed.tick();
        }
        assert_eq!(feed.log().count(), LOG_CAPACITY);
        assert_eq!(feed.ticks(), 10);
        assert!(feed.log().all(|line| line.starts_with('[')));
    }

    #[test]
    fn same_seed_same_figures() {
        let mut a = StatusFeed::seeded(99);
        let mut b = StatusFeed::seeded(99);
        for _ in 0..5 {
            assert_eq!(a.tick(), b.tick());
        }
    }
}
