//! In-memory source and sink implementation.

use super::{HotspotSink, PointSource, StorageStats};
use crate::engine::ClusterId;
use crate::error::Result;
use hotspot_types::hotspot::Hotspot;
use hotspot_types::point::SourcePoint;
use std::cell::Cell;
use std::collections::BTreeMap;

/// In-memory backend holding both the point collection and the hotspot collection
#[derive(Debug, Default)]
pub struct MemoryBackend {
    points: BTreeMap<String, SourcePoint>,
    hotspots: BTreeMap<ClusterId, Hotspot>,
    snapshots: Cell<u64>,
    stats: StorageStats,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend preloaded with point records
    pub fn with_points<I, K>(points: I) -> Self
    where
        I: IntoIterator<Item = (K, SourcePoint)>,
        K: Into<String>,
    {
        let mut backend = Self::new();
        for (key, point) in points {
            backend.put_point(key, point);
        }
        backend
    }

    /// Insert or replace one point record
    pub fn put_point(&mut self, key: impl Into<String>, point: SourcePoint) -> Option<SourcePoint> {
        self.points.insert(key.into(), point)
    }

    pub fn remove_point(&mut self, key: &str) -> Option<SourcePoint> {
        self.points.remove(key)
    }

    pub fn points(&self) -> &BTreeMap<String, SourcePoint> {
        &self.points
    }

    pub fn hotspots(&self) -> &BTreeMap<ClusterId, Hotspot> {
        &self.hotspots
    }

    pub fn stats(&self) -> StorageStats {
        let mut stats = self.stats.clone();
        stats.snapshots = self.snapshots.get();
        stats
    }
}

impl PointSource for MemoryBackend {
    fn snapshot(&self) -> Result<Vec<(String, SourcePoint)>> {
        self.snapshots.set(self.snapshots.get() + 1);
        Ok(self
            .points
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

impl HotspotSink for MemoryBackend {
    fn clear(&mut self) -> Result<()> {
        self.hotspots.clear();
        self.stats.clears += 1;
        Ok(())
    }

    fn write(&mut self, id: &ClusterId, hotspot: &Hotspot) -> Result<()> {
        self.hotspots.insert(*id, *hotspot);
        self.stats.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_snapshot() {
        let mut backend = MemoryBackend::with_points([
            ("0", SourcePoint::new(42.45, -76.47)),
            ("1", SourcePoint::new(42.46, -76.46)),
        ]);
        backend.put_point("2", SourcePoint::new(42.44, -76.48));
        assert!(backend.remove_point("1").is_some());

        let snapshot = backend.snapshot().unwrap();
        let keys: Vec<&str> = snapshot.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["0", "2"]);
        assert_eq!(backend.stats().snapshots, 1);
    }

    #[test]
    fn test_memory_backend_sink_replaces() {
        let mut backend = MemoryBackend::new();
        let h = Hotspot {
            latitude: 42.45,
            longitude: -76.47,
            population: 4,
            radius: 1e-6,
        };

        backend.write(&ClusterId::new(), &h).unwrap();
        backend.write(&ClusterId::new(), &h).unwrap();
        assert_eq!(backend.hotspots().len(), 2);

        backend.clear().unwrap();
        assert!(backend.hotspots().is_empty());

        let id = ClusterId::new();
        backend.write(&id, &h).unwrap();
        backend.flush().unwrap();
        assert_eq!(backend.hotspots()[&id], h);

        let stats = backend.stats();
        assert_eq!(stats.clears, 1);
        assert_eq!(stats.writes, 3);
    }
}
