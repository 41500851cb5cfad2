//! One complete read → cluster → replace cycle.

use super::{ClusterId, ClusteringEngine};
use crate::config::Config;
use crate::error::Result;
use crate::storage::{HotspotSink, PointSource};
use hotspot_types::hotspot::Hotspot;

/// Summary of a finished pass.
#[derive(Debug, Clone, Default)]
pub struct PassReport {
    /// Records in the snapshot
    pub received: usize,
    /// Records placed on the grid
    pub accepted: usize,
    /// Records dropped as out of bounds or malformed
    pub discarded: usize,
    /// Clusters with population > 1, published or not
    pub clusters_found: usize,
    /// Hotspots written to the sink
    pub hotspots: Vec<(ClusterId, Hotspot)>,
}

/// Run one pass from `source` to `sink`.
///
/// A snapshot read failure aborts before the sink is touched. A sink
/// failure aborts the pass wherever it happens; the sink is then left
/// cleared and partially rewritten.
pub fn run_pass<S, K>(config: &Config, source: &S, sink: &mut K) -> Result<PassReport>
where
    S: PointSource + ?Sized,
    K: HotspotSink + ?Sized,
{
    let mut engine = ClusteringEngine::new(config.clone())?;

    let snapshot = source.snapshot()?;
    let received = snapshot.len();
    let summary = engine.ingest_all(snapshot);

    let hotspots = engine.identify_clusters();

    sink.clear()?;
    for (id, hotspot) in &hotspots {
        sink.write(id, hotspot)?;
    }
    sink.flush()?;

    Ok(PassReport {
        received,
        accepted: summary.accepted,
        discarded: summary.discarded,
        clusters_found: engine.clusters().len(),
        hotspots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HotspotError;
    use crate::storage::MemoryBackend;
    use hotspot_types::point::SourcePoint;

    struct DownSource;

    impl PointSource for DownSource {
        fn snapshot(&self) -> Result<Vec<(String, SourcePoint)>> {
            Err(HotspotError::SourceUnavailable("connection refused".into()))
        }
    }

    fn stale_sink() -> (MemoryBackend, ClusterId) {
        let mut sink = MemoryBackend::new();
        let id = ClusterId::new();
        sink.write(
            &id,
            &Hotspot {
                latitude: 42.45,
                longitude: -76.47,
                population: 9,
                radius: 1e-5,
            },
        )
        .unwrap();
        (sink, id)
    }

    #[test]
    fn test_source_failure_leaves_sink_untouched() {
        let (mut sink, id) = stale_sink();
        let err = run_pass(&Config::default(), &DownSource, &mut sink).unwrap_err();

        assert!(matches!(err, HotspotError::SourceUnavailable(_)));
        assert!(sink.hotspots().contains_key(&id));
        assert_eq!(sink.stats().clears, 0);
    }

    #[test]
    fn test_empty_snapshot_clears_sink() {
        let (mut sink, _) = stale_sink();
        let report = run_pass(&Config::default(), &MemoryBackend::new(), &mut sink).unwrap();

        assert_eq!(report.received, 0);
        assert!(report.hotspots.is_empty());
        assert!(sink.hotspots().is_empty());
    }

    #[test]
    fn test_invalid_config_aborts() {
        let (mut sink, id) = stale_sink();
        let config = Config::default().with_tiles_per_dim(0);
        let err = run_pass(&config, &MemoryBackend::new(), &mut sink).unwrap_err();

        assert!(matches!(err, HotspotError::InvalidConfig(_)));
        assert!(sink.hotspots().contains_key(&id));
    }
}
