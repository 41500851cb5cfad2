//! Clustering engine: greedy, grid-restricted growth of hotspot clusters
//!
//! One [`ClusteringEngine`] owns the grid, the point store and the working
//! cluster mapping for a single pass. Tiles are visited in increasing index
//! order; inside a tile the candidate points (tile plus search neighbours)
//! are each used as a seed in turn, and every not-yet-checked, unclustered
//! candidate closer to the seed than `maximum_cluster_distance` joins the
//! seed's cluster. Membership is first come, first served: a point already
//! in one cluster is never moved into another.

mod pass;
mod store;

pub use pass::{PassReport, run_pass};
pub use store::{PointId, PointState, PointStore, StoredPoint};

use crate::builder::EngineBuilder;
use crate::compute::accumulator::ClusterAccumulator;
use crate::compute::grid::Grid;
use crate::config::Config;
use crate::error::Result;
use geo::{Distance, Euclidean};
use hotspot_types::hotspot::Hotspot;
use hotspot_types::point::SourcePoint;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Randomly generated cluster identifier; also the key a hotspot is published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(Uuid);

impl ClusterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ClusterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ClusterId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Outcome of bucketing a batch of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub accepted: usize,
    pub discarded: usize,
}

pub struct ClusteringEngine {
    config: Config,
    grid: Grid,
    store: PointStore,
    clusters: FxHashMap<ClusterId, ClusterAccumulator>,
}

impl ClusteringEngine {
    /// Create an empty engine. Fails if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.check()?;
        let grid = Grid::new(&config);
        let store = PointStore::new(grid.num_tiles());
        Ok(Self {
            config,
            grid,
            store,
            clusters: FxHashMap::default(),
        })
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    /// Bucket one record.
    ///
    /// Out-of-grid and malformed records are returned as errors and not
    /// stored; see [`ClusteringEngine::ingest_all`] for the logging variant.
    pub fn ingest(&mut self, key: impl Into<String>, point: &SourcePoint) -> Result<PointId> {
        self.store.ingest(&self.grid, key.into(), point)
    }

    /// Bucket a snapshot, discarding (and logging) every record that cannot
    /// be placed on the grid.
    pub fn ingest_all<I, K>(&mut self, records: I) -> IngestSummary
    where
        I: IntoIterator<Item = (K, SourcePoint)>,
        K: Into<String>,
    {
        let mut summary = IngestSummary::default();
        for (key, point) in records {
            let key = key.into();
            match self.store.ingest(&self.grid, key.clone(), &point) {
                Ok(_) => summary.accepted += 1,
                Err(e) => {
                    log::warn!(
                        "Discarding point '{}' at [{}, {}]: {}",
                        key,
                        point.latitude,
                        point.longitude,
                        e
                    );
                    summary.discarded += 1;
                }
            }
        }
        log::info!(
            "Finished bucketing: {} accepted, {} discarded",
            summary.accepted,
            summary.discarded
        );
        summary
    }

    /// Run the clustering pass over every stored point.
    ///
    /// Returns the hotspots whose population reaches
    /// `minimum_cluster_population`, largest first and by cluster id among
    /// equal populations. Smaller clusters stay
    /// in [`ClusteringEngine::clusters`] but are not returned. All per-point
    /// state is reset first, so repeated calls give the same geometry.
    pub fn identify_clusters(&mut self) -> Vec<(ClusterId, Hotspot)> {
        log::info!(
            "Beginning cluster identification over {} points",
            self.store.len()
        );
        self.clusters.clear();
        self.store.reset_states();

        if !self.store.is_empty() {
            for tile in 0..self.grid.num_tiles() {
                let people = self.store.candidate_points(&self.grid, tile);
                for pi in 0..people.len() {
                    self.grow_from_seed(&people, pi);
                }
            }
        }

        let padding = self.config.radius_padding;
        let minimum = self.config.minimum_cluster_population;
        let mut hotspots: Vec<(ClusterId, Hotspot)> = self
            .clusters
            .iter()
            .map(|(id, cluster)| (*id, cluster.to_hotspot(padding)))
            .filter(|(_, hotspot)| hotspot.population >= minimum)
            .collect();
        hotspots.sort_by(|a, b| {
            b.1.population.cmp(&a.1.population).then_with(|| a.0.cmp(&b.0))
        });

        for (id, h) in &hotspots {
            log::debug!(
                "Cluster identified: {} at [{}, {}], radius {}, population {}",
                id,
                h.latitude,
                h.longitude,
                h.radius,
                h.population
            );
        }
        log::info!(
            "Cluster identification complete: {} clusters, {} at or above population {}",
            self.clusters.len(),
            hotspots.len(),
            minimum
        );

        hotspots
    }

    /// One seed's merge attempt over `people[pi..]`.
    fn grow_from_seed(&mut self, people: &[PointId], pi: usize) {
        let seed = people[pi];
        let seed_position = self.store.point(seed).position;

        let (cluster_id, mut working) = match self.store.state(seed).cluster {
            Some(id) => {
                let working = self
                    .clusters
                    .remove(&id)
                    .unwrap_or_else(|| ClusterAccumulator::seeded(seed_position));
                (id, working)
            }
            None => {
                let id = ClusterId::new();
                self.store.set_cluster(seed, Some(id));
                (id, ClusterAccumulator::seeded(seed_position))
            }
        };

        let max_distance = self.config.maximum_cluster_distance;
        for &candidate in &people[pi..] {
            let state = self.store.state(candidate);
            if state.fully_checked {
                continue;
            }
            // Already merged here, or claimed by another cluster. Cross-cluster
            // contacts are left unresolved.
            if state.cluster.is_some() {
                continue;
            }

            let position = self.store.point(candidate).position;
            if Euclidean.distance(seed_position, position) < max_distance {
                working.add_point(position);
                self.store.set_cluster(candidate, Some(cluster_id));
            }
        }

        if working.population() > 1 {
            self.clusters.insert(cluster_id, working);
        } else {
            self.store.set_cluster(seed, None);
        }
        self.store.mark_checked(seed);
    }

    /// Working cluster mapping from the last pass (every cluster with population > 1).
    pub fn clusters(&self) -> &FxHashMap<ClusterId, ClusterAccumulator> {
        &self.clusters
    }

    /// Cluster the point with this source key belongs to, if any.
    pub fn cluster_of(&self, key: &str) -> Option<ClusterId> {
        self.store
            .find(key)
            .and_then(|id| self.store.state(id).cluster)
    }

    /// Source keys of every point assigned to `cluster`.
    pub fn members(&self, cluster: &ClusterId) -> Vec<&str> {
        self.store
            .iter()
            .filter(|(_, _, state)| state.cluster.as_ref() == Some(cluster))
            .map(|(_, point, _)| point.key.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
