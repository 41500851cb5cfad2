//! Point store: tile buckets plus engine-owned per-point state
//!
//! Source records are copied in on ingestion and never handed back for
//! mutation. Cluster membership and the fully-checked flag live in a
//! parallel `states` vector addressed by `PointId`.

use super::ClusterId;
use crate::compute::grid::Grid;
use crate::compute::validation::validate_source_point;
use crate::error::{HotspotError, Result};
use geo::Point;
use hotspot_types::point::SourcePoint;
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

/// Position of a point in the store, assigned in ingestion order.
pub type PointId = usize;

/// Engine-owned copy of a source record.
#[derive(Debug, Clone)]
pub struct StoredPoint {
    pub key: String,
    pub position: Point,
    pub metadata: Map<String, Value>,
    pub tile: usize,
}

/// Mutable clustering state of one point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointState {
    /// `None` while unclustered
    pub cluster: Option<ClusterId>,
    /// Set once the point has been used as a seed
    pub fully_checked: bool,
}

pub struct PointStore {
    points: Vec<StoredPoint>,
    states: Vec<PointState>,
    tiles: Vec<Vec<PointId>>,
    by_key: FxHashMap<String, PointId>,
}

impl PointStore {
    pub fn new(num_tiles: usize) -> Self {
        Self {
            points: Vec::new(),
            states: Vec::new(),
            tiles: vec![Vec::new(); num_tiles],
            by_key: FxHashMap::default(),
        }
    }

    /// Validate, locate and bucket one record.
    ///
    /// Fails with `InvalidInput` for non-finite or duplicate records and
    /// with `OutOfBounds` when the point lies outside the grid. A failed
    /// record leaves the store untouched.
    pub fn ingest(&mut self, grid: &Grid, key: String, point: &SourcePoint) -> Result<PointId> {
        validate_source_point(point)?;
        let tile = grid.locate(point.latitude, point.longitude)?;

        if self.by_key.contains_key(&key) {
            return Err(HotspotError::InvalidInput(format!(
                "Duplicate point key: {}",
                key
            )));
        }

        let id = self.points.len();
        self.by_key.insert(key.clone(), id);
        self.points.push(StoredPoint {
            key,
            position: point.position(),
            metadata: point.metadata.clone(),
            tile,
        });
        self.states.push(PointState::default());
        self.tiles[tile].push(id);

        Ok(id)
    }

    /// Points of `tile` and its search neighbours, concatenated in
    /// neighbour order. Not deduplicated.
    pub fn candidate_points(&self, grid: &Grid, tile: usize) -> Vec<PointId> {
        let search = grid.neighbor_tiles(tile);
        let total = search.iter().map(|&t| self.tiles[t].len()).sum();

        let mut people = Vec::with_capacity(total);
        for t in search {
            people.extend_from_slice(&self.tiles[t]);
        }
        people
    }

    pub fn tile(&self, tile: usize) -> &[PointId] {
        self.tiles.get(tile).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn point(&self, id: PointId) -> &StoredPoint {
        &self.points[id]
    }

    #[inline]
    pub fn state(&self, id: PointId) -> PointState {
        self.states[id]
    }

    #[inline]
    pub(crate) fn set_cluster(&mut self, id: PointId, cluster: Option<ClusterId>) {
        self.states[id].cluster = cluster;
    }

    #[inline]
    pub(crate) fn mark_checked(&mut self, id: PointId) {
        self.states[id].fully_checked = true;
    }

    /// Forget all cluster membership and checked flags.
    pub(crate) fn reset_states(&mut self) {
        self.states.fill(PointState::default());
    }

    pub fn find(&self, key: &str) -> Option<PointId> {
        self.by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointId, &StoredPoint, PointState)> {
        self.points
            .iter()
            .zip(self.states.iter())
            .enumerate()
            .map(|(id, (point, state))| (id, point, *state))
    }
}
