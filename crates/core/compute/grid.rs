//! Fixed-resolution tile grid over the configured bounding box.
//!
//! Tiles are numbered row-major from the bottom-left corner:
//! `index = lat_index * tiles_per_dim + lon_index`.

use crate::config::{Config, GridBounds};
use crate::error::{HotspotError, Result};
use hotspot_types::bbox::BoundingBox2D;
use smallvec::SmallVec;

/// A tile plus the tiles searched alongside it. Never more than nine.
pub type SearchTiles = SmallVec<[usize; 9]>;

/// Immutable grid geometry, computed once per engine.
#[derive(Debug, Clone)]
pub struct Grid {
    bounds: GridBounds,
    tiles_per_dim: usize,
    lat_step: f64,
    lon_step: f64,
}

impl Grid {
    pub fn new(config: &Config) -> Self {
        let bounds = config.bounds;
        let tiles_per_dim = config.tiles_per_dim;
        Self {
            bounds,
            tiles_per_dim,
            lat_step: (bounds.lat_top - bounds.lat_bottom) / tiles_per_dim as f64,
            lon_step: (bounds.lon_right - bounds.lon_left) / tiles_per_dim as f64,
        }
    }

    #[inline]
    pub fn tiles_per_dim(&self) -> usize {
        self.tiles_per_dim
    }

    #[inline]
    pub fn num_tiles(&self) -> usize {
        self.tiles_per_dim * self.tiles_per_dim
    }

    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Raw tile index for a coordinate pair.
    ///
    /// The result is only meaningful when it lies in `[0, num_tiles)`; use
    /// [`Grid::locate`] to get a checked index.
    pub fn tile_index(&self, latitude: f64, longitude: f64) -> i64 {
        let (lat_index, lon_index) = self.axis_indices(latitude, longitude);
        lat_index as i64 * self.tiles_per_dim as i64 + lon_index as i64
    }

    /// Checked tile index for a coordinate pair.
    ///
    /// Both axis indices must fall inside the grid, so a point just past the
    /// left or right edge is rejected rather than folded into a neighbouring
    /// row.
    pub fn locate(&self, latitude: f64, longitude: f64) -> Result<usize> {
        let (lat_index, lon_index) = self.axis_indices(latitude, longitude);
        let dim = self.tiles_per_dim as f64;

        if !(0.0..dim).contains(&lat_index) || !(0.0..dim).contains(&lon_index) {
            return Err(HotspotError::OutOfBounds {
                latitude,
                longitude,
            });
        }

        Ok(lat_index as usize * self.tiles_per_dim + lon_index as usize)
    }

    fn axis_indices(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        (
            ((latitude - self.bounds.lat_bottom) / self.lat_step).floor(),
            ((longitude - self.bounds.lon_left) / self.lon_step).floor(),
        )
    }

    /// The geographic rectangle covered by one tile.
    pub fn tile_bbox(&self, tile: usize) -> Option<BoundingBox2D> {
        if tile >= self.num_tiles() {
            return None;
        }
        let row = (tile / self.tiles_per_dim) as f64;
        let col = (tile % self.tiles_per_dim) as f64;
        let min_x = self.bounds.lon_left + col * self.lon_step;
        let min_y = self.bounds.lat_bottom + row * self.lat_step;
        Some(BoundingBox2D::new(
            min_x,
            min_y,
            min_x + self.lon_step,
            min_y + self.lat_step,
        ))
    }

    /// Tiles whose points are compared against the points of `tile`.
    ///
    /// Order: the tile itself, then the column to the left (below, same row,
    /// above), then the column to the right (below, same row, above), then
    /// the tile directly below and directly above.
    ///
    /// Edge handling is index arithmetic only. A side column is used when
    /// `(tile ∓ 1) % tiles_per_dim` (truncating remainder) lies on the
    /// expected side of the raw tile index, not of its column. The left
    /// column is therefore always searched, wrapping into the previous row
    /// for tiles in column 0, and the right column only for tiles below
    /// `tiles_per_dim - 1`. A neighbour index is kept when it is strictly
    /// greater than zero and strictly less than `num_tiles - 1`, so tile 0
    /// and the last tile are never listed as anyone's neighbour. Pairs across
    /// a right-hand boundary are still found from the other tile's left
    /// column. Cluster shapes depend on this exact set.
    pub fn neighbor_tiles(&self, tile: usize) -> SearchTiles {
        let t = tile as i64;
        let dim = self.tiles_per_dim as i64;
        let last = self.num_tiles() as i64 - 1;

        let mut tiles = SearchTiles::new();
        tiles.push(tile);

        let back = t - 1;
        if back % dim < t {
            for candidate in [back - dim, back] {
                if candidate > 0 {
                    tiles.push(candidate as usize);
                }
            }
            if back + dim < last {
                tiles.push((back + dim) as usize);
            }
        }

        let forward = t + 1;
        if forward % dim > t {
            if forward - dim > 0 {
                tiles.push((forward - dim) as usize);
            }
            for candidate in [forward, forward + dim] {
                if candidate < last {
                    tiles.push(candidate as usize);
                }
            }
        }

        if t - dim > 0 {
            tiles.push((t - dim) as usize);
        }
        if t + dim < last {
            tiles.push((t + dim) as usize);
        }

        tiles
    }
}
