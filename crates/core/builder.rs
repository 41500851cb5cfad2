//! Engine builder for flexible configuration
//!
//! This module provides a builder pattern for creating clustering engines
//! with non-default grids and thresholds.

use crate::config::{Config, GridBounds};
use crate::engine::ClusteringEngine;
use crate::error::Result;

/// Builder for engine configuration.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    config: Config,
}

impl EngineBuilder {
    /// Create a new builder with the reference configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the area covered by the grid.
    pub fn bounds(mut self, bounds: GridBounds) -> Self {
        self.config = self.config.with_bounds(bounds);
        self
    }

    pub fn tiles_per_dim(mut self, tiles_per_dim: usize) -> Self {
        self.config = self.config.with_tiles_per_dim(tiles_per_dim);
        self
    }

    pub fn minimum_cluster_population(mut self, population: usize) -> Self {
        self.config = self.config.with_minimum_cluster_population(population);
        self
    }

    pub fn maximum_cluster_distance(mut self, distance: f64) -> Self {
        self.config = self.config.with_maximum_cluster_distance(distance);
        self
    }

    pub fn radius_padding(mut self, padding: f64) -> Self {
        self.config = self.config.with_radius_padding(padding);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<ClusteringEngine> {
        ClusteringEngine::new(self.config)
    }
}
