//! Configuration for the clustering pass
//!
//! Defaults reproduce the reference deployment: a 128x128 grid over the
//! Cornell campus area, a 0.00005 degree merge distance and a minimum
//! published population of 4.
use crate::error::{HotspotError, Result};
use hotspot_types::bbox::BoundingBox2D;
use serde::de::Error;

/// Largest accepted `tiles_per_dim`; the grid allocates `tiles_per_dim²` buckets.
pub const MAX_TILES_PER_DIM: usize = 2048;

/// Geographic rectangle covered by the tile grid, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridBounds {
    pub lat_top: f64,
    pub lat_bottom: f64,
    pub lon_left: f64,
    pub lon_right: f64,
}

impl GridBounds {
    pub const fn new(lat_top: f64, lat_bottom: f64, lon_left: f64, lon_right: f64) -> Self {
        Self {
            lat_top,
            lat_bottom,
            lon_left,
            lon_right,
        }
    }

    pub fn to_bbox(&self) -> BoundingBox2D {
        BoundingBox2D::new(self.lon_left, self.lat_bottom, self.lon_right, self.lat_top)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        let all = [self.lat_top, self.lat_bottom, self.lon_left, self.lon_right];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(format!("Grid bounds must be finite, got: {:?}", self));
        }
        if self.lat_top <= self.lat_bottom {
            return Err(format!(
                "lat_top ({}) must be greater than lat_bottom ({})",
                self.lat_top, self.lat_bottom
            ));
        }
        if self.lon_right <= self.lon_left {
            return Err(format!(
                "lon_right ({}) must be greater than lon_left ({})",
                self.lon_right, self.lon_left
            ));
        }
        Ok(())
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::new(42.458938, 42.440911, -76.492466, -76.451231)
    }
}

/// Clustering configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bounds: GridBounds,

    /// Tiles along each axis; the grid holds `tiles_per_dim²` tiles
    #[serde(default = "Config::default_tiles_per_dim")]
    pub tiles_per_dim: usize,

    /// Hotspots below this population are computed but never published
    #[serde(default = "Config::default_minimum_cluster_population")]
    pub minimum_cluster_population: usize,

    /// Strict upper bound on seed-to-candidate distance, in degrees
    #[serde(default = "Config::default_maximum_cluster_distance")]
    pub maximum_cluster_distance: f64,

    #[serde(default = "Config::default_radius_padding")]
    pub radius_padding: f64,
}

impl Config {
    const fn default_tiles_per_dim() -> usize {
        128
    }

    const fn default_minimum_cluster_population() -> usize {
        4
    }

    const fn default_maximum_cluster_distance() -> f64 {
        0.00005
    }

    const fn default_radius_padding() -> f64 {
        1.333
    }

    pub fn with_bounds(mut self, bounds: GridBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_tiles_per_dim(mut self, tiles_per_dim: usize) -> Self {
        self.tiles_per_dim = tiles_per_dim;
        self
    }

    pub fn with_minimum_cluster_population(mut self, population: usize) -> Self {
        self.minimum_cluster_population = population;
        self
    }

    pub fn with_maximum_cluster_distance(mut self, distance: f64) -> Self {
        self.maximum_cluster_distance = distance;
        self
    }

    pub fn with_radius_padding(mut self, padding: f64) -> Self {
        self.radius_padding = padding;
        self
    }

    /// Total number of tiles in the grid.
    pub fn num_tiles(&self) -> usize {
        self.tiles_per_dim.saturating_mul(self.tiles_per_dim)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        self.bounds.validate()?;

        if self.tiles_per_dim == 0 {
            return Err("tiles_per_dim must be greater than zero".to_string());
        }

        if self.tiles_per_dim > MAX_TILES_PER_DIM {
            return Err(format!(
                "tiles_per_dim must be at most {}, got: {}",
                MAX_TILES_PER_DIM, self.tiles_per_dim
            ));
        }

        if self.tiles_per_dim > 1024 {
            log::warn!(
                "Grid of {}x{} tiles is very large and allocates one bucket per tile.",
                self.tiles_per_dim,
                self.tiles_per_dim
            );
        }

        if self.minimum_cluster_population == 0 {
            return Err("minimum_cluster_population must be greater than zero".to_string());
        }

        if !self.maximum_cluster_distance.is_finite() || self.maximum_cluster_distance <= 0.0 {
            return Err(format!(
                "maximum_cluster_distance must be a positive number, got: {}",
                self.maximum_cluster_distance
            ));
        }

        if !self.radius_padding.is_finite() || self.radius_padding < 0.0 {
            return Err(format!(
                "radius_padding must be non-negative, got: {}",
                self.radius_padding
            ));
        }

        Ok(())
    }

    /// Validate and convert the message into the crate error type.
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(HotspotError::InvalidConfig)
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: GridBounds::default(),
            tiles_per_dim: Self::default_tiles_per_dim(),
            minimum_cluster_population: Self::default_minimum_cluster_population(),
            maximum_cluster_distance: Self::default_maximum_cluster_distance(),
            radius_padding: Self::default_radius_padding(),
        }
    }
}
