//! Error types for hotspot clustering.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HotspotError>;

#[derive(Debug, Error)]
pub enum HotspotError {
    /// The point falls outside the configured grid and cannot be bucketed.
    #[error("Point outside grid bounds: [{latitude}, {longitude}]")]
    OutOfBounds { latitude: f64, longitude: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The point snapshot could not be read. No sink state has been touched.
    #[error("Point source unavailable: {0}")]
    SourceUnavailable(String),

    /// A sink operation failed. Hotspots written before the failure stay written.
    #[error("Hotspot sink unavailable: {0}")]
    SinkUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl HotspotError {
    /// True for errors that only concern a single input point.
    pub fn is_point_rejection(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::InvalidInput(_))
    }
}
