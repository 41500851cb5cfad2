//! Hotspot detection for geolocated points.
//!
//! ## Features
//! - **Tile grid**: points are bucketed into a fixed `N x N` grid over a configured bounding box
//! - **Greedy clustering**: clusters grow from seed points by a distance threshold, searching only neighbouring tiles
//! - **Incremental geometry**: running centroid, extrema and padded radius per cluster
//! - **Full-replace publishing**: each pass clears the sink and writes the surviving hotspots
//!
//! ## Behavior
//! Clustering is single-linkage and first come, first served:
//! - A point joins the first cluster whose seed reaches it and never moves
//! - Clusters that touch are not merged
//! - Clusters below `minimum_cluster_population` are computed but not published
//!
//! ```rust
//! use hotspot::{ClusteringEngine, Config, SourcePoint};
//!
//! let mut engine = ClusteringEngine::new(Config::default())?;
//! engine.ingest_all([
//!     ("a", SourcePoint::new(42.45, -76.47)),
//!     ("b", SourcePoint::new(42.450001, -76.47)),
//!     ("c", SourcePoint::new(42.450002, -76.47)),
//!     ("d", SourcePoint::new(42.450003, -76.47)),
//! ]);
//!
//! let hotspots = engine.identify_clusters();
//! assert_eq!(hotspots.len(), 1);
//! assert_eq!(hotspots[0].1.population, 4);
//! # Ok::<(), hotspot::HotspotError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod engine;
pub mod error;
pub mod storage;

pub use builder::EngineBuilder;
pub use config::{Config, GridBounds};
pub use engine::{ClusterId, ClusteringEngine, IngestSummary, PassReport, run_pass};
pub use error::{HotspotError, Result};

pub use hotspot_types::bbox::BoundingBox2D;
pub use hotspot_types::hotspot::Hotspot;
pub use hotspot_types::point::SourcePoint;

pub use compute::accumulator::ClusterAccumulator;
pub use compute::grid::Grid;

// Re-export validation and GeoJSON utilities
pub use compute::geojson;
pub use compute::validation;

pub use storage::{
    HotspotSink, JsonFileSink, JsonFileSource, MemoryBackend, OutputFormat, PointSource,
    StorageStats,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{ClusterId, ClusteringEngine, EngineBuilder, HotspotError, Result};
    pub use crate::{Config, GridBounds};
    pub use crate::{Hotspot, SourcePoint};
    pub use crate::{HotspotSink, MemoryBackend, PointSource, run_pass};
    pub use crate::{geojson, validation};
}
