//! Grid indexing, cluster geometry, validation, and GeoJSON conversion.

pub mod accumulator;
pub mod geojson;
pub mod grid;
pub mod validation;
