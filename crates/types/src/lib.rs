//! # hotspot-types
//!
//! Record types exchanged between the hotspot clustering engine and the
//! stores it reads from and writes to.
//!
//! - **Input**: `SourcePoint`, a latitude/longitude pair plus opaque metadata
//! - **Output**: `Hotspot`, the summary of one cluster
//! - **Geometry**: `BoundingBox2D`, an axis-aligned box in degree space
//!
//! Field names on the wire follow the remote store layout (`Latitude`,
//! `Longitude`, `Population`, `Radius`).
//!
//! ## Examples
//!
//! ```rust
//! use hotspot_types::point::SourcePoint;
//! use hotspot_types::bbox::BoundingBox2D;
//!
//! let user = SourcePoint::new(42.45, -76.47);
//! let campus = BoundingBox2D::new(-76.492466, 42.440911, -76.451231, 42.458938);
//! assert!(campus.contains_point(&user.position()));
//! ```

pub mod bbox;
pub mod hotspot;
pub mod point;
