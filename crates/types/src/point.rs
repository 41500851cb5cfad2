use geo::Point;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A geolocated record read from the point source.
///
/// Only `Latitude` and `Longitude` are interpreted. Every other field of the
/// record is kept verbatim in `metadata` and written back out unchanged when
/// the record is serialized.
///
/// # Examples
///
/// ```
/// use hotspot_types::point::SourcePoint;
///
/// let json = r#"{"Latitude":42.45,"Longitude":-76.47,"Velocity":[0.0,0.0]}"#;
/// let user: SourcePoint = serde_json::from_str(json).unwrap();
/// assert_eq!(user.latitude, 42.45);
/// assert!(user.metadata.contains_key("Velocity"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourcePoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Opaque pass-through fields
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl SourcePoint {
    /// Create a record without metadata.
    ///
    /// Note the argument order: latitude first, as in the stored records.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            metadata: Map::new(),
        }
    }

    /// Attach one metadata field.
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// The record as a `geo::Point` (x = longitude, y = latitude).
    #[inline]
    pub fn position(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl From<(f64, f64)> for SourcePoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
