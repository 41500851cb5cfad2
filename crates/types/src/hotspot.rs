use geo::Point;
use serde::{Deserialize, Serialize};

/// A published cluster: circular region summarizing a group of nearby points.
///
/// This is the record handed to the hotspot sink. Bounding extrema used to
/// derive `radius` are internal to the engine and are not part of it.
///
/// # Examples
///
/// ```
/// use hotspot_types::hotspot::Hotspot;
///
/// let h = Hotspot { latitude: 42.45, longitude: -76.47, population: 5, radius: 2e-5 };
/// let json = serde_json::to_string(&h).unwrap();
/// assert!(json.contains("\"Population\":5"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Hotspot {
    /// Centroid latitude in degrees
    pub latitude: f64,
    /// Centroid longitude in degrees
    pub longitude: f64,
    /// Number of member points
    pub population: usize,
    /// Padded radius in degrees
    pub radius: f64,
}

impl Hotspot {
    /// Centroid as a `geo::Point` (x = longitude, y = latitude).
    #[inline]
    pub fn centroid(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let h = Hotspot {
            latitude: 42.4500015,
            longitude: -76.47,
            population: 4,
            radius: 1.0e-6,
        };
        let value = serde_json::to_value(h).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(keys, vec!["Latitude", "Longitude", "Population", "Radius"]);
        assert_eq!(h.centroid(), Point::new(-76.47, 42.4500015));
    }
}
