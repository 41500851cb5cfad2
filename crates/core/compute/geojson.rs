//! GeoJSON conversion for hotspots.

use crate::engine::ClusterId;
use crate::error::{HotspotError, Result};
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, Value};
use hotspot_types::hotspot::Hotspot;
use serde_json::Map;

/// Converts one hotspot to a GeoJSON Point feature.
///
/// The feature id is the cluster id; `Population` and `Radius` become
/// properties.
pub fn hotspot_to_feature(id: &ClusterId, hotspot: &Hotspot) -> Feature {
    let geom = Geometry::new(Value::Point(vec![hotspot.longitude, hotspot.latitude]));

    let mut props = Map::new();
    props.insert("Population".to_string(), hotspot.population.into());
    props.insert("Radius".to_string(), hotspot.radius.into());

    Feature {
        bbox: None,
        geometry: Some(geom),
        id: Some(Id::String(id.to_string())),
        properties: Some(props),
        foreign_members: None,
    }
}

/// Converts hotspots to a GeoJSON FeatureCollection string.
pub fn hotspots_to_geojson(hotspots: &[(ClusterId, Hotspot)]) -> Result<String> {
    let features: Vec<Feature> = hotspots
        .iter()
        .map(|(id, hotspot)| hotspot_to_feature(id, hotspot))
        .collect();

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    serde_json::to_string(&collection).map_err(|e| {
        HotspotError::Serialization(format!("Failed to serialize FeatureCollection: {}", e))
    })
}

/// Parses a FeatureCollection produced by [`hotspots_to_geojson`].
pub fn hotspots_from_geojson(geojson: &str) -> Result<Vec<(String, Hotspot)>> {
    let collection: FeatureCollection = serde_json::from_str(geojson)
        .map_err(|e| HotspotError::InvalidInput(format!("Failed to parse GeoJSON: {}", e)))?;

    collection
        .features
        .into_iter()
        .map(|feature| {
            let id = match &feature.id {
                Some(Id::String(s)) => s.clone(),
                Some(Id::Number(n)) => n.to_string(),
                None => {
                    return Err(HotspotError::InvalidInput(
                        "Hotspot feature has no id".to_string(),
                    ));
                }
            };

            let coords = match feature.geometry.as_ref().map(|g| &g.value) {
                Some(Value::Point(coords)) if coords.len() >= 2 => coords,
                _ => {
                    return Err(HotspotError::InvalidInput(format!(
                        "Hotspot feature '{}' is not a Point",
                        id
                    )));
                }
            };

            let population = feature
                .property("Population")
                .and_then(|v| v.as_u64())
                .ok_or_else(|| {
                    HotspotError::InvalidInput(format!("Feature '{}' missing Population", id))
                })?;
            let radius = feature
                .property("Radius")
                .and_then(|v| v.as_f64())
                .ok_or_else(|| {
                    HotspotError::InvalidInput(format!("Feature '{}' missing Radius", id))
                })?;

            Ok((
                id,
                Hotspot {
                    latitude: coords[1],
                    longitude: coords[0],
                    population: population as usize,
                    radius,
                },
            ))
        })
        .collect()
}
