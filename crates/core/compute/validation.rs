//! Validation for geographic coordinates.

use crate::error::{HotspotError, Result};
use geo::Point;
use hotspot_types::point::SourcePoint;

/// Validates a 2D point has valid longitude and latitude.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use hotspot::compute::validation::validate_geographic_point;
/// use geo::Point;
///
/// // Valid point
/// let ithaca = Point::new(-76.47, 42.45);
/// assert!(validate_geographic_point(&ithaca).is_ok());
///
/// // Invalid longitude
/// let invalid = Point::new(200.0, 40.0);
/// assert!(validate_geographic_point(&invalid).is_err());
///
/// // Invalid latitude
/// let invalid = Point::new(-74.0, 95.0);
/// assert!(validate_geographic_point(&invalid).is_err());
/// ```
pub fn validate_geographic_point(point: &Point) -> Result<()> {
    let (x, y) = (point.x(), point.y());

    if !x.is_finite() {
        return Err(HotspotError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(HotspotError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            y
        )));
    }

    if !(-180.0..=180.0).contains(&x) {
        return Err(HotspotError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            x
        )));
    }

    if !(-90.0..=90.0).contains(&y) {
        return Err(HotspotError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            y
        )));
    }

    Ok(())
}

/// Validates the coordinates of a source record.
pub fn validate_source_point(point: &SourcePoint) -> Result<()> {
    validate_geographic_point(&point.position())
}

/// Validates multiple source records, reporting the first bad key.
pub fn validate_source_points<'a, I>(points: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a SourcePoint)>,
{
    for (key, point) in points {
        validate_source_point(point)
            .map_err(|e| HotspotError::InvalidInput(format!("Point '{}': {}", key, e)))?;
    }
    Ok(())
}
