//! Running geometry of a growing cluster.

use geo::Point;
use hotspot_types::bbox::BoundingBox2D;
use hotspot_types::hotspot::Hotspot;

/// Incrementally maintained centroid, extrema and population of one cluster.
///
/// The centroid is updated as a weighted running mean, so after adding
/// `P1..Pn` it equals their arithmetic mean regardless of order (up to
/// floating point rounding). The extrema box starts as the seed point and
/// widens with every later addition.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAccumulator {
    centroid: Point,
    population: usize,
    extrema: BoundingBox2D,
}

impl ClusterAccumulator {
    /// Start a single-member cluster at `seed`.
    pub fn seeded(seed: Point) -> Self {
        Self {
            centroid: seed,
            population: 1,
            extrema: BoundingBox2D::from_point(&seed),
        }
    }

    /// Fold one more member into the cluster.
    pub fn add_point(&mut self, point: Point) -> &mut Self {
        let new_population = self.population + 1;
        let old_factor = self.population as f64 / new_population as f64;
        let new_factor = 1.0 / new_population as f64;

        self.centroid = Point::new(
            self.centroid.x() * old_factor + point.x() * new_factor,
            self.centroid.y() * old_factor + point.y() * new_factor,
        );
        self.extrema.extend_to(&point);
        self.population = new_population;
        self
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.population
    }

    /// Running centroid (x = longitude, y = latitude).
    #[inline]
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Bounding box of the members: `[min_lon, min_lat, max_lon, max_lat]`.
    #[inline]
    pub fn extrema(&self) -> &BoundingBox2D {
        &self.extrema
    }

    /// Mean half-extent of the extrema box, scaled by `padding`.
    ///
    /// Zero for a singleton. Singletons never reach the output, so that
    /// value is never published.
    pub fn radius(&self, padding: f64) -> f64 {
        let half_width = self.extrema.width() / 2.0;
        let half_height = self.extrema.height() / 2.0;
        (half_width + half_height) * 0.5 * padding
    }

    /// Output record with the radius derived from the current extrema.
    pub fn to_hotspot(&self, padding: f64) -> Hotspot {
        Hotspot {
            latitude: self.centroid.y(),
            longitude: self.centroid.x(),
            population: self.population,
            radius: self.radius(padding),
        }
    }
}
