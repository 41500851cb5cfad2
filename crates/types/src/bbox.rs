use geo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned bounding box.
///
/// Represents a rectangular area defined by minimum and maximum coordinates.
/// This is a wrapper around `geo::Rect` with additional functionality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// The underlying geometric rectangle
    pub rect: Rect,
}

impl BoundingBox2D {
    /// Create a new bounding box from minimum and maximum coordinates.
    ///
    /// # Arguments
    ///
    /// * `min_x` - Minimum longitude/x coordinate
    /// * `min_y` - Minimum latitude/y coordinate
    /// * `max_x` - Maximum longitude/x coordinate
    /// * `max_y` - Maximum latitude/y coordinate
    ///
    /// # Examples
    ///
    /// ```
    /// use hotspot_types::bbox::BoundingBox2D;
    ///
    /// let bbox = BoundingBox2D::new(-76.49, 42.44, -76.45, 42.46);
    /// assert!(bbox.width() > 0.0);
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: min_x, y: min_y },
                geo::coord! { x: max_x, y: max_y },
            ),
        }
    }

    /// Create a zero-area bounding box located at a single point.
    pub fn from_point(point: &Point) -> Self {
        Self::new(point.x(), point.y(), point.x(), point.y())
    }

    /// Create a bounding box from a `geo::Rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    /// Get the minimum x coordinate.
    pub fn min_x(&self) -> f64 {
        self.rect.min().x
    }

    /// Get the minimum y coordinate.
    pub fn min_y(&self) -> f64 {
        self.rect.min().y
    }

    /// Get the maximum x coordinate.
    pub fn max_x(&self) -> f64 {
        self.rect.max().x
    }

    /// Get the maximum y coordinate.
    pub fn max_y(&self) -> f64 {
        self.rect.max().y
    }

    /// Get the center point of the bounding box.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x() + self.max_x()) / 2.0,
            (self.min_y() + self.max_y()) / 2.0,
        )
    }

    /// Get the width of the bounding box.
    pub fn width(&self) -> f64 {
        self.max_x() - self.min_x()
    }

    /// Get the height of the bounding box.
    pub fn height(&self) -> f64 {
        self.max_y() - self.min_y()
    }

    /// Check if a point is contained within this bounding box.
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x() >= self.min_x()
            && point.x() <= self.max_x()
            && point.y() >= self.min_y()
            && point.y() <= self.max_y()
    }

    /// Grow the box so it covers `point`.
    ///
    /// Each axis moves at most one edge per call: a coordinate below the
    /// minimum lowers the minimum, otherwise one above the maximum raises it.
    pub fn extend_to(&mut self, point: &Point) {
        let (mut min_x, mut min_y) = (self.min_x(), self.min_y());
        let (mut max_x, mut max_y) = (self.max_x(), self.max_y());

        if point.y() < min_y {
            min_y = point.y();
        } else if point.y() > max_y {
            max_y = point.y();
        }
        if point.x() < min_x {
            min_x = point.x();
        } else if point.x() > max_x {
            max_x = point.x();
        }

        *self = Self::new(min_x, min_y, max_x, max_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_2d_basic() {
        let bbox = BoundingBox2D::new(-76.5, 42.4, -76.4, 42.5);
        assert_eq!(bbox.min_x(), -76.5);
        assert_eq!(bbox.min_y(), 42.4);
        assert_eq!(bbox.max_x(), -76.4);
        assert_eq!(bbox.max_y(), 42.5);

        let center = bbox.center();
        assert!((center.x() - -76.45).abs() < 1e-12);
        assert!((center.y() - 42.45).abs() < 1e-12);
    }

    #[test]
    fn test_bbox_2d_contains() {
        let bbox = BoundingBox2D::new(0.0, 0.0, 10.0, 10.0);

        assert!(bbox.contains_point(&Point::new(5.0, 5.0)));
        assert!(bbox.contains_point(&Point::new(10.0, 10.0)));
        assert!(!bbox.contains_point(&Point::new(15.0, 5.0)));
        assert!(!bbox.contains_point(&Point::new(5.0, -0.1)));
    }

    #[test]
    fn test_bbox_from_point_is_degenerate() {
        let bbox = BoundingBox2D::from_point(&Point::new(-76.47, 42.45));
        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.height(), 0.0);
        assert_eq!(bbox.center(), Point::new(-76.47, 42.45));
    }

    #[test]
    fn test_bbox_extend_to() {
        let mut bbox = BoundingBox2D::from_point(&Point::new(1.0, 1.0));
        bbox.extend_to(&Point::new(3.0, 0.0));
        bbox.extend_to(&Point::new(-2.0, 5.0));
        bbox.extend_to(&Point::new(0.0, 2.0));

        assert_eq!(bbox.min_x(), -2.0);
        assert_eq!(bbox.min_y(), 0.0);
        assert_eq!(bbox.max_x(), 3.0);
        assert_eq!(bbox.max_y(), 5.0);
    }

    #[test]
    fn test_bbox_serde_roundtrip() {
        let bbox = BoundingBox2D::new(-76.49, 42.44, -76.45, 42.46);
        let json = serde_json::to_string(&bbox).unwrap();
        let back: BoundingBox2D = serde_json::from_str(&json).unwrap();
        assert_eq!(bbox, back);
    }
}
