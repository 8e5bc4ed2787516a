//! Points and point sets.

use crate::error::{AnnealError, AnnealResult};
use rand::Rng;

/// A location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// An ordered, immutable collection of points indexed `0..len()`.
///
/// # Examples
///
/// ```
/// use u_anneal::geometry::PointSet;
///
/// let points = PointSet::new(vec![(0.0, 0.0).into(), (3.0, 4.0).into()]).unwrap();
/// assert_eq!(points.len(), 2);
/// assert!((points.get(0).distance(points.get(1)) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Default canvas width used by [`PointSet::random`] callers.
    pub const DEFAULT_WIDTH: u32 = 1000;

    /// Default canvas height used by [`PointSet::random`] callers.
    pub const DEFAULT_HEIGHT: u32 = 1000;

    /// Creates a point set, rejecting NaN or infinite coordinates.
    pub fn new(points: Vec<Point>) -> AnnealResult<Self> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(AnnealError::NonFiniteCoordinate { index });
        }
        Ok(Self { points })
    }

    /// Generates `n` points with integer coordinates drawn uniformly
    /// from `[0, width) x [0, height)`.
    pub fn random<R: Rng>(n: usize, width: u32, height: u32, rng: &mut R) -> AnnealResult<Self> {
        if width == 0 || height == 0 {
            return Err(AnnealError::invalid(
                "canvas",
                format!("width and height must be positive, got {width}x{height}"),
            ));
        }
        let points = (0..n)
            .map(|_| {
                let x = rng.random_range(0..width);
                let y = rng.random_range(0..height);
                Point::new(f64::from(x), f64::from(y))
            })
            .collect();
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &Point {
        &self.points[index]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
