//! Dense distance matrix.

use super::point::PointSet;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Entries are computed with [`Point::distance`](super::Point::distance),
/// so a lookup returns exactly the value direct evaluation would.
///
/// # Examples
///
/// ```
/// use u_anneal::geometry::{DistanceMatrix, PointSet};
///
/// let points = PointSet::new(vec![(0.0, 0.0).into(), (3.0, 4.0).into()]).unwrap();
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.size(), 2);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    pub fn from_points(points: &PointSet) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points.get(i).distance(points.get(j));
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
