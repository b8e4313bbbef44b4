use num_traits::Zero;

use super::GeodesicError;

/// Number of weights required by the 3-by-3 chamfer neighborhood.
const NUM_WEIGHTS_2D: usize = 2;

/// Chamfer weights for a 3-by-3 neighborhood.
///
/// The pair holds the cost of an orthogonal (axis-aligned) step and the
/// cost of a diagonal step. Callers usually want one of the presets; custom
/// weights are assumed metric (`w0 <= w1 <= 2 * w0`), although this is not
/// enforced.
///
/// # Examples
///
/// ```
/// use morpho_imgproc::geodesic::ChamferWeights;
///
/// let weights = ChamferWeights::<f32>::borgefors();
/// assert_eq!(weights.orthogonal(), 3.0);
/// assert_eq!(weights.diagonal(), 4.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChamferWeights<T> {
    orthogonal: T,
    diagonal: T,
}

impl<T> ChamferWeights<T>
where
    T: Copy + PartialOrd + Zero,
{
    /// Create chamfer weights from an orthogonal and a diagonal step cost.
    ///
    /// # Errors
    ///
    /// Returns [`GeodesicError::NonPositiveWeight`] if either cost is zero
    /// or negative.
    pub fn new(orthogonal: T, diagonal: T) -> Result<Self, GeodesicError> {
        if orthogonal <= T::zero() || diagonal <= T::zero() {
            return Err(GeodesicError::NonPositiveWeight);
        }

        Ok(Self {
            orthogonal,
            diagonal,
        })
    }

    /// Create chamfer weights from a caller-supplied weight vector.
    ///
    /// The first entry is the orthogonal cost and the second the diagonal
    /// cost. Additional entries are reserved for larger neighborhoods and
    /// ignored here.
    ///
    /// # Errors
    ///
    /// Returns [`GeodesicError::NotEnoughWeights`] if the slice has fewer
    /// than two entries, or [`GeodesicError::NonPositiveWeight`] if any of
    /// the first two is zero or negative.
    pub fn from_slice(weights: &[T]) -> Result<Self, GeodesicError> {
        if weights.len() < NUM_WEIGHTS_2D {
            return Err(GeodesicError::NotEnoughWeights(
                weights.len(),
                NUM_WEIGHTS_2D,
            ));
        }

        Self::new(weights[0], weights[1])
    }

    /// The cost of an axis-aligned step.
    pub fn orthogonal(&self) -> T {
        self.orthogonal
    }

    /// The cost of a diagonal step.
    pub fn diagonal(&self) -> T {
        self.diagonal
    }
}

impl ChamferWeights<f32> {
    /// Chessboard weights (1, 1): the map counts Chebyshev steps.
    pub fn chessboard() -> Self {
        Self {
            orthogonal: 1.0,
            diagonal: 1.0,
        }
    }

    /// City-block weights (1, 2): diagonal moves cost two orthogonal steps.
    pub fn city_block() -> Self {
        Self {
            orthogonal: 1.0,
            diagonal: 2.0,
        }
    }

    /// Quasi-euclidean weights (1, sqrt(2)).
    pub fn quasi_euclidean() -> Self {
        Self {
            orthogonal: 1.0,
            diagonal: std::f32::consts::SQRT_2,
        }
    }

    /// Borgefors weights (3, 4), the best integer approximation for a
    /// 3-by-3 neighborhood.
    pub fn borgefors() -> Self {
        Self {
            orthogonal: 3.0,
            diagonal: 4.0,
        }
    }
}

impl ChamferWeights<u16> {
    /// Chessboard weights (1, 1).
    pub fn chessboard() -> Self {
        Self {
            orthogonal: 1,
            diagonal: 1,
        }
    }

    /// City-block weights (1, 2).
    pub fn city_block() -> Self {
        Self {
            orthogonal: 1,
            diagonal: 2,
        }
    }

    /// Quasi-euclidean weights (10, 14), scaled to integers.
    pub fn quasi_euclidean() -> Self {
        Self {
            orthogonal: 10,
            diagonal: 14,
        }
    }

    /// Borgefors weights (3, 4).
    pub fn borgefors() -> Self {
        Self {
            orthogonal: 3,
            diagonal: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChamferWeights;
    use crate::geodesic::GeodesicError;

    #[test]
    fn new_validates_positivity() {
        assert!(ChamferWeights::new(1.0f32, 1.4142).is_ok());
        assert_eq!(
            ChamferWeights::new(0.0f32, 1.0),
            Err(GeodesicError::NonPositiveWeight)
        );
        assert_eq!(
            ChamferWeights::new(1.0f32, -1.0),
            Err(GeodesicError::NonPositiveWeight)
        );
    }

    #[test]
    fn from_slice_requires_two_entries() {
        assert_eq!(
            ChamferWeights::<f32>::from_slice(&[]),
            Err(GeodesicError::NotEnoughWeights(0, 2))
        );
        assert_eq!(
            ChamferWeights::from_slice(&[1.0f32]),
            Err(GeodesicError::NotEnoughWeights(1, 2))
        );

        let weights = ChamferWeights::from_slice(&[3.0f32, 4.0]).unwrap();
        assert_eq!(weights.orthogonal(), 3.0);
        assert_eq!(weights.diagonal(), 4.0);
    }

    #[test]
    fn from_slice_ignores_extra_entries() {
        // 3-weight vectors come from callers shared with the 3d variant
        let weights = ChamferWeights::from_slice(&[3u16, 4, 5]).unwrap();
        assert_eq!(weights.orthogonal(), 3);
        assert_eq!(weights.diagonal(), 4);
    }

    #[test]
    fn presets() {
        assert_eq!(ChamferWeights::<f32>::chessboard().diagonal(), 1.0);
        assert_eq!(ChamferWeights::<f32>::city_block().diagonal(), 2.0);
        assert_eq!(ChamferWeights::<u16>::quasi_euclidean().orthogonal(), 10);
        assert_eq!(ChamferWeights::<u16>::borgefors().diagonal(), 4);
    }
}
