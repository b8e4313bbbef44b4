use morpho_image::ImageError;

/// Errors produced by the geodesic distance transform.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeodesicError {
    /// The chamfer weight vector has fewer entries than the neighborhood requires.
    #[error("Chamfer weight vector has {0} entries, the neighborhood requires {1}")]
    NotEnoughWeights(usize, usize),

    /// A chamfer weight is zero or negative.
    #[error("Chamfer weights must be strictly positive")]
    NonPositiveWeight,

    /// The marker, mask, and result buffers do not agree in size.
    #[error(transparent)]
    Image(#[from] ImageError),
}
