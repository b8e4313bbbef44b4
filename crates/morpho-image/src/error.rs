/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images are expected to have the same size.
    #[error("Image size mismatch: expected {0}x{1}, got {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel data cannot be cast to the requested type.
    #[error("Failed to cast image data")]
    CastError,

    /// Error when accessing a pixel outside the image bounds.
    #[error("Pixel coordinates ({0}, {1}, {2}) out of bounds for image {3}x{4}x{5}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize, usize, usize),
}
