use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use morpho_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The pixel data is stored as a single contiguous buffer in row-major
/// order with interleaved channels, i.e. the element for channel `c` of the
/// pixel at `(x, y)` lives at index `(y * width + x) * C + c`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const C: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const C: usize> Image<T, C>
where
    T: Copy,
{
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use morpho_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 1>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 1);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * C {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * C,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size, where every element is `val`.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError> {
        let data = vec![val; size.width * size.height * C];
        Image::new(size, data)
    }

    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The number of channels of the image.
    pub fn num_channels(&self) -> usize {
        C
    }

    /// Get the pixel data of the image as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data of the image as a mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return the pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the pixel value at the given coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the pixel.
    /// * `y` - The y-coordinate of the pixel.
    /// * `ch` - The channel index of the pixel.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use morpho_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 1>::new(
    ///    ImageSize { width: 2, height: 2 },
    ///    vec![0, 1, 2, 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.get_pixel(1, 0, 0).unwrap(), 1);
    /// assert_eq!(image.get_pixel(0, 1, 0).unwrap(), 2);
    /// ```
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<T, ImageError> {
        if x >= self.size.width || y >= self.size.height || ch >= C {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                ch,
                self.size.width,
                self.size.height,
                C,
            ));
        }

        Ok(self.data[(y * self.size.width + x) * C + ch])
    }

    /// Set the pixel value at the given coordinates.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds, an error is returned.
    pub fn set_pixel(&mut self, x: usize, y: usize, ch: usize, val: T) -> Result<(), ImageError> {
        if x >= self.size.width || y >= self.size.height || ch >= C {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                ch,
                self.size.width,
                self.size.height,
                C,
            ));
        }

        self.data[(y * self.size.width + x) * C + ch] = val;

        Ok(())
    }

    /// Cast the pixel data to another numeric type.
    ///
    /// # Errors
    ///
    /// If a pixel value cannot be represented in the new type, an error is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use morpho_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 1>::new(
    ///    ImageSize { width: 2, height: 1 },
    ///    vec![0, 255],
    /// ).unwrap();
    ///
    /// let image_f32 = image.cast::<f32>().unwrap();
    /// assert_eq!(image_f32.as_slice(), &[0.0, 255.0]);
    /// ```
    pub fn cast<U>(&self) -> Result<Image<U, C>, ImageError>
    where
        T: num_traits::NumCast,
        U: Copy + num_traits::NumCast,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, casted_data)
    }

    /// Apply a function to each element of the image buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use morpho_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 1>::new(
    ///    ImageSize { width: 2, height: 1 },
    ///    vec![1, 2],
    /// ).unwrap();
    ///
    /// let doubled = image.map(|x| x * 2);
    /// assert_eq!(doubled.as_slice(), &[2, 4]);
    /// ```
    pub fn map<U, F>(&self, f: F) -> Image<U, C>
    where
        U: Copy,
        F: Fn(&T) -> U,
    {
        Image {
            size: self.size,
            data: self.data.iter().map(f).collect(),
        }
    }
}
