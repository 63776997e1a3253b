use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixkit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Check that both dimensions are positive.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimensions`] if the width or the height is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixkit_image::{ImageError, ImageSize};
    ///
    /// assert!(ImageSize { width: 2, height: 1 }.validate().is_ok());
    /// assert_eq!(
    ///     ImageSize { width: 0, height: 1 }.validate(),
    ///     Err(ImageError::InvalidDimensions(0, 1)),
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ImageError> {
        if self.width == 0 || self.height == 0 {
            return Err(ImageError::InvalidDimensions(self.width, self.height));
        }
        Ok(())
    }

    /// Number of values in a buffer of this size with `channels` values per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimensions`] if the width or the height is zero,
    /// and [`ImageError::SizeOverflow`] if the length does not fit in a buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixkit_image::{ImageError, ImageSize};
    ///
    /// assert_eq!(ImageSize { width: 3, height: 2 }.buffer_len(4), Ok(24));
    /// assert_eq!(
    ///     ImageSize { width: usize::MAX, height: 2 }.buffer_len(4),
    ///     Err(ImageError::SizeOverflow(usize::MAX, 2, 4)),
    /// );
    /// ```
    pub fn buffer_len(&self, channels: usize) -> Result<usize, ImageError> {
        self.validate()?;

        // a Vec never holds more than isize::MAX bytes
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(channels))
            .filter(|&n| n <= isize::MAX as usize)
            .ok_or(ImageError::SizeOverflow(self.width, self.height, channels))
    }
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

/// Trait for image data types.
///
/// Send and Sync is required to process rows on the rayon thread pool.
pub trait ImageDtype: Copy + Default + Send + Sync {
    /// Convert a f32 value to the image data type.
    ///
    /// Integer types saturate to their range instead of wrapping.
    fn from_f32(x: f32) -> Self;
}

impl ImageDtype for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl ImageDtype for u8 {
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

/// Represents an image with pixel data.
///
/// The pixel data is stored row-major and interleaved: pixel `(x, y)` occupies
/// the `CHANNELS` consecutive values starting at `(y * width + x) * CHANNELS`.
///
/// The length of the data always equals `width * height * CHANNELS` and both
/// dimensions are positive.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

/// An 8-bit image with the channels laid out as `{R, G, B, A}`.
///
/// # Examples
///
/// ```
/// use pixkit_image::{ImageSize, Rgba8Image};
///
/// let image = Rgba8Image::new(ImageSize { width: 1, height: 1 }, vec![255, 0, 0, 255]).unwrap();
///
/// assert_eq!(image.pixel(0, 0).unwrap(), &[255, 0, 0, 255]);
/// ```
pub type Rgba8Image = Image<u8, 4>;

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If a dimension is zero, [`ImageError::InvalidDimensions`] is returned.
    /// If `width * height * CHANNELS` overflows, [`ImageError::SizeOverflow`] is returned.
    /// If the length of the pixel data does not match the image size,
    /// [`ImageError::BufferSizeMismatch`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 4],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 4);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        let expected = size.buffer_len(CHANNELS)?;
        if data.len() != expected {
            return Err(ImageError::BufferSizeMismatch(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The default value of the pixel data.
    ///
    /// # Errors
    ///
    /// If a dimension is zero, or the buffer would not fit in memory, an error
    /// is returned before anything is allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.as_slice().len(), 10 * 20 * 4);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let len = size.buffer_len(CHANNELS)?;
        let bytes = len.checked_mul(std::mem::size_of::<T>());
        if bytes.map_or(true, |b| b > isize::MAX as usize) {
            return Err(ImageError::SizeOverflow(size.width, size.height, CHANNELS));
        }

        let data = vec![val; len];
        Image::new(size, data)
    }

    /// Create a new image from floating point values, converting each one
    /// with [`ImageDtype::from_f32`].
    ///
    /// Values out of the range of `T` saturate.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::from_f32_data(
    ///     ImageSize { width: 1, height: 1 },
    ///     &[-3.0, 12.4, 300.0, 255.0],
    /// ).unwrap();
    ///
    /// assert_eq!(image.as_slice(), &[0, 12, 255, 255]);
    /// ```
    pub fn from_f32_data(size: ImageSize, data: &[f32]) -> Result<Self, ImageError>
    where
        T: ImageDtype,
    {
        let expected = size.buffer_len(CHANNELS)?;
        if data.len() != expected {
            return Err(ImageError::BufferSizeMismatch(data.len(), expected));
        }

        Image::new(size, data.iter().map(|&x| T::from_f32(x)).collect())
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable slice.
    ///
    /// The length of the slice is fixed, so the size invariant holds.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return the underlying pixel buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the channel values of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::new(
    ///     ImageSize { width: 2, height: 1 },
    ///     vec![1, 2, 3, 4, 5, 6, 7, 8],
    /// ).unwrap();
    ///
    /// assert_eq!(image.pixel(1, 0).unwrap(), &[5, 6, 7, 8]);
    /// ```
    pub fn pixel(&self, x: usize, y: usize) -> Result<&[T], ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        let offset = (y * self.width() + x) * CHANNELS;
        Ok(&self.data[offset..offset + CHANNELS])
    }

    /// Get a single channel value of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// If the coordinates or the channel index are out of bounds, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<&T, ImageError> {
        if ch >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, CHANNELS));
        }

        Ok(&self.pixel(x, y)?[ch])
    }
}
