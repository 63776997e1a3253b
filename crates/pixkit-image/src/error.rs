/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when a width or a height is zero.
    #[error("Invalid image dimensions ({0}x{1}), width and height must be positive")]
    InvalidDimensions(usize, usize),

    /// Error when the buffer length for a size does not fit in memory.
    #[error("Image size ({0}x{1}) with {2} channels overflows the buffer length")]
    SizeOverflow(usize, usize, usize),

    /// Error when the buffer length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    BufferSizeMismatch(usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),
}
