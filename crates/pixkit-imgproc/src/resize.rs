use crate::interpolation::nearest_index_map;
use crate::parallel::{self, ExecutionStrategy, ParallelError};
use pixkit_image::{Image, ImageError, ImageSize};

/// An error type for the resize operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResizeError {
    /// The input or the output image is not valid.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The rows could not be processed with the requested strategy.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

/// Resize a raw RGBA8 buffer using nearest neighbor interpolation.
///
/// The buffer is read as row-major pixels of four 8-bit channels `{R, G, B, A}`.
/// Every output pixel `(x, y)` is a copy of the input pixel
/// `(floor(x * in_width / out_width), floor(y * in_height / out_height))`,
/// with the scale factors computed in floating point.
///
/// # Arguments
///
/// * `input` - The input pixel buffer, `input_size.width * input_size.height * 4` bytes.
/// * `input_size` - The size of the input image in pixels.
/// * `output_width` - The width of the output image in pixels.
/// * `output_height` - The height of the output image in pixels.
///
/// # Returns
///
/// The output pixel buffer together with its size.
///
/// # Errors
///
/// * [`ImageError::InvalidDimensions`] if a width or a height is zero.
/// * [`ImageError::SizeOverflow`] if a buffer length does not fit in memory.
/// * [`ImageError::BufferSizeMismatch`] if the input length does not match `input_size`.
///
/// Nothing is allocated when an error is returned.
///
/// # Example
///
/// ```
/// use pixkit_image::{ImageSize, Rgba8Image};
/// use pixkit_imgproc::resize::resize_rgba8;
///
/// #[rustfmt::skip]
/// let image = Rgba8Image::new(ImageSize { width: 2, height: 2 }, vec![
///     255, 0, 0, 255,    0, 255, 0, 255,
///     0, 0, 255, 255,    255, 255, 255, 255,
/// ]).unwrap();
///
/// let (output, size) = resize_rgba8(image.as_slice(), image.size(), 1, 1).unwrap();
///
/// assert_eq!(size, ImageSize { width: 1, height: 1 });
/// assert_eq!(output, vec![255, 0, 0, 255]);
/// ```
pub fn resize_rgba8(
    input: &[u8],
    input_size: ImageSize,
    output_width: usize,
    output_height: usize,
) -> Result<(Vec<u8>, ImageSize), ResizeError> {
    let output_size = ImageSize {
        width: output_width,
        height: output_height,
    };

    let expected = input_size.buffer_len(4)?;
    let output_len = output_size.buffer_len(4)?;

    if input.len() != expected {
        return Err(ImageError::BufferSizeMismatch(input.len(), expected).into());
    }

    let mut output = vec![0u8; output_len];
    resize_nearest_slice::<u8, 4>(
        input,
        input_size,
        &mut output,
        output_size,
        ExecutionStrategy::default(),
    )?;

    Ok((output, output_size))
}

/// Resize an image to a new size using nearest neighbor interpolation.
///
/// A new image of `new_size` is allocated and every pixel of it is written
/// before returning. The channel values are copied from the source, never blended.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `new_size` - The size of the output image.
///
/// # Returns
///
/// The resized image.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] if `new_size` has a zero dimension,
/// or [`ImageError::SizeOverflow`] if the output would not fit in memory.
///
/// # Example
///
/// ```
/// use pixkit_image::{Image, ImageSize};
/// use pixkit_imgproc::resize::resize_nearest;
///
/// let image = Image::<u8, 4>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 4],
/// )
/// .unwrap();
///
/// let resized = resize_nearest(&image, ImageSize { width: 2, height: 3 }).unwrap();
///
/// assert_eq!(resized.num_channels(), 4);
/// assert_eq!(resized.size().width, 2);
/// assert_eq!(resized.size().height, 3);
/// ```
pub fn resize_nearest<T, const C: usize>(
    src: &Image<T, C>,
    new_size: ImageSize,
) -> Result<Image<T, C>, ResizeError>
where
    T: Copy + Default + Send + Sync,
{
    let mut dst = Image::from_size_val(new_size, T::default())?;
    resize_nearest_into(src, &mut dst)?;
    Ok(dst)
}

/// Resize an image into a preallocated destination using nearest neighbor interpolation.
///
/// The size of `dst` is the target size. Rows are processed on the global
/// thread pool, see [`resize_nearest_with`] to pick another strategy.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container.
///
/// # Example
///
/// ```
/// use pixkit_image::{Image, ImageSize};
/// use pixkit_imgproc::resize::resize_nearest_into;
///
/// let image = Image::<_, 1>::new(
///     ImageSize { width: 4, height: 1 },
///     vec![0u8, 1, 2, 3],
/// )
/// .unwrap();
///
/// let mut resized = Image::<_, 1>::from_size_val(ImageSize { width: 2, height: 1 }, 0u8).unwrap();
///
/// resize_nearest_into(&image, &mut resized).unwrap();
///
/// assert_eq!(resized.as_slice(), &[0, 2]);
/// ```
pub fn resize_nearest_into<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ResizeError>
where
    T: Copy + Send + Sync,
{
    resize_nearest_with(src, dst, ExecutionStrategy::default())
}

/// Resize an image into a preallocated destination with an explicit execution strategy.
///
/// The output does not depend on the strategy.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container.
/// * `strategy` - How the output rows are distributed across threads.
///
/// # Errors
///
/// Returns [`ParallelError`] wrapped in [`ResizeError::Parallel`] if the strategy is invalid.
pub fn resize_nearest_with<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    strategy: ExecutionStrategy,
) -> Result<(), ResizeError>
where
    T: Copy + Send + Sync,
{
    let (src_size, dst_size) = (src.size(), dst.size());
    resize_nearest_slice::<T, C>(src.as_slice(), src_size, dst.as_slice_mut(), dst_size, strategy)
}

// NOTE: the caller guarantees that both buffers match their sizes
fn resize_nearest_slice<T, const C: usize>(
    src: &[T],
    src_size: ImageSize,
    dst: &mut [T],
    dst_size: ImageSize,
    strategy: ExecutionStrategy,
) -> Result<(), ResizeError>
where
    T: Copy + Send + Sync,
{
    log::debug!("nearest resize from {src_size} to {dst_size} ({strategy:?})");

    // the mapping only depends on the axis, so compute it once per column and row
    let map_x = nearest_index_map(dst_size.width, src_size.width);
    let map_y = nearest_index_map(dst_size.height, src_size.height);

    let src_stride = src_size.width * C;

    parallel::par_iter_rows_indexed(dst, dst_size.width * C, strategy, |y, dst_row| {
        let offset = map_y[y] * src_stride;
        let src_row = &src[offset..offset + src_stride];

        dst_row
            .chunks_exact_mut(C)
            .zip(map_x.iter())
            .for_each(|(dst_pixel, &px)| {
                dst_pixel.copy_from_slice(&src_row[px * C..(px + 1) * C]);
            });
    })?;

    Ok(())
}
