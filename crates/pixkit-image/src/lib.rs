#![deny(missing_docs)]
//! Image types for raw interleaved pixel buffers

/// image representation for resampling purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize, Rgba8Image};
