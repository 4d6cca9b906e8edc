//! Normalizing caller images into the engine's pixel format
//!
//! The engine only understands 8-bit grayscale, one byte per pixel, rows
//! packed back to back. [`ImageSource`] is the closed set of inputs the
//! crate accepts; [`CanonicalImage::normalize`] turns any of them into that
//! layout, copying only when a conversion is actually needed.

use std::borrow::Cow;

use ::image::{ColorType, DynamicImage, GrayImage};
use ndarray::{ArrayBase, ArrayView, ArrayViewD, Axis, Data, Dimension, IxDyn};

use crate::{Error, Result};

/// An image to decode
#[derive(Debug, Clone)]
pub enum ImageSource<'a> {
    /// Grayscale bytes, `width * height` of them, row-major
    Raw {
        pixels: &'a [u8],
        width: u32,
        height: u32,
    },
    /// `(height, width)` or `(height, width, channels)` array
    Array(PixelArray<'a>),
    /// Decoded image of any color type
    Picture(&'a DynamicImage),
}

/// An `ndarray` view tagged with its element type
#[derive(Debug, Clone)]
pub enum PixelArray<'a> {
    U8(ArrayViewD<'a, u8>),
    U16(ArrayViewD<'a, u16>),
    I16(ArrayViewD<'a, i16>),
    I32(ArrayViewD<'a, i32>),
    F32(ArrayViewD<'a, f32>),
    F64(ArrayViewD<'a, f64>),
}

impl PixelArray<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            Self::U8(_) => u8::LABEL,
            Self::U16(_) => u16::LABEL,
            Self::I16(_) => i16::LABEL,
            Self::I32(_) => i32::LABEL,
            Self::F32(_) => f32::LABEL,
            Self::F64(_) => f64::LABEL,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            Self::U8(v) => v.shape(),
            Self::U16(v) => v.shape(),
            Self::I16(v) => v.shape(),
            Self::I32(v) => v.shape(),
            Self::F32(v) => v.shape(),
            Self::F64(v) => v.shape(),
        }
    }
}

/// Array element types that can be brought down to 8-bit pixels
pub trait Sample: Copy + 'static {
    const LABEL: &'static str;

    /// Plain `as u8` cast: integers wrap, floats saturate.
    fn to_u8(self) -> u8;

    fn wrap(view: ArrayViewD<'_, Self>) -> PixelArray<'_>;
}

macro_rules! impl_sample {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Sample for $ty {
                const LABEL: &'static str = stringify!($ty);

                #[allow(clippy::unnecessary_cast)]
                fn to_u8(self) -> u8 {
                    self as u8
                }

                fn wrap(view: ArrayViewD<'_, Self>) -> PixelArray<'_> {
                    PixelArray::$variant(view)
                }
            }
        )*
    };
}

impl_sample! {
    u8 => U8,
    u16 => U16,
    i16 => I16,
    i32 => I32,
    f32 => F32,
    f64 => F64,
}

impl<'a> From<(&'a [u8], u32, u32)> for ImageSource<'a> {
    fn from((pixels, width, height): (&'a [u8], u32, u32)) -> Self {
        ImageSource::Raw {
            pixels,
            width,
            height,
        }
    }
}

impl<'a> From<&'a GrayImage> for ImageSource<'a> {
    fn from(image: &'a GrayImage) -> Self {
        ImageSource::Raw {
            pixels: image.as_raw(),
            width: image.width(),
            height: image.height(),
        }
    }
}

impl<'a> From<&'a DynamicImage> for ImageSource<'a> {
    fn from(image: &'a DynamicImage) -> Self {
        ImageSource::Picture(image)
    }
}

impl<'a> From<PixelArray<'a>> for ImageSource<'a> {
    fn from(array: PixelArray<'a>) -> Self {
        ImageSource::Array(array)
    }
}

impl<'a, T: Sample, D: Dimension> From<ArrayView<'a, T, D>> for ImageSource<'a> {
    fn from(view: ArrayView<'a, T, D>) -> Self {
        ImageSource::Array(T::wrap(view.into_dyn()))
    }
}

impl<'a, S, D> From<&'a ArrayBase<S, D>> for ImageSource<'a>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    fn from(array: &'a ArrayBase<S, D>) -> Self {
        ImageSource::Array(<S::Elem as Sample>::wrap(array.view().into_dyn()))
    }
}

/// 8-bit grayscale pixels ready to hand to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalImage<'a> {
    pixels: Cow<'a, [u8]>,
    width: u32,
    height: u32,
}

impl<'a> CanonicalImage<'a> {
    pub const BITS_PER_PIXEL: u32 = 8;

    /// Convert `source` to 8-bit grayscale and validate its size.
    ///
    /// Already-grayscale buffers are borrowed, not copied. Fails before
    /// anything touches the engine.
    pub fn normalize(source: impl Into<ImageSource<'a>>) -> Result<Self> {
        let image = match source.into() {
            ImageSource::Raw {
                pixels,
                width,
                height,
            } => CanonicalImage {
                pixels: Cow::Borrowed(pixels),
                width,
                height,
            },
            ImageSource::Array(array) => from_array(array)?,
            ImageSource::Picture(picture) => from_picture(picture),
        };
        image.check_bits_per_pixel()?;
        Ok(image)
    }

    /// Exact integer form of `8 * len / (width * height) == 8`
    fn check_bits_per_pixel(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        let pixels = u64::from(self.width) * u64::from(self.height);
        let bits = 8 * self.pixels.len() as u64;
        if bits != u64::from(Self::BITS_PER_PIXEL) * pixels {
            return Err(Error::UnsupportedFormat { bits, pixels });
        }
        Ok(())
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bits_per_pixel(&self) -> u32 {
        Self::BITS_PER_PIXEL
    }

    /// Whether the pixels are still the caller's buffer
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    /// Detach from the caller's buffer, copying if needed
    pub fn into_owned(self) -> CanonicalImage<'static> {
        CanonicalImage {
            pixels: Cow::Owned(self.pixels.into_owned()),
            width: self.width,
            height: self.height,
        }
    }
}

fn from_picture(picture: &DynamicImage) -> CanonicalImage<'_> {
    let pixels = if picture.color() == ColorType::L8 {
        Cow::Borrowed(picture.as_bytes())
    } else {
        log::trace!("converting {:?} image to L8", picture.color());
        Cow::Owned(picture.to_luma8().into_raw())
    };
    CanonicalImage {
        pixels,
        width: picture.width(),
        height: picture.height(),
    }
}

fn from_array(array: PixelArray<'_>) -> Result<CanonicalImage<'_>> {
    match array {
        PixelArray::U8(view) => {
            if view.ndim() == 2 {
                if let Some(pixels) = view.to_slice() {
                    let (width, height) = plane_size(view.shape())?;
                    return Ok(CanonicalImage {
                        pixels: Cow::Borrowed(pixels),
                        width,
                        height,
                    });
                }
            }
            copy_plane(&view)
        }
        PixelArray::U16(view) => copy_plane(&view),
        PixelArray::I16(view) => copy_plane(&view),
        PixelArray::I32(view) => copy_plane(&view),
        PixelArray::F32(view) => copy_plane(&view),
        PixelArray::F64(view) => copy_plane(&view),
    }
}

/// `(width, height)` of a `(height, width[, channels])` shape
fn plane_size(shape: &[usize]) -> Result<(u32, u32)> {
    let unsupported = || Error::UnsupportedShape(shape.to_vec());
    let (height, width) = match *shape {
        [height, width] => (height, width),
        [height, width, channels] if channels > 0 => (height, width),
        _ => return Err(unsupported()),
    };
    Ok((
        u32::try_from(width).map_err(|_| unsupported())?,
        u32::try_from(height).map_err(|_| unsupported())?,
    ))
}

/// Row-major copy of the first channel, cast to `u8`
fn copy_plane<T: Sample>(view: &ArrayViewD<'_, T>) -> Result<CanonicalImage<'static>> {
    let (width, height) = plane_size(view.shape())?;
    let plane: ArrayView<'_, T, IxDyn> = if view.ndim() == 3 {
        view.index_axis(Axis(2), 0)
    } else {
        view.view()
    };
    let pixels: Vec<u8> = plane.iter().map(|v| v.to_u8()).collect();
    Ok(CanonicalImage {
        pixels: Cow::Owned(pixels),
        width,
        height,
    })
}
