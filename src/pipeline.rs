//! The decode pipeline
//!
//! One call runs through these stages, each a precondition of the next:
//!
//! 1. normalize the caller's image to 8-bit grayscale (no engine resources
//!    exist yet, so a format error costs nothing to unwind)
//! 2. create a [`Scanner`] and apply the [`DecodeOptions`]
//! 3. create an [`Image`] viewing the normalized pixels
//! 4. scan
//! 5. walk the symbols and copy each into a [`Decoded`]
//!
//! The scanner and image are scoped owners, so whichever of them exist are
//! released (image first) on every way out, including errors in stages 3-5.

use crate::decoded::Decoded;
use crate::engine::Engine;
use crate::image::Image;
use crate::pixels::{CanonicalImage, ImageSource};
use crate::scanner::Scanner;
use crate::{DecodeOptions, Result};

/// Decodes images with a particular [`Engine`]
///
/// Every call creates and destroys its own engine handles; nothing is shared
/// between calls.
#[derive(Debug, Clone, Default)]
pub struct Decoder<E: Engine> {
    engine: E,
}

impl<E: Engine> Decoder<E> {
    pub fn new(engine: E) -> Self {
        Decoder { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Decode every symbol in `source` that `options` asks for.
    ///
    /// Results are in engine order, which is not sorted by position. An
    /// image without symbols gives an empty list.
    pub fn decode<'a>(
        &self,
        source: impl Into<ImageSource<'a>>,
        options: &DecodeOptions,
    ) -> Result<Vec<Decoded>> {
        let pixels = CanonicalImage::normalize(source)?;
        log::debug!(
            "normalized {}x{} image ({})",
            pixels.width(),
            pixels.height(),
            if pixels.is_borrowed() {
                "borrowed"
            } else {
                "converted"
            }
        );
        self.decode_canonical(&pixels, options)
    }

    /// Like [`Decoder::decode`], for pixels that are already normalized
    pub fn decode_canonical(
        &self,
        pixels: &CanonicalImage<'_>,
        options: &DecodeOptions,
    ) -> Result<Vec<Decoded>> {
        let mut scanner = Scanner::new(&self.engine)?;
        scanner.configure(options);

        let mut image = Image::new(&self.engine, pixels)?;
        scanner.scan(&mut image)?;

        let results = image
            .symbols()
            .map(|symbol| symbol.extract(options.keeps_locations()))
            .inspect(|decoded| {
                if let Ok(decoded) = decoded {
                    log::trace!("decoded {} at {:?}", decoded.symbol_type, decoded.rect);
                }
            })
            .collect::<Result<Vec<_>>>()?;
        log::debug!("decoded {} symbol(s)", results.len());
        Ok(results)
    }
}
